//! Repository Integration Tests
//!
//! Tests for the in-memory recipe repository the mock API runs against.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Ingredient, Instruction, RecipeDraft, RecipeUpdate};
    use crate::repository::{InMemoryRecipeRepository, RecipeRepository};
    use crate::seed;

    const NOW: &str = "2023-10-01T12:00:00.000Z";
    const LATER: &str = "2023-10-02T12:00:00.000Z";

    fn draft(title: &str) -> RecipeDraft {
        RecipeDraft {
            title: title.to_string(),
            description: "Test recipe".to_string(),
            servings: 4,
            prep_time: 10,
            cook_time: 20,
            tags: vec!["Dinner".to_string()],
            ingredients: vec![Ingredient::new("Salt", 1.0, "tsp")],
            instructions: vec![Instruction::new(1, "Cook.", Some(5.0))],
            created_by: "1".to_string(),
            chef_name: "Chef Julia".to_string(),
            is_public: true,
            image: String::new(),
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let repo = InMemoryRecipeRepository::new();

        let created = repo.create(draft("Test Soup"), NOW);
        assert_eq!(created.id, "1");
        assert_eq!(created.created_at, NOW);
        assert_eq!(created.updated_at, NOW);
        assert!(created.collaborators.is_empty());

        let next = repo.create(draft("Second"), NOW);
        assert_eq!(next.id, "2");
    }

    #[test]
    fn test_ids_are_not_recycled_after_delete() {
        let repo = InMemoryRecipeRepository::new();
        let first = repo.create(draft("First"), NOW);
        repo.delete(&first.id).unwrap();

        let second = repo.create(draft("Second"), NOW);
        assert_eq!(second.id, "2");
    }

    #[test]
    fn test_get_and_list() {
        let repo = InMemoryRecipeRepository::with_recipes(seed::seed_recipes());

        let recipes = repo.list();
        assert_eq!(recipes.len(), 6);

        let cookie = repo.get("1").unwrap();
        assert_eq!(cookie.title, "Classic Chocolate Chip Cookies");
        assert!(repo.get("999").is_none());
    }

    #[test]
    fn test_seeded_repository_continues_id_sequence() {
        let repo = InMemoryRecipeRepository::with_recipes(seed::seed_recipes());
        let created = repo.create(draft("Seventh"), NOW);
        assert_eq!(created.id, "7");
    }

    #[test]
    fn test_update_patches_and_stamps() {
        let repo = InMemoryRecipeRepository::new();
        let created = repo.create(draft("Original"), NOW);

        let updated = repo
            .update(
                &created.id,
                RecipeUpdate {
                    title: Some("Renamed".to_string()),
                    ..Default::default()
                },
                LATER,
            )
            .unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.servings, 4);
        assert_eq!(updated.created_at, NOW);
        assert_eq!(updated.updated_at, LATER);
    }

    #[test]
    fn test_update_missing_recipe() {
        let repo = InMemoryRecipeRepository::new();
        let err = repo
            .update("42", RecipeUpdate::default(), NOW)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryRecipeRepository::new();
        let created = repo.create(draft("To delete"), NOW);

        repo.delete(&created.id).unwrap();
        assert!(repo.get(&created.id).is_none());

        let err = repo.delete(&created.id).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_search_matches_title_description_tags() {
        let repo = InMemoryRecipeRepository::with_recipes(seed::seed_recipes());

        let by_title = repo.search("pancake");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "2");

        let by_tag = repo.search("italian");
        assert_eq!(by_tag.len(), 2);

        let by_description = repo.search("weekend breakfast");
        assert_eq!(by_description.len(), 1);

        assert!(repo.search("xylophone").is_empty());
        assert!(repo.search("   ").is_empty());
    }

    #[test]
    fn test_collaborator_lifecycle() {
        let repo = InMemoryRecipeRepository::new();
        let created = repo.create(draft("Shared"), NOW);

        let updated = repo.add_collaborator(&created.id, "2", LATER).unwrap();
        assert_eq!(updated.collaborators, vec!["2".to_string()]);
        assert_eq!(updated.updated_at, LATER);

        let err = repo.add_collaborator(&created.id, "2", LATER).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let removed = repo.remove_collaborator(&created.id, "2", LATER).unwrap();
        assert!(removed.collaborators.is_empty());

        let err = repo
            .remove_collaborator(&created.id, "2", LATER)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
