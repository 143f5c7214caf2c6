//! Seed Fixtures
//!
//! Deterministic recipe data for the mock backend and the test suite.
//! Every run (and every test) sees exactly the same catalog; nothing is
//! generated randomly at startup.

use crate::domain::{Ingredient, Instruction, Recipe};

/// Incremental builder for recipe fixtures. Steps are numbered in the
/// order they are added.
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            recipe: Recipe {
                id: id.into(),
                title: title.into(),
                description: String::new(),
                servings: 4,
                prep_time: 10,
                cook_time: 20,
                tags: Vec::new(),
                ingredients: Vec::new(),
                instructions: Vec::new(),
                created_by: "1".to_string(),
                chef_name: "Chef Julia".to_string(),
                collaborators: Vec::new(),
                is_public: true,
                image: String::new(),
                created_at: "2023-01-01T00:00:00.000Z".to_string(),
                updated_at: "2023-01-01T00:00:00.000Z".to_string(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.recipe.description = description.to_string();
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.recipe.servings = servings;
        self
    }

    pub fn times(mut self, prep_time: u32, cook_time: u32) -> Self {
        self.recipe.prep_time = prep_time;
        self.recipe.cook_time = cook_time;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.recipe.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn ingredient(mut self, name: &str, quantity: f64, unit: &str) -> Self {
        self.recipe
            .ingredients
            .push(Ingredient::new(name, quantity, unit));
        self
    }

    pub fn step(mut self, description: &str, timer_minutes: Option<f64>) -> Self {
        let number = self.recipe.instructions.len() as u32 + 1;
        self.recipe
            .instructions
            .push(Instruction::new(number, description, timer_minutes));
        self
    }

    pub fn created_by(mut self, user_id: &str, chef_name: &str) -> Self {
        self.recipe.created_by = user_id.to_string();
        self.recipe.chef_name = chef_name.to_string();
        self
    }

    pub fn collaborator(mut self, user_id: &str) -> Self {
        self.recipe.collaborators.push(user_id.to_string());
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.recipe.image = url.to_string();
        self
    }

    pub fn created_at(mut self, timestamp: &str) -> Self {
        self.recipe.created_at = timestamp.to_string();
        self.recipe.updated_at = timestamp.to_string();
        self
    }

    pub fn build(self) -> Recipe {
        self.recipe
    }
}

/// The fixed starter catalog.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        chocolate_chip_cookies(),
        buttermilk_pancakes(),
        margherita_pizza(),
        thai_basil_chicken(),
        mushroom_risotto(),
        tofu_stir_fry(),
    ]
}

fn chocolate_chip_cookies() -> Recipe {
    RecipeBuilder::new("1", "Classic Chocolate Chip Cookies")
        .description(
            "Delicious homemade chocolate chip cookies that are crispy on the outside \
             and chewy on the inside.",
        )
        .servings(12)
        .times(15, 10)
        .tags(&["Dessert", "Baking", "Cookies"])
        .ingredient("All-purpose flour", 2.25, "cups")
        .ingredient("Baking soda", 1.0, "tsp")
        .ingredient("Salt", 1.0, "tsp")
        .ingredient("Butter", 1.0, "cup")
        .ingredient("Brown sugar", 0.75, "cup")
        .ingredient("Granulated sugar", 0.75, "cup")
        .ingredient("Vanilla extract", 1.0, "tsp")
        .ingredient("Eggs", 2.0, "large")
        .ingredient("Chocolate chips", 2.0, "cups")
        .step(
            "Preheat oven to 375°F (190°C). Line a baking sheet with parchment paper.",
            None,
        )
        .step(
            "In a medium bowl, whisk together flour, baking soda, and salt. Set aside.",
            None,
        )
        .step(
            "In a large bowl, beat butter, brown sugar, and granulated sugar until light and fluffy.",
            Some(3.0),
        )
        .step(
            "Add eggs one at a time, beating well after each addition. Stir in vanilla extract.",
            None,
        )
        .step(
            "Gradually add the dry ingredients to the wet ingredients, mixing until just combined.",
            None,
        )
        .step(
            "Fold in the chocolate chips until evenly distributed throughout the dough.",
            None,
        )
        .step(
            "Drop rounded tablespoons of dough onto the prepared baking sheets, spacing them \
             about 2 inches apart.",
            None,
        )
        .step(
            "Bake until the edges are golden but the centers are still soft, about 9-11 minutes.",
            Some(10.0),
        )
        .step(
            "Allow cookies to cool on the baking sheet for 5 minutes before transferring to a \
             wire rack to cool completely.",
            Some(5.0),
        )
        .created_by("1", "Chef Julia")
        .image("https://images.unsplash.com/photo-1499636136210-6f4ee915583e")
        .created_at("2023-05-10T00:00:00.000Z")
        .build()
}

fn buttermilk_pancakes() -> Recipe {
    RecipeBuilder::new("2", "Fluffy Buttermilk Pancakes")
        .description("Light and fluffy pancakes perfect for a weekend breakfast.")
        .servings(4)
        .times(10, 15)
        .tags(&["Breakfast", "Quick", "Vegetarian"])
        .ingredient("All-purpose flour", 1.5, "cups")
        .ingredient("Baking powder", 3.5, "tsp")
        .ingredient("Baking soda", 0.5, "tsp")
        .ingredient("Salt", 0.5, "tsp")
        .ingredient("Sugar", 2.0, "tbsp")
        .ingredient("Buttermilk", 1.5, "cups")
        .ingredient("Eggs", 2.0, "large")
        .ingredient("Butter", 3.0, "tbsp")
        .ingredient("Vanilla extract", 1.0, "tsp")
        .step(
            "In a large bowl, whisk together flour, baking powder, baking soda, salt, and sugar.",
            None,
        )
        .step(
            "In a separate bowl, whisk together buttermilk, eggs, melted butter, and vanilla extract.",
            None,
        )
        .step(
            "Pour the wet ingredients into the dry ingredients and stir just until combined. \
             There should still be small lumps; do not overmix.",
            None,
        )
        .step(
            "Let the batter rest for 5 minutes while heating a non-stick griddle or skillet \
             over medium heat.",
            Some(5.0),
        )
        .step(
            "Lightly grease the griddle with butter or cooking spray. Pour 1/4 cup of batter \
             for each pancake.",
            None,
        )
        .step(
            "Cook until bubbles form on the surface and the edges look set, about 2 minutes.",
            Some(2.0),
        )
        .step(
            "Flip and cook until browned on the other side, about 1-2 minutes more.",
            Some(2.0),
        )
        .step(
            "Serve warm with maple syrup, fresh berries, or whipped cream.",
            None,
        )
        .created_by("2", "Chef Michael")
        .collaborator("1")
        .image("https://images.unsplash.com/photo-1575853121743-60c24f0a7502")
        .created_at("2023-06-15T00:00:00.000Z")
        .build()
}

fn margherita_pizza() -> Recipe {
    RecipeBuilder::new("3", "Classic Margherita Pizza")
        .description("Simple and delicious Italian pizza with fresh basil.")
        .servings(4)
        .times(30, 15)
        .tags(&["Italian", "Dinner", "Vegetarian"])
        .ingredient("Pizza dough", 1.0, "ball")
        .ingredient("Tomato sauce", 0.5, "cup")
        .ingredient("Fresh mozzarella", 8.0, "oz")
        .ingredient("Fresh basil leaves", 10.0, "")
        .ingredient("Olive oil", 2.0, "tbsp")
        .ingredient("Salt", 0.5, "tsp")
        .ingredient("Black pepper", 0.25, "tsp")
        .step(
            "Preheat oven to 475°F (245°C) with a pizza stone if you have one.",
            None,
        )
        .step(
            "On a floured surface, stretch or roll the pizza dough into a 12-inch round.",
            None,
        )
        .step(
            "Transfer the dough to a parchment-lined pizza peel or baking sheet.",
            None,
        )
        .step(
            "Spread tomato sauce evenly over the dough, leaving a 1/2-inch border for the crust.",
            None,
        )
        .step(
            "Tear the mozzarella into pieces and distribute evenly on top of the sauce.",
            None,
        )
        .step("Drizzle with olive oil and season with salt and pepper.", None)
        .step(
            "Slide the pizza onto the preheated stone or baking sheet and bake until the crust \
             is golden and the cheese is bubbly and lightly browned, about 10-12 minutes.",
            Some(12.0),
        )
        .step(
            "Remove from the oven and immediately scatter fresh basil leaves on top.",
            None,
        )
        .step("Let cool for 3-5 minutes before slicing and serving.", Some(3.0))
        .created_by("1", "Chef Julia")
        .image("https://images.unsplash.com/photo-1574071318508-1cdbab80d002")
        .created_at("2023-05-20T00:00:00.000Z")
        .build()
}

fn thai_basil_chicken() -> Recipe {
    RecipeBuilder::new("4", "Spicy Thai Basil Chicken")
        .description("A delicious asian dinner recipe that's perfect for any occasion.")
        .servings(4)
        .times(15, 15)
        .tags(&["Asian", "Dinner", "Spicy"])
        .ingredient("Chicken breast", 1.0, "lb")
        .ingredient("Thai basil leaves", 2.0, "cups")
        .ingredient("Thai chilies", 4.0, "")
        .ingredient("Garlic cloves", 4.0, "")
        .ingredient("Fish sauce", 2.0, "tbsp")
        .ingredient("Oyster sauce", 1.0, "tbsp")
        .ingredient("Soy sauce", 1.0, "tbsp")
        .ingredient("Brown sugar", 1.0, "tsp")
        .ingredient("Vegetable oil", 2.0, "tbsp")
        .step("Mince the garlic and Thai chilies.", None)
        .step("Cut the chicken into small bite-sized pieces.", None)
        .step("Heat oil in a wok or large skillet over high heat.", Some(1.0))
        .step(
            "Add garlic and chilies, stir-fry for 30 seconds until fragrant.",
            Some(0.5),
        )
        .step(
            "Add chicken and stir-fry until no longer pink, about 3-4 minutes.",
            Some(4.0),
        )
        .step(
            "Add fish sauce, oyster sauce, soy sauce, and brown sugar. Stir well.",
            None,
        )
        .step(
            "Toss in the Thai basil leaves and stir until wilted, about 30 seconds.",
            Some(0.5),
        )
        .step("Serve hot with steamed jasmine rice.", None)
        .created_by("2", "Chef Sophia")
        .image("https://images.unsplash.com/photo-1512621776951-a57141f2eefd")
        .created_at("2023-07-02T00:00:00.000Z")
        .build()
}

fn mushroom_risotto() -> Recipe {
    RecipeBuilder::new("5", "Creamy Mushroom Risotto")
        .description("A delicious italian dinner recipe that's perfect for any occasion.")
        .servings(4)
        .times(10, 35)
        .tags(&["Italian", "Dinner", "Vegetarian"])
        .ingredient("Arborio rice", 1.5, "cups")
        .ingredient("Mixed mushrooms", 8.0, "oz")
        .ingredient("Shallots", 2.0, "")
        .ingredient("Garlic cloves", 2.0, "")
        .ingredient("White wine", 0.5, "cup")
        .ingredient("Vegetable broth", 4.0, "cups")
        .ingredient("Parmesan cheese", 0.5, "cup")
        .ingredient("Butter", 2.0, "tbsp")
        .ingredient("Fresh thyme", 1.0, "tbsp")
        .ingredient("Olive oil", 2.0, "tbsp")
        .step("Clean and slice mushrooms.", None)
        .step("Finely dice shallots and mince garlic.", None)
        .step(
            "In a large pot, heat olive oil over medium heat and sauté mushrooms until browned, \
             about 5 minutes.",
            Some(5.0),
        )
        .step("Remove mushrooms and set aside.", None)
        .step(
            "In the same pot, add butter and sauté shallots until translucent, about 2-3 minutes.",
            Some(3.0),
        )
        .step("Add garlic and cook for 30 seconds.", Some(0.5))
        .step(
            "Add Arborio rice and stir to coat with butter for 1-2 minutes.",
            Some(2.0),
        )
        .step("Pour in white wine and stir until absorbed.", Some(1.0))
        .step(
            "Add warm broth one ladle at a time, stirring frequently and waiting until liquid \
             is absorbed before adding more.",
            Some(18.0),
        )
        .step(
            "When rice is creamy and al dente, stir in mushrooms, Parmesan cheese, and fresh thyme.",
            None,
        )
        .step("Season with salt and pepper to taste. Serve immediately.", None)
        .created_by("1", "Chef David")
        .image("https://images.unsplash.com/photo-1546069901-ba9599a7e63c")
        .created_at("2023-08-11T00:00:00.000Z")
        .build()
}

fn tofu_stir_fry() -> Recipe {
    RecipeBuilder::new("6", "Vegetable Stir-Fry with Tofu")
        .description("A delicious asian dinner recipe that's perfect for any occasion.")
        .servings(4)
        .times(35, 20)
        .tags(&["Asian", "Dinner", "Vegan"])
        .ingredient("Firm tofu", 14.0, "oz")
        .ingredient("Broccoli", 1.0, "head")
        .ingredient("Carrots", 2.0, "")
        .ingredient("Bell peppers", 2.0, "")
        .ingredient("Snow peas", 1.0, "cup")
        .ingredient("Garlic", 3.0, "cloves")
        .ingredient("Ginger", 1.0, "tbsp")
        .ingredient("Soy sauce", 3.0, "tbsp")
        .ingredient("Sesame oil", 1.0, "tsp")
        .ingredient("Cornstarch", 1.0, "tbsp")
        .ingredient("Vegetable oil", 2.0, "tbsp")
        .step(
            "Press tofu between paper towels with a heavy object for 30 minutes to remove \
             excess water.",
            Some(30.0),
        )
        .step("Cut tofu into 1-inch cubes.", None)
        .step("Cut vegetables into bite-sized pieces.", None)
        .step("Mix soy sauce, 2 tbsp water, and cornstarch in a small bowl.", None)
        .step("Heat vegetable oil in a wok or large skillet over high heat.", None)
        .step(
            "Add tofu and cook until golden brown on all sides, about 5-7 minutes.",
            Some(7.0),
        )
        .step("Remove tofu and set aside.", None)
        .step(
            "Add a bit more oil if needed, then add garlic and ginger, stir-frying for 30 seconds.",
            Some(0.5),
        )
        .step(
            "Add vegetables in order of cooking time: carrots first, then broccoli, bell \
             peppers, and finally snow peas.",
            None,
        )
        .step(
            "Stir-fry for 3-5 minutes until vegetables are crisp-tender.",
            Some(5.0),
        )
        .step(
            "Return tofu to the wok, then add sauce mixture and stir until thickened, about \
             1 minute.",
            Some(1.0),
        )
        .step(
            "Drizzle with sesame oil, toss to combine, and serve immediately.",
            None,
        )
        .created_by("2", "Chef Emma")
        .image("https://images.unsplash.com/photo-1546069901-ba9599a7e63c")
        .created_at("2023-09-05T00:00:00.000Z")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(seed_recipes(), seed_recipes());
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let recipes = seed_recipes();
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_seed_recipes_have_timed_steps() {
        for recipe in seed_recipes() {
            assert!(recipe.servings > 0);
            assert!(!recipe.ingredients.is_empty());
            assert!(
                recipe
                    .instructions
                    .iter()
                    .any(|step| step.timer_minutes.is_some()),
                "every seed recipe demos the step timer"
            );
        }
    }

    #[test]
    fn test_builder_numbers_steps_in_order() {
        let recipe = RecipeBuilder::new("9", "Test")
            .step("First.", None)
            .step("Second.", Some(2.0))
            .build();
        assert_eq!(recipe.instructions[0].step, 1);
        assert_eq!(recipe.instructions[1].step, 2);
    }
}
