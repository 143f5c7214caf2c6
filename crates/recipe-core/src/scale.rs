//! Ingredient Scaling
//!
//! Rescales a recipe's ingredient list from its base serving count to a
//! target serving count. Pure: derives a new list, never mutates the input.

use crate::domain::{DomainError, DomainResult, Ingredient};

/// Scale an ingredient list from `base_servings` to `target_servings`.
///
/// Every quantity is multiplied by `target_servings / base_servings` and
/// rounded **half away from zero** to two decimal places (`f64::round`
/// semantics); this is a presentation-precision choice, not an exactness
/// requirement. Names and units are preserved, output order and length
/// match the input exactly.
///
/// `target_servings == 0` is not an error (the UI constrains the selectable
/// range); all quantities simply scale to zero. Malformed recipe data is
/// rejected: `base_servings == 0` or a negative quantity yields
/// `DomainError::InvalidInput`.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    base_servings: u32,
    target_servings: u32,
) -> DomainResult<Vec<Ingredient>> {
    if base_servings == 0 {
        return Err(DomainError::InvalidInput(
            "base serving count must be positive".to_string(),
        ));
    }
    if let Some(bad) = ingredients.iter().find(|i| i.quantity < 0.0) {
        return Err(DomainError::InvalidInput(format!(
            "negative quantity for ingredient '{}'",
            bad.name
        )));
    }

    let factor = f64::from(target_servings) / f64::from(base_servings);
    Ok(ingredients
        .iter()
        .map(|ingredient| Ingredient {
            name: ingredient.name.clone(),
            quantity: round2(ingredient.quantity * factor),
            unit: ingredient.unit.clone(),
        })
        .collect())
}

/// Round half away from zero to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie_ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("All-purpose flour", 2.25, "cups"),
            Ingredient::new("Baking soda", 1.0, "tsp"),
            Ingredient::new("Eggs", 2.0, "large"),
        ]
    }

    #[test]
    fn test_same_servings_is_identity() {
        let ingredients = cookie_ingredients();
        let scaled = scale_ingredients(&ingredients, 4, 4).unwrap();

        assert_eq!(scaled.len(), ingredients.len());
        for (scaled, original) in scaled.iter().zip(&ingredients) {
            assert!((scaled.quantity - original.quantity).abs() < 0.01);
            assert_eq!(scaled.name, original.name);
            assert_eq!(scaled.unit, original.unit);
        }
    }

    #[test]
    fn test_halving_rounds_half_away_from_zero() {
        // 2.25 * 0.5 = 1.125, half-away-from-zero gives 1.13
        let scaled = scale_ingredients(&cookie_ingredients(), 12, 6).unwrap();
        assert_eq!(scaled[0].quantity, 1.13);
        assert_eq!(scaled[1].quantity, 0.5);
        assert_eq!(scaled[2].quantity, 1.0);
    }

    #[test]
    fn test_scaling_up() {
        let scaled = scale_ingredients(&cookie_ingredients(), 4, 12).unwrap();
        assert_eq!(scaled[0].quantity, 6.75);
        assert_eq!(scaled[1].quantity, 3.0);
    }

    #[test]
    fn test_preserves_order_and_fields() {
        let ingredients = vec![
            Ingredient::new("Fresh basil leaves", 10.0, ""),
            Ingredient::new("Olive oil", 2.0, "tbsp"),
        ];
        let scaled = scale_ingredients(&ingredients, 2, 5).unwrap();

        assert_eq!(scaled.len(), 2);
        assert_eq!(scaled[0].name, "Fresh basil leaves");
        assert_eq!(scaled[0].unit, "");
        assert_eq!(scaled[0].quantity, 25.0);
        assert_eq!(scaled[1].name, "Olive oil");
    }

    #[test]
    fn test_two_decimal_output() {
        let ingredients = vec![Ingredient::new("Buttermilk", 1.5, "cups")];
        // 1.5 / 3 = 0.5, 1.5 * 7 / 3 = 3.5
        let scaled = scale_ingredients(&ingredients, 3, 1).unwrap();
        assert_eq!(scaled[0].quantity, 0.5);

        // 1.5 / 7 = 0.2142857... rounds to 0.21
        let scaled = scale_ingredients(&ingredients, 7, 1).unwrap();
        assert_eq!(scaled[0].quantity, 0.21);
    }

    #[test]
    fn test_target_zero_is_not_an_error() {
        let scaled = scale_ingredients(&cookie_ingredients(), 4, 0).unwrap();
        assert!(scaled.iter().all(|i| i.quantity == 0.0));
    }

    #[test]
    fn test_zero_base_servings_rejected() {
        let err = scale_ingredients(&cookie_ingredients(), 0, 4).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let ingredients = vec![Ingredient::new("Flour", -1.0, "cups")];
        let err = scale_ingredients(&ingredients, 4, 8).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_input_not_mutated() {
        let ingredients = cookie_ingredients();
        let _ = scale_ingredients(&ingredients, 12, 3).unwrap();
        assert_eq!(ingredients[0].quantity, 2.25);
    }

    #[test]
    fn test_duplicate_names_are_kept_separate() {
        // "Sugar" twice (e.g. dough and topping); entries never merge
        let ingredients = vec![
            Ingredient::new("Sugar", 0.75, "cup"),
            Ingredient::new("Butter", 1.0, "cup"),
            Ingredient::new("Sugar", 2.0, "tbsp"),
        ];
        let scaled = scale_ingredients(&ingredients, 4, 8).unwrap();

        assert_eq!(scaled.len(), 3);
        assert_eq!(scaled[0].quantity, 1.5);
        assert_eq!(scaled[2].quantity, 4.0);
        assert_eq!(scaled[0].name, scaled[2].name);
    }

    #[test]
    fn test_empty_ingredient_list() {
        let scaled = scale_ingredients(&[], 4, 8).unwrap();
        assert!(scaled.is_empty());
    }
}
