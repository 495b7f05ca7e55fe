use crate::domain::common::serde_ext::string_or_number;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const INGREDIENT_GROUPS_PATH: &str = "/ingredient-groups";

/// Path of the FIFO unit cost of one ingredient (plain-text body)
pub fn fifo_cost_path(ingredient_id: &str) -> String {
    format!("/purchases/{}/fifo-cost", ingredient_id)
}

/// Current stock level of an ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitAbbreviation {
    #[serde(default)]
    pub abbreviation: String,
}

/// Ingredient as nested in `GET /ingredient-groups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockIngredient {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stock: StockLevel,
    #[serde(default)]
    pub unit: UnitAbbreviation,
}

/// Ingredient group with its ingredients, read-only snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockGroup {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<StockIngredient>,
}

/// Ingredient extended with its derived FIFO cost
#[derive(Debug, Clone, PartialEq)]
pub struct CostedIngredient {
    pub ingredient: StockIngredient,
    pub fifo_cost: f64,
}

/// One rendered group of the stock view
#[derive(Debug, Clone, PartialEq)]
pub struct StockViewRow {
    pub group_id: i64,
    pub group_name: String,
    pub ingredients: Vec<CostedIngredient>,
    /// Sum of `fifo_cost` over `ingredients`
    pub total: f64,
}

impl StockViewRow {
    /// Attaches costs by ingredient id (missing → 0) and sums them.
    pub fn fold(group: StockGroup, costs: &HashMap<String, f64>) -> Self {
        let ingredients: Vec<CostedIngredient> = group
            .ingredients
            .into_iter()
            .map(|ingredient| {
                let fifo_cost = costs.get(&ingredient.id).copied().unwrap_or(0.0);
                CostedIngredient {
                    ingredient,
                    fifo_cost,
                }
            })
            .collect();
        let total = ingredients.iter().map(|i| i.fifo_cost).sum();

        Self {
            group_id: group.id,
            group_name: group.name,
            ingredients,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS_JSON: &str = r#"[
        {"id": 1, "name": "Boissons", "ingredients": [
            {"id": 1, "name": "Jus", "stock": {"id": 10, "quantity": 10, "createdAt": "2024-03-01T08:00:00", "updatedAt": "2024-03-05T08:00:00"}, "unit": {"abbreviation": "L"}},
            {"id": "2", "name": "Soda", "stock": {"id": 11, "quantity": 5, "createdAt": "2024-03-02T08:00:00", "updatedAt": "2024-03-06T08:00:00"}, "unit": {"abbreviation": "L"}}
        ]}
    ]"#;

    #[test]
    fn test_deserialize_groups() {
        let groups: Vec<StockGroup> = serde_json::from_str(GROUPS_JSON).unwrap();
        assert_eq!(groups[0].ingredients.len(), 2);
        assert_eq!(groups[0].ingredients[0].id, "1");
        assert_eq!(groups[0].ingredients[1].id, "2");
        assert_eq!(groups[0].ingredients[1].unit.abbreviation, "L");
    }

    #[test]
    fn test_fold_sums_and_defaults_missing() {
        let mut groups: Vec<StockGroup> = serde_json::from_str(GROUPS_JSON).unwrap();
        let costs = HashMap::from([("1".to_string(), 120.5)]);
        let row = StockViewRow::fold(groups.remove(0), &costs);
        assert_eq!(row.group_name, "Boissons");
        assert_eq!(row.ingredients[1].fifo_cost, 0.0);
        assert_eq!(row.total, 120.5);
    }

    #[test]
    fn test_fifo_cost_path() {
        assert_eq!(fifo_cost_path("42"), "/purchases/42/fifo-cost");
    }
}
