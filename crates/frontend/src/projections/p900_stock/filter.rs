//! Client-side filters of the stock view
//!
//! Applied to the last aggregation snapshot; group totals are left as
//! aggregated.

use crate::shared::date_utils::date_part;
use crate::shared::list_utils::contains_ci;
use contracts::projections::p900_stock::dto::{CostedIngredient, StockViewRow};

/// Raw filter inputs as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockFilter {
    pub name: String,
    pub quantity_min: String,
    pub quantity_max: String,
    /// `datetime-local` value or empty
    pub start: String,
    pub end: String,
}

/// Unparseable or blank input means "no bound"
fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl StockFilter {
    pub fn matches(&self, item: &CostedIngredient) -> bool {
        let ingredient = &item.ingredient;

        let name = self.name.trim();
        if !name.is_empty() && !contains_ci(&ingredient.name, name) {
            return false;
        }

        let quantity = ingredient.stock.quantity;
        if let Some(min) = parse_bound(&self.quantity_min) {
            if quantity < min {
                return false;
            }
        }
        if let Some(max) = parse_bound(&self.quantity_max) {
            if quantity > max {
                return false;
            }
        }

        let start = self.start.trim();
        if !start.is_empty() && date_part(&ingredient.stock.created_at) < date_part(start) {
            return false;
        }
        let end = self.end.trim();
        if !end.is_empty() && date_part(&ingredient.stock.updated_at) > date_part(end) {
            return false;
        }

        true
    }

    /// Rows with non-matching ingredients removed; every group is kept.
    pub fn apply(&self, rows: &[StockViewRow]) -> Vec<StockViewRow> {
        rows.iter()
            .map(|row| StockViewRow {
                group_id: row.group_id,
                group_name: row.group_name.clone(),
                ingredients: row
                    .ingredients
                    .iter()
                    .filter(|i| self.matches(i))
                    .cloned()
                    .collect(),
                total: row.total,
            })
            .collect()
    }
}

/// No ingredient row left to show
pub fn is_empty(rows: &[StockViewRow]) -> bool {
    rows.iter().all(|row| row.ingredients.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::projections::p900_stock::dto::{StockGroup, StockViewRow};
    use std::collections::HashMap;

    fn rows() -> Vec<StockViewRow> {
        let groups: Vec<StockGroup> = serde_json::from_str(
            r#"[
            {"id": 1, "name": "Boissons", "ingredients": [
                {"id": 1, "name": "Jus d'orange", "stock": {"id": 10, "quantity": 10, "createdAt": "2024-03-01T08:00:00", "updatedAt": "2024-03-05T18:30:00"}},
                {"id": 2, "name": "Soda", "stock": {"id": 11, "quantity": 5, "createdAt": "2024-03-02T08:00:00", "updatedAt": "2024-03-10T08:00:00"}}
            ]},
            {"id": 2, "name": "Épicerie", "ingredients": [
                {"id": 3, "name": "Farine", "stock": {"id": 12, "quantity": 25.5, "createdAt": "2024-02-20T08:00:00", "updatedAt": "2024-03-04T08:00:00"}}
            ]}
        ]"#,
        )
        .unwrap();
        let costs = HashMap::from([
            ("1".to_string(), 120.5),
            ("2".to_string(), 75.0),
            ("3".to_string(), 10.0),
        ]);
        groups
            .into_iter()
            .map(|g| StockViewRow::fold(g, &costs))
            .collect()
    }

    fn names(rows: &[StockViewRow]) -> Vec<String> {
        rows.iter()
            .flat_map(|r| r.ingredients.iter().map(|i| i.ingredient.name.clone()))
            .collect()
    }

    #[test]
    fn test_no_filter_keeps_everything() {
        let filter = StockFilter::default();
        assert_eq!(filter.apply(&rows()), rows());
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = StockFilter {
            name: "SOD".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&rows())), vec!["Soda"]);
    }

    #[test]
    fn test_quantity_bounds_are_inclusive() {
        let filter = StockFilter {
            quantity_min: "5".into(),
            quantity_max: "10".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&rows())), vec!["Jus d'orange", "Soda"]);

        let filter = StockFilter {
            quantity_min: "abc".into(),
            quantity_max: "6".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&rows())), vec!["Soda"]);
    }

    #[test]
    fn test_date_range_compares_date_parts() {
        let filter = StockFilter {
            start: "2024-03-01T23:59".into(),
            end: "2024-03-05T00:00".into(),
            ..Default::default()
        };
        // created on the start day and updated later the same end day both pass
        assert_eq!(names(&filter.apply(&rows())), vec!["Jus d'orange"]);
    }

    #[test]
    fn test_totals_stay_as_aggregated() {
        let filter = StockFilter {
            name: "soda".into(),
            ..Default::default()
        };
        let filtered = filter.apply(&rows());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].total, 195.5);
        assert!(filtered[1].ingredients.is_empty());
        assert_eq!(filtered[1].total, 10.0);
    }

    #[test]
    fn test_is_empty() {
        let filter = StockFilter {
            name: "caviar".into(),
            ..Default::default()
        };
        assert!(is_empty(&filter.apply(&rows())));
        assert!(!is_empty(&rows()));
        assert!(is_empty(&[]));
    }
}
