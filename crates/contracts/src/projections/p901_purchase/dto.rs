use serde::{Deserialize, Serialize};

pub const PURCHASES_PATH: &str = "/purchases";

/// Stock purchase (ingredient bought at a unit cost)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: i64,
    #[serde(default)]
    pub ingredient_name: String,
    #[serde(default)]
    pub ingredient_id: Option<serde_json::Value>,
    pub quantity: f64,
    pub cost: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Purchase {
    pub fn amount(&self) -> f64 {
        self.quantity * self.cost
    }
}

/// Sum of `quantity × cost` over one page
pub fn page_total(items: &[Purchase]) -> f64 {
    items.iter().map(Purchase::amount).sum()
}

/// Query of `GET /purchases`
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseQuery {
    pub size: u32,
    /// 1-based page as shown to the user
    pub page: u32,
    pub start_date: String,
    pub end_date: String,
}

impl PurchaseQuery {
    /// Query pairs; the backend pages from 0
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("size", self.size.to_string()),
            ("page", self.page.saturating_sub(1).to_string()),
            ("startDate", self.start_date.clone()),
            ("endDate", self.end_date.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase(id: i64, quantity: f64, cost: f64) -> Purchase {
        Purchase {
            id,
            ingredient_name: "Riz".into(),
            ingredient_id: None,
            quantity,
            cost,
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_page_total() {
        let items = vec![purchase(1, 2.0, 1500.0), purchase(2, 0.5, 3000.0)];
        assert_eq!(page_total(&items), 4500.0);
        assert_eq!(page_total(&[]), 0.0);
    }

    #[test]
    fn test_params_are_zero_based() {
        let q = PurchaseQuery {
            size: 8,
            page: 1,
            start_date: "2024-03-01T00:00".into(),
            end_date: String::new(),
        };
        let params = q.to_params();
        assert_eq!(params[0], ("size", "8".to_string()));
        assert_eq!(params[1], ("page", "0".to_string()));
        assert_eq!(params[2].1, "2024-03-01T00:00");
    }
}
