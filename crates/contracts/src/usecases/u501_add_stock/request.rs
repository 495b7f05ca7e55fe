use crate::shared::number::parse_amount;
use serde::{Deserialize, Serialize};

pub const ADD_STOCK_PATH: &str = "/stocks/add";
pub const PAYMENT_METHODS_PATH: &str = "/payments/method";

const MAX_DESCRIPTION_LEN: usize = 255;

/// Body of `POST /stocks/add`: a purchase that feeds the ingredient's stock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStockRequest {
    pub ingredient_id: String,
    pub quantity: f64,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub method: String,
}

impl AddStockRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.ingredient_id.trim().is_empty() {
            return Err("L'ingrédient est requis".into());
        }
        if !(self.quantity > 0.0) {
            return Err("La quantité doit être > 0".into());
        }
        if !(self.cost > 0.0) {
            return Err("Le coût doit être > 0".into());
        }
        if let Some(d) = &self.description {
            if d.chars().count() > MAX_DESCRIPTION_LEN {
                return Err("La description ne doit pas dépasser 255 caractères".into());
            }
        }
        if self.method.trim().is_empty() {
            return Err("La méthode de paiement est requise".into());
        }
        Ok(())
    }

    /// Total price of the purchase; unset inputs count as 0
    pub fn total(&self) -> f64 {
        let q = if self.quantity.is_finite() { self.quantity } else { 0.0 };
        let c = if self.cost.is_finite() { self.cost } else { 0.0 };
        q * c
    }
}

impl AddStockRequest {
    /// Request from raw form inputs; a blank description is omitted
    pub fn from_inputs(
        ingredient_id: &str,
        quantity: &str,
        cost: &str,
        description: &str,
        method: &str,
    ) -> Self {
        let description = description.trim();
        Self {
            ingredient_id: ingredient_id.to_string(),
            quantity: parse_amount(quantity),
            cost: parse_amount(cost),
            description: (!description.is_empty()).then(|| description.to_string()),
            method: method.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AddStockRequest {
        AddStockRequest {
            ingredient_id: "7".into(),
            quantity: 3.0,
            cost: 2500.0,
            description: None,
            method: "CASH".into(),
        }
    }

    #[test]
    fn test_valid_request() {
        let r = request();
        assert!(r.validate().is_ok());
        assert_eq!(r.total(), 7500.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["ingredientId"], "7");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut r = request();
        r.quantity = 0.0;
        assert_eq!(r.validate(), Err("La quantité doit être > 0".to_string()));

        let mut r = request();
        r.cost = f64::NAN;
        assert!(r.validate().is_err());
        assert_eq!(r.total(), 0.0);

        let mut r = request();
        r.description = Some("x".repeat(256));
        assert!(r.validate().is_err());

        let mut r = request();
        r.method = String::new();
        assert_eq!(
            r.validate(),
            Err("La méthode de paiement est requise".to_string())
        );
    }

    #[test]
    fn test_from_inputs() {
        let r = AddStockRequest::from_inputs("7", "2,5", " 1000 ", "  ", "CASH");
        assert_eq!(r.quantity, 2.5);
        assert_eq!(r.cost, 1000.0);
        assert_eq!(r.description, None);
        assert_eq!(r.total(), 2500.0);
        assert!(r.validate().is_ok());

        let r = AddStockRequest::from_inputs("7", "", "abc", "sac de 25kg", "CASH");
        assert!(r.quantity.is_nan());
        assert_eq!(r.total(), 0.0);
        assert_eq!(r.description.as_deref(), Some("sac de 25kg"));
        assert_eq!(r.validate(), Err("La quantité doit être > 0".to_string()));
    }
}
