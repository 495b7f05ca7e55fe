use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

/// Menu item sold by the restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Resource for Menu {
    type Form = MenuDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/menus/all",
            collection: "/menus",
            update: UpdateStyle::PutById,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Menu"
    }

    fn list_name() -> &'static str {
        "Liste des menus"
    }

    fn to_form(&self) -> MenuDto {
        MenuDto {
            id: Some(self.id),
            name: self.name.clone(),
            status: self.status.clone(),
            price: self.price,
            description: self.description.clone(),
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub status: String,
    pub price: f64,
    pub description: String,
    pub category_id: Option<i64>,
}

/// Status codes a menu can take
pub const MENU_STATUS_PATH: &str = "/menus/status";

impl MenuDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom du menu est requis".into());
        }
        if !(self.price > 0.0) {
            return Err("Le prix doit être supérieur à 0".into());
        }
        if self.status.trim().is_empty() {
            return Err("Le statut est requis".into());
        }
        if self.category_id.is_none() {
            return Err("La catégorie est requise".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu() {
        let mut dto = MenuDto {
            id: None,
            name: "Romazava".into(),
            status: "active".into(),
            price: 0.0,
            description: String::new(),
            category_id: Some(1),
        };
        assert_eq!(
            dto.validate(),
            Err("Le prix doit être supérieur à 0".to_string())
        );
        dto.price = 12000.0;
        assert!(dto.validate().is_ok());
        dto.price = f64::NAN;
        assert!(dto.validate().is_err());
    }
}
