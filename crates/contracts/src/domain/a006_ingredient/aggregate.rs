use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

/// Unit reference embedded in an ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub abbreviation: String,
}

/// Ingredient as listed by `GET /ingredients/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub unit: Option<UnitRef>,
    #[serde(default)]
    pub group_id: Option<i64>,
}

impl Resource for Ingredient {
    type Form = IngredientDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/ingredients/all",
            collection: "/ingredients",
            update: UpdateStyle::PutById,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Ingrédient"
    }

    fn list_name() -> &'static str {
        "Liste des ingrédients"
    }

    fn to_form(&self) -> IngredientDto {
        IngredientDto {
            id: Some(self.id),
            name: self.name.clone(),
            unit_id: self.unit.as_ref().and_then(|u| u.id),
            group_id: self.group_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub unit_id: Option<i64>,
    pub group_id: Option<i64>,
}

impl IngredientDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom est requis".into());
        }
        if self.unit_id.is_none() {
            return Err("L'unité est requise".into());
        }
        // Groups can be left untouched when editing an existing ingredient
        if self.id.is_none() && self.group_id.is_none() {
            return Err("Le groupe d'ingrédients est requis".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_unit_and_group() {
        let mut dto = IngredientDto {
            name: "Tomate".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.unit_id = Some(1);
        assert_eq!(
            dto.validate(),
            Err("Le groupe d'ingrédients est requis".to_string())
        );
        dto.group_id = Some(2);
        assert!(dto.validate().is_ok());

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["unitId"], 1);
        assert_eq!(json["groupId"], 2);
    }
}
