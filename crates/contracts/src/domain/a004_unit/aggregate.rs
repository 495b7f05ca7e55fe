use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

/// Measurement unit (kg, L, pc…)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
}

impl Resource for Unit {
    type Form = UnitDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/units/all",
            collection: "/units",
            update: UpdateStyle::PutCollection,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Unité"
    }

    fn list_name() -> &'static str {
        "Liste des unités"
    }

    fn to_form(&self) -> UnitDto {
        UnitDto {
            id: Some(self.id),
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub abbreviation: String,
}

impl UnitDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de l'unité est requis".into());
        }
        if self.abbreviation.trim().is_empty() {
            return Err("L'abréviation est requise".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_required() {
        let mut dto = UnitDto {
            id: None,
            name: "Kilogramme".into(),
            abbreviation: String::new(),
        };
        assert_eq!(dto.validate(), Err("L'abréviation est requise".to_string()));
        dto.abbreviation = "kg".into();
        assert!(dto.validate().is_ok());
    }
}
