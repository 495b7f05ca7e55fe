use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

/// Restaurant floor (room level)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: i64,
    pub floor_number: String,
    #[serde(default)]
    pub description: String,
}

impl Resource for Floor {
    type Form = FloorDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/floors",
            collection: "/floors",
            update: UpdateStyle::PutById,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Étage"
    }

    fn list_name() -> &'static str {
        "Liste des étages"
    }

    fn to_form(&self) -> FloorDto {
        FloorDto {
            id: Some(self.id),
            floor_number: self.floor_number.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub floor_number: String,
    pub description: String,
}

impl FloorDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.floor_number.trim().is_empty() {
            return Err("Le numéro d'étage est requis".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_form_is_camel_case() {
        let dto = FloorDto {
            id: Some(2),
            floor_number: "1".into(),
            description: "Terrasse".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["floorNumber"], "1");
        assert_eq!(json["id"], 2);
    }
}
