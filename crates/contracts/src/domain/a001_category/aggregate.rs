use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Menu category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Resource for Category {
    type Form = CategoryDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/categories/all",
            collection: "/categories",
            update: UpdateStyle::PostCollection,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Catégorie"
    }

    fn list_name() -> &'static str {
        "Liste des catégories"
    }

    fn to_form(&self) -> CategoryDto {
        CategoryDto {
            id: Some(self.id),
            name: self.name.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update form for a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom de la catégorie est requis".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_category() {
        let json = r#"{"id": 3, "name": "Desserts", "createdAt": "2024-03-15T14:02:26Z", "updatedAt": "2024-03-16T09:00:00Z"}"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(c.name, "Desserts");
        assert_eq!(c.to_form().id, Some(3));
    }

    #[test]
    fn test_create_form_omits_id() {
        let dto = CategoryDto {
            id: None,
            name: "Entrées".into(),
        };
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"name":"Entrées"}"#);
        assert!(CategoryDto::default().validate().is_err());
    }
}
