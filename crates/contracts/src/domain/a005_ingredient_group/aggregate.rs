use crate::domain::common::{Endpoints, Resource, UpdateStyle};
use serde::{Deserialize, Serialize};

/// Named bucket of ingredients (display grouping and stock subtotals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Resource for IngredientGroup {
    type Form = IngredientGroupDto;

    fn endpoints() -> Endpoints {
        Endpoints {
            list: "/ingredients/groups",
            collection: "/ingredients/groups",
            update: UpdateStyle::PutById,
        }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn element_name() -> &'static str {
        "Catégorie ingrédient"
    }

    fn list_name() -> &'static str {
        "Liste des catégories ingrédient"
    }

    fn to_form(&self) -> IngredientGroupDto {
        IngredientGroupDto {
            id: Some(self.id),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroupDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl IngredientGroupDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Le nom du groupe est requis".into());
        }
        Ok(())
    }
}
