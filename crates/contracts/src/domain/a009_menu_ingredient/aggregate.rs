use serde::{Deserialize, Serialize};

/// One ingredient line of a menu composition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuIngredientLine {
    pub id: i64,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl MenuIngredientLine {
    /// The backend pads compositions without ingredients with `{}`
    pub fn is_placeholder(&self) -> bool {
        self.id == 0 && self.ingredient_name.is_empty()
    }
}

/// `GET /menu-ingredients/menu/{menuId}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuComposition {
    pub menu_id: i64,
    pub menu_name: String,
    pub menu_desc: String,
    pub menu_price: f64,
    pub status: String,
    pub ingredients: Vec<MenuIngredientLine>,
}

impl MenuComposition {
    pub fn lines(&self) -> impl Iterator<Item = &MenuIngredientLine> {
        self.ingredients.iter().filter(|l| !l.is_placeholder())
    }

    pub fn get_by_menu_path(menu_id: i64) -> String {
        format!("/menu-ingredients/menu/{}", menu_id)
    }

    pub fn remove_line_path(menu_id: i64, line_id: i64) -> String {
        format!("/menu-ingredients/menu/{}/ingredient/{}", menu_id, line_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientQuantity {
    pub ingredient_id: i64,
    pub quantity: f64,
}

/// Body of `POST /menus/add-ingredients`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddIngredientsToMenu {
    pub menu_id: i64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl AddIngredientsToMenu {
    pub const PATH: &'static str = "/menus/add-ingredients";

    /// Adds a line, or replaces the quantity when the ingredient is already staged
    pub fn stage(&mut self, ingredient_id: i64, quantity: f64) -> Result<(), String> {
        if !(quantity > 0.0) || !quantity.is_finite() {
            return Err("La quantité doit être supérieure à 0".into());
        }
        match self
            .ingredients
            .iter_mut()
            .find(|i| i.ingredient_id == ingredient_id)
        {
            Some(existing) => existing.quantity = quantity,
            None => self.ingredients.push(IngredientQuantity {
                ingredient_id,
                quantity,
            }),
        }
        Ok(())
    }

    pub fn unstage(&mut self, ingredient_id: i64) {
        self.ingredients.retain(|i| i.ingredient_id != ingredient_id);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.ingredients.is_empty() {
            return Err("Ajoutez au moins un ingrédient".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_lines_are_skipped() {
        let json = r#"{
            "menuId": 5, "menuName": "Ravitoto", "menuDesc": "", "menuPrice": 8000, "status": "active",
            "ingredients": [{}, {"id": 9, "ingredientName": "Porc", "quantity": 0.2, "unitName": "kg"}]
        }"#;
        let comp: MenuComposition = serde_json::from_str(json).unwrap();
        let lines: Vec<_> = comp.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].ingredient_name, "Porc");
    }

    #[test]
    fn test_stage_replaces_quantity() {
        let mut req = AddIngredientsToMenu {
            menu_id: 5,
            ingredients: vec![],
        };
        assert!(req.validate().is_err());
        req.stage(1, 2.0).unwrap();
        req.stage(1, 3.5).unwrap();
        req.stage(2, 1.0).unwrap();
        assert!(req.stage(3, 0.0).is_err());
        assert_eq!(req.ingredients.len(), 2);
        assert_eq!(req.ingredients[0].quantity, 3.5);
        req.unstage(1);
        assert_eq!(req.ingredients.len(), 1);
    }

    #[test]
    fn test_paths() {
        assert_eq!(MenuComposition::get_by_menu_path(5), "/menu-ingredients/menu/5");
        assert_eq!(
            MenuComposition::remove_line_path(5, 9),
            "/menu-ingredients/menu/5/ingredient/9"
        );
    }
}
