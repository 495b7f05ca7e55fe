use crate::shared::api::{ApiClient, ApiError};
use contracts::domain::a009_menu_ingredient::aggregate::{AddIngredientsToMenu, MenuComposition};

pub async fn fetch_composition(client: &ApiClient, menu_id: i64) -> Result<MenuComposition, ApiError> {
    client
        .get_json::<MenuComposition>(&MenuComposition::get_by_menu_path(menu_id))
        .await
}

pub async fn add_ingredients(client: &ApiClient, request: &AddIngredientsToMenu) -> Result<(), ApiError> {
    client.post_unit(AddIngredientsToMenu::PATH, request).await
}

pub async fn remove_line(client: &ApiClient, menu_id: i64, line_id: i64) -> Result<(), ApiError> {
    client
        .delete(&MenuComposition::remove_line_path(menu_id, line_id))
        .await
}
