use crate::shared::api::{ApiClient, ApiError};
use contracts::usecases::u501_add_stock::request::{
    AddStockRequest, ADD_STOCK_PATH, PAYMENT_METHODS_PATH,
};

pub async fn fetch_payment_methods(client: &ApiClient) -> Result<Vec<String>, ApiError> {
    client.get_json(PAYMENT_METHODS_PATH).await
}

pub async fn add_stock(client: &ApiClient, request: &AddStockRequest) -> Result<(), ApiError> {
    client.post_unit(ADD_STOCK_PATH, request).await
}
