use super::aggregate::{aggregate_stock, StockReport, StockSource};
use crate::shared::api::{ApiClient, ApiError};
use crate::shared::cancel::CancelToken;
use async_trait::async_trait;
use contracts::projections::p900_stock::dto::{fifo_cost_path, StockGroup, INGREDIENT_GROUPS_PATH};
use contracts::projections::p902_operation_details::dto::{operation_details_path, OperationDetail};

#[async_trait(?Send)]
impl StockSource for ApiClient {
    async fn ingredient_groups(&self) -> Result<Vec<StockGroup>, ApiError> {
        self.get_json(INGREDIENT_GROUPS_PATH).await
    }

    async fn fifo_cost_text(&self, ingredient_id: &str) -> Result<String, ApiError> {
        self.get_text(&fifo_cost_path(ingredient_id)).await
    }
}

/// Fresh aggregation against the backend
pub async fn load_stock(
    client: &ApiClient,
    concurrency: usize,
    cancel: &CancelToken,
) -> Result<StockReport, ApiError> {
    aggregate_stock(client, concurrency, cancel).await
}

pub async fn fetch_operation_details(
    client: &ApiClient,
    stock_id: i64,
) -> Result<OperationDetail, ApiError> {
    client.get_json(&operation_details_path(stock_id)).await
}
