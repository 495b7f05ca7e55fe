use crate::shared::api::{ApiClient, ApiError};
use contracts::domain::common::Paged;
use contracts::projections::p901_purchase::dto::{Purchase, PurchaseQuery, PURCHASES_PATH};

/// One page of purchases, newest first
pub async fn fetch_purchases(client: &ApiClient, query: &PurchaseQuery) -> Result<Paged<Purchase>, ApiError> {
    let mut page = client
        .get_json_with_query::<Paged<Purchase>>(PURCHASES_PATH, &query.to_params())
        .await?;
    page.items.sort_by(|a, b| b.id.cmp(&a.id));
    Ok(page)
}
