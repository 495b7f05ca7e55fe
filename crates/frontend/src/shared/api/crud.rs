//! Generic list/create/update/delete over [`Resource`]
//!
//! Paths come from `Resource::endpoints()`; the update method depends on
//! the resource's `UpdateStyle`.

use super::client::{ApiClient, HttpMethod};
use super::error::ApiError;
use contracts::domain::common::{Paged, Resource};

pub async fn fetch_all<R: Resource>(client: &ApiClient) -> Result<Vec<R>, ApiError> {
    client.get_json::<Vec<R>>(&R::endpoints().list_path()).await
}

/// One page of a paged list. `page` is 1-based, the backend counts from 0.
pub async fn fetch_page<R: Resource>(
    client: &ApiClient,
    page: u32,
    size: u32,
) -> Result<Paged<R>, ApiError> {
    let params = page_params(page, size);
    client
        .get_json_with_query::<Paged<R>>(&R::endpoints().list_path(), &params)
        .await
}

pub async fn create<R: Resource>(client: &ApiClient, form: &R::Form) -> Result<(), ApiError> {
    client.post_unit(&R::endpoints().create_path(), form).await
}

pub async fn update<R: Resource>(
    client: &ApiClient,
    id: i64,
    form: &R::Form,
) -> Result<(), ApiError> {
    let (method, path) = R::endpoints().update_request(id);
    let method = HttpMethod::parse(method)
        .ok_or_else(|| ApiError::Serialize(format!("unsupported method {}", method)))?;
    client.request(method, &path, Some(form)).await.map(|_| ())
}

/// Create when `id` is `None`, update otherwise
pub async fn save<R: Resource>(
    client: &ApiClient,
    id: Option<i64>,
    form: &R::Form,
) -> Result<(), ApiError> {
    match id {
        Some(id) => update::<R>(client, id, form).await,
        None => create::<R>(client, form).await,
    }
}

pub async fn delete<R: Resource>(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&R::endpoints().delete_path(id)).await
}

pub fn page_params(page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("size", size.to_string()),
        ("page", page.saturating_sub(1).to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_zero_based() {
        assert_eq!(
            page_params(1, 8),
            vec![("size", "8".to_string()), ("page", "0".to_string())]
        );
        assert_eq!(page_params(3, 8)[1].1, "2");
        assert_eq!(page_params(0, 8)[1].1, "0");
    }
}
