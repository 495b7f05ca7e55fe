//! Stock aggregation with FIFO costs
//!
//! One listing request for the ingredient groups, then one FIFO cost
//! request per distinct ingredient (bounded fan-out), then a fold into
//! per-group totals. A failed or malformed cost degrades that ingredient
//! to 0 and is reported; it never aborts the batch. A failed listing
//! aborts everything and is the only error.

use crate::shared::api::ApiError;
use crate::shared::cancel::CancelToken;
use async_trait::async_trait;
use contracts::projections::p900_stock::dto::{StockGroup, StockViewRow};
use futures::future;
use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Where the aggregator reads groups and costs from
#[async_trait(?Send)]
pub trait StockSource {
    /// `GET /ingredient-groups`
    async fn ingredient_groups(&self) -> Result<Vec<StockGroup>, ApiError>;

    /// Raw plain-text body of `GET /purchases/{id}/fifo-cost`
    async fn fifo_cost_text(&self, ingredient_id: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostFailure {
    #[error("{0}")]
    Request(#[from] ApiError),
    #[error("valeur non numérique \"{0}\"")]
    Malformed(String),
}

/// Cost of one ingredient could not be determined; its cost counts as 0
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Erreur coût FIFO pour stock {ingredient_id}: {failure}")]
pub struct CostError {
    pub ingredient_id: String,
    pub failure: CostFailure,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockReport {
    /// Groups in listing order, totals included
    pub rows: Vec<StockViewRow>,
    /// One entry per ingredient whose cost fell back to 0
    pub errors: Vec<CostError>,
}

/// Parses a FIFO cost body. Anything but a finite, non-negative number is malformed.
pub fn parse_fifo_cost(text: &str) -> Result<f64, CostFailure> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(CostFailure::Malformed(trimmed.to_string())),
    }
}

pub async fn fetch_fifo_cost<S>(source: &S, ingredient_id: &str) -> Result<f64, CostError>
where
    S: StockSource + ?Sized,
{
    let result = match source.fifo_cost_text(ingredient_id).await {
        Ok(text) => parse_fifo_cost(&text),
        Err(e) => Err(CostFailure::Request(e)),
    };
    result.map_err(|failure| CostError {
        ingredient_id: ingredient_id.to_string(),
        failure,
    })
}

/// Distinct ingredient ids in first-seen order
pub fn unique_ingredient_ids(groups: &[StockGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    groups
        .iter()
        .flat_map(|g| g.ingredients.iter())
        .filter(|i| seen.insert(i.id.clone()))
        .map(|i| i.id.clone())
        .collect()
}

/// Runs the whole aggregation with at most `concurrency` cost requests in flight.
///
/// Returns `ApiError::Cancelled` when `cancel` fires. No cost request is
/// started once the token is cancelled.
pub async fn aggregate_stock<S>(
    source: &S,
    concurrency: usize,
    cancel: &CancelToken,
) -> Result<StockReport, ApiError>
where
    S: StockSource + ?Sized,
{
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    let groups = source.ingredient_groups().await?;
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    let ids = unique_ingredient_ids(&groups);
    log::debug!(
        "stock: {} groups, {} distinct ingredients",
        groups.len(),
        ids.len()
    );

    let mut results: Vec<(usize, String, Result<f64, CostError>)> = stream::iter(
        ids.into_iter().enumerate(),
    )
    .take_while(move |_| future::ready(!cancel.is_cancelled()))
    .map(move |(idx, id)| async move {
        let cost = fetch_fifo_cost(source, &id).await;
        (idx, id, cost)
    })
    .buffer_unordered(concurrency.max(1))
    .collect()
    .await;

    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    // completion order is arbitrary; report errors in listing order
    results.sort_by_key(|(idx, _, _)| *idx);

    let mut costs: HashMap<String, f64> = HashMap::with_capacity(results.len());
    let mut errors = Vec::new();
    for (_, id, cost) in results {
        match cost {
            Ok(value) => {
                costs.insert(id, value);
            }
            Err(e) => {
                costs.insert(id, 0.0);
                errors.push(e);
            }
        }
    }

    let rows: Vec<StockViewRow> = groups
        .into_iter()
        .map(|group| StockViewRow::fold(group, &costs))
        .collect();

    log::info!(
        "stock: aggregated {} groups, {} cost errors",
        rows.len(),
        errors.len()
    );

    Ok(StockReport { rows, errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Returns `Pending` once so concurrent requests overlap.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    struct MemorySource {
        groups: Result<Vec<StockGroup>, ApiError>,
        costs: HashMap<String, Result<String, ApiError>>,
        calls: RefCell<Vec<String>>,
        in_flight: Cell<usize>,
        max_in_flight: Cell<usize>,
        cancel_on_listing: Option<CancelToken>,
        cancel_on_cost: Option<CancelToken>,
    }

    impl MemorySource {
        fn new(groups_json: &str) -> Self {
            Self {
                groups: Ok(serde_json::from_str(groups_json).unwrap()),
                costs: HashMap::new(),
                calls: RefCell::new(Vec::new()),
                in_flight: Cell::new(0),
                max_in_flight: Cell::new(0),
                cancel_on_listing: None,
                cancel_on_cost: None,
            }
        }

        fn cost(mut self, id: &str, body: Result<&str, ApiError>) -> Self {
            self.costs
                .insert(id.to_string(), body.map(|s| s.to_string()));
            self
        }
    }

    #[async_trait(?Send)]
    impl StockSource for MemorySource {
        async fn ingredient_groups(&self) -> Result<Vec<StockGroup>, ApiError> {
            if let Some(token) = &self.cancel_on_listing {
                token.cancel();
            }
            self.groups.clone()
        }

        async fn fifo_cost_text(&self, ingredient_id: &str) -> Result<String, ApiError> {
            self.calls.borrow_mut().push(ingredient_id.to_string());
            if let Some(token) = &self.cancel_on_cost {
                token.cancel();
            }
            self.in_flight.set(self.in_flight.get() + 1);
            self.max_in_flight
                .set(self.max_in_flight.get().max(self.in_flight.get()));
            YieldOnce(false).await;
            self.in_flight.set(self.in_flight.get() - 1);
            self.costs
                .get(ingredient_id)
                .cloned()
                .unwrap_or_else(|| Ok("0".to_string()))
        }
    }

    const BOISSONS: &str = r#"[
        {"id": 1, "name": "Boissons", "ingredients": [
            {"id": 1, "name": "Jus", "stock": {"id": 10, "quantity": 10}, "unit": {"abbreviation": "L"}},
            {"id": 2, "name": "Soda", "stock": {"id": 11, "quantity": 5}, "unit": {"abbreviation": "L"}}
        ]}
    ]"#;

    const TWO_GROUPS: &str = r#"[
        {"id": 1, "name": "Boissons", "ingredients": [
            {"id": 1, "name": "Jus"},
            {"id": 2, "name": "Soda"}
        ]},
        {"id": 2, "name": "Épicerie", "ingredients": [
            {"id": 3, "name": "Farine"},
            {"id": 4, "name": "Sucre"},
            {"id": 5, "name": "Sel"}
        ]},
        {"id": 3, "name": "Vide", "ingredients": []}
    ]"#;

    fn run(source: &MemorySource) -> Result<StockReport, ApiError> {
        block_on(aggregate_stock(source, 8, &CancelToken::new()))
    }

    fn cost_of(report: &StockReport, ingredient_id: &str) -> Option<f64> {
        report
            .rows
            .iter()
            .flat_map(|row| row.ingredients.iter())
            .find(|i| i.ingredient.id == ingredient_id)
            .map(|i| i.fifo_cost)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_fifo_cost() {
        assert_eq!(parse_fifo_cost("120.50"), Ok(120.5));
        assert_eq!(parse_fifo_cost(" 75\n"), Ok(75.0));
        assert_eq!(parse_fifo_cost("0"), Ok(0.0));
        assert_eq!(
            parse_fifo_cost("abc"),
            Err(CostFailure::Malformed("abc".into()))
        );
        assert!(parse_fifo_cost("").is_err());
        assert!(parse_fifo_cost("NaN").is_err());
        assert!(parse_fifo_cost("inf").is_err());
        assert!(parse_fifo_cost("-3").is_err());
        assert_eq!(
            parse_fifo_cost("120.50abc"),
            Err(CostFailure::Malformed("120.50abc".into()))
        );
    }

    #[test]
    fn test_boissons_total() {
        let source = MemorySource::new(BOISSONS)
            .cost("1", Ok("120.50"))
            .cost("2", Ok("75"));

        let report = run(&source).unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].group_name, "Boissons");
        assert_close(report.rows[0].total, 195.5);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_failed_cost_degrades_to_zero() {
        let source = MemorySource::new(BOISSONS)
            .cost("1", Ok("120.50"))
            .cost(
                "2",
                Err(ApiError::Status {
                    status: 500,
                    body: "boom".into(),
                }),
            );

        let report = run(&source).unwrap();

        assert_close(report.rows[0].total, 120.5);
        assert_eq!(cost_of(&report, "2"), Some(0.0));
        assert_eq!(cost_of(&report, "1"), Some(120.5));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].ingredient_id, "2");
        assert!(matches!(
            report.errors[0].failure,
            CostFailure::Request(ApiError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_malformed_cost_keeps_total_numeric() {
        let source = MemorySource::new(BOISSONS)
            .cost("1", Ok("120.50"))
            .cost("2", Ok("abc"));

        let report = run(&source).unwrap();

        assert!(report.rows[0].total.is_finite());
        assert_close(report.rows[0].total, 120.5);
        assert_eq!(cost_of(&report, "2"), Some(0.0));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].to_string(),
            "Erreur coût FIFO pour stock 2: valeur non numérique \"abc\""
        );
    }

    #[test]
    fn test_network_failure_is_reported() {
        let source = MemorySource::new(BOISSONS)
            .cost("1", Err(ApiError::Network("offline".into())))
            .cost("2", Ok("75"));

        let report = run(&source).unwrap();

        assert_close(report.rows[0].total, 75.0);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].ingredient_id, "1");
    }

    #[test]
    fn test_listing_failure_is_the_only_error() {
        let mut source = MemorySource::new("[]");
        source.groups = Err(ApiError::Status {
            status: 503,
            body: String::new(),
        });

        let err = run(&source).unwrap_err();

        assert_eq!(err.status(), Some(503));
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_totals_match_sum_of_costs() {
        let source = MemorySource::new(TWO_GROUPS)
            .cost("1", Ok("10"))
            .cost("2", Ok("2.5"))
            .cost("3", Ok("1.25"))
            .cost("4", Err(ApiError::Network("x".into())))
            .cost("5", Ok("4"));

        let report = run(&source).unwrap();

        assert_eq!(
            report
                .rows
                .iter()
                .map(|r| r.group_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Boissons", "Épicerie", "Vide"]
        );
        for row in &report.rows {
            let sum: f64 = row.ingredients.iter().map(|i| i.fifo_cost).sum();
            assert_close(row.total, sum);
        }
        assert_close(report.rows[1].total, 5.25);
        assert_close(report.rows[2].total, 0.0);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_idempotent_for_unchanged_backend() {
        let source = MemorySource::new(TWO_GROUPS)
            .cost("1", Ok("10"))
            .cost("3", Ok("oops"))
            .cost("5", Ok("4"));

        let first = run(&source).unwrap();
        let second = run(&source).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_ids_fetched_once() {
        let json = r#"[
            {"id": 1, "name": "A", "ingredients": [{"id": 7, "name": "Beurre"}]},
            {"id": 2, "name": "B", "ingredients": [{"id": "7", "name": "Beurre"}]}
        ]"#;
        let source = MemorySource::new(json).cost("7", Ok("3"));

        let report = run(&source).unwrap();

        assert_eq!(*source.calls.borrow(), vec!["7".to_string()]);
        assert_close(report.rows[0].total, 3.0);
        assert_close(report.rows[1].total, 3.0);
    }

    #[test]
    fn test_fan_out_is_bounded() {
        let source = MemorySource::new(TWO_GROUPS);

        let report = block_on(aggregate_stock(&source, 2, &CancelToken::new())).unwrap();

        assert_eq!(report.rows.len(), 3);
        assert_eq!(source.calls.borrow().len(), 5);
        assert!(source.max_in_flight.get() <= 2);
        assert!(source.max_in_flight.get() >= 1);
    }

    #[test]
    fn test_cancelled_before_start() {
        let source = MemorySource::new(BOISSONS);
        let token = CancelToken::new();
        token.cancel();

        let result = block_on(aggregate_stock(&source, 8, &token));

        assert_eq!(result, Err(ApiError::Cancelled));
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_cancelled_after_listing_skips_costs() {
        let token = CancelToken::new();
        let mut source = MemorySource::new(BOISSONS);
        source.cancel_on_listing = Some(token.clone());

        let result = block_on(aggregate_stock(&source, 8, &token));

        assert_eq!(result, Err(ApiError::Cancelled));
        assert!(source.calls.borrow().is_empty());
    }

    #[test]
    fn test_cancelled_during_costs_stops_fan_out() {
        let token = CancelToken::new();
        let mut source = MemorySource::new(TWO_GROUPS);
        source.cancel_on_cost = Some(token.clone());

        let result = block_on(aggregate_stock(&source, 1, &token));

        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(*source.calls.borrow(), vec!["1".to_string()]);
    }

    #[test]
    fn test_unique_ids_keep_first_seen_order() {
        let groups: Vec<StockGroup> = serde_json::from_str(TWO_GROUPS).unwrap();
        assert_eq!(unique_ingredient_ids(&groups), vec!["1", "2", "3", "4", "5"]);
    }
}
