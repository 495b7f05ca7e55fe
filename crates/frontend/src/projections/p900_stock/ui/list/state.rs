use crate::projections::p900_stock::filter::StockFilter;
use contracts::projections::p900_stock::dto::StockViewRow;
use leptos::prelude::*;

/// View state of the stock page: last aggregation snapshot plus filter inputs
#[derive(Clone, Copy)]
pub struct StockListState {
    pub rows: RwSignal<Vec<StockViewRow>>,
    pub is_loading: RwSignal<bool>,
    /// Listing failure of the last refresh
    pub error: RwSignal<Option<String>>,
    pub name: RwSignal<String>,
    pub quantity_min: RwSignal<String>,
    pub quantity_max: RwSignal<String>,
    pub start: RwSignal<String>,
    pub end: RwSignal<String>,
}

impl StockListState {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            quantity_min: RwSignal::new(String::new()),
            quantity_max: RwSignal::new(String::new()),
            start: RwSignal::new(String::new()),
            end: RwSignal::new(String::new()),
        }
    }

    pub fn filter(&self) -> StockFilter {
        StockFilter {
            name: self.name.get(),
            quantity_min: self.quantity_min.get(),
            quantity_max: self.quantity_max.get(),
            start: self.start.get(),
            end: self.end.get(),
        }
    }

    /// Snapshot with the current filter applied (tracked)
    pub fn visible_rows(&self) -> Vec<StockViewRow> {
        let filter = self.filter();
        self.rows.with(|rows| filter.apply(rows))
    }
}

pub fn create_state() -> StockListState {
    StockListState::new()
}
