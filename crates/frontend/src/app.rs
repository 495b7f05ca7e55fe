use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "backend {} (fifo concurrency {})",
        config.api_base_url,
        config.fifo_concurrency
    );

    provide_context(ToastService::new(config.toast_timeout_ms));
    provide_context(config);
    // Title store and active page
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    view! {
        <Shell />
        <ModalHost />
        <ToastHost />
    }
}
