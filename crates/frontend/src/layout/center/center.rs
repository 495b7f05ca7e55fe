use crate::layout::center::registry::render_page;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Content zone; swaps the page whenever the active key changes
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || render_page(ctx.active.get())}
        </div>
    }
}
