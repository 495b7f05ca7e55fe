use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next pager for paged lists (1-based `page`)
///
/// `has_next` comes from the backend `pageInfo`; without it the next
/// button stays enabled as long as the current page is full.
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] has_next: Signal<bool>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="button button--secondary"
                disabled=move || page.get() <= 1
                on:click=move |_| {
                    let current = page.get_untracked();
                    if current > 1 {
                        on_page_change.run(current - 1);
                    }
                }
            >
                {icon("chevron-left")}
                "Précédent"
            </button>
            <span class="pagination-info">{move || format!("Page {}", page.get())}</span>
            <button
                class="button button--secondary"
                disabled=move || !has_next.get()
                on:click=move |_| on_page_change.run(page.get_untracked() + 1)
            >
                "Suivant"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
