//! Top bar: sidebar toggle, brand and the title of the active page

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Masquer la navigation" } else { "Afficher la navigation" }
                >
                    {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__brand-name">"Restaurant"</span>
            </div>
            <h1 class="top-header__title">{move || ctx.title.get()}</h1>
        </div>
    }
}
