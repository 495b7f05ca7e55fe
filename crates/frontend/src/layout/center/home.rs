use crate::layout::global_context::{use_app_context, PageKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

const SHORTCUTS: [(PageKey, &str, &str); 4] = [
    (PageKey::Stocks, "inventory", "Niveaux de stock et coût FIFO par groupe"),
    (PageKey::Purchases, "purchases", "Historique des achats de stock"),
    (PageKey::Menus, "menus", "Carte, prix et composition des menus"),
    (PageKey::Tables, "table", "Tables et disponibilité"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page home">
            <h2 class="home__welcome">"Bienvenue dans l'espace de gestion du restaurant"</h2>
            <div class="home__shortcuts">
                {SHORTCUTS
                    .iter()
                    .map(|&(page, icon_name, hint)| view! {
                        <button class="home__card" on:click=move |_| ctx.navigate(page)>
                            <span class="home__card-icon">{icon(icon_name)}</span>
                            <span class="home__card-title">{page.title()}</span>
                            <span class="home__card-hint">{hint}</span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
