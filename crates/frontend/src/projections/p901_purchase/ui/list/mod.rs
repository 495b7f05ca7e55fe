use crate::projections::p901_purchase::api::fetch_purchases;
use crate::shared::api::ApiClient;
use crate::shared::cancel::use_cancel_token;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_ariary, format_quantity};
use contracts::projections::p901_purchase::dto::{page_total, Purchase, PurchaseQuery};
use contracts::shared::text::truncate;
use leptos::prelude::*;
use leptos::task::spawn_local;

const COLUMNS: &str = "6";

#[component]
#[allow(non_snake_case)]
pub fn PurchaseList() -> impl IntoView {
    let client = StoredValue::new(ApiClient::from_config());
    let size = use_config().page_size;
    let cancel = use_cancel_token();

    let purchases = RwSignal::new(Vec::<Purchase>::new());
    let page = RwSignal::new(1u32);
    let has_next = RwSignal::new(false);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = Callback::new(move |_: ()| {
        let query = PurchaseQuery {
            size,
            page: page.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        let cancel = cancel.clone();
        is_loading.set(true);
        spawn_local(async move {
            let result = fetch_purchases(&client.get_value(), &query).await;
            if cancel.is_cancelled() {
                return;
            }
            is_loading.set(false);
            match result {
                Ok(paged) => {
                    has_next.set(
                        paged.page_info.has_next
                            || (paged.page_info.total_pages == 0 && paged.items.len() as u32 == size),
                    );
                    purchases.set(paged.items);
                    error.set(None);
                }
                Err(e) => {
                    purchases.set(Vec::new());
                    error.set(Some(format!("Erreur lors du chargement des achats: {}", e)));
                }
            }
        });
    });

    load.run(());

    let on_dates = Callback::new(move |(start, end): (String, String)| {
        start_date.set(start);
        end_date.set(end);
        page.set(1);
        load.run(());
    });

    let on_page_change = Callback::new(move |next: u32| {
        page.set(next);
        load.run(());
    });

    let total = move || purchases.with(|items| page_total(items));

    view! {
        <div class="page">
            <PageHeader title="Achats de stock">
                <button class="button button--secondary" on:click=move |_| load.run(())>
                    {icon("refresh")}
                    "Actualiser"
                </button>
            </PageHeader>

            <ErrorBox error=error />

            <div class="filter-bar">
                <DateRangePicker start=start_date end=end_date on_change=on_dates />
                <p class="filter-bar__total">{move || format!("Prix total : {}", format_ariary(total()))}</p>
            </div>

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Nom Ingrédient"</th>
                        <th class="table__header-cell">"Quantité"</th>
                        <th class="table__header-cell">"Coût"</th>
                        <th class="table__header-cell">"Description"</th>
                        <th class="table__header-cell">"Créé à"</th>
                        <th class="table__header-cell">"Mis à jour à"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = purchases.get();
                        if rows.is_empty() {
                            let message = if is_loading.get() { "Chargement..." } else { "Aucune donnée disponible" };
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan=COLUMNS>
                                        {icon("info")}
                                        {message}
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|purchase| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{purchase.ingredient_name.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_quantity(purchase.quantity)}</td>
                                    <td class="table__cell table__cell--number">{format_ariary(purchase.cost)}</td>
                                    <td class="table__cell" title=purchase.description.clone()>
                                        {truncate(&purchase.description, 10)}
                                    </td>
                                    <td class="table__cell">{format_datetime(&purchase.created_at)}</td>
                                    <td class="table__cell">{format_datetime(&purchase.updated_at)}</td>
                                </tr>
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <PaginationControls page=page has_next=has_next on_page_change=on_page_change />
        </div>
    }
}
