pub mod state;

use self::state::create_state;
use crate::projections::p900_stock::api::load_stock;
use crate::projections::p900_stock::filter::is_empty;
use crate::projections::p900_stock::ui::operation_details::OperationDetails;
use crate::shared::api::{ApiClient, ApiError};
use crate::shared::cancel::use_cancel_token;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::page_header::PageHeader;
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::number_format::{format_money, format_quantity};
use crate::shared::toast::use_toast;
use crate::usecases::u501_add_stock::view::AddStockForm;
use contracts::projections::p900_stock::dto::StockViewRow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Stock levels grouped by ingredient group with FIFO cost totals
#[component]
pub fn StockList() -> impl IntoView {
    let config = use_config();
    let client = ApiClient::new(config.api_base_url.clone());
    let concurrency = config.fifo_concurrency;
    let toast = use_toast();
    let modal_stack = use_modal_stack();
    let cancel = use_cancel_token();
    let state = create_state();

    // Every refresh recomputes everything from scratch
    let load = Callback::new(move |_: ()| {
        state.is_loading.set(true);
        state.error.set(None);
        let client = client.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = load_stock(&client, concurrency, &cancel).await;
            if cancel.is_cancelled() {
                return;
            }
            match result {
                Ok(report) => {
                    for e in &report.errors {
                        toast.error(e.to_string());
                    }
                    state.rows.set(report.rows);
                }
                Err(ApiError::Cancelled) => return,
                Err(e) => {
                    let message = format!(
                        "Une erreur s'est produite lors du chargement des stocks: {}",
                        e
                    );
                    toast.error(message.clone());
                    state.rows.set(Vec::new());
                    state.error.set(Some(message));
                }
            }
            state.is_loading.set(false);
        });
    });

    let open_add_stock = Callback::new(move |(ingredient_id, ingredient_name): (String, String)| {
        modal_stack.push_sized("Modifier le stock", Some("520px"), move |handle| {
            let on_created = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    load.run(());
                })
            };
            let on_cancel = {
                let handle = handle.clone();
                Callback::new(move |_: ()| handle.close())
            };
            view! {
                <AddStockForm
                    ingredient_id=ingredient_id.clone()
                    ingredient_name=ingredient_name.clone()
                    on_created=on_created
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    });

    let open_details = Callback::new(move |stock_id: i64| {
        modal_stack.push_sized("Détails de l'Opération", Some("420px"), move |handle| {
            let on_close = Callback::new(move |_: ()| handle.close());
            view! { <OperationDetails stock_id=stock_id on_close=on_close /> }.into_any()
        });
    });

    load.run(());

    view! {
        <div class="page">
            <PageHeader title="Liste des Stocks">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load.run(())
                    disabled=Signal::derive(move || state.is_loading.get())
                >
                    {icon("refresh")}
                    "Actualiser"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Input value=state.name placeholder="Rechercher par nom de l'ingredient" />
                    <input
                        type="number"
                        class="filter-panel__input"
                        placeholder="Quantité Min"
                        prop:value=move || state.quantity_min.get()
                        on:input=move |ev| state.quantity_min.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        class="filter-panel__input"
                        placeholder="Quantité Max"
                        prop:value=move || state.quantity_max.get()
                        on:input=move |ev| state.quantity_max.set(event_target_value(&ev))
                    />
                    <DateRangePicker
                        start=state.start
                        end=state.end
                        on_change=Callback::new(move |(start, end): (String, String)| {
                            state.start.set(start);
                            state.end.set(end);
                        })
                    />
                </Flex>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Créé le"</th>
                            <th class="table__header-cell">"Modifié le"</th>
                            <th class="table__header-cell">"Ingrédient"</th>
                            <th class="table__header-cell">"Quantité"</th>
                            <th class="table__header-cell">"Unité"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if state.is_loading.get() {
                                return message_row("Chargement...".to_string(), "");
                            }
                            if let Some(e) = state.error.get() {
                                return message_row(e, "table__cell--error");
                            }
                            let rows = state.visible_rows();
                            if is_empty(&rows) {
                                return message_row(
                                    "Aucun stock disponible pour les filtres appliqués.".to_string(),
                                    "",
                                );
                            }
                            rows.into_iter()
                                .map(|row| group_rows(row, open_add_stock, open_details))
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn message_row(text: String, modifier: &'static str) -> AnyView {
    view! {
        <tr class="table__row">
            <td class=format!("table__cell table__cell--center {}", modifier) colspan="6">
                {text}
            </td>
        </tr>
    }
    .into_any()
}

fn group_rows(
    row: StockViewRow,
    on_edit: Callback<(String, String)>,
    on_info: Callback<i64>,
) -> impl IntoView {
    let total = format!("Total prix: {} Ar", format_money(row.total));
    let ingredients = row
        .ingredients
        .into_iter()
        .map(|costed| {
            let item = costed.ingredient;
            let edit_args = (item.id.clone(), item.name.clone());
            let stock_id = item.stock.id;
            view! {
                <tr class="table__row">
                    <td class="table__cell">{format_datetime(&item.stock.created_at)}</td>
                    <td class="table__cell">{format_datetime(&item.stock.updated_at)}</td>
                    <td class="table__cell">{item.name}</td>
                    <td class="table__cell table__cell--number">{format_quantity(item.stock.quantity)}</td>
                    <td class="table__cell">{item.unit.abbreviation}</td>
                    <td class="table__cell table__cell--actions">
                        <button
                            class="button button--primary button--icon"
                            title="Modifier le stock"
                            on:click=move |_| on_edit.run(edit_args.clone())
                        >
                            {icon("edit")}
                        </button>
                        <button
                            class="button button--secondary button--icon"
                            title="Détails"
                            on:click=move |_| on_info.run(stock_id)
                        >
                            {icon("info")}
                        </button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <tr class="table__row table__row--group">
            <td class="table__cell" colspan="3">{row.group_name}</td>
            <td class="table__cell" colspan="3">{total}</td>
        </tr>
        {ingredients}
    }
}
