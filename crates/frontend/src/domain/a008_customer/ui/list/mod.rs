//! Paged customer list
//!
//! Unlike the other resources the backend pages customers, so the page
//! number lives here and every change of page is a new request.

use crate::domain::a008_customer::ui::details::CustomerDetails;
use crate::shared::api::{crud, ApiClient};
use crate::shared::cancel::use_cancel_token;
use crate::shared::components::confirm_dialog::confirm;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::toast::use_toast;
use contracts::domain::a008_customer::aggregate::Customer;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let client = StoredValue::new(ApiClient::from_config());
    let page_size = use_config().page_size;
    let toast = use_toast();
    let modal_stack = use_modal_stack();
    let cancel = use_cancel_token();

    let items = RwSignal::new(Vec::<Customer>::new());
    let page = RwSignal::new(1u32);
    let has_next = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = Callback::new(move |_: ()| {
        let requested = page.get_untracked();
        let cancel = cancel.clone();
        is_loading.set(true);
        spawn_local(async move {
            let result = crud::fetch_page::<Customer>(&client.get_value(), requested, page_size).await;
            if cancel.is_cancelled() {
                return;
            }
            is_loading.set(false);
            match result {
                Ok(paged) => {
                    // Full page without pageInfo: let the user try the next one
                    let next = paged.page_info.has_next
                        || (paged.page_info.total_pages == 0 && paged.items.len() as u32 == page_size);
                    has_next.set(next);
                    items.set(paged.items);
                    error.set(None);
                }
                Err(e) => {
                    toast.error(format!("Erreur lors du chargement des clients: {}", e));
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    load.run(());

    let change_page = Callback::new(move |next: u32| {
        page.set(next.max(1));
        load.run(());
    });

    let open_form = move |existing: Option<Customer>| {
        let title = if existing.is_some() { "Modifier le client" } else { "Nouveau client" };
        modal_stack.push(title, move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    load.run(());
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! { <CustomerDetails existing=existing.clone() on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    let delete_customer = move |customer: Customer| {
        let id = customer.id;
        confirm(
            modal_stack,
            "Supprimer le client",
            format!("Supprimer le client « {} » ?", customer.name),
            move || {
                spawn_local(async move {
                    match crud::delete::<Customer>(&client.get_value(), id).await {
                        Ok(()) => {
                            toast.success("Client supprimé");
                            load.run(());
                        }
                        Err(e) => toast.error(format!("Suppression impossible: {}", e)),
                    }
                });
            },
        );
    };

    view! {
        <div class="page">
            <PageHeader title=Customer::list_name()>
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    "Ajouter"
                </button>
            </PageHeader>

            <ErrorBox error=error />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Nom"</th>
                        <th class="table__header-cell">"Téléphone"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if is_loading.get() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="3">"Chargement..."</td></tr>
                            }
                            .into_any();
                        }
                        let rows = items.get();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="3">"Aucun client"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|customer| {
                                let edited = customer.clone();
                                let removed = customer.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{customer.name}</td>
                                        <td class="table__cell">{customer.phone_number}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Modifier"
                                                on:click=move |_| open_form(Some(edited.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Supprimer"
                                                on:click=move |_| delete_customer(removed.clone())>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>

            <PaginationControls page=page has_next=has_next on_page_change=change_page />
        </div>
    }
}
