use crate::domain::a003_table::ui::details::TableDetails;
use crate::domain::a003_table::ui::status::TableStatusForm;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a003_table::aggregate::DiningTable;
use contracts::domain::common::Resource;
use contracts::enums::table_status::{table_status_label, TableStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for DiningTable {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches(filter) || table_status_label(&self.status).contains(&filter.to_lowercase())
    }
}

impl Sortable for DiningTable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "number" => self.number.cmp(&other.number),
            "capacity" => self.capacity.cmp(&other.capacity),
            "status" => self.status.cmp(&other.status),
            _ => self.id.cmp(&other.id),
        }
    }
}

fn status_badge(status: &str) -> impl IntoView {
    let modifier = match TableStatus::from_code(status) {
        Some(TableStatus::Available) => "badge--success",
        Some(TableStatus::NotAvailable) => "badge--warning",
        None => "badge--neutral",
    };
    view! { <span class=format!("badge {}", modifier)>{table_status_label(status)}</span> }
}

#[component]
#[allow(non_snake_case)]
pub fn TableList() -> impl IntoView {
    let list = use_resource_list::<DiningTable>();
    let modal_stack = use_modal_stack();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(false);

    let open_form = move |existing: Option<DiningTable>| {
        let title = match &existing {
            Some(t) => format!("Modifier la table n°{}", t.number),
            None => "Nouvelle table".to_string(),
        };
        modal_stack.push(title, move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    list.reload.run(());
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! { <TableDetails existing=existing.clone() on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    let open_status = move |table: DiningTable| {
        modal_stack.push("Changer le statut", move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    list.reload.run(());
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! { <TableStatusForm table=table.clone() on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=DiningTable::list_name()>
                <SearchInput
                    value=list.search
                    on_change=Callback::new(move |v: String| list.search.set(v))
                    placeholder="Numéro, capacité ou statut..."
                />
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    "Ajouter"
                </button>
            </PageHeader>

            <ErrorBox error=list.error />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <SortHeader label="Numéro" field="number" sort_field=sort_field ascending=sort_ascending />
                        <SortHeader label="Capacité" field="capacity" sort_field=sort_field ascending=sort_ascending />
                        <SortHeader label="Statut" field="status" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.visible(&sort_field.get(), sort_ascending.get())
                            .into_iter()
                            .map(move |table| {
                                let id = table.id;
                                let label = format!("Table n°{}", table.number);
                                let edited = table.clone();
                                let for_status = table.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{table.number}</td>
                                        <td class="table__cell">{format!("{} places", table.capacity)}</td>
                                        <td class="table__cell">{status_badge(&table.status)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Modifier"
                                                on:click=move |_| open_form(Some(edited.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Changer le statut"
                                                on:click=move |_| open_status(for_status.clone())>
                                                {icon("refresh")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Supprimer"
                                                on:click=move |_| confirm_delete(list, modal_stack, id, label.clone())>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_french_label() {
        let table = DiningTable {
            id: 3,
            number: 7,
            capacity: 2,
            status: "NOT_AVAILABLE".into(),
        };
        assert!(table.matches_filter("non dispo"));
        assert!(table.matches_filter("7"));
        assert!(!table.matches_filter("terrasse"));
    }
}
