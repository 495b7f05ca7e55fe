use crate::domain::a002_floor::ui::details::FloorDetails;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a002_floor::aggregate::Floor;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Floor {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.floor_number, filter) || contains_ci(&self.description, filter)
    }
}

impl Sortable for Floor {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "floor_number" => self.floor_number.cmp(&other.floor_number),
            "description" => self
                .description
                .to_lowercase()
                .cmp(&other.description.to_lowercase()),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Floors are listed in building order, lowest first.
#[component]
#[allow(non_snake_case)]
pub fn FloorList() -> impl IntoView {
    let list = use_resource_list::<Floor>();
    let modal_stack = use_modal_stack();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(true);

    let open_form = move |existing: Option<Floor>| {
        let title = match &existing {
            Some(f) => format!("Modifier l'étage {}", f.floor_number),
            None => "Nouvel étage".to_string(),
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
            view! { <FloorDetails existing=existing.clone() on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=Floor::list_name()>
                <SearchInput
                    value=list.search
                    on_change=Callback::new(move |v: String| list.search.set(v))
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
                        <SortHeader label="Numéro d'étage" field="floor_number" sort_field=sort_field ascending=sort_ascending />
                        <SortHeader label="Description" field="description" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || list.visible(&sort_field.get(), sort_ascending.get())
                        key=|floor| (floor.id, floor.floor_number.clone(), floor.description.clone())
                        children=move |floor| {
                            let id = floor.id;
                            let label = format!("Étage {}", floor.floor_number);
                            let edited = floor.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{floor.floor_number}</td>
                                    <td class="table__cell">{floor.description}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Modifier"
                                            on:click=move |_| open_form(Some(edited.clone()))>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon button--danger" title="Supprimer"
                                            on:click=move |_| confirm_delete(list, modal_stack, id, label.clone())>
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
