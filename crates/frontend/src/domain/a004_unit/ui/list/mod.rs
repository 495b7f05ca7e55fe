use crate::domain::a004_unit::ui::details::UnitDetails;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Unit {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.abbreviation, filter)
    }
}

impl Sortable for Unit {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "abbreviation" => self.abbreviation.cmp(&other.abbreviation),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UnitList() -> impl IntoView {
    let list = use_resource_list::<Unit>();
    let modal_stack = use_modal_stack();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(false);

    let open_form = move |existing: Option<Unit>| {
        let title = if existing.is_some() { "Modifier l'unité" } else { "Nouvelle unité" };
        modal_stack.push(title, move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    list.reload.run(());
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! { <UnitDetails existing=existing.clone() on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=Unit::list_name() subtitle="Unités de mesure des ingrédients".to_string()>
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
                        <SortHeader label="Nom" field="name" sort_field=sort_field ascending=sort_ascending />
                        <SortHeader label="Abréviation" field="abbreviation" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.visible(&sort_field.get(), sort_ascending.get())
                            .into_iter()
                            .map(move |unit| {
                                let id = unit.id;
                                let label = unit.name.clone();
                                let edited = unit.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{unit.name}</td>
                                        <td class="table__cell table__cell--mono">{unit.abbreviation}</td>
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
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
