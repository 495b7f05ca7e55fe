use crate::domain::a005_ingredient_group::ui::details::IngredientGroupDetails;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a005_ingredient_group::aggregate::IngredientGroup;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for IngredientGroup {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
    }
}

impl Sortable for IngredientGroup {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn IngredientGroupList() -> impl IntoView {
    let list = use_resource_list::<IngredientGroup>();
    let modal_stack = use_modal_stack();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(false);

    let open_form = move |existing: Option<IngredientGroup>| {
        let title = if existing.is_some() {
            "Modifier le groupe"
        } else {
            "Nouveau groupe d'ingrédients"
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
            view! {
                <IngredientGroupDetails existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=IngredientGroup::list_name()>
                <SearchInput
                    value=list.search
                    on_change=Callback::new(move |v: String| list.search.set(v))
                />
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    "Ajouter"
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload.run(())>
                    {icon("refresh")}
                </button>
            </PageHeader>

            <ErrorBox error=list.error />

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <SortHeader label="Nom" field="name" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Créé le"</th>
                        <SortHeader label="Mis à jour le" field="updated_at" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || list.is_loading.get()>
                        <tr><td class="table__cell table__cell--empty" colspan="4">"Chargement..."</td></tr>
                    </Show>
                    {move || {
                        list.visible(&sort_field.get(), sort_ascending.get())
                            .into_iter()
                            .map(move |group| {
                                let id = group.id;
                                let label = group.name.clone();
                                let edited = group.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{group.name.clone()}</td>
                                        <td class="table__cell">{format_datetime(&group.created_at)}</td>
                                        <td class="table__cell">{format_datetime(&group.updated_at)}</td>
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
