use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
    }
}

impl Sortable for Category {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let list = use_resource_list::<Category>();
    let modal_stack = use_modal_stack();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(false);

    let open_form = move |existing: Option<Category>| {
        let title = if existing.is_some() {
            "Modifier la catégorie"
        } else {
            "Nouvelle catégorie"
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
                <CategoryDetails existing=existing.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=Category::list_name()>
                <SearchInput
                    value=list.search
                    on_change=Callback::new(move |v: String| list.search.set(v))
                    placeholder="Rechercher une catégorie..."
                />
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    "Ajouter"
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload.run(())>
                    {icon("refresh")}
                    "Actualiser"
                </button>
            </PageHeader>

            <ErrorBox error=list.error />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortHeader label="Nom" field="name" sort_field=sort_field ascending=sort_ascending />
                            <SortHeader label="Créé le" field="created_at" sort_field=sort_field ascending=sort_ascending />
                            <th class="table__header-cell">"Mis à jour le"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = list.visible(&sort_field.get(), sort_ascending.get());
                            if rows.is_empty() && !list.is_loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="4">"Aucune catégorie"</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(move |category| {
                                    let id = category.id;
                                    let label = category.name.clone();
                                    let edited = category.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{category.name.clone()}</td>
                                            <td class="table__cell">{format_datetime(&category.created_at)}</td>
                                            <td class="table__cell">{format_datetime(&category.updated_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Modifier"
                                                    on:click=move |_| open_form(Some(edited.clone()))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Supprimer"
                                                    on:click=move |_| confirm_delete(list, modal_stack, id, label.clone())
                                                >
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
            </div>
        </div>
    }
}
