use crate::domain::a007_menu::ui::details::MenuDetails;
use crate::layout::global_context::{use_app_context, PageKey};
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::number_format::format_ariary;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a007_menu::aggregate::Menu;
use contracts::domain::common::Resource;
use contracts::enums::menu_status::menu_status_label;
use contracts::shared::text::truncate;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Menu {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.description, filter)
            || contains_ci(menu_status_label(&self.status), filter)
    }
}

impl Sortable for Menu {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "price" => self.price.total_cmp(&other.price),
            "status" => self.status.cmp(&other.status),
            _ => self.id.cmp(&other.id),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MenuList() -> impl IntoView {
    let list = use_resource_list::<Menu>();
    let categories = use_resource_list::<Category>();
    let modal_stack = use_modal_stack();
    let ctx = use_app_context();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(false);

    let category_name = move |id: Option<i64>| -> String {
        categories.items.with(|all| {
            id.and_then(|id| all.iter().find(|c| c.id == id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string())
        })
    };

    let open_form = move |existing: Option<Menu>| {
        let title = if existing.is_some() { "Modifier le menu" } else { "Nouveau menu" };
        let category_options = categories.items.get_untracked();
        modal_stack.push_sized(title, Some("min(640px, 95vw)"), move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |_: ()| {
                    handle.close();
                    list.reload.run(());
                })
            };
            let on_cancel = Callback::new(move |_: ()| handle.close());
            view! {
                <MenuDetails
                    existing=existing.clone()
                    categories=category_options.clone()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=Menu::list_name()>
                <SearchInput
                    value=list.search
                    on_change=Callback::new(move |v: String| list.search.set(v))
                    placeholder="Nom, description ou statut..."
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
                        <SortHeader label="Prix" field="price" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Description"</th>
                        <SortHeader label="Statut" field="status" sort_field=sort_field ascending=sort_ascending />
                        <th class="table__header-cell">"Catégorie"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.visible(&sort_field.get(), sort_ascending.get())
                            .into_iter()
                            .map(|menu| {
                                let id = menu.id;
                                let label = menu.name.clone();
                                let category = category_name(menu.category_id);
                                let edited = menu.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{menu.name.clone()}</td>
                                        <td class="table__cell table__cell--number">{format_ariary(menu.price)}</td>
                                        <td class="table__cell" title=menu.description.clone()>
                                            {truncate(&menu.description, 30)}
                                        </td>
                                        <td class="table__cell">{menu_status_label(&menu.status)}</td>
                                        <td class="table__cell">{category}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Modifier"
                                                on:click=move |_| open_form(Some(edited.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Composition"
                                                on:click=move |_| ctx.navigate(PageKey::MenuComposition(id))>
                                                {icon("layers")}
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
