use crate::domain::a006_ingredient::ui::details::IngredientDetails;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, SearchInput, SortHeader, Searchable, Sortable};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::resource_list::{confirm_delete, use_resource_list};
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::a005_ingredient_group::aggregate::IngredientGroup;
use contracts::domain::a006_ingredient::aggregate::Ingredient;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Ingredient {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || self
                .unit
                .as_ref()
                .is_some_and(|u| contains_ci(&u.abbreviation, filter))
    }
}

impl Sortable for Ingredient {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            _ => self.id.cmp(&other.id),
        }
    }
}

/// Name of group `id` in `groups`, `-` when unknown
fn group_name(groups: &[IngredientGroup], id: Option<i64>) -> String {
    id.and_then(|id| groups.iter().find(|g| g.id == id))
        .map(|g| g.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn IngredientList() -> impl IntoView {
    let list = use_resource_list::<Ingredient>();
    let units = use_resource_list::<Unit>();
    let groups = use_resource_list::<IngredientGroup>();
    let modal_stack = use_modal_stack();
    let sort_field = RwSignal::new("id".to_string());
    let sort_ascending = RwSignal::new(false);

    let open_form = move |existing: Option<Ingredient>| {
        let title = if existing.is_some() {
            "Modifier l'ingrédient"
        } else {
            "Nouvel ingrédient"
        };
        let unit_options = units.items.get_untracked();
        let group_options = groups.items.get_untracked();
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
                <IngredientDetails
                    existing=existing.clone()
                    units=unit_options.clone()
                    groups=group_options.clone()
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title=Ingredient::list_name()>
                <SearchInput
                    value=list.search
                    on_change=Callback::new(move |v: String| list.search.set(v))
                    placeholder="Nom ou unité..."
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
                        <th class="table__header-cell">"Unité"</th>
                        <th class="table__header-cell">"Groupe"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let all_groups = groups.items.get();
                        list.visible(&sort_field.get(), sort_ascending.get())
                            .into_iter()
                            .map(|ingredient| {
                                let id = ingredient.id;
                                let label = ingredient.name.clone();
                                let group = group_name(&all_groups, ingredient.group_id);
                                let unit = ingredient
                                    .unit
                                    .as_ref()
                                    .map(|u| u.abbreviation.clone())
                                    .unwrap_or_default();
                                let edited = ingredient.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{ingredient.name}</td>
                                        <td class="table__cell">{unit}</td>
                                        <td class="table__cell">{group}</td>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name() {
        let groups = vec![IngredientGroup {
            id: 4,
            name: "Boissons".into(),
            created_at: String::new(),
            updated_at: String::new(),
        }];
        assert_eq!(group_name(&groups, Some(4)), "Boissons");
        assert_eq!(group_name(&groups, Some(9)), "-");
        assert_eq!(group_name(&groups, None), "-");
    }
}
