//! Composition of one menu: its ingredient lines and a staging area for
//! adding several ingredients in one request.

use crate::domain::a009_menu_ingredient::api;
use crate::layout::global_context::{use_app_context, PageKey};
use crate::shared::api::ApiClient;
use crate::shared::cancel::use_cancel_token;
use crate::shared::components::confirm_dialog::confirm;
use crate::shared::components::id_select::IdSelect;
use crate::shared::components::page_header::{ErrorBox, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::number_format::{format_ariary, format_quantity};
use crate::shared::resource_list::use_resource_list;
use crate::shared::toast::use_toast;
use contracts::domain::a006_ingredient::aggregate::Ingredient;
use contracts::domain::a009_menu_ingredient::aggregate::{AddIngredientsToMenu, MenuComposition};
use contracts::enums::menu_status::menu_status_label;
use contracts::shared::number::parse_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn ingredient_label(ingredients: &[Ingredient], id: i64) -> String {
    ingredients
        .iter()
        .find(|i| i.id == id)
        .map(|i| match &i.unit {
            Some(unit) if !unit.abbreviation.is_empty() => format!("{} ({})", i.name, unit.abbreviation),
            _ => i.name.clone(),
        })
        .unwrap_or_else(|| format!("#{}", id))
}

#[component]
#[allow(non_snake_case)]
pub fn MenuCompositionPage(menu_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let client = StoredValue::new(ApiClient::from_config());
    let toast = use_toast();
    let modal_stack = use_modal_stack();
    let cancel = use_cancel_token();
    let ingredients = use_resource_list::<Ingredient>();

    let composition = RwSignal::new(None::<MenuComposition>);
    let error = RwSignal::new(None::<String>);
    let staged = RwSignal::new(AddIngredientsToMenu {
        menu_id,
        ingredients: Vec::new(),
    });
    let picked = RwSignal::new(None::<i64>);
    let quantity = RwSignal::new(String::new());
    let stage_error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let load = Callback::new(move |_: ()| {
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = api::fetch_composition(&client.get_value(), menu_id).await;
            if cancel.is_cancelled() {
                return;
            }
            match result {
                Ok(comp) => {
                    ctx.set_title(format!("Composition - {}", comp.menu_name));
                    composition.set(Some(comp));
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Erreur lors du chargement du menu: {}", e))),
            }
        });
    });

    load.run(());

    let stage = move |_: leptos::ev::MouseEvent| {
        let Some(ingredient_id) = picked.get_untracked() else {
            stage_error.set(Some("Choisissez un ingrédient".to_string()));
            return;
        };
        let qty = parse_amount(&quantity.get_untracked());
        let mut result = Ok(());
        staged.update(|s| result = s.stage(ingredient_id, qty));
        match result {
            Ok(()) => {
                stage_error.set(None);
                picked.set(None);
                quantity.set(String::new());
            }
            Err(e) => stage_error.set(Some(e)),
        }
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        let request = staged.get_untracked();
        if let Err(e) = request.validate() {
            stage_error.set(Some(e));
            return;
        }
        is_saving.set(true);
        spawn_local(async move {
            let result = api::add_ingredients(&client.get_value(), &request).await;
            is_saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("Ingrédients ajoutés au menu");
                    staged.update(|s| s.ingredients.clear());
                    load.run(());
                }
                Err(e) => stage_error.set(Some(e.to_string())),
            }
        });
    };

    let remove_line = move |line_id: i64, name: String| {
        confirm(
            modal_stack,
            "Retirer l'ingrédient",
            format!("Retirer « {} » de ce menu ?", name),
            move || {
                spawn_local(async move {
                    match api::remove_line(&client.get_value(), menu_id, line_id).await {
                        Ok(()) => {
                            toast.success("Ingrédient retiré");
                            load.run(());
                        }
                        Err(e) => toast.error(format!("Suppression impossible: {}", e)),
                    }
                });
            },
        );
    };

    let ingredient_options = Signal::derive(move || {
        ingredients
            .items
            .get()
            .into_iter()
            .map(|i| (i.id, i.name))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title="Composition du menu">
                <button class="button button--secondary" on:click=move |_| ctx.navigate(PageKey::Menus)>
                    {icon("chevron-left")}
                    "Retour aux menus"
                </button>
            </PageHeader>

            <ErrorBox error=error />

            {move || composition.get().map(|comp| view! {
                <div class="menu-summary">
                    <h2 class="menu-summary__name">{comp.menu_name.clone()}</h2>
                    <div class="menu-summary__meta">
                        <span>{format_ariary(comp.menu_price)}</span>
                        <span class="badge">{menu_status_label(&comp.status)}</span>
                    </div>
                    <p class="menu-summary__description">{comp.menu_desc.clone()}</p>
                </div>
            })}

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Ingrédient"</th>
                        <th class="table__header-cell">"Quantité"</th>
                        <th class="table__header-cell">"Ajouté le"</th>
                        <th class="table__header-cell">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let lines: Vec<_> = composition
                            .get()
                            .map(|c| c.lines().cloned().collect())
                            .unwrap_or_default();
                        if lines.is_empty() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="4">"Aucun ingrédient pour ce menu"</td></tr>
                            }
                            .into_any();
                        }
                        lines
                            .into_iter()
                            .map(|line| {
                                let line_id = line.id;
                                let name = line.ingredient_name.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{line.ingredient_name}</td>
                                        <td class="table__cell table__cell--number">
                                            {format!("{} {}", format_quantity(line.quantity), line.unit_name)}
                                        </td>
                                        <td class="table__cell">{format_datetime(&line.created_at)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon button--danger" title="Retirer"
                                                on:click=move |_| remove_line(line_id, name.clone())>
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

            <div class="details-form composition-staging">
                <h3>"Ajouter des ingrédients"</h3>
                <ErrorBox error=stage_error />
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div class="form-group">
                        <Label>"Ingrédient"</Label>
                        <IdSelect options=ingredient_options value=picked placeholder="Choisir un ingrédient" />
                    </div>
                    <div class="form-group">
                        <Label>"Quantité"</Label>
                        <Input value=quantity input_type=InputType::Number />
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=stage>
                        "Ajouter à la liste"
                    </Button>
                </Flex>

                <ul class="composition-staging__list">
                    {move || {
                        let all = ingredients.items.get();
                        staged
                            .get()
                            .ingredients
                            .into_iter()
                            .map(|line| {
                                let id = line.ingredient_id;
                                view! {
                                    <li class="composition-staging__item">
                                        <span>{ingredient_label(&all, id)}</span>
                                        <span>{format_quantity(line.quantity)}</span>
                                        <button class="button button--icon" title="Retirer"
                                            on:click=move |_| staged.update(|s| s.unstage(id))>
                                            {icon("x")}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>

                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_saving.get() || staged.with(|s| s.ingredients.is_empty()))
                        on_click=submit
                    >
                        {icon("save")}
                        "Enregistrer la composition"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_ingredient::aggregate::UnitRef;

    #[test]
    fn test_ingredient_label() {
        let all = vec![
            Ingredient {
                id: 1,
                name: "Riz".into(),
                unit: Some(UnitRef {
                    id: Some(2),
                    abbreviation: "kg".into(),
                }),
                group_id: None,
            },
            Ingredient {
                id: 2,
                name: "Sel".into(),
                unit: None,
                group_id: None,
            },
        ];
        assert_eq!(ingredient_label(&all, 1), "Riz (kg)");
        assert_eq!(ingredient_label(&all, 2), "Sel");
        assert_eq!(ingredient_label(&all, 5), "#5");
    }
}
