use crate::shared::components::id_select::IdSelect;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::a005_ingredient_group::aggregate::IngredientGroup;
use contracts::domain::a006_ingredient::aggregate::{Ingredient, IngredientDto};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn IngredientDetails(
    existing: Option<Ingredient>,
    units: Vec<Unit>,
    groups: Vec<IngredientGroup>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let initial = existing.as_ref().map(Ingredient::to_form).unwrap_or_default();
    let id = initial.id;
    let name = RwSignal::new(initial.name);
    let unit_id = RwSignal::new(initial.unit_id);
    let group_id = RwSignal::new(initial.group_id);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let unit_options: Vec<(i64, String)> = units
        .into_iter()
        .map(|u| (u.id, format!("{} ({})", u.name, u.abbreviation)))
        .collect();
    let group_options: Vec<(i64, String)> = groups.into_iter().map(|g| (g.id, g.name)).collect();

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = IngredientDto {
            id,
            name: name.get_untracked().trim().to_string(),
            unit_id: unit_id.get_untracked(),
            group_id: group_id.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<Ingredient>(id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Nom de l'ingrédient"</Label>
                <Input value=name />
            </div>
            <div class="form-group">
                <Label>"Unité"</Label>
                <IdSelect options=Signal::derive(move || unit_options.clone()) value=unit_id placeholder="Choisir une unité" />
            </div>
            <div class="form-group">
                <Label>"Groupe"</Label>
                <IdSelect options=Signal::derive(move || group_options.clone()) value=group_id placeholder="Choisir un groupe" />
            </div>
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Annuler"
                </Button>
                <Button appearance=ButtonAppearance::Primary disabled=is_saving on_click=save>
                    "Enregistrer"
                </Button>
            </Flex>
        </div>
    }
}
