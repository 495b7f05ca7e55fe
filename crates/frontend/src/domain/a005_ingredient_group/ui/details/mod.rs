use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a005_ingredient_group::aggregate::{IngredientGroup, IngredientGroupDto};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn IngredientGroupDetails(
    existing: Option<IngredientGroup>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let initial = existing.as_ref().map(IngredientGroup::to_form).unwrap_or_default();
    let id = initial.id;
    let name = RwSignal::new(initial.name);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = IngredientGroupDto {
            id,
            name: name.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<IngredientGroup>(id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Nom du groupe"</Label>
                <Input value=name placeholder="Ex: Légumes" />
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
