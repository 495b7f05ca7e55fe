use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails(
    existing: Option<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let form = existing.as_ref().map(Category::to_form).unwrap_or_default();
    let id = form.id;
    let name = RwSignal::new(form.name);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = CategoryDto {
            id,
            name: name.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<Category>(id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Nom de la catégorie"</Label>
                <Input value=name placeholder="Ex: Entrées" />
            </div>
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Annuler"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_saving
                    on_click=save
                >
                    {move || if is_saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                </Button>
            </Flex>
        </div>
    }
}
