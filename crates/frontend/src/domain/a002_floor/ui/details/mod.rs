use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a002_floor::aggregate::{Floor, FloorDto};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn FloorDetails(
    existing: Option<Floor>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let form = RwSignal::new(existing.as_ref().map(Floor::to_form).unwrap_or_default());
    let floor_number = RwSignal::new(form.get_untracked().floor_number);
    let description = RwSignal::new(form.get_untracked().description);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let save = move |_: leptos::ev::MouseEvent| {
        form.update(|f| {
            f.floor_number = floor_number.get_untracked().trim().to_string();
            f.description = description.get_untracked().trim().to_string();
        });
        let dto: FloorDto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<Floor>(dto.id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Numéro d'étage"</Label>
                <Input value=floor_number placeholder="Ex: RDC, 1, 2" />
            </div>
            <div class="form-group">
                <Label>"Description"</Label>
                <Textarea value=description placeholder="Salle principale, terrasse..." />
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
