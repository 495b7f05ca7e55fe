use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a008_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CustomerDetails(
    existing: Option<Customer>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let initial = existing.as_ref().map(Customer::to_form).unwrap_or_default();
    let id = initial.id;
    let name = RwSignal::new(initial.name);
    let phone_number = RwSignal::new(initial.phone_number);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = CustomerDto {
            id,
            name: name.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<Customer>(id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Nom"</Label>
                <Input value=name />
            </div>
            <div class="form-group">
                <Label>"Téléphone"</Label>
                <Input value=phone_number input_type=InputType::Tel placeholder="+261 0341234567" />
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
