use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a003_table::aggregate::{DiningTable, DiningTableDto};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;

/// Parses a positive integer field; anything else maps to 0 and fails validation.
fn parse_count(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
#[allow(non_snake_case)]
pub fn TableDetails(
    existing: Option<DiningTable>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let initial = existing.as_ref().map(DiningTable::to_form).unwrap_or_default();
    let id = initial.id;
    let status = initial.status.clone();
    let number = RwSignal::new(if id.is_some() { initial.number.to_string() } else { String::new() });
    let capacity = RwSignal::new(if id.is_some() { initial.capacity.to_string() } else { String::new() });
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = DiningTableDto {
            id,
            number: parse_count(&number.get_untracked()),
            capacity: parse_count(&capacity.get_untracked()),
            status: status.clone(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<DiningTable>(id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Numéro de table"</Label>
                <Input value=number input_type=InputType::Number />
            </div>
            <div class="form-group">
                <Label>"Capacité"</Label>
                <Input value=capacity input_type=InputType::Number placeholder="Nombre de places" />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("douze"), 0);
        assert_eq!(parse_count(""), 0);
    }
}
