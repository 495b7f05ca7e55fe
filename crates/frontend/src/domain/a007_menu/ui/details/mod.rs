use crate::shared::api::ApiClient;
use crate::shared::components::id_select::IdSelect;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::resource_list::use_form_actions;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a007_menu::aggregate::{Menu, MenuDto, MENU_STATUS_PATH};
use contracts::domain::common::Resource;
use contracts::enums::menu_status::menu_status_label;
use contracts::shared::number::parse_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

async fn fetch_statuses(client: &ApiClient) -> Vec<String> {
    match client.get_json::<Vec<String>>(MENU_STATUS_PATH).await {
        Ok(statuses) => statuses,
        Err(e) => {
            log::warn!("menu statuses unavailable: {}", e);
            Vec::new()
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MenuDetails(
    existing: Option<Menu>,
    categories: Vec<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let actions = use_form_actions();
    let initial = existing.as_ref().map(Menu::to_form).unwrap_or_default();
    let id = initial.id;
    let name = RwSignal::new(initial.name);
    let price = RwSignal::new(if id.is_some() { initial.price.to_string() } else { String::new() });
    let description = RwSignal::new(initial.description);
    let status = RwSignal::new(initial.status);
    let category_id = RwSignal::new(initial.category_id);
    let statuses = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);

    let category_options: Vec<(i64, String)> =
        categories.into_iter().map(|c| (c.id, c.name)).collect();

    spawn_local(async move {
        let list = fetch_statuses(&actions.client()).await;
        if status.get_untracked().is_empty() {
            if let Some(first) = list.first() {
                status.set(first.clone());
            }
        }
        statuses.set(list);
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let dto = MenuDto {
            id,
            name: name.get_untracked().trim().to_string(),
            status: status.get_untracked(),
            price: parse_amount(&price.get_untracked()),
            description: description.get_untracked().trim().to_string(),
            category_id: category_id.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        actions.submit::<Menu>(id, dto, is_saving, error, on_saved);
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Nom du menu"</Label>
                <Input value=name />
            </div>
            <div class="form-group">
                <Label>"Prix (Ar)"</Label>
                <Input value=price input_type=InputType::Number />
            </div>
            <div class="form-group">
                <Label>"Description"</Label>
                <Textarea value=description />
            </div>
            <div class="form-group">
                <Label>"Statut"</Label>
                <select
                    class="form-select"
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    {move || {
                        statuses
                            .get()
                            .into_iter()
                            .map(|code| {
                                let label = menu_status_label(&code);
                                let value = code.clone();
                                view! {
                                    <option value=value selected=move || status.get() == code>{label}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="form-group">
                <Label>"Catégorie"</Label>
                <IdSelect
                    options=Signal::derive(move || category_options.clone())
                    value=category_id
                    placeholder="Choisir une catégorie"
                />
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
