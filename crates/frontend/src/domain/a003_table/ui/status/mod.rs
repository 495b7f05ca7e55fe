//! Status change dialog for one table

use crate::shared::api::ApiClient;
use crate::shared::components::page_header::ErrorBox;
use crate::shared::toast::use_toast;
use contracts::domain::a003_table::aggregate::{DiningTable, TableStatusUpdate, TABLE_STATUS_PATH};
use contracts::enums::table_status::table_status_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn TableStatusForm(
    table: DiningTable,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let client = StoredValue::new(ApiClient::from_config());
    let toast = use_toast();
    let statuses = RwSignal::new(Vec::<String>::new());
    let selected = RwSignal::new(table.status.clone());
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);
    let table_id = table.id;
    let table_number = table.number;

    spawn_local(async move {
        match client.get_value().get_json::<Vec<String>>(TABLE_STATUS_PATH).await {
            Ok(list) => statuses.set(list),
            Err(e) => error.set(Some(format!("Statuts indisponibles: {}", e))),
        }
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let update = TableStatusUpdate {
            id: table_id,
            status: selected.get_untracked(),
        };
        is_saving.set(true);
        spawn_local(async move {
            let result = client.get_value().put_unit(TABLE_STATUS_PATH, &update).await;
            is_saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(format!(
                        "Table n°{} : {}",
                        table_number,
                        table_status_label(&update.status)
                    ));
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-form">
            <ErrorBox error=error />
            <div class="form-group">
                <Label>"Statut"</Label>
                <select
                    class="form-select"
                    prop:value=move || selected.get()
                    on:change=move |ev| selected.set(event_target_value(&ev))
                >
                    <For
                        each=move || statuses.get()
                        key=|code| code.clone()
                        children=move |code| {
                            let label = table_status_label(&code);
                            let value = code.clone();
                            view! { <option value=value selected=move || selected.get() == code>{label}</option> }
                        }
                    />
                </select>
            </div>
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Annuler"
                </Button>
                <Button appearance=ButtonAppearance::Primary disabled=is_saving on_click=save>
                    "Valider"
                </Button>
            </Flex>
        </div>
    }
}
