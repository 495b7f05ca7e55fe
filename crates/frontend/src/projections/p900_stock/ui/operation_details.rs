use crate::projections::p900_stock::api::fetch_operation_details;
use crate::shared::api::ApiClient;
use crate::shared::cancel::use_cancel_token;
use crate::shared::date_utils::format_datetime;
use contracts::projections::p902_operation_details::dto::OperationDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Summary of the operations of one stock entry, newest first
#[component]
pub fn OperationDetails(stock_id: i64, on_close: Callback<()>) -> impl IntoView {
    let (detail, set_detail) = signal::<Option<OperationDetail>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let cancel = use_cancel_token();
    let client = ApiClient::from_config();

    spawn_local(async move {
        let result = fetch_operation_details(&client, stock_id).await;
        if cancel.is_cancelled() {
            return;
        }
        match result {
            Ok(d) => set_detail.set(Some(d)),
            Err(e) => {
                log::warn!("operation details {}: {}", stock_id, e);
                set_error.set(Some(
                    "Erreur lors de la récupération des détails de l'opération.".to_string(),
                ));
            }
        }
    });

    view! {
        <div class="operation-details">
            {move || match (error.get(), detail.get()) {
                (Some(e), _) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                (None, None) => view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Chargement des détails..."</span>
                    </Flex>
                }.into_any(),
                (None, Some(d)) => view! {
                    <p>
                        <strong>"Nom de l'Ingrédient: "</strong>
                        {d.ingredient_name.clone()}
                    </p>
                    <h4 class="operation-details__subtitle">"Liste des opérations résumées :"</h4>
                    <ul class="operation-details__list">
                        {d.sorted_operations().into_iter().map(|op| view! {
                            <li class="operation-details__item">
                                <p><strong>"Type: "</strong>{op.kind}</p>
                                <p><strong>"Date: "</strong>{format_datetime(&op.date)}</p>
                                <p><strong>"Description: "</strong>{op.description}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Fermer"
                </Button>
            </div>
        </div>
    }
}
