use super::api;
use crate::shared::api::{ApiClient, ApiError};
use crate::shared::cancel::use_cancel_token;
use crate::shared::toast::use_toast;
use contracts::usecases::u501_add_stock::request::AddStockRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Stock entry for one ingredient: quantity, unit cost, payment method
#[component]
pub fn AddStockForm(
    ingredient_id: String,
    ingredient_name: String,
    on_created: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let client = ApiClient::from_config();
    let toast = use_toast();
    let cancel = use_cancel_token();

    let quantity = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let method = RwSignal::new(String::new());
    let (methods, set_methods) = signal::<Vec<String>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    {
        let client = client.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = api::fetch_payment_methods(&client).await;
            if cancel.is_cancelled() {
                return;
            }
            match result {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        method.set(first.clone());
                    }
                    set_methods.set(list);
                }
                Err(e) => {
                    log::warn!("payment methods: {}", e);
                    toast.error("Échec du chargement des méthodes de paiement");
                }
            }
        });
    }

    let request = {
        let ingredient_id = ingredient_id.clone();
        move || {
            AddStockRequest::from_inputs(
                &ingredient_id,
                &quantity.get(),
                &cost.get(),
                &description.get(),
                &method.get(),
            )
        }
    };

    let total = {
        let request = request.clone();
        move || format!("{:.2}", request().total())
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        let req = request();
        if let Err(msg) = req.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        set_is_saving.set(true);
        let client = client.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = api::add_stock(&client, &req).await;
            if cancel.is_cancelled() {
                return;
            }
            set_is_saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("Stock ajouté avec succès !");
                    quantity.set(String::new());
                    cost.set(String::new());
                    description.set(String::new());
                    on_created.run(());
                }
                Err(e) => toast.error(add_stock_error_message(&e)),
            }
        });
    };

    view! {
        <div class="details-container add-stock">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <Label>"Ingrédient"</Label>
                    <input type="text" class="form-control" readonly=true prop:value=ingredient_name />
                </div>

                <div class="form-group">
                    <Label>"Forme de paiement"</Label>
                    <select
                        class="form-control"
                        prop:value=move || method.get()
                        on:change=move |ev| method.set(event_target_value(&ev))
                    >
                        {move || methods.get().into_iter().map(|m| {
                            let value = m.clone();
                            view! { <option value=value>{m}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <Label>"Quantité"</Label>
                    <Input value=quantity placeholder="0" />
                </div>

                <div class="form-group">
                    <Label>"Coût unitaire"</Label>
                    <Input value=cost placeholder="0" />
                </div>

                <div class="form-group">
                    <Label>"Description"</Label>
                    <Textarea value=description placeholder="Description (facultatif)" />
                </div>

                <p class="add-stock__total">
                    <strong>"Total: "</strong>
                    {total}
                    " Ar"
                </p>
            </div>

            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Annuler"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=Signal::derive(move || is_saving.get())
                >
                    "Ajouter"
                </Button>
            </Flex>
        </div>
    }
}

/// Backend message when present, a generic text otherwise
fn add_stock_error_message(e: &ApiError) -> String {
    match e {
        ApiError::Status { body, .. } => serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| "Fonds insuffisants pour ce retrait.".to_string()),
        _ => "Erreur lors de l'ajout du stock.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let e = ApiError::Status {
            status: 400,
            body: r#"{"message": "Stock insuffisant"}"#.into(),
        };
        assert_eq!(add_stock_error_message(&e), "Stock insuffisant");

        let e = ApiError::Status {
            status: 400,
            body: "oops".into(),
        };
        assert_eq!(add_stock_error_message(&e), "Fonds insuffisants pour ce retrait.");

        assert_eq!(
            add_stock_error_message(&ApiError::Network("x".into())),
            "Erreur lors de l'ajout du stock."
        );
    }
}
