use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Asks for confirmation in a modal; `on_confirm` runs only on "Oui".
pub fn confirm(
    modal_stack: ModalStackService,
    title: &str,
    message: String,
    on_confirm: impl Fn() + Send + Sync + 'static,
) {
    let on_confirm = Arc::new(on_confirm);
    modal_stack.push(title.to_string(), move |handle| {
        let close_yes = handle.clone();
        let close_no = handle.clone();
        let on_confirm = on_confirm.clone();
        let message = message.clone();
        view! {
            <div class="confirm-dialog">
                <p class="confirm-dialog__message">{message}</p>
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| close_no.close()
                    >
                        "Non"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            close_yes.close();
                            on_confirm();
                        }
                    >
                        "Oui"
                    </Button>
                </Flex>
            </div>
        }
        .into_any()
    });
}
