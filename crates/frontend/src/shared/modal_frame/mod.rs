use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay with a titled surface.
///
/// Closes on overlay click only when both press and release happened on
/// the overlay, so selecting text inside the dialog never closes it.
#[component]
pub fn ModalFrame(
    title: String,
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    /// CSS width of the surface; empty keeps the stylesheet default
    #[prop(optional, into)]
    width: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let on_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let surface_style = if width.is_empty() {
        "position: relative;".to_string()
    } else {
        format!("position: relative; width: {width}; max-width: 95vw;")
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=move |ev| pressed_on_overlay.set(on_overlay(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_untracked() && on_overlay(&ev);
                pressed_on_overlay.set(false);
                if close {
                    on_close.run(());
                }
            }
        >
            <div class="modal" style=surface_style on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="button button--ghost modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
