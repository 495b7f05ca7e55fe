use leptos::prelude::*;

/// Two `datetime-local` inputs; values are `YYYY-MM-DDTHH:mm` or empty
#[component]
pub fn DateRangePicker(
    #[prop(into)] start: Signal<String>,
    #[prop(into)] end: Signal<String>,
    /// Called with `(start, end)` whenever either side changes
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="date-range">
            <input
                type="datetime-local"
                class="date-range__input"
                title="Début"
                prop:value=move || start.get()
                on:change=move |ev| on_change.run((event_target_value(&ev), end.get_untracked()))
            />
            <span class="date-range__sep">"→"</span>
            <input
                type="datetime-local"
                class="date-range__input"
                title="Fin"
                prop:value=move || end.get()
                on:change=move |ev| on_change.run((start.get_untracked(), event_target_value(&ev)))
            />
        </div>
    }
}
