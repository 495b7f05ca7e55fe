use leptos::prelude::*;

/// Parses a `<select>` value back to an id; the placeholder option yields `None`.
pub fn parse_option_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Select bound to an optional numeric id
#[component]
pub fn IdSelect(
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    value: RwSignal<Option<i64>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            on:change=move |ev| value.set(parse_option_id(&event_target_value(&ev)))
        >
            <option value="" selected=move || value.get().is_none()>{placeholder}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(id, label)| {
                        view! {
                            <option value=id.to_string() selected=move || value.get() == Some(id)>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_id() {
        assert_eq!(parse_option_id("12"), Some(12));
        assert_eq!(parse_option_id(""), None);
        assert_eq!(parse_option_id("abc"), None);
    }
}
