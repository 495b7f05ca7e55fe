use leptos::prelude::*;

/// Header of a list page: title on the left, actions on the right
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="header__subtitle">{s}</div>
                })}
            </div>
            <div class="header__actions">
                {children()}
            </div>
        </div>
    }
}

/// Inline error box; renders nothing for `None`
#[component]
pub fn ErrorBox(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            }
        })
    }
}
