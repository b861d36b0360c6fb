use leptos::prelude::*;

/// Primary button
#[component]
pub fn Button(
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID for the button element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            id=move || id.get().unwrap_or_default()
            class="button button--primary"
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
