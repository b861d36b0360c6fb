use leptos::prelude::*;

use crate::domain::reference::SelectOption;

/// Select with label and inline error line
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options; the first one is the placeholder with an empty value
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Disabled state (reactive)
    #[prop(into)]
    disabled: Signal<bool>,
    /// Inline error shown under the select
    #[prop(into)]
    error: Signal<Option<String>>,
    /// ID for the select element; the error line gets `<id>-error`
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=select_id
                class="form__select"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|opt| (opt.value.clone(), opt.label.clone())
                    children=move |opt| {
                        let val = opt.value.clone();
                        let is_selected = move || value.get() == val;
                        view! {
                            <option value=opt.value prop:selected=is_selected>
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
            <div class="error-message" id=move || format!("{}-error", select_id())>
                {move || error.get().unwrap_or_default()}
            </div>
        </div>
    }
}
