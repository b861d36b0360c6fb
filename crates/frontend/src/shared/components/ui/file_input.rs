use leptos::html;
use leptos::prelude::*;

/// Multi-file input. Files stay in the DOM element; the owner reads them
/// through `node_ref`.
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Comma-separated extensions for the picker
    #[prop(into)]
    accept: String,
    node_ref: NodeRef<html::Input>,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Fired after the selection changed
    on_change: Callback<()>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                type="file"
                id=input_id
                name="file"
                class="form__file"
                multiple
                accept=accept
                node_ref=node_ref
                disabled=move || disabled.get()
                on:change=move |_| on_change.run(())
            />
            <div class="error-message" id=move || format!("{}-error", input_id())>
                {move || error.get().unwrap_or_default()}
            </div>
        </div>
    }
}
