//! Submit Report - View Component

use leptos::prelude::*;
use thaw::*;

use super::validation::FormField;
use super::view_model::ReportFormVm;
use crate::domain::reference::CascadePair;
use crate::shared::components::ui::{Button, FileInput, Select, Textarea};
use crate::shared::components::NoticeBanner;
use crate::shared::config::AppConfig;
use crate::shared::telegram;
use crate::system::access::AccessPhase;

#[component]
#[allow(non_snake_case)]
pub fn ReportForm(config: AppConfig) -> impl IntoView {
    let accept = config.attachments.accept.clone();
    let vm = ReportFormVm::new(config, telegram::init_data());

    // Проверка доступа и загрузка справочников
    Effect::new(move |_| vm.start());

    let locked = Signal::derive(move || !vm.is_allowed());
    let field_error = move |field: FormField| {
        Signal::derive(move || vm.field_errors.with(|e| e.get(field).map(str::to_string)))
    };

    let parent_select = move |pair: RwSignal<CascadePair>| {
        (
            Signal::derive(move || pair.with(|p| p.parent.selected().to_string())),
            Signal::derive(move || pair.with(|p| p.parent.options())),
            Signal::derive(move || !vm.is_allowed() || !pair.with(|p| p.parent.is_enabled())),
        )
    };
    let dependent_select = move |pair: RwSignal<CascadePair>| {
        (
            Signal::derive(move || pair.with(|p| p.dependent.selected().to_string())),
            Signal::derive(move || pair.with(|p| p.dependent.options())),
            Signal::derive(move || !vm.is_allowed() || !pair.with(|p| p.dependent.is_enabled())),
        )
    };

    let (city_value, city_options, city_disabled) = parent_select(vm.locations);
    let (object_value, object_options, object_disabled) = dependent_select(vm.locations);
    let (category_value, category_options, category_disabled) = parent_select(vm.violations);
    let (violation_value, violation_options, violation_disabled) =
        dependent_select(vm.violations);

    view! {
        <div class="report-form">
            <NoticeBanner notices=vm.notices node_ref=vm.notice_ref />

            <Show when=move || vm.access.get() == AccessPhase::Checking>
                <div class="report-form__status">
                    <Spinner size=SpinnerSize::Small />
                    <span>"Проверка доступа..."</span>
                </div>
            </Show>

            <form
                id="dataForm"
                class="report-form__body"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <Select
                    id=FormField::City.dom_id()
                    label="Город"
                    value=city_value
                    options=city_options
                    disabled=city_disabled
                    error=field_error(FormField::City)
                    on_change=Callback::new(move |v: String| vm.on_city_change(v))
                />
                <Select
                    id=FormField::Object.dom_id()
                    label="Объект"
                    value=object_value
                    options=object_options
                    disabled=object_disabled
                    error=field_error(FormField::Object)
                    on_change=Callback::new(move |v: String| vm.on_object_change(v))
                />
                <Select
                    id=FormField::ViolationCategory.dom_id()
                    label="Категория нарушения"
                    value=category_value
                    options=category_options
                    disabled=category_disabled
                    error=field_error(FormField::ViolationCategory)
                    on_change=Callback::new(move |v: String| vm.on_category_change(v))
                />
                <Select
                    id=FormField::Violation.dom_id()
                    label="Нарушение"
                    value=violation_value
                    options=violation_options
                    disabled=violation_disabled
                    error=field_error(FormField::Violation)
                    on_change=Callback::new(move |v: String| vm.on_violation_change(v))
                />

                <Textarea
                    id="comment"
                    label="Комментарий"
                    placeholder="Опишите нарушение"
                    rows=4
                    value=vm.comment
                    disabled=locked
                    on_input=Callback::new(move |v: String| vm.comment.set(v))
                />

                <FileInput
                    id="file"
                    label="Файлы (не более 5, до 50 МБ каждый)"
                    accept=accept
                    node_ref=vm.file_input
                    disabled=locked
                    error=vm.file_error
                    on_change=Callback::new(move |_| vm.on_files_changed())
                />

                <Button
                    id="submitBtn"
                    button_type="submit"
                    disabled=Signal::derive(move || !vm.is_allowed() || vm.is_submitting.get())
                >
                    {move || if vm.is_submitting.get() {
                        view! {
                            <span id="submitLoader" class="button__loader">
                                <Spinner size=SpinnerSize::Small />
                            </span>
                        }.into_any()
                    } else {
                        view! { <span id="submitText">"Отправить"</span> }.into_any()
                    }}
                </Button>
            </form>
        </div>
    }
}
