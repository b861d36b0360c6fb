//! Submit Report - View Model
//!
//! All form state lives here; the view only reads signals and forwards
//! events. Network calls run in `spawn_local` and write back through the
//! selector tickets, so a late response never lands on a newer selection.

use std::time::Duration;

use contracts::domain::a001_city::aggregate::City;
use contracts::domain::a002_object::aggregate::Object;
use contracts::domain::a003_violation_category::aggregate::ViolationCategory;
use contracts::domain::a004_violation::aggregate::Violation;
use contracts::domain::a005_form_submission::fields::ReportDraft;
use contracts::domain::common::ReferenceRecord;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::model::{attachment_meta, selected_files, submit_report};
use super::outcome::SubmissionOutcome;
use super::validation::{validate_attachments, validate_required, FieldErrors};
use crate::domain::reference::api::fetch_reference;
use crate::domain::reference::{CascadePair, LoadOutcome, ReferenceSpec};
use crate::shared::config::AppConfig;
use crate::shared::notice::{NoticeBoard, NoticeKind};
use crate::shared::telegram;
use crate::system::access::api::check_access;
use crate::system::access::gate::{decide_from_check, decide_without_token};
use crate::system::access::{AccessDecision, AccessPhase};

#[derive(Clone, Copy)]
pub struct ReportFormVm {
    pub config: StoredValue<AppConfig>,
    init_data: StoredValue<Option<String>>,
    pub access: RwSignal<AccessPhase>,
    /// Город → объект
    pub locations: RwSignal<CascadePair>,
    /// Категория → нарушение
    pub violations: RwSignal<CascadePair>,
    pub comment: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
    pub file_error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
    pub notices: RwSignal<NoticeBoard>,
    pub notice_ref: NodeRef<html::Div>,
    pub file_input: NodeRef<html::Input>,
    hide_timer: StoredValue<Option<TimeoutHandle>>,
}

impl ReportFormVm {
    pub fn new(config: AppConfig, init_data: Option<String>) -> Self {
        Self {
            config: StoredValue::new(config),
            init_data: StoredValue::new(init_data),
            access: RwSignal::new(AccessPhase::Checking),
            locations: RwSignal::new(CascadePair::city_object()),
            violations: RwSignal::new(CascadePair::category_violation()),
            comment: RwSignal::new(String::new()),
            field_errors: RwSignal::new(FieldErrors::default()),
            file_error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
            notices: RwSignal::new(NoticeBoard::new()),
            notice_ref: NodeRef::new(),
            file_input: NodeRef::new(),
            hide_timer: StoredValue::new(None),
        }
    }

    fn base_path(&self) -> String {
        self.config.with_value(|c| c.api.base_path.clone())
    }

    pub fn is_allowed(&self) -> bool {
        self.access.get() == AccessPhase::Allowed
    }

    // ========================================================================
    // Access gate
    // ========================================================================

    /// Check access, then load the independent lists. Nothing is fetched
    /// before the gate opens.
    pub fn start(&self) {
        let vm = *self;
        spawn_local(async move {
            let access_config = vm.config.with_value(|c| c.access.clone());

            let decision = match vm.init_data.get_value() {
                Some(token) => {
                    let result = check_access(&vm.base_path(), &token).await;
                    if let Err(e) = &result {
                        log::error!("Error checking user access: {}", e);
                    }
                    decide_from_check(&access_config, result)
                }
                None => {
                    log::warn!("Telegram initData is missing");
                    decide_without_token(&access_config)
                }
            };

            match decision {
                AccessDecision::Allowed => {
                    log::info!("Access granted (user {:?})", telegram::viewer_id());
                    vm.access.set(AccessPhase::Allowed);
                    vm.load_parent::<City>(vm.locations);
                    vm.load_parent::<ViolationCategory>(vm.violations);
                }
                AccessDecision::Denied(reason) => {
                    log::warn!("Access denied (user {:?}): {:?}", telegram::viewer_id(), reason);
                    vm.access.set(AccessPhase::Denied);
                    vm.show_notice(NoticeKind::Error, reason.message());

                    TimeoutFuture::new(access_config.close_delay_ms).await;
                    telegram::close();
                }
            }
        });
    }

    // ========================================================================
    // Reference loading
    // ========================================================================

    fn load_parent<T>(&self, pair: RwSignal<CascadePair>)
    where
        T: DeserializeOwned + ReferenceRecord + 'static,
    {
        let mut started = None;
        pair.update(|p| started = Some((p.begin_parent_load(), p.parent.spec())));
        let Some((ticket, spec)) = started else {
            return;
        };

        let vm = *self;
        let base_path = self.base_path();
        spawn_local(async move {
            let result = fetch_reference::<T>(&base_path, spec, None).await;
            if let Err(e) = &result {
                log::error!("Error loading {}: {}", spec.key, e);
            }

            let mut outcome = LoadOutcome::Stale;
            pair.update(|p| outcome = p.parent.apply(ticket, result));
            vm.report_load(spec, outcome);
        });
    }

    fn change_parent<T>(&self, pair: RwSignal<CascadePair>, value: String)
    where
        T: DeserializeOwned + ReferenceRecord + 'static,
    {
        let mut started = None;
        pair.update(|p| {
            started = p
                .select_parent(&value)
                .map(|load| (load, p.dependent.spec()))
        });
        let Some((load, spec)) = started else {
            return;
        };

        let vm = *self;
        let base_path = self.base_path();
        spawn_local(async move {
            let result = fetch_reference::<T>(&base_path, spec, Some(&load.parent_id)).await;
            if let Err(e) = &result {
                log::error!("Error loading {} for {}: {}", spec.key, load.parent_id, e);
            }

            let mut outcome = LoadOutcome::Stale;
            pair.update(|p| outcome = p.dependent.apply(load.ticket, result));
            vm.report_load(spec, outcome);
        });
    }

    fn report_load(&self, spec: &ReferenceSpec, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Stale => log::debug!("Discarding stale {} response", spec.key),
            LoadOutcome::Ready { count } => log::debug!("Loaded {} {}", count, spec.key),
            LoadOutcome::Empty => log::info!("No {} available", spec.key),
            LoadOutcome::Failed { notice } => self.show_notice(NoticeKind::Error, notice),
        }
    }

    pub fn on_city_change(&self, value: String) {
        self.change_parent::<Object>(self.locations, value);
    }

    pub fn on_object_change(&self, value: String) {
        self.locations.update(|p| {
            p.dependent.select(&value);
        });
    }

    pub fn on_category_change(&self, value: String) {
        self.change_parent::<Violation>(self.violations, value);
    }

    pub fn on_violation_change(&self, value: String) {
        self.violations.update(|p| {
            p.dependent.select(&value);
        });
    }

    // ========================================================================
    // Attachments
    // ========================================================================

    /// Validate the new file selection; on violation the input is cleared.
    pub fn on_files_changed(&self) {
        let Some(input) = self.file_input.get_untracked() else {
            return;
        };
        self.file_error.set(None);

        let files = attachment_meta(&selected_files(&input));
        let checked = self
            .config
            .with_value(|c| validate_attachments(&files, &c.attachments));

        if let Err(e) = checked {
            log::warn!("Attachments rejected: {}", e);
            self.file_error.set(Some(e.to_string()));
            input.set_value("");
        }
    }

    // ========================================================================
    // Submission
    // ========================================================================

    fn draft(&self) -> ReportDraft {
        let (city_id, object_id) = self.locations.with_untracked(|p| {
            (p.parent.selected().to_string(), p.dependent.selected().to_string())
        });
        let (violation_category_id, violation_id) = self.violations.with_untracked(|p| {
            (p.parent.selected().to_string(), p.dependent.selected().to_string())
        });

        ReportDraft {
            city_id,
            object_id,
            violation_category_id,
            violation_id,
            comment: self.comment.get_untracked(),
        }
    }

    pub fn submit(&self) {
        if self.is_submitting.get_untracked() || self.access.get_untracked() != AccessPhase::Allowed {
            return;
        }

        // все inline-ошибки сбрасываются перед повторной проверкой
        self.file_error.set(None);
        let draft = self.draft();
        match validate_required(&draft) {
            Ok(()) => self.field_errors.set(FieldErrors::default()),
            Err(errors) => {
                self.field_errors.set(errors);
                return;
            }
        }

        let files = self
            .file_input
            .get_untracked()
            .map(|input| selected_files(&input))
            .unwrap_or_default();

        self.is_submitting.set(true);

        let vm = *self;
        let base_path = self.base_path();
        let init_data = self.init_data.get_value();
        spawn_local(async move {
            log::info!("Submitting report with {} file(s)", files.len());
            let result = submit_report(&base_path, init_data.as_deref(), &draft, &files).await;
            if let Err(e) = &result {
                log::error!("Error submitting form: {}", e);
            }

            let outcome = SubmissionOutcome::from_result(result);
            if outcome.is_accepted() {
                vm.reset_form();
            }
            let (kind, text) = outcome.notice();
            vm.show_notice(kind, text);
            telegram::notify(outcome.haptic());

            vm.is_submitting.set(false);
        });
    }

    /// After a successful submission: all selections, the comment, the files
    /// and inline errors are cleared; the lists stay loaded.
    fn reset_form(&self) {
        self.locations.update(CascadePair::reset);
        self.violations.update(CascadePair::reset);
        self.comment.set(String::new());
        self.field_errors.set(FieldErrors::default());
        self.file_error.set(None);
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    // ========================================================================
    // Notices
    // ========================================================================

    /// Show a notice, scroll it into view and schedule auto-hide. A pending
    /// hide timer from an older notice is cancelled.
    pub fn show_notice(&self, kind: NoticeKind, text: impl Into<String>) {
        let mut ticket = None;
        self.notices.update(|b| ticket = Some(b.show(kind, text)));
        let Some(ticket) = ticket else {
            return;
        };

        if let Some(handle) = self.hide_timer.get_value() {
            handle.clear();
        }

        let notices = self.notices;
        let delay = self.config.with_value(|c| c.notice.auto_hide_ms);
        match set_timeout_with_handle(
            move || {
                notices.update(|b| {
                    b.expire(ticket);
                });
            },
            Duration::from_millis(u64::from(delay)),
        ) {
            Ok(handle) => self.hide_timer.set_value(Some(handle)),
            Err(e) => log::warn!("Failed to schedule notice hide: {:?}", e),
        }

        let notice_ref = self.notice_ref;
        request_animation_frame(move || {
            if let Some(el) = notice_ref.get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}
