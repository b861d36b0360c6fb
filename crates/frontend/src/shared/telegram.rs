//! Bridge to `window.Telegram.WebApp`.
//!
//! Every call is best-effort: outside Telegram (plain browser, tests) the
//! host object is missing and the calls quietly do nothing.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Вид тактильного отклика `HapticFeedback.notificationOccurred`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticNotification {
    Success,
    Error,
}

impl HapticNotification {
    pub fn as_str(&self) -> &'static str {
        match self {
            HapticNotification::Success => "success",
            HapticNotification::Error => "error",
        }
    }
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> bool {
    let Some(func) = property(target, method).and_then(|m| m.dyn_into::<Function>().ok()) else {
        return false;
    };
    let result = match args {
        [] => func.call0(target),
        [a] => func.call1(target, a),
        [a, b, ..] => func.call2(target, a, b),
    };
    if let Err(e) = &result {
        log::warn!("Telegram.WebApp.{} failed: {:?}", method, e);
    }
    result.is_ok()
}

fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = property(&window, "Telegram")?;
    property(&telegram, "WebApp")
}

/// Пустая строка initData означает «открыто не из Telegram»
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Signal readiness and take the full viewport height
pub fn ready_and_expand() {
    let Some(app) = web_app() else {
        log::info!("Telegram.WebApp not found, running as a plain page");
        return;
    };
    call(&app, "ready", &[]);
    call(&app, "expand", &[]);
}

/// Raw `initData` string, the identity token forwarded to the API
pub fn init_data() -> Option<String> {
    non_blank(web_app().and_then(|app| property(&app, "initData")?.as_string()))
}

/// Viewer id from `initDataUnsafe.user.id`; only used as log context
pub fn viewer_id() -> Option<i64> {
    let app = web_app()?;
    let unsafe_data = property(&app, "initDataUnsafe")?;
    let user = property(&unsafe_data, "user")?;
    property(&user, "id")?.as_f64().map(|id| id as i64)
}

/// Host colour scheme: `"light"` or `"dark"`
pub fn color_scheme() -> Option<String> {
    web_app().and_then(|app| property(&app, "colorScheme")?.as_string())
}

pub fn close() {
    match web_app() {
        Some(app) => {
            call(&app, "close", &[]);
        }
        None => log::warn!("Telegram.WebApp.close unavailable"),
    }
}

pub fn notify(kind: HapticNotification) {
    let Some(haptic) = web_app().and_then(|app| property(&app, "HapticFeedback")) else {
        return;
    };
    call(
        &haptic,
        "notificationOccurred",
        &[JsValue::from_str(kind.as_str())],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haptic_names() {
        assert_eq!(HapticNotification::Success.as_str(), "success");
        assert_eq!(HapticNotification::Error.as_str(), "error");
    }

    #[test]
    fn test_blank_init_data_is_absent() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(
            non_blank(Some("query_id=AAH&hash=abc".into())),
            Some("query_id=AAH&hash=abc".to_string())
        );
    }
}
