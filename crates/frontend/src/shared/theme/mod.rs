//! Theme management module for the application.
//!
//! The Mini App follows the colour scheme of the Telegram client; outside
//! Telegram the light theme is used.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::telegram;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for the `data-theme` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Map `Telegram.WebApp.colorScheme` to a theme.
    pub fn from_color_scheme(scheme: &str) -> Self {
        match scheme.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Set `data-theme` on `<html>` and `<body>` for styling hooks.
fn apply_theme(theme: Theme) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Applies the host theme before rendering children.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = telegram::color_scheme()
        .map(|scheme| Theme::from_color_scheme(&scheme))
        .unwrap_or_default();
    apply_theme(initial_theme);

    children()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_color_scheme() {
        assert_eq!(Theme::from_color_scheme("dark"), Theme::Dark);
        assert_eq!(Theme::from_color_scheme("light"), Theme::Light);
        assert_eq!(Theme::from_color_scheme("sepia"), Theme::Light);
        assert_eq!(Theme::default().as_str(), "light");
    }
}
