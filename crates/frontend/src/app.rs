use crate::shared::config::load_config;
use crate::shared::telegram;
use crate::shared::theme::ThemeProvider;
use crate::usecases::u501_submit_report::ReportForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сообщить Telegram, что приложение готово, и развернуть на весь экран
    telegram::ready_and_expand();

    let config = load_config();
    log::debug!("API base path: {}", config.api.base_path);

    view! {
        <ThemeProvider>
            <main class="app">
                <h1 class="app__title">"Сообщить о нарушении"</h1>
                <ReportForm config=config />
            </main>
        </ThemeProvider>
    }
}
