use leptos::html;
use leptos::prelude::*;
use thaw::*;

use crate::shared::notice::{NoticeBoard, NoticeKind};

/// Current notice from the board; nothing is rendered while it is empty.
#[component]
pub fn NoticeBanner(
    notices: RwSignal<NoticeBoard>,
    /// Целевой элемент для прокрутки к уведомлению
    node_ref: NodeRef<html::Div>,
) -> impl IntoView {
    let notice = move || notices.with(|b| b.current().cloned());

    view! {
        <div id="message" class="notice" node_ref=node_ref>
            {move || notice().map(|n| {
                let intent = match n.kind {
                    NoticeKind::Success => MessageBarIntent::Success,
                    NoticeKind::Error => MessageBarIntent::Error,
                };
                view! {
                    <div class=format!("message {}", n.kind.css_class())>
                        <MessageBar intent=intent>
                            <span>{n.text}</span>
                        </MessageBar>
                    </div>
                }
            })}
        </div>
    }
}
