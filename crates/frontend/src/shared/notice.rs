//! Notice board: the single user-visible success/error message.
//!
//! A new notice replaces the current one. Every notice gets a ticket; the
//! auto-hide timer carries it, and an expiring ticket that is no longer the
//! latest one leaves the newer notice alone.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier: `message success` / `message error`
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> NoticeTicket {
        self.generation += 1;
        self.current = Some(Notice {
            kind,
            text: text.into(),
        });
        NoticeTicket(self.generation)
    }

    /// Hide the notice if `ticket` still belongs to it. Returns whether
    /// anything was hidden.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut board = NoticeBoard::new();
        board.show(NoticeKind::Error, "Ошибка загрузки городов");
        board.show(NoticeKind::Success, "Данные успешно отправлены!");

        let notice = board.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Данные успешно отправлены!");
    }

    #[test]
    fn test_own_ticket_hides() {
        let mut board = NoticeBoard::new();
        let ticket = board.show(NoticeKind::Error, "Ошибка");
        assert!(board.expire(ticket));
        assert!(board.current().is_none());
        // second expiry is a no-op
        assert!(!board.expire(ticket));
    }

    #[test]
    fn test_stale_ticket_keeps_newer_notice() {
        let mut board = NoticeBoard::new();
        let first = board.show(NoticeKind::Error, "Ошибка загрузки объектов");
        let second = board.show(NoticeKind::Error, "Ошибка загрузки нарушений");

        assert!(!board.expire(first));
        assert_eq!(board.current().unwrap().text, "Ошибка загрузки нарушений");

        assert!(board.expire(second));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(NoticeKind::Success.css_class(), "success");
        assert_eq!(NoticeKind::Error.css_class(), "error");
    }
}
