//! Notifications
//!
//! Queue of transient toasts shown after mutations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u32,
}

impl Notices {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, message: message.into() });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u32 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u32 {
        self.push(NoticeKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::default();
        let first = notices.success("Task created");
        let second = notices.error("Task not found");
        assert_ne!(first, second);
        assert_eq!(notices.items().len(), 2);

        notices.dismiss(first);
        assert_eq!(notices.items().len(), 1);
        assert_eq!(notices.items()[0].kind, NoticeKind::Error);

        notices.dismiss(42);
        assert_eq!(notices.items().len(), 1);
    }
}
