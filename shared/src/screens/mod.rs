//! Screen state for the admin pages, kept free of any UI framework so the
//! create/list flows can be exercised without a browser.
//!
//! Each screen is a plain state value changed only through its `apply`
//! method. Async work (`load_*`, `save_course`, `submit_webinar`) never holds
//! the state across an await; it reports outcomes as events, so whatever the
//! user did in the meantime is kept.
//!
//! Both screens follow the same policy: a write is followed by a full reload
//! of the collection, and every read or write failure is logged and surfaced
//! as a [`Notice`].

pub mod course_list;
pub mod webinar_scheduler;

pub use course_list::{CourseList, CourseListEvent};
pub use webinar_scheduler::{FormEdit, SubmitPhase, WebinarEvent, WebinarForm, WebinarScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// Notice for a failed reload. A success notice still showing is kept
    /// and extended, since the write it reports went through.
    pub(crate) fn load_failed(current: Option<Notice>, message: &str) -> Self {
        match current {
            Some(notice) if !notice.is_error() => {
                Self::success(format!("{} {}", notice.message, message))
            }
            _ => Self::error(message),
        }
    }
}
