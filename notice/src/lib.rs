//! Transient, non-blocking user notices.
//!
//! A notice is a short message that disappears on its own: a `Toast` on
//! Android, a desktop notification on Linux, Windows and macOS, and a log
//! line everywhere else.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Platform-specific implementations.
pub mod sys;

/// How long a notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeDuration {
    /// Roughly two seconds (`Toast.LENGTH_SHORT`).
    #[default]
    Short,
    /// Roughly three and a half seconds (`Toast.LENGTH_LONG`).
    Long,
}

impl NoticeDuration {
    /// Display time in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u32 {
        match self {
            Self::Short => 2_000,
            Self::Long => 3_500,
        }
    }
}

/// Errors that can occur when showing a notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoticeError {
    /// The platform layer has not been given its host context yet.
    #[error("notice backend not initialized")]
    NotInitialized,
    /// An error reported by the underlying platform API.
    #[error("platform error: {0}")]
    Platform(String),
}

/// A transient notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    duration: NoticeDuration,
}

impl Notice {
    /// Create a short notice with the given text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: NoticeDuration::Short,
        }
    }

    /// Set how long the notice stays visible.
    #[must_use]
    pub const fn duration(mut self, duration: NoticeDuration) -> Self {
        self.duration = duration;
        self
    }

    /// The notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How long the notice stays visible.
    #[must_use]
    pub const fn display_duration(&self) -> NoticeDuration {
        self.duration
    }

    /// Show the notice. Returns immediately; the platform dismisses it.
    ///
    /// # Errors
    /// Returns a `NoticeError` if the platform refuses to display it.
    pub fn show(&self) -> Result<(), NoticeError> {
        sys::show(self)
    }

    /// Show the notice using an explicit Android context.
    ///
    /// # Errors
    /// Returns a `NoticeError` if a JNI call fails.
    #[cfg(target_os = "android")]
    pub fn show_with_context(
        &self,
        env: &mut jni::JNIEnv,
        context: &jni::objects::JObject,
    ) -> Result<(), NoticeError> {
        sys::android::show_with_context(env, context, self)
    }
}

/// Something that can display notices.
pub trait NoticeSink {
    /// Display `notice`. Failures are the sink's own concern.
    fn show(&self, notice: &Notice);
}

impl<T: NoticeSink + ?Sized> NoticeSink for &T {
    fn show(&self, notice: &Notice) {
        (**self).show(notice);
    }
}

/// Shows notices through the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNotices;

impl NoticeSink for SystemNotices {
    fn show(&self, notice: &Notice) {
        if let Err(err) = notice.show() {
            log::warn!("failed to show notice {:?}: {err}", notice.message());
        }
    }
}
