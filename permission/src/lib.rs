//! Camera and microphone runtime permissions.
//!
//! This crate provides a unified API for checking and requesting capture
//! permissions across iOS, macOS, Android, Windows, and Linux platforms.
//!
//! Two shapes are offered. [`check`] and [`request`] are the direct
//! functions; [`PermissionBackend`] is the callback-shaped seam used by
//! consumers that deliver OS results as messages (see `grantkit-status-view`).

#![warn(missing_docs)]

use std::fmt;

use futures::channel::oneshot;
use log::debug;

/// Platform-specific implementations.
pub mod sys;

/// Types of permissions that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Access to device camera.
    Camera,
    /// Access to device microphone.
    Microphone,
}

impl Permission {
    /// Every permission this crate knows about, in display order.
    pub const ALL: [Self; 2] = [Self::Camera, Self::Microphone];
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Camera => f.write_str("camera"),
            Self::Microphone => f.write_str("microphone"),
        }
    }
}

/// The current status of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionStatus {
    /// Permission has been granted by the user.
    Granted,
    /// Permission has been denied by the user.
    Denied,
    /// Permission is restricted (e.g., parental controls on iOS).
    Restricted,
    /// Permission has not been requested yet.
    NotDetermined,
}

impl PermissionStatus {
    /// Whether the OS currently authorizes access.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Maps a boolean prompt outcome to a status.
    #[must_use]
    pub const fn from_granted(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}

/// Errors that can occur when requesting permissions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PermissionError {
    /// The permission type is not supported on this platform.
    #[error("permission not supported on this platform")]
    NotSupported,
    /// The platform layer has not been given its host context yet.
    #[error("permission backend not initialized")]
    NotInitialized,
    /// The platform dropped the request without answering.
    #[error("permission request was dropped before completing")]
    ReplyDropped,
    /// An error reported by the underlying platform API.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Outcome of a permission prompt.
pub type PermissionResult = Result<PermissionStatus, PermissionError>;

/// One-shot completion handed to a platform prompt.
///
/// The platform invokes it exactly once, possibly from a foreign thread,
/// when the user answers the prompt.
pub struct PermissionReply {
    callback: Box<dyn FnOnce(PermissionResult) + Send>,
}

impl PermissionReply {
    /// Wraps a completion callback.
    pub fn new(callback: impl FnOnce(PermissionResult) + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Delivers the outcome, consuming the reply.
    pub fn send(self, result: PermissionResult) {
        (self.callback)(result);
    }
}

impl fmt::Debug for PermissionReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionReply").finish_non_exhaustive()
    }
}

/// Host OS permission subsystem.
///
/// `status` is a synchronous query; `request` starts the OS prompt and
/// answers through the reply once the user responds.
pub trait PermissionBackend {
    /// Returns the current authorization status without prompting.
    fn status(&self, permission: Permission) -> PermissionStatus;

    /// Starts the OS prompt flow for `permission`.
    fn request(&self, permission: Permission, reply: PermissionReply);
}

impl<T: PermissionBackend + ?Sized> PermissionBackend for &T {
    fn status(&self, permission: Permission) -> PermissionStatus {
        (**self).status(permission)
    }

    fn request(&self, permission: Permission, reply: PermissionReply) {
        (**self).request(permission, reply);
    }
}

/// The platform's own permission subsystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPermissions;

impl PermissionBackend for SystemPermissions {
    fn status(&self, permission: Permission) -> PermissionStatus {
        sys::check(permission)
    }

    fn request(&self, permission: Permission, reply: PermissionReply) {
        debug!("prompting for {permission} permission");
        sys::request(permission, reply);
    }
}

/// Check the current status of a permission without requesting it.
#[must_use]
pub fn check(permission: Permission) -> PermissionStatus {
    sys::check(permission)
}

/// Request a permission from the user.
///
/// If the permission has already been granted, this returns the current
/// status without showing a prompt.
///
/// # Errors
/// Returns a `PermissionError` if:
/// - The permission type is not supported on this platform.
/// - The platform layer was not initialized with its host context.
/// - An underlying platform error occurs.
pub async fn request(permission: Permission) -> PermissionResult {
    let current = sys::check(permission);
    if current.is_granted() {
        return Ok(current);
    }

    let (sender, receiver) = oneshot::channel();
    sys::request(
        permission,
        PermissionReply::new(move |result| {
            let _ = sender.send(result);
        }),
    );
    receiver.await.map_err(|_| PermissionError::ReplyDropped)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn status_maps_prompt_outcome() {
        assert_eq!(PermissionStatus::from_granted(true), PermissionStatus::Granted);
        assert_eq!(PermissionStatus::from_granted(false), PermissionStatus::Denied);
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Restricted.is_granted());
        assert!(!PermissionStatus::NotDetermined.is_granted());
    }

    #[test]
    fn reply_delivers_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reply = PermissionReply::new(move |result| sink.lock().unwrap().push(result));
        reply.send(Ok(PermissionStatus::Granted));
        assert_eq!(*seen.lock().unwrap(), vec![Ok(PermissionStatus::Granted)]);
    }

    #[test]
    fn display_names() {
        assert_eq!(Permission::Camera.to_string(), "camera");
        assert_eq!(Permission::Microphone.to_string(), "microphone");
        assert_eq!(Permission::ALL, [Permission::Camera, Permission::Microphone]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PermissionError::Platform("boom".into()).to_string(),
            "platform error: boom"
        );
        assert_eq!(
            PermissionError::NotInitialized.to_string(),
            "permission backend not initialized"
        );
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn linux_grants_without_prompt() {
        for permission in Permission::ALL {
            assert_eq!(check(permission), PermissionStatus::Granted);
            assert_eq!(request(permission).await, Ok(PermissionStatus::Granted));
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn system_backend_answers_through_reply() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        SystemPermissions.request(
            Permission::Microphone,
            PermissionReply::new(move |result| *sink.lock().unwrap() = Some(result)),
        );
        assert_eq!(*seen.lock().unwrap(), Some(Ok(PermissionStatus::Granted)));
    }
}
