//! # Grantkit
//!
//! Camera and microphone runtime permissions, with a small status view that
//! shows whether each one is granted and asks the OS for the missing ones.
//!
//! ## Features
//!
//! - `permission`: status query and prompt flow for camera and microphone on
//!   Android, iOS, macOS, Windows and Linux.
//! - `notice`: transient notices (Android toasts, desktop notifications).
//! - `status-view` (default): the permission status view and its session
//!   loop. Enables the two features above.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! grantkit = { version = "0.1", features = ["permission"] }
//! ```
//!
//! ```rust,no_run
//! use grantkit::permission::{self, Permission, PermissionStatus};
//!
//! async fn ensure_camera() -> bool {
//!     matches!(
//!         permission::request(Permission::Camera).await,
//!         Ok(PermissionStatus::Granted)
//!     )
//! }
//! ```

#[cfg(feature = "notice")]
pub use grantkit_notice as notice;

#[cfg(feature = "permission")]
pub use grantkit_permission as permission;

#[cfg(feature = "status-view")]
pub use grantkit_status_view as status_view;
