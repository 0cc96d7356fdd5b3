//! Camera and microphone permission status view.
//!
//! The view keeps one grant flag per permission, renders a label and a
//! button for each, and asks the OS for a permission when its button is
//! pressed while not granted. OS answers come back as messages to the same
//! update function that handles button presses.
//!
//! ```no_run
//! use grantkit_notice::SystemNotices;
//! use grantkit_permission::{Permission, SystemPermissions};
//! use grantkit_status_view::{Screen, Session, ViewConfig};
//!
//! # async fn demo() {
//! let mut session = Session::new(
//!     SystemPermissions,
//!     SystemNotices,
//!     |screen: &Screen| println!("{screen}"),
//!     ViewConfig::for_language("es"),
//! );
//! let handle = session.handle();
//! handle.press(Permission::Camera);
//! handle.close();
//! session.run().await;
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod session;
mod view;

pub use config::{ConfigError, PermissionStrings, Strings, ViewConfig};
pub use session::{Renderer, Session, SessionHandle};
pub use view::{Effect, Message, PermissionState, PermissionStatusView, Row, Screen, Update};

pub use grantkit_notice::{Notice, NoticeDuration, NoticeSink};
pub use grantkit_permission::{Permission, PermissionBackend, PermissionStatus};
