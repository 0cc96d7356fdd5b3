//! The permission status view: two grant cells, one update function, one
//! render function.

use std::fmt;

use grantkit_notice::Notice;
use grantkit_permission::{Permission, PermissionBackend};
use log::{debug, info};

use crate::config::ViewConfig;

/// Grant state of one tracked permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionState {
    /// Which permission this cell tracks.
    pub permission: Permission,
    /// Whether the OS authorizes access.
    pub granted: bool,
}

/// Input of [`PermissionStatusView::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user pressed the button for a permission.
    Pressed(Permission),
    /// The OS answered a prompt.
    Resolved {
        /// Permission the prompt was for.
        permission: Permission,
        /// Whether the user granted it.
        granted: bool,
    },
}

/// Side effect requested by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Launch the OS permission prompt.
    Prompt(Permission),
    /// Show a transient notice.
    Notify(Notice),
}

/// Result of one [`PermissionStatusView::update`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Update {
    /// What the host should do next, if anything.
    pub effect: Option<Effect>,
    /// A state cell was written; the view must be re-rendered.
    pub dirty: bool,
}

/// One label and button pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Permission the row shows.
    pub permission: Permission,
    /// Current grant state.
    pub granted: bool,
    /// Status label, e.g. `"Camera permission: NO"`.
    pub label: String,
    /// Button caption.
    pub button: String,
}

/// Render output: the camera row followed by the microphone row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Rows in display order.
    pub rows: [Row; 2],
}

impl Screen {
    /// The row for `permission`.
    #[must_use]
    pub const fn row(&self, permission: Permission) -> &Row {
        match permission {
            Permission::Camera => &self.rows[0],
            Permission::Microphone => &self.rows[1],
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", row.label)?;
            write!(f, "[ {} ]", row.button)?;
        }
        Ok(())
    }
}

/// Shows whether camera and microphone access is granted and asks the OS
/// for whichever is missing.
#[derive(Debug, Clone)]
pub struct PermissionStatusView {
    camera: PermissionState,
    microphone: PermissionState,
    config: ViewConfig,
}

impl PermissionStatusView {
    /// Create the view from the OS's current authorization status.
    pub fn initialize<B: PermissionBackend + ?Sized>(backend: &B, config: ViewConfig) -> Self {
        let read = |permission| {
            let status = backend.status(permission);
            debug!("initial {permission} status: {status:?}");
            PermissionState {
                permission,
                granted: status.is_granted(),
            }
        };

        Self {
            camera: read(Permission::Camera),
            microphone: read(Permission::Microphone),
            config,
        }
    }

    /// Grant state of `permission`.
    #[must_use]
    pub const fn state(&self, permission: Permission) -> PermissionState {
        match permission {
            Permission::Camera => self.camera,
            Permission::Microphone => self.microphone,
        }
    }

    /// Whether `permission` is currently granted.
    #[must_use]
    pub const fn is_granted(&self, permission: Permission) -> bool {
        self.state(permission).granted
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ViewConfig {
        &self.config
    }

    const fn state_mut(&mut self, permission: Permission) -> &mut PermissionState {
        match permission {
            Permission::Camera => &mut self.camera,
            Permission::Microphone => &mut self.microphone,
        }
    }

    fn notice(&self, text: &str) -> Notice {
        Notice::new(text).duration(self.config.notice_duration)
    }

    /// Apply one message.
    ///
    /// A press on a granted permission only yields a notice. A press on a
    /// missing permission yields a prompt. A resolution writes the cell and
    /// yields the granted or denied notice.
    pub fn update(&mut self, message: Message) -> Update {
        match message {
            Message::Pressed(permission) => {
                let strings = self.config.strings.permission(permission);
                let effect = if self.is_granted(permission) {
                    Effect::Notify(self.notice(&strings.already_granted))
                } else {
                    Effect::Prompt(permission)
                };
                Update {
                    effect: Some(effect),
                    dirty: false,
                }
            }
            Message::Resolved {
                permission,
                granted,
            } => {
                info!(
                    "{permission} permission {}",
                    if granted { "granted" } else { "denied" }
                );
                self.state_mut(permission).granted = granted;

                let strings = self.config.strings.permission(permission);
                let text = if granted {
                    &strings.granted
                } else {
                    &strings.denied
                };
                Update {
                    effect: Some(Effect::Notify(self.notice(text))),
                    dirty: true,
                }
            }
        }
    }

    /// Build the two label and button rows from the current state.
    #[must_use]
    pub fn render(&self) -> Screen {
        Screen {
            rows: Permission::ALL.map(|permission| self.row(permission)),
        }
    }

    fn row(&self, permission: Permission) -> Row {
        let strings = &self.config.strings;
        let texts = strings.permission(permission);
        let granted = self.is_granted(permission);
        Row {
            permission,
            granted,
            label: format!("{}: {}", texts.label, strings.answer(granted)),
            button: texts.button.clone(),
        }
    }
}
