//! View configuration: user-facing strings and notice timing.

use grantkit_notice::NoticeDuration;
use grantkit_permission::Permission;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a [`ViewConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for this schema.
    #[error("invalid view configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Texts shown for one permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStrings {
    /// Label prefix, rendered as `"{label}: {yes|no}"`.
    pub label: String,
    /// Button caption.
    pub button: String,
    /// Notice after the user grants the permission.
    pub granted: String,
    /// Notice after the user denies the permission.
    pub denied: String,
    /// Notice when the button is pressed but access is already granted.
    pub already_granted: String,
}

/// Every user-facing string of the view.
///
/// When deserialized, anything left out (a whole permission block or a
/// single field inside one) keeps the English text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StringsPatch")]
pub struct Strings {
    /// Camera texts.
    pub camera: PermissionStrings,
    /// Microphone texts.
    pub microphone: PermissionStrings,
    /// Word shown for a granted permission.
    pub yes: String,
    /// Word shown for a permission that is not granted.
    pub no: String,
}

impl Strings {
    /// English texts.
    #[must_use]
    pub fn english() -> Self {
        Self {
            camera: PermissionStrings {
                label: "Camera permission".into(),
                button: "Access the camera".into(),
                granted: "Camera permission GRANTED".into(),
                denied: "Camera permission DENIED".into(),
                already_granted: "Camera permission was already granted".into(),
            },
            microphone: PermissionStrings {
                label: "Microphone permission".into(),
                button: "Access the microphone".into(),
                granted: "Microphone permission GRANTED".into(),
                denied: "Microphone permission DENIED".into(),
                already_granted: "Microphone permission was already granted".into(),
            },
            yes: "YES".into(),
            no: "NO".into(),
        }
    }

    /// Spanish texts.
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            camera: PermissionStrings {
                label: "Permiso de cámara".into(),
                button: "Acceder a la cámara".into(),
                granted: "Permiso de cámara CONCEDIDO".into(),
                denied: "Permiso de cámara DENEGADO".into(),
                already_granted: "El permiso de cámara ya fue concedido".into(),
            },
            microphone: PermissionStrings {
                label: "Permiso de micrófono".into(),
                button: "Acceder al micrófono".into(),
                granted: "Permiso de micrófono CONCEDIDO".into(),
                denied: "Permiso de micrófono DENEGADO".into(),
                already_granted: "El permiso de micrófono ya fue concedido".into(),
            },
            yes: "SÍ".into(),
            no: "NO".into(),
        }
    }

    /// Picks a built-in table by language tag (`"es"`, `"es-MX"`, ...).
    /// Unknown languages fall back to English.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Self::spanish()
        } else {
            Self::english()
        }
    }

    /// Texts for one permission.
    #[must_use]
    pub const fn permission(&self, permission: Permission) -> &PermissionStrings {
        match permission {
            Permission::Camera => &self.camera,
            Permission::Microphone => &self.microphone,
        }
    }

    /// The yes/no word for a grant state.
    #[must_use]
    pub fn answer(&self, granted: bool) -> &str {
        if granted { &self.yes } else { &self.no }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct PermissionStringsPatch {
    label: Option<String>,
    button: Option<String>,
    granted: Option<String>,
    denied: Option<String>,
    already_granted: Option<String>,
}

impl PermissionStringsPatch {
    fn apply(self, base: &mut PermissionStrings) {
        let fields = [
            (self.label, &mut base.label),
            (self.button, &mut base.button),
            (self.granted, &mut base.granted),
            (self.denied, &mut base.denied),
            (self.already_granted, &mut base.already_granted),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct StringsPatch {
    camera: PermissionStringsPatch,
    microphone: PermissionStringsPatch,
    yes: Option<String>,
    no: Option<String>,
}

impl From<StringsPatch> for Strings {
    fn from(patch: StringsPatch) -> Self {
        let mut strings = Self::default();
        patch.camera.apply(&mut strings.camera);
        patch.microphone.apply(&mut strings.microphone);
        if let Some(yes) = patch.yes {
            strings.yes = yes;
        }
        if let Some(no) = patch.no {
            strings.no = no;
        }
        strings
    }
}

/// Configuration of a [`PermissionStatusView`](crate::PermissionStatusView).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// User-facing texts.
    pub strings: Strings,
    /// How long notices stay visible.
    pub notice_duration: NoticeDuration,
}

impl ViewConfig {
    /// Configuration with the built-in strings for `tag`.
    #[must_use]
    pub fn for_language(tag: &str) -> Self {
        Self {
            strings: Strings::for_language(tag),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults,
    /// including single fields inside a `camera` or `microphone` block.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] if the text is not valid for this schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
