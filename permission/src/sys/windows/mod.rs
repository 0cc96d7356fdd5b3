//! Windows permission implementation using WinRT app capabilities.

use crate::{Permission, PermissionError, PermissionReply, PermissionStatus};
use windows::Security::Authorization::AppCapabilityAccess::{
    AppCapability, AppCapabilityAccessStatus,
};
use windows::core::HSTRING;

const fn capability_name(permission: Permission) -> &'static str {
    match permission {
        Permission::Camera => "webcam",
        Permission::Microphone => "microphone",
    }
}

fn capability(permission: Permission) -> Result<AppCapability, PermissionError> {
    AppCapability::Create(&HSTRING::from(capability_name(permission)))
        .map_err(|e| PermissionError::Platform(format!("AppCapability::Create failed: {e}")))
}

fn status_from_access(status: AppCapabilityAccessStatus) -> PermissionStatus {
    match status {
        AppCapabilityAccessStatus::Allowed => PermissionStatus::Granted,
        AppCapabilityAccessStatus::DeniedByUser => PermissionStatus::Denied,
        AppCapabilityAccessStatus::DeniedBySystem | AppCapabilityAccessStatus::NotDeclaredByApp => {
            PermissionStatus::Restricted
        }
        _ => PermissionStatus::NotDetermined,
    }
}

pub(crate) fn check(permission: Permission) -> PermissionStatus {
    match capability(permission).and_then(|cap| {
        cap.CheckAccess()
            .map_err(|e| PermissionError::Platform(format!("CheckAccess failed: {e}")))
    }) {
        Ok(status) => status_from_access(status),
        Err(err) => {
            log::warn!("{permission} status unavailable: {err}");
            PermissionStatus::NotDetermined
        }
    }
}

fn request_blocking(permission: Permission) -> Result<PermissionStatus, PermissionError> {
    let op = capability(permission)?
        .RequestAccessAsync()
        .map_err(|e| PermissionError::Platform(format!("RequestAccessAsync failed: {e}")))?;
    let status = op
        .get()
        .map_err(|e| PermissionError::Platform(format!("RequestAccessAsync result: {e}")))?;
    Ok(status_from_access(status))
}

pub(crate) fn request(permission: Permission, reply: PermissionReply) {
    // RequestAccessAsync blocks until the consent dialog closes; keep it off the UI thread.
    std::thread::spawn(move || reply.send(request_blocking(permission)));
}
