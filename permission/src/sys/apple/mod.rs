//! Apple platform (iOS/macOS) permission implementation using AVFoundation.

use std::sync::Mutex;

use block2::RcBlock;
use objc2::runtime::Bool;
use objc2_av_foundation::{
    AVAuthorizationStatus, AVCaptureDevice, AVMediaType, AVMediaTypeAudio, AVMediaTypeVideo,
};

use crate::{Permission, PermissionError, PermissionReply, PermissionStatus};

fn media_type(permission: Permission) -> Option<&'static AVMediaType> {
    // SAFETY: framework-provided immutable string constants.
    unsafe {
        match permission {
            Permission::Camera => AVMediaTypeVideo,
            Permission::Microphone => AVMediaTypeAudio,
        }
    }
}

fn status_from_av(status: AVAuthorizationStatus) -> PermissionStatus {
    if status == AVAuthorizationStatus::Authorized {
        PermissionStatus::Granted
    } else if status == AVAuthorizationStatus::Denied {
        PermissionStatus::Denied
    } else if status == AVAuthorizationStatus::Restricted {
        PermissionStatus::Restricted
    } else {
        PermissionStatus::NotDetermined
    }
}

/// Check the status of a permission on Apple platforms.
pub(crate) fn check(permission: Permission) -> PermissionStatus {
    let Some(media) = media_type(permission) else {
        return PermissionStatus::NotDetermined;
    };
    // SAFETY: `media` is a valid AVMediaType constant.
    let status = unsafe { AVCaptureDevice::authorizationStatusForMediaType(media) };
    status_from_av(status)
}

/// Request a permission on Apple platforms.
///
/// AVFoundation calls the completion handler on an arbitrary queue.
pub(crate) fn request(permission: Permission, reply: PermissionReply) {
    let Some(media) = media_type(permission) else {
        reply.send(Err(PermissionError::NotSupported));
        return;
    };

    let pending = Mutex::new(Some(reply));
    let handler = RcBlock::new(move |granted: Bool| {
        let reply = pending.lock().ok().and_then(|mut slot| slot.take());
        if let Some(reply) = reply {
            reply.send(Ok(PermissionStatus::from_granted(granted.as_bool())));
        }
    });

    // SAFETY: `media` is a valid AVMediaType constant and the block is retained by AVFoundation.
    unsafe {
        AVCaptureDevice::requestAccessForMediaType_completionHandler(media, &handler);
    }
}
