//! Platform-specific notice implementations.

#[cfg(target_os = "android")]
pub mod android;
#[cfg(target_os = "android")]
pub(crate) use android::show;

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
mod desktop;
#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub(crate) use desktop::show;

// iOS toasts need a UIKit host view; until then the notice is only logged.
#[cfg(not(any(
    target_os = "android",
    target_os = "linux",
    target_os = "windows",
    target_os = "macos"
)))]
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn show(notice: &crate::Notice) -> Result<(), crate::NoticeError> {
    log::info!("notice: {}", notice.message());
    Ok(())
}
