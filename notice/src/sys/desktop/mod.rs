use notify_rust::{Notification, Timeout};

use crate::{Notice, NoticeError};

pub(crate) fn show(notice: &Notice) -> Result<(), NoticeError> {
    Notification::new()
        .summary(notice.message())
        .timeout(Timeout::Milliseconds(notice.display_duration().as_millis()))
        .show()
        .map(drop)
        .map_err(|e| NoticeError::Platform(e.to_string()))
}
