//! Android notice implementation using `android.widget.Toast` over JNI.

use jni::objects::{GlobalRef, JObject, JValue};
use jni::sys::jint;
use jni::{JNIEnv, JavaVM};
use std::sync::{Arc, Mutex, PoisonError};

use crate::{Notice, NoticeDuration, NoticeError};

/// `Toast.LENGTH_SHORT`.
const LENGTH_SHORT: jint = 0;
/// `Toast.LENGTH_LONG`.
const LENGTH_LONG: jint = 1;

struct Host {
    vm: JavaVM,
    context: GlobalRef,
}

static HOST: Mutex<Option<Arc<Host>>> = Mutex::new(None);

fn host() -> Result<Arc<Host>, NoticeError> {
    HOST.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .ok_or(NoticeError::NotInitialized)
}

fn checked<T>(
    env: &mut JNIEnv,
    call: &str,
    result: jni::errors::Result<T>,
) -> Result<T, NoticeError> {
    result.map_err(|e| {
        if env.exception_check().unwrap_or(false) {
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        NoticeError::Platform(format!("{call} failed: {e}"))
    })
}

const fn toast_length(duration: NoticeDuration) -> jint {
    match duration {
        NoticeDuration::Short => LENGTH_SHORT,
        NoticeDuration::Long => LENGTH_LONG,
    }
}

/// Hand over the Java VM and a Context for later [`Notice::show`] calls.
/// A later call replaces the Context, so a recreated Activity calls it again.
///
/// # Errors
/// Returns a `NoticeError` if the VM or a global reference cannot be obtained.
pub fn init(env: &mut JNIEnv, context: &JObject) -> Result<(), NoticeError> {
    let vm = env
        .get_java_vm()
        .map_err(|e| NoticeError::Platform(format!("get_java_vm failed: {e}")))?;
    let context = env
        .new_global_ref(context)
        .map_err(|e| NoticeError::Platform(format!("new_global_ref failed: {e}")))?;

    let host = Arc::new(Host { vm, context });
    *HOST.lock().unwrap_or_else(PoisonError::into_inner) = Some(host);
    Ok(())
}

/// Forget the Context. Notices shown afterwards fail with
/// [`NoticeError::NotInitialized`] until [`init`] runs again.
pub fn release() {
    HOST.lock().unwrap_or_else(PoisonError::into_inner).take();
}

/// Show a toast with an explicit context. Must run on the UI thread.
///
/// # Errors
/// Returns a `NoticeError` if a JNI call fails.
pub fn show_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    notice: &Notice,
) -> Result<(), NoticeError> {
    let text = env
        .new_string(notice.message())
        .map_err(|e| NoticeError::Platform(format!("new_string: {e}")))?;

    let toast = env.call_static_method(
        "android/widget/Toast",
        "makeText",
        "(Landroid/content/Context;Ljava/lang/CharSequence;I)Landroid/widget/Toast;",
        &[
            JValue::Object(context),
            JValue::Object(&text),
            JValue::Int(toast_length(notice.display_duration())),
        ],
    );
    let toast = checked(env, "makeText", toast)?
        .l()
        .map_err(|e| NoticeError::Platform(format!("makeText result: {e}")))?;

    let shown = env.call_method(&toast, "show", "()V", &[]);
    checked(env, "show", shown)?;

    Ok(())
}

pub(crate) fn show(notice: &Notice) -> Result<(), NoticeError> {
    let host = host()?;
    let mut env = host
        .vm
        .attach_current_thread()
        .map_err(|e| NoticeError::Platform(format!("attach_current_thread failed: {e}")))?;
    show_with_context(&mut env, host.context.as_obj(), notice)
}
