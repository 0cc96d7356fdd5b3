//! Android permission implementation using JNI.
//!
//! The host Activity hands itself over through [`init`], again after every
//! recreation, and withdraws through [`release`] when destroyed. Prompts go
//! through `Activity.requestPermissions`, and the Activity forwards
//! `onRequestPermissionsResult` to
//! `dev.grantkit.PermissionBridge.nativeOnRequestPermissionsResult(int, boolean)`.

use super::host::HostSlot;
use crate::{Permission, PermissionError, PermissionReply, PermissionStatus};
use jni::objects::{GlobalRef, JClass, JObject, JValue};
use jni::sys::{jboolean, jint};
use jni::{JNIEnv, JavaVM};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: jint = 0;

/// Request codes must fit in the low 16 bits for `FragmentActivity`.
const REQUEST_CODE_MASK: jint = 0x7FFF;

struct Host {
    vm: JavaVM,
    activity: GlobalRef,
}

static HOST: HostSlot<Host> = HostSlot::new();
static NEXT_REQUEST_CODE: AtomicI32 = AtomicI32::new(1);
static PENDING: Mutex<Vec<(jint, PermissionReply)>> = Mutex::new(Vec::new());

const fn permission_name(permission: Permission) -> &'static str {
    match permission {
        Permission::Camera => "android.permission.CAMERA",
        Permission::Microphone => "android.permission.RECORD_AUDIO",
    }
}

fn jni_error(call: &str) -> impl Fn(jni::errors::Error) -> PermissionError + '_ {
    move |e| PermissionError::Platform(format!("{call} failed: {e}"))
}

/// Maps a JNI result, clearing any Java exception the call left pending so
/// it is not rethrown when control returns to Java.
fn checked<T>(
    env: &mut JNIEnv,
    call: &str,
    result: jni::errors::Result<T>,
) -> Result<T, PermissionError> {
    result.map_err(|e| {
        if env.exception_check().unwrap_or(false) {
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        jni_error(call)(e)
    })
}

/// Hand the Java VM and the host Activity over for later checks and
/// requests. Call from every `onCreate`; a recreated Activity replaces the
/// previous one.
///
/// # Errors
/// Returns a `PermissionError` if the VM or a global reference cannot be obtained.
pub fn init(env: &mut JNIEnv, activity: &JObject) -> Result<(), PermissionError> {
    let vm = env.get_java_vm().map_err(jni_error("get_java_vm"))?;
    let activity = env
        .new_global_ref(activity)
        .map_err(jni_error("new_global_ref"))?;

    if HOST.replace(Host { vm, activity }).is_some() {
        log::debug!("permission host activity replaced");
    }
    Ok(())
}

/// Forget the host Activity. Call from `onDestroy`.
///
/// Prompts still waiting on that Activity are answered with
/// [`PermissionError::ReplyDropped`].
pub fn release() {
    HOST.clear();
    let stale = std::mem::take(&mut *pending());
    for (request_code, reply) in stale {
        log::debug!("dropping permission request {request_code}: host released");
        reply.send(Err(PermissionError::ReplyDropped));
    }
}

/// Check permission using the Activity context.
///
/// A permission the user already refused reports `Denied`; one that was
/// never asked reports `NotDetermined`.
///
/// # Errors
/// Returns a `PermissionError` if a JNI call fails.
pub fn check_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    permission: Permission,
) -> Result<PermissionStatus, PermissionError> {
    let name = env
        .new_string(permission_name(permission))
        .map_err(jni_error("new_string"))?;

    let result = env.call_method(
        activity,
        "checkSelfPermission",
        "(Ljava/lang/String;)I",
        &[JValue::Object(&name)],
    );
    let result = checked(env, "checkSelfPermission", result)?
        .i()
        .map_err(jni_error("checkSelfPermission result"))?;

    if result == PERMISSION_GRANTED {
        return Ok(PermissionStatus::Granted);
    }

    let refused_before = env.call_method(
        activity,
        "shouldShowRequestPermissionRationale",
        "(Ljava/lang/String;)Z",
        &[JValue::Object(&name)],
    );
    let refused_before = checked(env, "shouldShowRequestPermissionRationale", refused_before)?
        .z()
        .map_err(jni_error("shouldShowRequestPermissionRationale result"))?;

    Ok(if refused_before {
        PermissionStatus::Denied
    } else {
        PermissionStatus::NotDetermined
    })
}

/// Launch the system permission prompt using the Activity context.
///
/// The reply is completed when the Activity forwards the matching
/// `onRequestPermissionsResult` call. If the prompt cannot be launched the
/// reply is answered with the error right away.
///
/// # Errors
/// Returns a `PermissionError` if a JNI call fails.
pub fn request_with_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    permission: Permission,
    reply: PermissionReply,
) -> Result<jint, PermissionError> {
    let request_code = NEXT_REQUEST_CODE.fetch_add(1, Ordering::Relaxed) & REQUEST_CODE_MASK;
    pending().push((request_code, reply));

    if let Err(err) = launch_prompt(env, activity, permission, request_code) {
        if let Some(reply) = take_pending(request_code) {
            reply.send(Err(err.clone()));
        }
        return Err(err);
    }

    Ok(request_code)
}

fn launch_prompt(
    env: &mut JNIEnv,
    activity: &JObject,
    permission: Permission,
    request_code: jint,
) -> Result<(), PermissionError> {
    let name = env
        .new_string(permission_name(permission))
        .map_err(jni_error("new_string"))?;
    let names = env.new_object_array(1, "java/lang/String", &name);
    let names = checked(env, "new_object_array", names)?;

    let launched = env.call_method(
        activity,
        "requestPermissions",
        "([Ljava/lang/String;I)V",
        &[JValue::Object(&names), JValue::Int(request_code)],
    );
    checked(env, "requestPermissions", launched)?;

    Ok(())
}

fn pending() -> MutexGuard<'static, Vec<(jint, PermissionReply)>> {
    PENDING.lock().unwrap_or_else(PoisonError::into_inner)
}

fn take_pending(request_code: jint) -> Option<PermissionReply> {
    let mut pending = pending();
    let index = pending.iter().position(|(code, _)| *code == request_code)?;
    Some(pending.swap_remove(index).1)
}

/// Complete the prompt identified by `request_code`.
///
/// Returns `false` if no prompt with that code is pending.
pub fn complete(request_code: jint, granted: bool) -> bool {
    match take_pending(request_code) {
        Some(reply) => {
            reply.send(Ok(PermissionStatus::from_granted(granted)));
            true
        }
        None => {
            log::warn!("no pending permission request for code {request_code}");
            false
        }
    }
}

/// Called by the host Activity from `onRequestPermissionsResult`.
///
/// `granted` is `true` only if every requested permission was granted; an
/// interrupted prompt (empty result array) must be passed as `false`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_grantkit_PermissionBridge_nativeOnRequestPermissionsResult(
    _env: JNIEnv,
    _class: JClass,
    request_code: jint,
    granted: jboolean,
) {
    complete(request_code, granted != 0);
}

fn host() -> Result<Arc<Host>, PermissionError> {
    HOST.get().ok_or(PermissionError::NotInitialized)
}

pub(crate) fn check(permission: Permission) -> PermissionStatus {
    let result = host().and_then(|host| {
        let mut env = host
            .vm
            .attach_current_thread()
            .map_err(jni_error("attach_current_thread"))?;
        check_with_activity(&mut env, host.activity.as_obj(), permission)
    });

    result.unwrap_or_else(|err| {
        log::warn!("{permission} status unavailable: {err}");
        PermissionStatus::NotDetermined
    })
}

pub(crate) fn request(permission: Permission, reply: PermissionReply) {
    let host = match host() {
        Ok(host) => host,
        Err(err) => {
            reply.send(Err(err));
            return;
        }
    };

    let mut env = match host.vm.attach_current_thread() {
        Ok(env) => env,
        Err(e) => {
            reply.send(Err(jni_error("attach_current_thread")(e)));
            return;
        }
    };

    if let Err(err) = request_with_activity(&mut env, host.activity.as_obj(), permission, reply) {
        log::warn!("{permission} prompt failed to launch: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_answers_waiting_prompts() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        pending().push((
            41,
            PermissionReply::new(move |result| sink.lock().unwrap().push(result)),
        ));

        release();

        assert!(host().is_err());
        assert!(!complete(41, true));
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Err(PermissionError::ReplyDropped)]
        );
    }
}
