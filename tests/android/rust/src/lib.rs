//! Android JNI harness hosting the permission status view.
//!
//! This crate is only compiled for Android targets.
//! To build: cargo ndk -t arm64-v8a build -p grantkit-test-android
//!
//! The host `dev.grantkit.test.MainActivity` declares the native methods
//! below and implements `renderRow(int, String, String, boolean)`. Its
//! `onRequestPermissionsResult` forwards to
//! `dev.grantkit.PermissionBridge.nativeOnRequestPermissionsResult` and then
//! calls `nativePump`.

#![cfg(target_os = "android")]
#![allow(non_snake_case)]

use std::cell::RefCell;

use grantkit_notice::SystemNotices;
use grantkit_permission::{Permission, SystemPermissions};
use grantkit_status_view::{Renderer, Screen, Session, ViewConfig};
use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::sys::{jboolean, jint, JNI_FALSE, JNI_TRUE};
use jni::{JNIEnv, JavaVM};
use log::{error, LevelFilter};

/// Pushes rendered rows into the Activity.
struct ActivityRenderer {
    vm: JavaVM,
    activity: GlobalRef,
}

impl ActivityRenderer {
    fn draw(&self, screen: &Screen) -> jni::errors::Result<()> {
        let mut env = self.vm.attach_current_thread()?;
        for (index, row) in (0..).zip(screen.rows.iter()) {
            let label = env.new_string(&row.label)?;
            let button = env.new_string(&row.button)?;
            env.call_method(
                self.activity.as_obj(),
                "renderRow",
                "(ILjava/lang/String;Ljava/lang/String;Z)V",
                &[
                    JValue::Int(index),
                    JValue::Object(&label),
                    JValue::Object(&button),
                    JValue::Bool(if row.granted { JNI_TRUE } else { JNI_FALSE }),
                ],
            )?;
        }
        Ok(())
    }
}

impl Renderer for ActivityRenderer {
    fn render(&mut self, screen: &Screen) {
        if let Err(e) = self.draw(screen) {
            error!("renderRow failed: {e}");
        }
    }
}

type AndroidSession = Session<SystemPermissions, SystemNotices, ActivityRenderer>;

thread_local! {
    static SESSION: RefCell<Option<AndroidSession>> = const { RefCell::new(None) };
}

fn permission_from_jint(kind: jint) -> Option<Permission> {
    match kind {
        0 => Some(Permission::Camera),
        1 => Some(Permission::Microphone),
        _ => None,
    }
}

fn create_session(
    env: &mut JNIEnv,
    activity: &JObject,
    language: &JString,
) -> Result<AndroidSession, String> {
    grantkit_permission::sys::android::init(env, activity).map_err(|e| e.to_string())?;
    grantkit_notice::sys::android::init(env, activity).map_err(|e| e.to_string())?;

    let language: String = env
        .get_string(language)
        .map_err(|e| format!("get_string: {e}"))?
        .into();

    let renderer = ActivityRenderer {
        vm: env.get_java_vm().map_err(|e| format!("get_java_vm: {e}"))?,
        activity: env
            .new_global_ref(activity)
            .map_err(|e| format!("new_global_ref: {e}"))?,
    };

    Ok(Session::new(
        SystemPermissions,
        SystemNotices,
        renderer,
        ViewConfig::for_language(&language),
    ))
}

/// Create the view and draw the first screen. Call from every `onCreate`;
/// a recreated Activity replaces the previous session and host.
/// Returns `false` if the session could not be created.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_grantkit_test_MainActivity_nativeInit(
    mut env: JNIEnv,
    _class: JClass,
    activity: JObject,
    language: JString,
) -> jboolean {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("grantkit"),
    );

    match create_session(&mut env, &activity, &language) {
        Ok(session) => {
            SESSION.with_borrow_mut(|slot| *slot = Some(session));
            JNI_TRUE
        }
        Err(e) => {
            error!("failed to create status view: {e}");
            JNI_FALSE
        }
    }
}

/// Button click. kind: 0=Camera, 1=Microphone.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_grantkit_test_MainActivity_nativePress(
    _env: JNIEnv,
    _class: JClass,
    kind: jint,
) {
    let Some(permission) = permission_from_jint(kind) else {
        error!("unknown permission kind {kind}");
        return;
    };

    SESSION.with_borrow_mut(|slot| {
        if let Some(session) = slot {
            session.handle().press(permission);
            session.pump();
        }
    });
}

/// Handle queued OS results. Call after forwarding `onRequestPermissionsResult`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_grantkit_test_MainActivity_nativePump(
    _env: JNIEnv,
    _class: JClass,
) -> jint {
    SESSION.with_borrow_mut(|slot| {
        slot.as_mut()
            .map_or(0, |session| jint::try_from(session.pump()).unwrap_or(jint::MAX))
    })
}

/// Tear the view down. Call from `onDestroy`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_grantkit_test_MainActivity_nativeDestroy(
    _env: JNIEnv,
    _class: JClass,
) {
    SESSION.with_borrow_mut(|slot| {
        if let Some(session) = slot.take() {
            session.handle().close();
        }
    });
    grantkit_permission::sys::android::release();
    grantkit_notice::sys::android::release();
}
