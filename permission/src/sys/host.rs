//! Replaceable slot for the platform host context.
//!
//! A host Activity can be destroyed and recreated (rotation, locale change),
//! so the context handed over last always wins and can be released again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub struct HostSlot<T> {
    host: Mutex<Option<Arc<T>>>,
}

impl<T> HostSlot<T> {
    pub const fn new() -> Self {
        Self {
            host: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<T>>> {
        self.host.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install `host`, returning the one it replaces.
    pub fn replace(&self, host: T) -> Option<Arc<T>> {
        self.lock().replace(Arc::new(host))
    }

    /// Drop the current host.
    pub fn clear(&self) -> Option<Arc<T>> {
        self.lock().take()
    }

    /// The current host, if any.
    pub fn get(&self) -> Option<Arc<T>> {
        self.lock().clone()
    }
}
