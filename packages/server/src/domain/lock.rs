//! Mutual-exclusion primitives used by the presence store.
//!
//! The registry uses two independent lock domains: a [`SharedLock`] over the room
//! map and one [`ExclusiveLock`] per room over its user map. Access is closure-scoped
//! so a guard cannot outlive the call that took it, which keeps the two domains from
//! ever being held across a re-entry into the registry.
//!
//! Tests substitute instrumented implementations to observe creation and ordering.

use parking_lot::{Mutex, RwLock};

/// A single mutual-exclusion domain.
pub trait ExclusiveLock<T>: Send + Sync {
    fn new(value: T) -> Self
    where
        Self: Sized;

    /// Run `f` with exclusive access to the protected value.
    fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

/// A read/write domain: many readers or one writer.
pub trait SharedLock<T>: Send + Sync {
    fn new(value: T) -> Self
    where
        Self: Sized;

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: Send> ExclusiveLock<T> for Mutex<T> {
    fn new(value: T) -> Self {
        Mutex::new(value)
    }

    fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }
}

impl<T: Send + Sync> SharedLock<T> for RwLock<T> {
    fn new(value: T) -> Self {
        RwLock::new(value)
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.read();
        f(&*guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }
}
