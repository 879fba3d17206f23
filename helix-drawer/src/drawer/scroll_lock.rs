//! Binding between a drawer and the page-wide scroll lock.
//!
//! The drawer locks scrolling while it is open with a mask and releases the
//! lock once the panel has finished leaving. Teardown always unlocks, whatever
//! state the drawer is in, so a drawer dropped mid-animation never leaves the
//! page locked.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::Mutex;

/// Scroll suppression resource. Both operations must be idempotent.
pub trait ScrollLock {
    fn lock(&self);

    fn unlock(&self);
}

/// One drawer's claim on an optional [`ScrollLock`].
///
/// Guarantees `lock()` is never called twice without an `unlock()` in between,
/// and calls `unlock()` unconditionally when dropped.
pub struct ScrollLockBinding {
    lock: Option<Rc<dyn ScrollLock>>,
    held: bool,
}

impl ScrollLockBinding {
    #[must_use]
    pub fn new(lock: Option<Rc<dyn ScrollLock>>) -> Self {
        Self { lock, held: false }
    }

    /// A binding without a lock; every call is a no-op.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Take the lock unless this binding already holds it.
    pub fn acquire(&mut self) {
        if self.held {
            return;
        }
        self.held = true;
        if let Some(lock) = &self.lock {
            log::debug!("scroll lock acquired");
            lock.lock();
        }
    }

    /// Give the lock back if this binding holds it.
    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        if let Some(lock) = &self.lock {
            log::debug!("scroll lock released");
            lock.unlock();
        }
    }
}

impl Drop for ScrollLockBinding {
    fn drop(&mut self) {
        self.held = false;
        if let Some(lock) = &self.lock {
            lock.unlock();
        }
    }
}

impl fmt::Debug for ScrollLockBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockBinding")
            .field("attached", &self.lock.is_some())
            .field("held", &self.held)
            .finish()
    }
}

type ApplyFn = dyn Fn(bool) + Send + Sync;

/// Page-wide reference-counted scroll lock.
///
/// Hands out one [`ScrollLockHandle`] per drawer. The first handle to lock
/// applies the lock, the last one to unlock lifts it.
#[derive(Clone)]
pub struct SharedScrollLock {
    holders: Arc<Mutex<usize>>,
    apply: Arc<ApplyFn>,
}

impl SharedScrollLock {
    /// `apply(true)` suppresses page scrolling, `apply(false)` restores it.
    pub fn new(apply: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self {
            holders: Arc::new(Mutex::new(0)),
            apply: Arc::new(apply),
        }
    }

    /// Number of handles currently holding the lock.
    #[must_use]
    pub fn holders(&self) -> usize {
        *self.holders.lock()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Create a handle for one drawer instance.
    #[must_use]
    pub fn handle(&self) -> ScrollLockHandle {
        ScrollLockHandle {
            shared: self.clone(),
            held: Cell::new(false),
        }
    }
}

impl fmt::Debug for SharedScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedScrollLock")
            .field("holders", &self.holders())
            .finish_non_exhaustive()
    }
}

/// Per-instance handle on a [`SharedScrollLock`]; lock/unlock are idempotent.
#[derive(Debug)]
pub struct ScrollLockHandle {
    shared: SharedScrollLock,
    held: Cell<bool>,
}

impl ScrollLock for ScrollLockHandle {
    fn lock(&self) {
        if self.held.replace(true) {
            return;
        }
        let mut holders = self.shared.holders.lock();
        *holders += 1;
        if *holders == 1 {
            (self.shared.apply)(true);
        }
    }

    fn unlock(&self) {
        if !self.held.replace(false) {
            return;
        }
        let mut holders = self.shared.holders.lock();
        *holders = holders.saturating_sub(1);
        if *holders == 0 {
            (self.shared.apply)(false);
        }
    }
}

impl Drop for ScrollLockHandle {
    fn drop(&mut self) {
        self.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{LockCall, RecordingScrollLock};

    #[test]
    fn binding_never_double_locks() {
        let lock = RecordingScrollLock::new();
        let mut binding = ScrollLockBinding::new(Some(lock.clone()));

        binding.acquire();
        binding.acquire();
        assert!(binding.is_held());
        assert_eq!(lock.calls(), vec![LockCall::Lock]);
    }

    #[test]
    fn release_only_when_held() {
        let lock = RecordingScrollLock::new();
        let mut binding = ScrollLockBinding::new(Some(lock.clone()));

        binding.release();
        assert!(lock.calls().is_empty());

        binding.acquire();
        binding.release();
        binding.release();
        assert_eq!(lock.calls(), vec![LockCall::Lock, LockCall::Unlock]);
    }

    #[test]
    fn drop_unlocks_unconditionally() {
        let lock = RecordingScrollLock::new();
        {
            let _binding = ScrollLockBinding::new(Some(lock.clone()));
        }
        assert_eq!(lock.calls(), vec![LockCall::Unlock]);

        let lock = RecordingScrollLock::new();
        {
            let mut binding = ScrollLockBinding::new(Some(lock.clone()));
            binding.acquire();
        }
        assert_eq!(lock.calls(), vec![LockCall::Lock, LockCall::Unlock]);
    }

    #[test]
    fn detached_binding_is_noop() {
        let mut binding = ScrollLockBinding::detached();
        binding.acquire();
        binding.release();
        drop(binding);
    }

    fn counting_lock() -> (SharedScrollLock, Arc<Mutex<Vec<bool>>>) {
        let applied = Arc::new(Mutex::new(Vec::new()));
        let sink = applied.clone();
        let shared = SharedScrollLock::new(move |locked| sink.lock().push(locked));
        (shared, applied)
    }

    #[test]
    fn shared_lock_applies_once_for_many_holders() {
        let (shared, applied) = counting_lock();
        let first = shared.handle();
        let second = shared.handle();

        first.lock();
        second.lock();
        assert_eq!(shared.holders(), 2);
        assert_eq!(*applied.lock(), vec![true]);

        first.unlock();
        assert!(shared.is_locked());
        second.unlock();
        assert!(!shared.is_locked());
        assert_eq!(*applied.lock(), vec![true, false]);
    }

    #[test]
    fn handle_is_idempotent() {
        let (shared, applied) = counting_lock();
        let handle = shared.handle();

        handle.lock();
        handle.lock();
        assert_eq!(shared.holders(), 1);

        handle.unlock();
        handle.unlock();
        assert_eq!(shared.holders(), 0);
        assert_eq!(*applied.lock(), vec![true, false]);
    }

    #[test]
    fn unlock_from_other_handle_does_not_release_foreign_lock() {
        let (shared, _applied) = counting_lock();
        let holder = shared.handle();
        let bystander = shared.handle();

        holder.lock();
        bystander.unlock();
        assert!(shared.is_locked());
    }

    #[test]
    fn dropped_handle_releases() {
        let (shared, applied) = counting_lock();
        {
            let handle = shared.handle();
            handle.lock();
        }
        assert!(!shared.is_locked());
        assert_eq!(*applied.lock(), vec![true, false]);
    }
}
