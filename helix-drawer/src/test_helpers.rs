//! Test helpers for drawer tests.
//!
//! Provides recording fakes for the scroll lock and the pushed flag, plus
//! shortcuts to build controllers and drive their animations to completion.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::drawer::{
    DrawerController, DrawerEffect, DrawerOptions, PushState, PushTarget, ScrollLock,
    ScrollLockBinding, StackingContext,
};

/// One call made on a [`RecordingScrollLock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCall {
    Lock,
    Unlock,
}

/// Scroll lock that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingScrollLock {
    calls: RefCell<Vec<LockCall>>,
}

impl RecordingScrollLock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<LockCall> {
        self.calls.borrow().clone()
    }

    /// Number of locks not yet matched by an unlock.
    pub fn outstanding(&self) -> i64 {
        self.calls.borrow().iter().fold(0, |held, call| match call {
            LockCall::Lock => held + 1,
            LockCall::Unlock => (held - 1).max(0),
        })
    }
}

impl ScrollLock for RecordingScrollLock {
    fn lock(&self) {
        self.calls.borrow_mut().push(LockCall::Lock);
    }

    fn unlock(&self) {
        self.calls.borrow_mut().push(LockCall::Unlock);
    }
}

/// Pushed flag that counts how often it was flipped on.
#[derive(Debug, Default)]
pub struct RecordingPushTarget {
    pushed: Cell<bool>,
    pushes: Cell<usize>,
}

impl RecordingPushTarget {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pushes(&self) -> usize {
        self.pushes.get()
    }
}

impl PushTarget for RecordingPushTarget {
    fn set_pushed(&self, pushed: bool) {
        if pushed {
            self.pushes.set(self.pushes.get() + 1);
        }
        self.pushed.set(pushed);
    }

    fn is_pushed(&self) -> bool {
        self.pushed.get()
    }
}

fn binding(lock: &Rc<RecordingScrollLock>) -> ScrollLockBinding {
    let lock: Rc<dyn ScrollLock> = lock.clone();
    ScrollLockBinding::new(Some(lock))
}

/// Create a top-level controller with its own recording scroll lock.
pub fn controller(options: DrawerOptions) -> (DrawerController, Rc<RecordingScrollLock>) {
    let lock = RecordingScrollLock::new();
    let controller = DrawerController::new(
        options,
        StackingContext::root(),
        Rc::new(PushState::new()),
        binding(&lock),
    );
    (controller, lock)
}

/// Create a controller nested inside `parent`, sharing `lock`.
pub fn nested_controller(
    parent: &DrawerController,
    options: DrawerOptions,
    lock: &Rc<RecordingScrollLock>,
) -> DrawerController {
    DrawerController::new(
        options,
        parent.context(),
        Rc::new(PushState::new()),
        binding(lock),
    )
}

/// Report completion of the in-flight panel and mask transitions.
///
/// Returns the effects of the panel completion.
pub fn settle_panel(controller: &mut DrawerController) -> Vec<DrawerEffect> {
    if let Some(ticket) = controller.mask().pending() {
        controller.complete_mask(ticket);
    }
    match controller.panel().pending() {
        Some(ticket) => controller.complete_panel(ticket),
        None => Vec::new(),
    }
}

/// Assert that an effect list equals the given effects, in order.
///
/// Usage: `assert_effects!(effects, [DrawerEffect::FocusPanel]);`
#[macro_export]
macro_rules! assert_effects {
    ($effects:expr, [$($effect:expr),* $(,)?]) => {{
        let actual: Vec<$crate::drawer::DrawerEffect> = $effects;
        let expected: Vec<$crate::drawer::DrawerEffect> = vec![$($effect),*];
        assert_eq!(
            actual, expected,
            "\n--- actual ---\n{actual:?}\n--- expected ---\n{expected:?}\n"
        );
    }};
}
