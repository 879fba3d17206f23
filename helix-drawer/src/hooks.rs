//! Custom Dioxus hooks for drawer components.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::drawer::{PushTarget, ScrollLock, SharedScrollLock, StackingContext};

/// Read the stacking context of the nearest ancestor drawer.
///
/// Outside of any drawer this is the inert root context.
#[must_use]
pub fn use_stacking_context() -> StackingContext {
    try_use_context::<StackingContext>().unwrap_or_default()
}

/// Claim a per-instance handle on the page-wide scroll lock, if one is provided.
///
/// The handle is created once and released when the component unmounts.
#[must_use]
pub fn use_scroll_lock() -> Option<Rc<dyn ScrollLock>> {
    let shared = try_use_context::<SharedScrollLock>();
    use_hook(move || shared.map(|shared| Rc::new(shared.handle()) as Rc<dyn ScrollLock>))
}

/// Pushed flag backed by a signal, so the owning drawer re-renders when a
/// nested drawer pushes or pulls it.
#[derive(Clone, Copy)]
pub struct SignalPushTarget(Signal<bool>);

impl SignalPushTarget {
    #[must_use]
    pub fn new(signal: Signal<bool>) -> Self {
        Self(signal)
    }
}

impl PushTarget for SignalPushTarget {
    fn set_pushed(&self, pushed: bool) {
        let mut signal = self.0;
        // The owner may already be gone during teardown
        if signal.try_peek().is_ok_and(|current| *current != pushed) {
            signal.set(pushed);
        }
    }

    fn is_pushed(&self) -> bool {
        self.0.try_peek().is_ok_and(|pushed| *pushed)
    }
}

/// Create this drawer's pushed flag.
///
/// Returns the signal (read it to re-render on push/pull) and the target
/// handed to nested drawers.
#[must_use]
pub fn use_push_target() -> (Signal<bool>, Rc<dyn PushTarget>) {
    let pushed = use_signal(|| false);
    let target = use_hook(move || Rc::new(SignalPushTarget::new(pushed)) as Rc<dyn PushTarget>);
    (pushed, target)
}

/// Render revision of the enclosing drawer.
///
/// Nested drawers read it so that they re-render, and re-resolve their push
/// distance, whenever the drawer around them re-syncs its options.
#[derive(Clone, Copy)]
pub struct DrawerRevision(pub Signal<u64>);

/// Subscribe to the enclosing drawer's revision, if any.
pub fn use_ancestor_revision() -> Option<DrawerRevision> {
    try_use_context::<DrawerRevision>()
}
