//! Stacking context shared between a drawer and the drawers nested inside it.
//!
//! Every drawer consumes the context of its nearest ancestor drawer and
//! produces a new one for its descendants. The produced context carries a
//! live view of the drawer's push distance plus a handle to its own pushed
//! flag, so a nested drawer can push/pull exactly one level up and always
//! resolves against the ancestor's current options.
//!
//! # Invariants
//!
//! - A drawer is pushed iff one of its direct descendants is open.
//! - Propagation is one hop: opening a grandchild pushes the child only.
//! - The root context has no distance and no target; `push()`/`pull()` on it
//!   are no-ops.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::push::{resolve_push_distance, PushConfig};

/// Something that owns a pushed flag a descendant can flip.
pub trait PushTarget {
    fn set_pushed(&self, pushed: bool);

    fn is_pushed(&self) -> bool;
}

/// A drawer's push setting, read by its descendants whenever they resolve.
pub struct PushSource {
    setting: Cell<(PushConfig, f64)>,
    ancestor: StackingContext,
}

impl PushSource {
    #[must_use]
    pub fn new(push: PushConfig, fallback: f64, ancestor: StackingContext) -> Self {
        Self {
            setting: Cell::new((push, fallback)),
            ancestor,
        }
    }

    /// Replace the setting with the owning drawer's current options.
    pub fn update(&self, push: PushConfig, fallback: f64) {
        self.setting.set((push, fallback));
    }

    /// Context of the drawer this source's owner is nested in.
    #[must_use]
    pub fn ancestor(&self) -> &StackingContext {
        &self.ancestor
    }

    /// Distance the owning drawer shifts by, resolved now.
    #[must_use]
    pub fn distance(&self) -> f64 {
        let (push, fallback) = self.setting.get();
        resolve_push_distance(push, &self.ancestor, fallback)
    }
}

#[derive(Clone)]
enum Distance {
    Fixed(f64),
    Live(Rc<PushSource>),
}

/// Context handed from a drawer to the drawers rendered beneath it.
#[derive(Clone, Default)]
pub struct StackingContext {
    distance: Option<Distance>,
    target: Option<Rc<dyn PushTarget>>,
}

impl StackingContext {
    /// The empty context used above the outermost drawer.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Context with a distance that never changes.
    #[must_use]
    pub fn new(push_distance: f64, target: Rc<dyn PushTarget>) -> Self {
        Self {
            distance: Some(Distance::Fixed(push_distance)),
            target: Some(target),
        }
    }

    /// Context produced by a drawer for its descendants; the distance follows
    /// every update of `source`.
    #[must_use]
    pub fn live(source: Rc<PushSource>, target: Rc<dyn PushTarget>) -> Self {
        Self {
            distance: Some(Distance::Live(source)),
            target: Some(target),
        }
    }

    /// Distance offered to descendants, `None` at the root.
    #[must_use]
    pub fn push_distance(&self) -> Option<f64> {
        self.distance.as_ref().map(|distance| match distance {
            Distance::Fixed(value) => *value,
            Distance::Live(source) => source.distance(),
        })
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.target.is_none()
    }

    /// Mark the owning drawer as pushed. Idempotent.
    pub fn push(&self) {
        if let Some(target) = &self.target {
            target.set_pushed(true);
        }
    }

    /// Clear the owning drawer's pushed flag. Idempotent.
    pub fn pull(&self) {
        if let Some(target) = &self.target {
            target.set_pushed(false);
        }
    }
}

impl fmt::Debug for StackingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackingContext")
            .field("push_distance", &self.push_distance())
            .field("pushed", &self.target.as_ref().map(|t| t.is_pushed()))
            .finish()
    }
}

/// Plain pushed flag for drawers driven outside a reactive runtime.
#[derive(Debug, Default, Clone)]
pub struct PushState(Rc<Cell<bool>>);

impl PushState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PushTarget for PushState {
    fn set_pushed(&self, pushed: bool) {
        self.0.set(pushed);
    }

    fn is_pushed(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_context_is_inert() {
        let root = StackingContext::root();
        assert!(root.is_root());
        assert!(root.push_distance().is_none());
        // Must not panic
        root.push();
        root.pull();
    }

    #[test]
    fn push_and_pull_are_idempotent() {
        let state = PushState::new();
        let ctx = StackingContext::new(180.0, Rc::new(state.clone()));

        ctx.push();
        ctx.push();
        assert!(state.is_pushed());

        ctx.pull();
        ctx.pull();
        assert!(!state.is_pushed());
    }

    #[test]
    fn cloned_context_shares_target() {
        let state = PushState::new();
        let ctx = StackingContext::new(90.0, Rc::new(state.clone()));
        let copy = ctx.clone();

        copy.push();
        assert!(state.is_pushed());
        assert_eq!(ctx.push_distance(), Some(90.0));
    }

    #[test]
    fn live_context_follows_source_updates() {
        let source = Rc::new(PushSource::new(
            PushConfig::distance(40.0),
            180.0,
            StackingContext::root(),
        ));
        let ctx = StackingContext::live(source.clone(), Rc::new(PushState::new()));
        assert_eq!(ctx.push_distance(), Some(40.0));

        source.update(PushConfig::distance(120.0), 180.0);
        assert_eq!(ctx.push_distance(), Some(120.0));

        source.update(PushConfig::Disabled, 180.0);
        assert_eq!(ctx.push_distance(), Some(0.0));
    }

    #[test]
    fn live_distance_inherits_through_chain() {
        let outer = Rc::new(PushSource::new(
            PushConfig::distance(60.0),
            180.0,
            StackingContext::root(),
        ));
        let outer_ctx = StackingContext::live(outer.clone(), Rc::new(PushState::new()));
        let inner = Rc::new(PushSource::new(PushConfig::default(), 180.0, outer_ctx));
        let inner_ctx = StackingContext::live(inner, Rc::new(PushState::new()));
        assert_eq!(inner_ctx.push_distance(), Some(60.0));

        outer.update(PushConfig::distance(90.0), 180.0);
        assert_eq!(inner_ctx.push_distance(), Some(90.0));
    }
}
