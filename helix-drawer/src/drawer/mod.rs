//! Headless drawer core.
//!
//! Everything here is plain Rust state with no dependency on the UI runtime:
//! - `placement` - edge a drawer slides in from and its push transform
//! - `push` - push configuration and distance resolution
//! - `stacking` - context linking a drawer to its nearest ancestor
//! - `motion` - enter/leave lifecycle with stale report rejection
//! - `focus_trap` - sentinel-based Tab wrapping and auto-focus
//! - `scroll_lock` - lock binding with unconditional release on teardown
//! - `options` - per-render inputs
//! - `layout` - render description (DOM order, classes, styles)
//! - `controller` - one drawer instance tying it all together
//!
//! The Dioxus component in `crate::components` owns a [`DrawerController`]
//! and turns its [`DrawerLayout`] and [`DrawerEffect`]s into elements and
//! side effects.

mod controller;
mod focus_trap;
mod layout;
mod motion;
mod options;
mod placement;
mod push;
mod scroll_lock;
mod stacking;

pub use controller::{CloseTrigger, DrawerController, DrawerEffect, DrawerId};
pub use focus_trap::{handle_trap_key, AutoFocus, FocusedElement, Sentinel, TrapAction, TrapKey};
pub use layout::{DrawerLayout, DrawerNode, MaskLayout, PanelLayout, CLASS_PREFIX, LEAVED_CLASS};
pub use motion::{LeaveBehavior, MotionPhase, MotionState, MotionTicket};
pub use options::{Dimension, DrawerOptions, DEFAULT_PANEL_SIZE};
pub use placement::{Axis, Placement};
pub use push::{resolve_push_distance, PushConfig, DEFAULT_PUSH_DISTANCE};
pub use scroll_lock::{ScrollLock, ScrollLockBinding, ScrollLockHandle, SharedScrollLock};
pub use stacking::{PushSource, PushState, PushTarget, StackingContext};
