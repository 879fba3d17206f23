//! UI components for drawers.
//!
//! This module contains the Dioxus components built on the headless
//! [`crate::drawer`] core.

mod drawer;
mod effects;

pub use drawer::Drawer;
pub use effects::CloseEvent;

pub(crate) use effects::body_scroll_lock_script;
