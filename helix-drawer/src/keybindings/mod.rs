//! Keyboard handling for drawers.
//!
//! Only Tab, Shift+Tab and Escape matter to a drawer; everything else is left
//! to the panel content.

mod translate;

pub use translate::{trap_key, translate_trap_key};
