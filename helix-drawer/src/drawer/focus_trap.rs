//! Keyboard focus trap built on two boundary sentinels.
//!
//! Two zero-size focusable markers bracket the panel in document order. Tab
//! from the end marker wraps to the start one, Shift+Tab from the start marker
//! wraps to the end one; every other Tab press is left to default traversal.

/// One of the two boundary markers around the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    Start,
    End,
}

impl Sentinel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Keys the trap cares about, already translated from the UI runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKey {
    Tab { shift: bool },
    Escape,
    Other,
}

/// Where keyboard focus currently sits inside the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedElement {
    Sentinel(Sentinel),
    /// The panel root or anything inside it.
    Panel,
}

/// Decision taken for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapAction {
    /// Leave the key to default handling.
    Ignore,
    /// Move focus to a sentinel (without scrolling).
    FocusSentinel(Sentinel),
    /// Ask the owner to close the drawer.
    Close,
}

/// Decide what a key press inside the drawer does.
///
/// `focused` is `None` when nothing focusable inside the drawer holds focus;
/// the trap then degrades to ignoring Tab.
#[must_use]
pub fn handle_trap_key(
    key: TrapKey,
    focused: Option<FocusedElement>,
    keyboard_closable: bool,
) -> TrapAction {
    match key {
        TrapKey::Tab { shift: false } if focused == Some(FocusedElement::Sentinel(Sentinel::End)) => {
            TrapAction::FocusSentinel(Sentinel::Start)
        }
        TrapKey::Tab { shift: true } if focused == Some(FocusedElement::Sentinel(Sentinel::Start)) => {
            TrapAction::FocusSentinel(Sentinel::End)
        }
        TrapKey::Escape if keyboard_closable => TrapAction::Close,
        TrapKey::Tab { .. } | TrapKey::Escape | TrapKey::Other => TrapAction::Ignore,
    }
}

/// Fires once per open transition, not on every render while open.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoFocus {
    armed: bool,
}

impl AutoFocus {
    /// Record an open-state change.
    pub fn on_open_change(&mut self, open: bool, enabled: bool) {
        self.armed = open && enabled;
    }

    /// Consume the pending auto-focus, if any.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}
