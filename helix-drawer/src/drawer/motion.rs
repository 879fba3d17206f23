//! Enter/leave lifecycle for an animated element (panel or mask).
//!
//! State machine: Hidden → Entering → Visible → Leaving → Hidden
//!
//! A request that flips visibility while a transition is running starts the
//! opposite transition immediately (Entering ⇄ Leaving). Every request bumps a
//! generation counter and hands out a [`MotionTicket`]; the transition engine
//! reports completion with that ticket, and a report whose ticket no longer
//! matches the current request is discarded.
//!
//! # Invariants
//!
//! - The element is mounted whenever the current target is visible.
//! - `Visible`/`Hidden` are only reached through a completion report matching
//!   the current generation and target (or through an instant transition).
//! - A retained element stays mounted after leaving; a removable one does not.

/// Phase of a single animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Leaving,
}

impl MotionPhase {
    /// Check if a transition is in progress.
    #[inline]
    #[must_use]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Entering | Self::Leaving)
    }
}

/// Identifies one visibility request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTicket {
    generation: u64,
    visible: bool,
}

impl MotionTicket {
    /// Visibility this request transitions to.
    #[must_use]
    pub const fn visible(self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// What happens to an element once it has fully left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaveBehavior {
    /// Unmount on leave (the mask).
    #[default]
    Remove,
    /// Keep the element in the tree with a leaved marker (the panel).
    Retain,
}

/// Enter/leave state for one element.
#[derive(Debug, Clone, Default)]
pub struct MotionState {
    phase: MotionPhase,
    generation: u64,
    target: bool,
    leave: LeaveBehavior,
    force_render: bool,
    has_entered: bool,
}

impl MotionState {
    #[must_use]
    pub fn new(leave: LeaveBehavior) -> Self {
        Self {
            leave,
            ..Self::default()
        }
    }

    /// Pre-mount the element while hidden.
    #[must_use]
    pub fn with_force_render(mut self, force_render: bool) -> Self {
        self.force_render = force_render;
        self
    }

    pub fn set_force_render(&mut self, force_render: bool) {
        self.force_render = force_render;
    }

    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// The visibility most recently requested.
    #[must_use]
    pub fn target(&self) -> bool {
        self.target
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Ticket of the request currently in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<MotionTicket> {
        self.is_animating().then_some(MotionTicket {
            generation: self.generation,
            visible: self.target,
        })
    }

    /// Whether the element has to exist in the tree right now.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.target
            || self.phase != MotionPhase::Hidden
            || self.force_render
            || (self.leave == LeaveBehavior::Retain && self.has_entered)
    }

    /// Whether a retained element is mounted only because it was shown before.
    #[must_use]
    pub fn is_leaved(&self) -> bool {
        self.phase == MotionPhase::Hidden && !self.target && self.is_mounted()
    }

    /// Request a visibility flip.
    ///
    /// Returns `None` if `visible` is already the current target. Otherwise
    /// starts the matching transition from whatever phase the element is in
    /// and returns the ticket the completion report has to carry.
    pub fn request(&mut self, visible: bool) -> Option<MotionTicket> {
        if visible == self.target {
            return None;
        }
        self.target = visible;
        self.generation += 1;
        self.phase = if visible {
            self.has_entered = true;
            MotionPhase::Entering
        } else {
            MotionPhase::Leaving
        };
        Some(MotionTicket {
            generation: self.generation,
            visible,
        })
    }

    /// Apply a completion report from the transition engine.
    ///
    /// Returns the visibility the element settled on, or `None` when the report
    /// is stale (superseded request) or nothing was animating.
    pub fn complete(&mut self, ticket: MotionTicket) -> Option<bool> {
        if !self.is_animating() || ticket.generation != self.generation || ticket.visible != self.target
        {
            log::debug!(
                "discarding stale motion report (generation {} visible {}, current {} visible {})",
                ticket.generation,
                ticket.visible,
                self.generation,
                self.target
            );
            return None;
        }
        self.phase = if self.target {
            MotionPhase::Visible
        } else {
            MotionPhase::Hidden
        };
        Some(self.target)
    }

    /// Drop the "shown before" memory so a retained element unmounts.
    ///
    /// Used for destroy-on-close; has no effect while visible or animating.
    pub fn forget(&mut self) {
        if self.phase == MotionPhase::Hidden && !self.target {
            self.has_entered = false;
        }
    }

    /// CSS classes for the current phase of `motion_name`.
    #[must_use]
    pub fn motion_classes(&self, motion_name: &str) -> Option<String> {
        match self.phase {
            MotionPhase::Entering => Some(format!("{motion_name}-enter {motion_name}-enter-active")),
            MotionPhase::Leaving => Some(format!("{motion_name}-leave {motion_name}-leave-active")),
            MotionPhase::Hidden | MotionPhase::Visible => None,
        }
    }
}
