//! Drawer controller: one drawer instance's complete behavior.
//!
//! Wires together the pieces of a drawer:
//! - push/pull towards the ancestor drawer when `open` flips,
//! - enter/leave motion for the panel and the mask,
//! - scroll lock while open with a mask,
//! - focus trap and auto-focus,
//! - the render layout (mask, start sentinel, panel wrapper, end sentinel).
//!
//! The controller never calls back into the UI. Every operation returns the
//! [`DrawerEffect`]s the owner has to carry out (invoke callbacks, move focus).
//!
//! # Teardown
//!
//! Dropping the controller (or calling [`DrawerController::teardown`]) always
//! unlocks the scroll lock and pulls the ancestor, whatever the open or
//! animation state is.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::focus_trap::{handle_trap_key, AutoFocus, FocusedElement, Sentinel, TrapAction, TrapKey};
use super::layout::{
    class_names, inline_style, DrawerLayout, DrawerNode, MaskLayout, PanelLayout, CLASS_PREFIX,
    LEAVED_CLASS,
};
use super::motion::{LeaveBehavior, MotionState, MotionTicket};
use super::options::DrawerOptions;
use super::scroll_lock::ScrollLockBinding;
use super::stacking::{PushSource, PushTarget, StackingContext};

/// Global counter for unique drawer IDs.
static DRAWER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of a drawer instance, used for DOM ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawerId(u64);

impl DrawerId {
    fn new() -> Self {
        Self(DRAWER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// DOM id of one part of this drawer, e.g. `drawer-3-panel`.
    #[must_use]
    pub fn dom_id(self, part: &str) -> String {
        format!("{CLASS_PREFIX}-{}-{part}", self.0)
    }

    /// DOM id of a sentinel.
    #[must_use]
    pub fn sentinel_id(self, sentinel: Sentinel) -> String {
        self.dom_id(&format!("sentinel-{}", sentinel.as_str()))
    }
}

/// What asked the drawer to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// Escape pressed inside the drawer.
    Keyboard,
    /// Click on the mask.
    Mask,
}

/// Side effect the owner of a controller has to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEffect {
    /// Remember the element focused right now, to restore it after closing.
    RememberFocus,
    /// Focus the panel without scrolling.
    FocusPanel,
    /// Focus a sentinel without scrolling.
    FocusSentinel(Sentinel),
    /// Return focus to the remembered element unless it is inside the panel.
    RestoreFocus,
    /// Invoke `after_open_change` with the settled visibility.
    AfterOpenChange(bool),
    /// Invoke `on_close`.
    Close(CloseTrigger),
}

/// Complete state of one drawer instance.
pub struct DrawerController {
    id: DrawerId,
    options: DrawerOptions,
    push_source: Rc<PushSource>,
    pushed: Rc<dyn PushTarget>,
    panel: MotionState,
    mask: MotionState,
    scroll_lock: ScrollLockBinding,
    auto_focus: AutoFocus,
    synced: bool,
    torn_down: bool,
}

impl DrawerController {
    /// Create a controller for a freshly mounted drawer.
    ///
    /// Nothing happens until the first [`sync`](Self::sync); pass the initial
    /// options there as well.
    pub fn new(
        options: DrawerOptions,
        ancestor: StackingContext,
        pushed: Rc<dyn PushTarget>,
        scroll_lock: ScrollLockBinding,
    ) -> Self {
        let push_source = Rc::new(PushSource::new(
            options.push,
            options.default_push_distance,
            ancestor,
        ));
        let panel = MotionState::new(LeaveBehavior::Retain).with_force_render(options.force_render);
        Self {
            id: DrawerId::new(),
            options,
            push_source,
            pushed,
            panel,
            mask: MotionState::new(LeaveBehavior::Remove),
            scroll_lock,
            auto_focus: AutoFocus::default(),
            synced: false,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> DrawerId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    /// Distance this drawer shifts by when a descendant pushes it.
    #[must_use]
    pub fn push_distance(&self) -> f64 {
        self.push_source.distance()
    }

    #[must_use]
    pub fn is_pushed(&self) -> bool {
        self.pushed.is_pushed()
    }

    #[must_use]
    pub fn panel(&self) -> &MotionState {
        &self.panel
    }

    #[must_use]
    pub fn mask(&self) -> &MotionState {
        &self.mask
    }

    #[must_use]
    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.is_held()
    }

    /// Whether anything of the drawer is in the tree.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.panel.is_mounted() || self.mask.is_mounted()
    }

    /// Context to hand to drawers nested inside this one.
    #[must_use]
    pub fn context(&self) -> StackingContext {
        StackingContext::live(self.push_source.clone(), self.pushed.clone())
    }

    /// Replace the options with this render's ones and react to the changes.
    pub fn sync(&mut self, options: DrawerOptions) -> Vec<DrawerEffect> {
        if self.torn_down {
            return Vec::new();
        }
        let previous_open = self.synced.then_some(self.options.open);
        self.synced = true;
        self.options = options;
        self.push_source
            .update(self.options.push, self.options.default_push_distance);
        self.panel.set_force_render(self.options.force_render);

        let open = self.options.open;
        let mut effects = Vec::new();

        if previous_open != Some(open) {
            log::debug!("drawer {} open={open}", self.id.id());
            // One hop only: the direct ancestor is notified, it does not forward.
            // Mounting closed is not a close, so the ancestor is left alone.
            if open {
                self.push_source.ancestor().push();
                effects.push(DrawerEffect::RememberFocus);
            } else if previous_open.is_some() {
                self.push_source.ancestor().pull();
            }
            self.auto_focus.on_open_change(open, self.options.auto_focus);
        }

        let mask_visible = open && self.options.mask;
        if mask_visible {
            self.scroll_lock.acquire();
        }
        if let Some(ticket) = self.mask.request(mask_visible) {
            if !self.options.motion {
                self.mask.complete(ticket);
            }
        }

        if let Some(ticket) = self.panel.request(open) {
            if !self.options.motion {
                effects.extend(self.complete_panel(ticket));
            }
        }

        if self.auto_focus.take() {
            effects.push(DrawerEffect::FocusPanel);
        }

        effects
    }

    /// The transition engine finished a panel transition.
    ///
    /// Stale reports (superseded by a later open/close) produce no effects.
    pub fn complete_panel(&mut self, ticket: MotionTicket) -> Vec<DrawerEffect> {
        match self.panel.complete(ticket) {
            None => Vec::new(),
            Some(true) => {
                log::debug!("drawer {} opened", self.id.id());
                vec![DrawerEffect::AfterOpenChange(true)]
            }
            Some(false) => {
                log::debug!("drawer {} closed", self.id.id());
                self.scroll_lock.release();
                if self.options.destroy_on_close {
                    self.panel.forget();
                }
                vec![
                    DrawerEffect::AfterOpenChange(false),
                    DrawerEffect::RestoreFocus,
                ]
            }
        }
    }

    /// The transition engine finished a mask transition.
    ///
    /// Returns whether the report was current.
    pub fn complete_mask(&mut self, ticket: MotionTicket) -> bool {
        self.mask.complete(ticket).is_some()
    }

    /// A key was pressed inside the drawer.
    pub fn handle_key(&self, key: TrapKey, focused: Option<FocusedElement>) -> Vec<DrawerEffect> {
        if !self.options.open {
            return Vec::new();
        }
        match handle_trap_key(key, focused, self.options.keyboard) {
            TrapAction::Ignore => Vec::new(),
            TrapAction::FocusSentinel(sentinel) => {
                log::trace!("drawer {} wraps focus to {sentinel:?}", self.id.id());
                vec![DrawerEffect::FocusSentinel(sentinel)]
            }
            TrapAction::Close => vec![DrawerEffect::Close(CloseTrigger::Keyboard)],
        }
    }

    /// The mask was clicked.
    #[must_use]
    pub fn click_mask(&self) -> Vec<DrawerEffect> {
        if self.options.open && self.options.mask && self.options.mask_closable {
            vec![DrawerEffect::Close(CloseTrigger::Mask)]
        } else {
            Vec::new()
        }
    }

    /// Release everything this drawer holds. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        log::debug!("drawer {} torn down", self.id.id());
        // Dropping the binding unlocks unconditionally, even if this drawer never locked
        drop(std::mem::replace(
            &mut self.scroll_lock,
            ScrollLockBinding::detached(),
        ));
        self.push_source.ancestor().pull();
        self.pushed.set_pushed(false);
    }

    /// Describe what to render for the current state.
    #[must_use]
    pub fn layout(&self) -> DrawerLayout {
        let options = &self.options;
        let placement = options.placement.as_str();
        let placement_class = format!("{CLASS_PREFIX}-{placement}");
        let open_class = if options.open {
            format!("{CLASS_PREFIX}-open")
        } else {
            String::new()
        };
        let inline_class = if options.inline {
            format!("{CLASS_PREFIX}-inline")
        } else {
            String::new()
        };
        let root_class = class_names([
            CLASS_PREFIX,
            placement_class.as_str(),
            open_class.as_str(),
            inline_class.as_str(),
        ]);

        if !self.is_mounted() {
            return DrawerLayout {
                root_class,
                nodes: Vec::new(),
            };
        }

        let z_index = options.z_index.map(|z| z.to_string());
        let mut nodes = Vec::with_capacity(4);

        if self.mask.is_mounted() {
            let motion_name = format!("{CLASS_PREFIX}-mask-motion");
            let motion = self.mask.motion_classes(&motion_name).unwrap_or_default();
            nodes.push(DrawerNode::Mask(MaskLayout {
                class: class_names([format!("{CLASS_PREFIX}-mask").as_str(), motion.as_str()]),
                style: inline_style(&[("z-index", z_index.clone())]),
                ticket: self.mask.pending(),
            }));
        }

        if self.panel.is_mounted() {
            let motion_name = format!("{CLASS_PREFIX}-panel-motion-{placement}");
            let motion = self.panel.motion_classes(&motion_name).unwrap_or_default();
            let leaved = self.panel.is_leaved();
            let transform = if self.is_pushed() {
                options.placement.push_transform(self.push_distance())
            } else {
                None
            };
            let size_property = if options.placement.uses_width() {
                "width"
            } else {
                "height"
            };
            let wrapper_class = class_names([
                format!("{CLASS_PREFIX}-content-wrapper").as_str(),
                motion.as_str(),
                if leaved { LEAVED_CLASS } else { "" },
            ]);
            let wrapper_style = inline_style(&[
                ("z-index", z_index),
                ("transform", transform),
                (size_property, Some(options.panel_size().to_css())),
            ]);

            nodes.push(DrawerNode::Sentinel(Sentinel::Start));
            nodes.push(DrawerNode::Panel(PanelLayout {
                wrapper_class,
                wrapper_style,
                content_class: format!("{CLASS_PREFIX}-content"),
                ticket: self.panel.pending(),
                leaved,
            }));
            nodes.push(DrawerNode::Sentinel(Sentinel::End));
        }

        DrawerLayout { root_class, nodes }
    }
}

impl Drop for DrawerController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for DrawerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawerController")
            .field("id", &self.id)
            .field("open", &self.options.open)
            .field("pushed", &self.is_pushed())
            .field("push_distance", &self.push_distance())
            .field("panel", &self.panel.phase())
            .field("mask", &self.mask.phase())
            .field("scroll_lock", &self.scroll_lock)
            .finish_non_exhaustive()
    }
}
