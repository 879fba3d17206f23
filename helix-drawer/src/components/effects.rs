//! Carries out the effects a drawer controller asks for.
//!
//! Focus handling goes through small scripts evaluated in the webview;
//! callbacks go to the handlers supplied by the drawer's owner.

use dioxus::prelude::*;

use crate::drawer::{CloseTrigger, DrawerEffect, DrawerId, Sentinel};

/// Global object remembering, per drawer, the element focused before opening.
const FOCUS_STORE: &str = "window.__drawerFocus";

/// Event that made a drawer ask to be closed.
#[derive(Debug, Clone)]
pub enum CloseEvent {
    /// Escape pressed inside the drawer.
    Keyboard(KeyboardEvent),
    /// Click on the mask.
    Mask(MouseEvent),
}

impl CloseEvent {
    #[must_use]
    pub fn trigger(&self) -> CloseTrigger {
        match self {
            Self::Keyboard(_) => CloseTrigger::Keyboard,
            Self::Mask(_) => CloseTrigger::Mask,
        }
    }
}

/// Callbacks of one drawer instance.
#[derive(Clone, Copy)]
pub(crate) struct DrawerHandlers {
    pub id: DrawerId,
    pub on_close: Option<EventHandler<CloseEvent>>,
    pub after_open_change: Option<EventHandler<bool>>,
}

impl DrawerHandlers {
    /// Perform `effects` in order.
    ///
    /// `origin` is the event being handled, forwarded to `on_close`.
    pub fn apply(&self, effects: &[DrawerEffect], origin: Option<CloseEvent>) {
        let mut origin = origin;
        for effect in effects {
            match *effect {
                DrawerEffect::RememberFocus => {
                    document::eval(&remember_focus_script(self.id));
                }
                DrawerEffect::FocusPanel => {
                    document::eval(&focus_script(&self.id.dom_id("panel")));
                }
                DrawerEffect::FocusSentinel(sentinel) => {
                    document::eval(&focus_script(&self.id.sentinel_id(sentinel)));
                }
                DrawerEffect::RestoreFocus => {
                    document::eval(&restore_focus_script(self.id));
                }
                DrawerEffect::AfterOpenChange(open) => {
                    if let Some(handler) = self.after_open_change {
                        handler.call(open);
                    }
                }
                DrawerEffect::Close(trigger) => match (self.on_close, origin.take()) {
                    (Some(handler), Some(event)) => handler.call(event),
                    (Some(_), None) => {
                        log::warn!("drawer {} close ({trigger:?}) without an event", self.id.id());
                    }
                    (None, _) => {}
                },
            }
        }
    }
}

/// Focus an element by id on the next frame, without scrolling.
pub(crate) fn focus_script(element_id: &str) -> String {
    format!(
        r"requestAnimationFrame(() => {{
            const el = document.getElementById('{element_id}');
            if (el) {{
                el.focus({{ preventScroll: true }});
            }}
        }});"
    )
}

pub(crate) fn remember_focus_script(id: DrawerId) -> String {
    let key = id.id();
    format!(
        r"{FOCUS_STORE} = {FOCUS_STORE} || {{}};
        {FOCUS_STORE}[{key}] = document.activeElement;"
    )
}

/// Return focus to the remembered element unless it lives inside the panel.
pub(crate) fn restore_focus_script(id: DrawerId) -> String {
    let key = id.id();
    let panel_id = id.dom_id("panel");
    format!(
        r"(() => {{
            const store = {FOCUS_STORE} || {{}};
            const previous = store[{key}];
            delete store[{key}];
            const panel = document.getElementById('{panel_id}');
            if (previous && previous.focus && !(panel && panel.contains(previous))) {{
                previous.focus({{ preventScroll: true }});
            }}
        }})();"
    )
}

/// Scroll lock applied to the document body.
pub(crate) fn body_scroll_lock_script(locked: bool) -> &'static str {
    if locked {
        "document.body.classList.add('drawer-scroll-locked');"
    } else {
        "document.body.classList.remove('drawer-scroll-locked');"
    }
}

/// Sentinel a focus event came from, for the `data-sentinel` attribute.
pub(crate) fn sentinel_attr(sentinel: Sentinel) -> &'static str {
    sentinel.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_script_targets_element_without_scrolling() {
        let script = focus_script("drawer-7-panel");
        assert!(script.contains("getElementById('drawer-7-panel')"));
        assert!(script.contains("preventScroll: true"));
        assert!(script.contains("requestAnimationFrame"));
    }

    #[test]
    fn body_scroll_lock_toggles_class() {
        assert!(body_scroll_lock_script(true).contains("add('drawer-scroll-locked')"));
        assert!(body_scroll_lock_script(false).contains("remove('drawer-scroll-locked')"));
    }

    #[test]
    fn sentinel_attr_values() {
        assert_eq!(sentinel_attr(Sentinel::Start), "start");
        assert_eq!(sentinel_attr(Sentinel::End), "end");
    }
}
