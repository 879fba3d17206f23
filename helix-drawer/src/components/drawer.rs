//! Drawer component.
//!
//! Owns one [`DrawerController`] for the component's lifetime and renders its
//! layout: mask, start sentinel, panel wrapper, end sentinel. Option changes
//! are fed to the controller from an effect, animation end events report
//! transition completion with the ticket that was current when the element
//! rendered, and unmounting tears the controller down.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::effects::{sentinel_attr, CloseEvent, DrawerHandlers};
use crate::drawer::{
    DrawerController, DrawerEffect, DrawerNode, DrawerOptions, FocusedElement, Sentinel,
    ScrollLockBinding, CLASS_PREFIX,
};
use crate::hooks::{
    use_ancestor_revision, use_push_target, use_scroll_lock, use_stacking_context, DrawerRevision,
};
use crate::keybindings::translate_trap_key;

/// Slide-in panel with mask, focus trap, scroll lock and nested push.
///
/// `options.open` is owned by the caller; the drawer asks to be closed through
/// `on_close` and reports settled visibility through `after_open_change`.
/// Drawers rendered inside `children` push this one aside when they open.
#[component]
pub fn Drawer(
    options: DrawerOptions,
    class: Option<String>,
    on_close: Option<EventHandler<CloseEvent>>,
    after_open_change: Option<EventHandler<bool>>,
    children: Element,
) -> Element {
    let ancestor = use_stacking_context();
    let ancestor_revision = use_ancestor_revision();
    let scroll_lock = use_scroll_lock();
    let (pushed, push_target) = use_push_target();

    let controller = use_hook({
        let options = options.clone();
        move || {
            Rc::new(RefCell::new(DrawerController::new(
                options,
                ancestor,
                push_target,
                ScrollLockBinding::new(scroll_lock),
            )))
        }
    });
    use_context_provider({
        let controller = controller.clone();
        move || controller.borrow().context()
    });

    // Bumped whenever the controller changes outside of a prop change
    let mut revision = use_signal(|| 0_u64);
    use_context_provider(move || DrawerRevision(revision));
    let mut focused_sentinel = use_signal(|| None::<Sentinel>);

    let handlers = DrawerHandlers {
        id: controller.borrow().id(),
        on_close,
        after_open_change,
    };

    use_effect(use_reactive((&options,), {
        let controller = controller.clone();
        move |(options,)| {
            let effects = controller.borrow_mut().sync(options);
            revision += 1;
            handlers.apply(&effects, None);
        }
    }));

    use_drop({
        let controller = controller.clone();
        move || controller.borrow_mut().teardown()
    });

    // Subscribe so push/pull, completions and parent option changes re-render
    let _ = revision();
    let _ = pushed();
    if let Some(DrawerRevision(parent)) = ancestor_revision {
        let _ = parent();
    }

    let layout = controller.borrow().layout();
    if layout.is_empty() {
        return rsx! {};
    }

    let root_class = match &class {
        Some(extra) => format!("{} {extra}", layout.root_class),
        None => layout.root_class.clone(),
    };
    let id = handlers.id;

    let onkeydown = {
        let controller = controller.clone();
        move |evt: KeyboardEvent| {
            let key = translate_trap_key(&evt);
            let sentinel = *focused_sentinel.peek();
            let focused = sentinel.map_or(FocusedElement::Panel, FocusedElement::Sentinel);
            let effects = controller.borrow().handle_key(key, Some(focused));
            if effects.is_empty() {
                return;
            }
            // Nested drawers live inside this one's panel
            evt.stop_propagation();
            if effects
                .iter()
                .any(|effect| matches!(effect, DrawerEffect::FocusSentinel(_)))
            {
                evt.prevent_default();
            }
            handlers.apply(&effects, Some(CloseEvent::Keyboard(evt)));
        }
    };

    let panel_motion = format!("{CLASS_PREFIX}-panel-motion");
    let mask_motion = format!("{CLASS_PREFIX}-mask-motion");

    let nodes = layout.nodes.into_iter().map(|node| match node {
        DrawerNode::Mask(mask) => {
            let clicked = controller.clone();
            let finished = controller.clone();
            let mask_motion = mask_motion.clone();
            let ticket = mask.ticket;
            let node_key = "mask";
            rsx! {
                div {
                    key: "{node_key}",
                    class: "{mask.class}",
                    style: "{mask.style}",
                    onclick: move |evt: MouseEvent| {
                        let effects = clicked.borrow().click_mask();
                        handlers.apply(&effects, Some(CloseEvent::Mask(evt)));
                    },
                    onanimationend: move |evt: AnimationEvent| {
                        if !evt.animation_name().starts_with(&mask_motion) {
                            return;
                        }
                        evt.stop_propagation();
                        if let Some(ticket) = ticket {
                            if finished.borrow_mut().complete_mask(ticket) {
                                revision += 1;
                            }
                        }
                    },
                }
            }
        }
        DrawerNode::Sentinel(sentinel) => {
            let node_key = format!("sentinel-{}", sentinel_attr(sentinel));
            rsx! {
                div {
                    key: "{node_key}",
                    id: id.sentinel_id(sentinel),
                    class: "{CLASS_PREFIX}-sentinel",
                    tabindex: 0,
                    aria_hidden: "true",
                    "data-sentinel": sentinel_attr(sentinel),
                    onfocus: move |_| focused_sentinel.set(Some(sentinel)),
                    onblur: move |_| focused_sentinel.set(None),
                }
            }
        }
        DrawerNode::Panel(panel) => {
            let finished = controller.clone();
            let panel_motion = panel_motion.clone();
            let ticket = panel.ticket;
            let node_key = "panel";
            rsx! {
                div {
                    key: "{node_key}",
                    class: "{panel.wrapper_class}",
                    style: "{panel.wrapper_style}",
                    onanimationend: move |evt: AnimationEvent| {
                        if !evt.animation_name().starts_with(&panel_motion) {
                            return;
                        }
                        evt.stop_propagation();
                        let Some(ticket) = ticket else {
                            return;
                        };
                        let effects = finished.borrow_mut().complete_panel(ticket);
                        revision += 1;
                        handlers.apply(&effects, None);
                    },
                    div {
                        id: id.dom_id("panel"),
                        class: "{panel.content_class}",
                        tabindex: -1,
                        role: "dialog",
                        aria_modal: "true",
                        {children.clone()}
                    }
                }
            }
        }
    });

    rsx! {
        div {
            class: "{root_class}",
            onkeydown: onkeydown,
            {nodes}
        }
    }
}
