//! Demo application component.
//!
//! Opens a drawer containing a button that opens a nested drawer, three
//! levels deep, so the one-hop push between neighbouring levels is visible.

use dioxus::prelude::*;

use crate::components::{body_scroll_lock_script, CloseEvent, Drawer};
use crate::drawer::{DrawerOptions, SharedScrollLock};

/// Number of nested drawer levels.
const MAX_LEVEL: usize = 3;

/// Options every demo drawer starts from, supplied as launch context.
#[derive(Debug, Clone)]
pub struct DemoSettings {
    pub base: DrawerOptions,
}

/// Main application component.
#[component]
pub fn App() -> Element {
    let settings = use_context::<DemoSettings>();
    let mut open = use_signal(|| false);

    use_context_provider(|| {
        SharedScrollLock::new(|locked| {
            log::debug!("page scroll locked={locked}");
            document::eval(body_scroll_lock_script(locked));
        })
    });

    let placement = settings.base.placement;

    rsx! {
        document::Title { "drawer-demo ({placement})" }

        div {
            class: "demo-page",

            h1 { "Drawers" }
            p {
                "Placement: {placement}. Open a drawer, then open the nested ones: "
                "each level pushes only its direct parent aside."
            }
            button {
                class: "demo-button",
                onclick: move |_| open.set(true),
                "Open drawer"
            }

            for index in 0..40 {
                p { key: "{index}", class: "demo-filler", "Scrollable page content, line {index}" }
            }

            DemoLevel { level: 1, open }
        }
    }
}

/// One drawer level; renders the next level inside its panel.
#[component]
fn DemoLevel(level: usize, open: Signal<bool>) -> Element {
    let mut open = open;
    let settings = use_context::<DemoSettings>();
    let mut nested_open = use_signal(|| false);
    let options = settings.base.clone().open(open());
    let next = level + 1;

    rsx! {
        Drawer {
            options,
            class: "demo-level-{level}",
            on_close: move |evt: CloseEvent| {
                log::info!("level {level} close requested ({:?})", evt.trigger());
                open.set(false);
            },
            after_open_change: move |visible: bool| {
                log::info!("level {level} after_open_change({visible})");
            },

            div {
                class: "demo-drawer-body",
                h2 { "Level {level}" }
                p { "Tab cycles inside this panel; Escape or a click on the mask closes it." }
                input { placeholder: "Focusable field" }
                if level < MAX_LEVEL {
                    button {
                        class: "demo-button",
                        onclick: move |_| nested_open.set(true),
                        "Open level {next}"
                    }
                    DemoLevel { level: next, open: nested_open }
                }
                button {
                    class: "demo-button",
                    onclick: move |_| open.set(false),
                    "Close"
                }
            }
        }
    }
}
