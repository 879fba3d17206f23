//! Render description produced by the controller.
//!
//! The Dioxus component renders these nodes as-is; keeping them plain data
//! lets the DOM order, classes and inline styles be checked without a renderer.

use super::focus_trap::Sentinel;
use super::motion::MotionTicket;

/// CSS class prefix of every drawer element.
pub const CLASS_PREFIX: &str = "drawer";

/// Class marking a retained panel that has finished leaving.
pub const LEAVED_CLASS: &str = "drawer-content-wrapper-hidden";

/// Mask (backdrop) element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskLayout {
    pub class: String,
    pub style: String,
    /// Ticket the element's animation end has to report, while animating.
    pub ticket: Option<MotionTicket>,
}

/// Panel wrapper plus the focusable content inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub wrapper_class: String,
    pub wrapper_style: String,
    pub content_class: String,
    pub ticket: Option<MotionTicket>,
    /// The panel finished leaving and is only kept mounted.
    pub leaved: bool,
}

/// One element of the drawer, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerNode {
    Mask(MaskLayout),
    Sentinel(Sentinel),
    Panel(PanelLayout),
}

/// Everything a drawer renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawerLayout {
    pub root_class: String,
    /// Empty when the drawer renders nothing at all.
    pub nodes: Vec<DrawerNode>,
}

impl DrawerLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn mask(&self) -> Option<&MaskLayout> {
        self.nodes.iter().find_map(|node| match node {
            DrawerNode::Mask(mask) => Some(mask),
            _ => None,
        })
    }

    #[must_use]
    pub fn panel(&self) -> Option<&PanelLayout> {
        self.nodes.iter().find_map(|node| match node {
            DrawerNode::Panel(panel) => Some(panel),
            _ => None,
        })
    }
}

/// Join class names, skipping empty ones.
pub(crate) fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join `property: value` declarations into an inline style.
pub(crate) fn inline_style(declarations: &[(&str, Option<String>)]) -> String {
    declarations
        .iter()
        .filter_map(|(property, value)| value.as_ref().map(|value| format!("{property}: {value};")))
        .collect::<Vec<_>>()
        .join(" ")
}
