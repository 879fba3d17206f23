//! Per-render drawer inputs.

use serde::Deserialize;

use super::placement::Placement;
use super::push::{PushConfig, DEFAULT_PUSH_DISTANCE};

/// Default panel width/height in pixels.
pub const DEFAULT_PANEL_SIZE: f64 = 378.0;

/// Panel size along the placement axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Pixels.
    Px(f64),
    /// Raw CSS length such as `"40%"` or `"30rem"`.
    Css(String),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Px(DEFAULT_PANEL_SIZE)
    }
}

impl Dimension {
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(px) => format!("{px}px"),
            Self::Css(css) => css.clone(),
        }
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

/// Immutable inputs of one drawer for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerOptions {
    pub open: bool,
    pub placement: Placement,
    /// Render inside the parent element instead of covering the viewport.
    pub inline: bool,
    pub push: PushConfig,
    pub auto_focus: bool,
    /// Escape closes the drawer.
    pub keyboard: bool,
    pub mask: bool,
    pub mask_closable: bool,
    pub z_index: Option<i32>,
    pub width: Dimension,
    pub height: Dimension,
    /// Mount the panel before the first open.
    pub force_render: bool,
    /// Unmount the panel once it has finished leaving.
    pub destroy_on_close: bool,
    /// Animate transitions; when off every request settles immediately.
    pub motion: bool,
    /// Push distance used when neither this drawer nor an ancestor sets one.
    pub default_push_distance: f64,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            open: false,
            placement: Placement::default(),
            inline: false,
            push: PushConfig::default(),
            auto_focus: true,
            keyboard: true,
            mask: true,
            mask_closable: true,
            z_index: None,
            width: Dimension::default(),
            height: Dimension::default(),
            force_render: false,
            destroy_on_close: false,
            motion: true,
            default_push_distance: DEFAULT_PUSH_DISTANCE,
        }
    }
}

impl DrawerOptions {
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn push(mut self, push: impl Into<PushConfig>) -> Self {
        self.push = push.into();
        self
    }

    #[must_use]
    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub fn mask_closable(mut self, mask_closable: bool) -> Self {
        self.mask_closable = mask_closable;
        self
    }

    #[must_use]
    pub fn keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    #[must_use]
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    #[must_use]
    pub fn force_render(mut self, force_render: bool) -> Self {
        self.force_render = force_render;
        self
    }

    #[must_use]
    pub fn destroy_on_close(mut self, destroy_on_close: bool) -> Self {
        self.destroy_on_close = destroy_on_close;
        self
    }

    #[must_use]
    pub fn motion(mut self, motion: bool) -> Self {
        self.motion = motion;
        self
    }

    #[must_use]
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Size along the placement axis.
    #[must_use]
    pub fn panel_size(&self) -> &Dimension {
        if self.placement.uses_width() {
            &self.width
        } else {
            &self.height
        }
    }
}
