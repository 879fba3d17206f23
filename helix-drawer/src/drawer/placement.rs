//! Drawer placement and the geometry derived from it.

use serde::Deserialize;

/// Edge of the viewport the panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

/// Translation axis of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }
}

impl Placement {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Axis along which the panel slides and gets pushed.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
        }
    }

    /// Direction a pushed panel moves in: away from its own edge.
    ///
    /// `left`/`top` move in the positive direction, `right`/`bottom` in the negative one.
    #[must_use]
    pub const fn push_sign(self) -> f64 {
        match self {
            Self::Left | Self::Top => 1.0,
            Self::Right | Self::Bottom => -1.0,
        }
    }

    /// Whether the configured width (rather than height) sizes the panel.
    #[must_use]
    pub const fn uses_width(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// CSS transform for a panel pushed by `distance` pixels.
    ///
    /// Returns `None` when the distance is zero, so a pushed drawer with
    /// `push = false` keeps its position.
    #[must_use]
    pub fn push_transform(self, distance: f64) -> Option<String> {
        if distance == 0.0 || !distance.is_finite() {
            return None;
        }
        let offset = self.push_sign() * distance;
        Some(format!("translate{}({offset}px)", self.axis().as_str()))
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown placement: {other}")),
        }
    }
}
