//! Push configuration and push distance resolution.

use super::stacking::StackingContext;

/// Distance used when neither the drawer nor an ancestor provides one.
pub const DEFAULT_PUSH_DISTANCE: f64 = 180.0;

/// How a drawer reacts when a nested drawer opens inside it.
///
/// Mirrors the `push: bool | { distance? }` option:
/// - `false` disables pushing entirely (distance forced to 0),
/// - `true` and `{}` inherit the distance,
/// - `{ distance = n }` pins it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PushConfig {
    Disabled,
    Enabled { distance: Option<f64> },
}

impl Default for PushConfig {
    fn default() -> Self {
        Self::Enabled { distance: None }
    }
}

impl From<bool> for PushConfig {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::default()
        } else {
            Self::Disabled
        }
    }
}

impl PushConfig {
    /// Push with an explicit distance in pixels.
    #[must_use]
    pub fn distance(distance: f64) -> Self {
        Self::Enabled {
            distance: valid_distance(distance),
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled { .. })
    }
}

/// Non-finite distances are treated as absent.
fn valid_distance(distance: f64) -> Option<f64> {
    distance.is_finite().then_some(distance)
}

/// Resolve the distance this drawer shifts by when pushed.
///
/// Precedence: own explicit distance, then the nearest ancestor's distance,
/// then `fallback`. `PushConfig::Disabled` always resolves to 0.
#[must_use]
pub fn resolve_push_distance(push: PushConfig, ancestor: &StackingContext, fallback: f64) -> f64 {
    match push {
        PushConfig::Disabled => 0.0,
        PushConfig::Enabled { distance } => distance
            .and_then(valid_distance)
            .or_else(|| ancestor.push_distance())
            .unwrap_or(fallback),
    }
}

impl<'de> serde::Deserialize<'de> for PushConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(PushConfigVisitor)
    }
}

struct PushConfigVisitor;

impl<'de> serde::de::Visitor<'de> for PushConfigVisitor {
    type Value = PushConfig;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a boolean or a table with an optional `distance`")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(PushConfig::from(v))
    }

    // Table → `{ distance = n }`; anything that isn't a number falls back to inheriting
    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        let mut distance = None;
        while let Some(key) = map.next_key::<String>()? {
            let value: toml::Value = map.next_value()?;
            if key != "distance" {
                log::warn!("ignoring unknown push option: {key}");
                continue;
            }
            distance = match value {
                toml::Value::Float(f) => valid_distance(f),
                #[allow(clippy::cast_precision_loss)]
                toml::Value::Integer(i) => Some(i as f64),
                other => {
                    log::warn!("push distance is not a number ({other}), using inherited distance");
                    None
                }
            };
        }
        Ok(PushConfig::Enabled { distance })
    }
}
