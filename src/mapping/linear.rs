//! Linear range mapping

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::value::{maximum, minimum, Mappable};

/// Clipping applied to the result of [`linlin`]
///
/// Bounds are taken from the destination range after ordering it, so `Max`
/// always clamps at the larger of `y1`/`y2` and `Min` at the smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipMode {
    /// Extrapolate freely (default)
    #[default]
    None,
    /// Clamp at the floor of the destination range
    Min,
    /// Clamp at the ceiling of the destination range
    Max,
    /// Clamp on both sides
    #[serde(rename = "minmax")]
    MinMax,
}

impl ClipMode {
    /// Name used for parsing and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipMode::None => "none",
            ClipMode::Min => "min",
            ClipMode::Max => "max",
            ClipMode::MinMax => "minmax",
        }
    }
}

impl fmt::Display for ClipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"none"` disables clipping, `"min"` and `"max"` select one side; any
/// other name clips both sides.
impl From<&str> for ClipMode {
    fn from(name: &str) -> Self {
        match name {
            "none" => ClipMode::None,
            "min" => ClipMode::Min,
            "max" => ClipMode::Max,
            _ => ClipMode::MinMax,
        }
    }
}

impl From<Option<&str>> for ClipMode {
    fn from(name: Option<&str>) -> Self {
        name.map_or(ClipMode::None, ClipMode::from)
    }
}

impl FromStr for ClipMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClipMode::from(s))
    }
}

/// Map `value` linearly so that `x1` lands on `y1` and `x2` on `y2`
///
/// Extrapolates outside `[x1, x2]` unless `clip` says otherwise. The ranges
/// may run in either direction. `x1 == x2` is not checked and yields
/// infinities or NaN.
pub fn linlin<V: Mappable>(
    value: V,
    x1: V::Elem,
    x2: V::Elem,
    y1: V::Elem,
    y2: V::Elem,
    clip: ClipMode,
) -> V::Output {
    let (floor, ceiling) = if y1 > y2 { (y2, y1) } else { (y1, y2) };

    value.map_each(|v| {
        let z = (v - x1) / (x2 - x1) * (y2 - y1) + y1;
        match clip {
            ClipMode::None => z,
            ClipMode::Min => maximum(z, floor),
            ClipMode::Max => minimum(z, ceiling),
            ClipMode::MinMax => minimum(maximum(z, floor), ceiling),
        }
    })
}
