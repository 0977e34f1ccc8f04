//! Boundary (edge) behavior for grid stencils.

use crate::error::SpaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a grid resolves stencil neighbours that fall off its edge.
///
/// The mode is fixed per simulation variant. It governs field stencils
/// only: agent movement always clamps to the grid regardless of mode.
///
/// # Examples
///
/// ```
/// use swarmfield_space::EdgeBehavior;
///
/// assert_eq!(EdgeBehavior::Wrap.resolve(-1, 5), 4);
/// assert_eq!(EdgeBehavior::Clamp.resolve(-1, 5), 0);
/// assert_eq!("periodic".parse::<EdgeBehavior>().unwrap(), EdgeBehavior::Wrap);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeBehavior {
    /// Out-of-bounds index reuses the nearest valid index (clamp-to-edge).
    #[serde(alias = "clamped")]
    Clamp,
    /// Out-of-bounds index wraps to the opposite side (periodic, torus).
    #[serde(alias = "periodic")]
    Wrap,
}

impl EdgeBehavior {
    /// Resolve a possibly out-of-range axis index into `[0, len)`.
    ///
    /// `len` must be non-zero; [`Grid`](crate::Grid) construction
    /// guarantees this for every grid axis.
    pub fn resolve(self, val: i64, len: usize) -> usize {
        let n = len as i64;
        if (0..n).contains(&val) {
            return val as usize;
        }
        match self {
            Self::Clamp => val.clamp(0, n - 1) as usize,
            Self::Wrap => val.rem_euclid(n) as usize,
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamped"),
            Self::Wrap => write!(f, "periodic"),
        }
    }
}

impl FromStr for EdgeBehavior {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamp" | "clamped" => Ok(Self::Clamp),
            "wrap" | "periodic" => Ok(Self::Wrap),
            _ => Err(SpaceError::UnknownEdgeBehavior { name: s.to_string() }),
        }
    }
}
