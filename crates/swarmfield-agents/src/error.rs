//! Errors raised while constructing agent populations.

use std::error::Error;
use std::fmt;
use swarmfield_propagators::ParamError;
use swarmfield_space::SpaceError;

/// Agent construction failed.
#[derive(Clone, Debug, PartialEq)]
pub enum AgentError {
    /// More agents were requested than the feasibility bound allows.
    TooManyAgents {
        /// Requested count.
        requested: usize,
        /// Largest accepted count for this grid.
        capacity: usize,
    },
    /// Interaction radius outside `0..=MAX_INTERACTION_RADIUS`.
    InvalidRadius {
        /// Requested radius.
        radius: usize,
        /// Largest accepted radius.
        max: usize,
    },
    /// A density-field operator parameter was rejected.
    Param(ParamError),
    /// A grid or field error.
    Space(SpaceError),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyAgents {
                requested,
                capacity,
            } => write!(
                f,
                "{requested} agents requested, at most {capacity} fit on this grid"
            ),
            Self::InvalidRadius { radius, max } => {
                write!(f, "interaction radius {radius} exceeds maximum {max}")
            }
            Self::Param(e) => write!(f, "invalid density parameter: {e}"),
            Self::Space(e) => write!(f, "space error: {e}"),
        }
    }
}

impl Error for AgentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Param(e) => Some(e),
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for AgentError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ParamError> for AgentError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}
