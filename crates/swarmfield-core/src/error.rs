//! Step-level error type for the simulation loop.

use std::error::Error;
use std::fmt;

/// Errors from advancing a simulation loop.
///
/// An empty target set is not an error (agents hold position), and
/// numeric drift is not detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// `step()` was called after the configured tick count was reached.
    Completed {
        /// The configured total tick count.
        ticks: u64,
    },
    /// A field or population update failed part-way through a tick.
    ///
    /// The loop's state is unspecified afterwards; rebuild or `reset` it.
    UpdateFailed {
        /// The tick that was being computed.
        tick: u64,
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { ticks } => {
                write!(f, "simulation already completed all {ticks} ticks")
            }
            Self::UpdateFailed { tick, reason } => {
                write!(f, "update failed at tick {tick}: {reason}")
            }
        }
    }
}

impl Error for StepError {}
