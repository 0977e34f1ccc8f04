//! One-call entry points: build a loop, run it, hand back the result.

use crate::config::ConfigError;
use crate::scenario::ScenarioConfig;
use crate::sim::SimulationLoop;
use crate::snapshot::Snapshot;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use swarmfield_core::StepError;
use tracing::{debug, warn};

/// Result of a complete run.
#[derive(Clone, Debug, PartialEq)]
pub struct FinalState {
    /// State after the last tick.
    pub snapshot: Snapshot,
    /// Intermediate frames requested via [`run_capturing`], in tick order.
    pub frames: Vec<Snapshot>,
}

/// Errors from [`run`] and [`run_capturing`].
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// The config failed validation or initialization.
    Config(ConfigError),
    /// A tick failed.
    Step(StepError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Step(e) => write!(f, "run aborted: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for RunError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

/// Run the scenario described by `config` to completion.
///
/// # Example
///
/// ```
/// use swarmfield_engine::{run, OncologyConfig};
///
/// let done = run(OncologyConfig::default()).unwrap();
/// assert_eq!(done.snapshot.tick.0, 400);
/// assert!(done.frames.is_empty());
/// ```
pub fn run<C: ScenarioConfig>(config: C) -> Result<FinalState, RunError> {
    run_capturing(config, &[])
}

/// Run to completion, also snapshotting after each tick in `capture`.
///
/// Tick `0` captures the initial state. Duplicates are captured once;
/// ticks past the configured total are skipped with a warning.
pub fn run_capturing<C: ScenarioConfig>(
    config: C,
    capture: &[u64],
) -> Result<FinalState, RunError> {
    let mut sim = SimulationLoop::<C::Scenario>::new(config)?;
    let total = sim.total_ticks();

    let mut wanted: BTreeSet<u64> = BTreeSet::new();
    for &t in capture {
        if t > total {
            warn!(tick = t, total, "capture tick beyond end of run, skipped");
        } else {
            wanted.insert(t);
        }
    }

    let mut frames = Vec::with_capacity(wanted.len());
    if wanted.contains(&0) {
        frames.push(sim.snapshot());
    }
    while !sim.is_complete() {
        let tick = sim.step()?;
        if wanted.contains(&tick.0) {
            debug!(tick = tick.0, "frame captured");
            frames.push(sim.snapshot());
        }
    }

    Ok(FinalState {
        snapshot: sim.snapshot(),
        frames,
    })
}
