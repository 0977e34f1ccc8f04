//! The tick-driven simulation loop.

use crate::config::ConfigError;
use crate::scenario::{Scenario, ScenarioConfig};
use crate::snapshot::Snapshot;
use swarmfield_core::{seeded_rng, SimRng, StepError, TickId};
use swarmfield_space::SpaceError;
use tracing::{debug, info, trace};

/// Lifecycle of a [`SimulationLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Built (or reset); no tick has run.
    Initialized,
    /// At least one tick has run and more remain.
    Running,
    /// The configured tick count has been reached.
    Completed,
}

/// Single-threaded driver for one scenario.
///
/// Created from a scenario config via [`new()`](SimulationLoop::new).
/// Each [`step()`](SimulationLoop::step) runs one complete tick: the
/// scenario's field phase, then its agent phase, then the tick counter
/// advances. After `ticks` steps the loop is [`RunState::Completed`] and
/// further steps return [`StepError::Completed`]. There is no early
/// termination; callers inspect the state themselves.
///
/// The loop owns the run's only RNG. Two loops built from equal configs
/// produce bit-identical state at every tick.
///
/// # Example
///
/// ```
/// use swarmfield_engine::{RepairConfig, SimulationLoop, RepairScenario};
///
/// let mut sim = SimulationLoop::<RepairScenario>::new(RepairConfig::default()).unwrap();
/// sim.run_to_completion().unwrap();
/// assert_eq!(sim.current_tick().0, 100);
/// assert_eq!(sim.scenario().cracked_cells(), 0);
/// ```
pub struct SimulationLoop<S: Scenario> {
    config: S::Config,
    scenario: S,
    rng: SimRng,
    seed: u64,
    tick: TickId,
    state: RunState,
}

impl<S: Scenario> SimulationLoop<S> {
    /// Validate `config` and build the initial state.
    ///
    /// The RNG is seeded from `config.seed()` before the scenario draws
    /// its initial placement.
    pub fn new(config: S::Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed();
        let mut rng = seeded_rng(seed);
        let scenario = S::init(&config, &mut rng)?;
        info!(
            scenario = S::NAME,
            seed,
            ticks = config.ticks(),
            "simulation initialized"
        );
        Ok(Self {
            config,
            scenario,
            rng,
            seed,
            tick: TickId(0),
            state: RunState::Initialized,
        })
    }

    /// Execute one tick.
    ///
    /// Returns the tick just completed.
    ///
    /// # Errors
    ///
    /// [`StepError::Completed`] once the configured tick count has been
    /// reached; the state is left untouched. [`StepError::UpdateFailed`]
    /// if a phase reports a field error.
    pub fn step(&mut self) -> Result<TickId, StepError> {
        let total = self.config.ticks();
        if self.state == RunState::Completed {
            return Err(StepError::Completed { ticks: total });
        }
        self.state = RunState::Running;

        let tick = self.tick.next();
        let failed = |e: SpaceError| StepError::UpdateFailed {
            tick: tick.0,
            reason: e.to_string(),
        };
        self.scenario.advance_field(&mut self.rng).map_err(failed)?;
        self.scenario.advance_agents(&mut self.rng).map_err(failed)?;
        self.tick = tick;
        trace!(tick = tick.0, "tick complete");

        if tick.0 >= total {
            self.state = RunState::Completed;
            info!(scenario = S::NAME, ticks = total, "simulation completed");
        }
        Ok(tick)
    }

    /// Step until [`RunState::Completed`]. Returns the final tick.
    pub fn run_to_completion(&mut self) -> Result<TickId, StepError> {
        while self.state != RunState::Completed {
            self.step()?;
        }
        Ok(self.tick)
    }

    /// Rebuild the initial state from the same config with a new seed.
    ///
    /// On error the loop is left unchanged.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        let mut rng = seeded_rng(seed);
        let scenario = S::init(&self.config, &mut rng)?;
        self.scenario = scenario;
        self.rng = rng;
        self.seed = seed;
        self.tick = TickId(0);
        self.state = RunState::Initialized;
        debug!(scenario = S::NAME, seed, "simulation reset");
        Ok(())
    }

    /// Deep copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scenario: S::NAME,
            tick: self.tick,
            layers: self
                .scenario
                .layers()
                .into_iter()
                .map(|(name, field)| (name.to_string(), field.clone()))
                .collect(),
            agents: self.scenario.population(),
        }
    }

    /// The scenario, for scenario-specific queries.
    pub fn scenario(&self) -> &S {
        &self.scenario
    }

    /// The config this loop was built from.
    pub fn config(&self) -> &S::Config {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the configured tick count has been reached.
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Completed
    }

    /// Ticks completed so far (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Configured total tick count.
    pub fn total_ticks(&self) -> u64 {
        self.config.ticks()
    }

    /// Seed of the current run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<S: Scenario> std::fmt::Debug for SimulationLoop<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationLoop")
            .field("scenario", &S::NAME)
            .field("current_tick", &self.tick)
            .field("total_ticks", &self.config.ticks())
            .field("state", &self.state)
            .field("seed", &self.seed)
            .finish()
    }
}
