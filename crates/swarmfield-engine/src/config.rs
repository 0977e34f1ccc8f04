//! Scenario configuration, validation, and error types.
//!
//! Every scenario has a plain config struct with public fields and a
//! `Default` carrying the documented parameter set. `validate()` checks
//! all structural invariants; [`SimulationLoop::new`](crate::SimulationLoop::new)
//! calls it before building any state.
//!
//! Configs derive serde with `#[serde(default)]`, so a partial document
//! fills the remaining fields from the defaults.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use swarmfield_agents::actuation::check_radius;
use swarmfield_agents::{AgentError, DiscreteAgentPool};
use swarmfield_core::GridPos;
use swarmfield_propagators::{GrayScottParams, ParamError};
use swarmfield_space::{EdgeBehavior, Grid, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a config or building its scenario.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or edge behavior are invalid.
    Space(SpaceError),
    /// Agent count or interaction radius is invalid.
    Agents(AgentError),
    /// A numeric parameter is out of range.
    InvalidParameter {
        /// Config field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
    /// A region does not fit inside the grid.
    RegionOutOfBounds {
        /// Config field name.
        name: &'static str,
        /// The offending region.
        region: Region,
        /// Grid `(rows, cols)`.
        bounds: (usize, usize),
    },
    /// More raw-material particles than cells.
    TooManyParticles {
        /// Requested count.
        requested: usize,
        /// Number of cells.
        capacity: usize,
    },
    /// `ticks` is zero.
    ZeroTicks,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Agents(e) => write!(f, "agents: {e}"),
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "{name} = {value} {reason}"),
            Self::RegionOutOfBounds {
                name,
                region,
                bounds,
            } => write!(
                f,
                "{name} {region} does not fit in a {}x{} grid",
                bounds.0, bounds.1
            ),
            Self::TooManyParticles {
                requested,
                capacity,
            } => write!(
                f,
                "{requested} particles requested, grid has only {capacity} cells"
            ),
            Self::ZeroTicks => write!(f, "ticks must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Agents(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<AgentError> for ConfigError {
    fn from(e: AgentError) -> Self {
        match e {
            AgentError::Space(inner) => Self::Space(inner),
            AgentError::Param(p) => p.into(),
            other => Self::Agents(other),
        }
    }
}

impl From<ParamError> for ConfigError {
    fn from(e: ParamError) -> Self {
        Self::InvalidParameter {
            name: e.name,
            value: e.value,
            reason: e.reason,
        }
    }
}

fn check_ticks(ticks: u64) -> Result<(), ConfigError> {
    if ticks == 0 {
        return Err(ConfigError::ZeroTicks);
    }
    Ok(())
}

/// A disc radius may not exceed the larger grid dimension.
fn check_disc_radius(name: &'static str, radius: usize, grid: &Grid) -> Result<(), ConfigError> {
    let extent = grid.rows().max(grid.cols());
    if radius > extent {
        return Err(ConfigError::InvalidParameter {
            name,
            value: radius as f64,
            reason: "must not exceed the larger grid dimension",
        });
    }
    Ok(())
}

// ── Region ─────────────────────────────────────────────────────────

/// A half-open rectangle of cells: rows `row_start..row_end`, columns
/// `col_start..col_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// First row.
    pub row_start: usize,
    /// One past the last row.
    pub row_end: usize,
    /// First column.
    pub col_start: usize,
    /// One past the last column.
    pub col_end: usize,
}

impl Region {
    /// Rows `rows` and columns `cols`, both half-open.
    pub fn new(rows: std::ops::Range<usize>, cols: std::ops::Range<usize>) -> Self {
        Self {
            row_start: rows.start,
            row_end: rows.end,
            col_start: cols.start,
            col_end: cols.end,
        }
    }

    /// Whether the region has no cells.
    pub fn is_empty(&self) -> bool {
        self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.row_end.saturating_sub(self.row_start) * self.col_end.saturating_sub(self.col_start)
    }

    /// Whether `pos` lies inside the region.
    pub fn contains(&self, pos: GridPos) -> bool {
        (self.row_start..self.row_end).contains(&pos.row)
            && (self.col_start..self.col_end).contains(&pos.col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        let cols = self.col_start..self.col_end;
        (self.row_start..self.row_end)
            .flat_map(move |r| cols.clone().map(move |c| GridPos::new(r, c)))
    }

    /// Check that the region lies inside `grid`.
    pub fn check(&self, name: &'static str, grid: &Grid) -> Result<(), ConfigError> {
        if self.row_end > grid.rows() || self.col_end > grid.cols() {
            return Err(ConfigError::RegionOutOfBounds {
                name,
                region: *self,
                bounds: grid.shape(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}, {}..{}]",
            self.row_start, self.row_end, self.col_start, self.col_end
        )
    }
}

// ── RemediationConfig ──────────────────────────────────────────────

/// Gray-Scott contaminant remediation.
///
/// `U = 1, V = 0` everywhere except a centred disc (`|p - centre|² <= r²`)
/// set to `U = spill_u, V = spill_v`; then uniform noise in
/// `[0, noise_amplitude)` is added to every cell of `U`, then of `V`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// Grid rows. Default: 100.
    pub rows: usize,
    /// Grid columns. Default: 100.
    pub cols: usize,
    /// Default: periodic.
    pub edge: EdgeBehavior,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Total ticks. Default: 5000.
    pub ticks: u64,
    /// Reaction constants. Default: `F = 0.035, k = 0.065, Du = 0.16, Dv = 0.08, dt = 1`.
    pub reaction: GrayScottParams,
    /// Spill disc radius. Default: `min(rows, cols) / 8`.
    pub spill_radius: Option<usize>,
    /// `U` inside the spill. Default: 0.5.
    pub spill_u: f64,
    /// `V` inside the spill. Default: 0.25.
    pub spill_v: f64,
    /// Upper bound of the initial uniform noise. Default: 0.05.
    pub noise_amplitude: f64,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            edge: EdgeBehavior::Wrap,
            seed: 0,
            ticks: 5000,
            reaction: GrayScottParams::default(),
            spill_radius: None,
            spill_u: 0.5,
            spill_v: 0.25,
            noise_amplitude: 0.05,
        }
    }
}

impl RemediationConfig {
    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.edge)?)
    }

    /// Spill radius with the default applied.
    pub fn resolved_spill_radius(&self) -> usize {
        self.spill_radius.unwrap_or(self.rows.min(self.cols) / 8)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid.
        let grid = self.grid()?;
        // 2. At least one tick.
        check_ticks(self.ticks)?;
        // 3. Reaction constants.
        self.reaction.validate()?;
        // 4. Initial condition.
        check_disc_radius("spill_radius", self.resolved_spill_radius(), &grid)?;
        ParamError::check_finite("spill_u", self.spill_u)?;
        ParamError::check_finite("spill_v", self.spill_v)?;
        ParamError::check_non_negative("noise_amplitude", self.noise_amplitude)?;
        Ok(())
    }
}

// ── HealingConfig ──────────────────────────────────────────────────

/// Chemotaxis-driven healing with agents as a density.
///
/// Cracked cells emit a signal held at 1; the agent density drifts with
/// sensitivity `chemotactic_sensitivity` along the signal gradient and
/// repairs every cracked cell where it exceeds `repair_threshold`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealingConfig {
    /// Grid rows. Default: 60.
    pub rows: usize,
    /// Grid columns. Default: 60.
    pub cols: usize,
    /// Default: periodic.
    pub edge: EdgeBehavior,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Total ticks. Default: 150.
    pub ticks: u64,
    /// Agents dropped onto random cells, with replacement. Default: 1000.
    pub bots: usize,
    /// Signal diffusion coefficient. Default: 0.1.
    pub signal_diffusion: f64,
    /// Agent density diffusion coefficient. Default: 0.02.
    pub bot_diffusion: f64,
    /// Chemotactic sensitivity `chi`; positive values move density down
    /// the signal gradient. Default: 0.3.
    pub chemotactic_sensitivity: f64,
    /// Density above which a cracked cell is repaired. Default: 0.5.
    pub repair_threshold: f64,
    /// Time step for both diffusions. Default: 1.0.
    pub dt: f64,
    /// Cracked region. Default: rows `rows/4..3*rows/4`, columns
    /// `cols/2 - 2..cols/2 + 2`.
    pub crack: Option<Region>,
}

impl Default for HealingConfig {
    fn default() -> Self {
        Self {
            rows: 60,
            cols: 60,
            edge: EdgeBehavior::Wrap,
            seed: 0,
            ticks: 150,
            bots: 1000,
            signal_diffusion: 0.1,
            bot_diffusion: 0.02,
            chemotactic_sensitivity: 0.3,
            repair_threshold: 0.5,
            dt: 1.0,
            crack: None,
        }
    }
}

impl HealingConfig {
    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.edge)?)
    }

    /// Crack region with the default applied.
    pub fn crack_region(&self) -> Region {
        self.crack.unwrap_or_else(|| {
            let mid = self.cols / 2;
            Region::new(
                self.rows / 4..3 * self.rows / 4,
                mid.saturating_sub(2)..(mid + 2).min(self.cols),
            )
        })
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid.
        let grid = self.grid()?;
        // 2. At least one tick.
        check_ticks(self.ticks)?;
        // 3. Transport coefficients.
        ParamError::check_non_negative("signal_diffusion", self.signal_diffusion)?;
        ParamError::check_non_negative("bot_diffusion", self.bot_diffusion)?;
        ParamError::check_finite("chemotactic_sensitivity", self.chemotactic_sensitivity)?;
        ParamError::check_positive("dt", self.dt)?;
        ParamError::check_finite("repair_threshold", self.repair_threshold)?;
        // 4. Crack inside the grid.
        self.crack_region().check("crack", &grid)?;
        Ok(())
    }
}

// ── RepairConfig ───────────────────────────────────────────────────

/// Discrete crack-repair swarm.
///
/// Each agent steps greedily toward the nearest cracked cell and repairs
/// it once within Chebyshev `interaction_radius`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    /// Grid rows. Default: 50.
    pub rows: usize,
    /// Grid columns. Default: 50.
    pub cols: usize,
    /// Default: clamped.
    pub edge: EdgeBehavior,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Total ticks. Default: 100.
    pub ticks: u64,
    /// Number of agents, at most one per cell. Default: 50.
    pub agents: usize,
    /// Chebyshev reach, 0 or 1. Default: 1.
    pub interaction_radius: usize,
    /// Cracked region. Default: rows `rows/2 - 1..rows/2 + 1`, columns
    /// `cols/5..cols - cols/5`.
    pub crack: Option<Region>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            edge: EdgeBehavior::Clamp,
            seed: 0,
            ticks: 100,
            agents: 50,
            interaction_radius: 1,
            crack: None,
        }
    }
}

impl RepairConfig {
    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.edge)?)
    }

    /// Crack region with the default applied.
    pub fn crack_region(&self) -> Region {
        self.crack.unwrap_or_else(|| {
            let mid = self.rows / 2;
            let margin = self.cols / 5;
            Region::new(
                mid.saturating_sub(1)..(mid + 1).min(self.rows),
                margin..self.cols - margin,
            )
        })
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid.
        let grid = self.grid()?;
        // 2. At least one tick.
        check_ticks(self.ticks)?;
        // 3. Agent feasibility and reach.
        DiscreteAgentPool::check_count(&grid, self.agents)?;
        check_radius(self.interaction_radius)?;
        // 4. Crack inside the grid.
        self.crack_region().check("crack", &grid)?;
        Ok(())
    }
}

// ── OncologyConfig ─────────────────────────────────────────────────

/// Tumor-clearing swarm.
///
/// Tissue is healthy except for a disc of tumor cells
/// (`|p - centre|² <= tumor_radius²`). Agents eradicate tumor cells they
/// stand on; elsewhere they step toward the nearest tumor cell within
/// `sensing_radius`, or random-walk when none is in range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OncologyConfig {
    /// Grid rows. Default: 50.
    pub rows: usize,
    /// Grid columns. Default: 50.
    pub cols: usize,
    /// Default: clamped.
    pub edge: EdgeBehavior,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Total ticks. Default: 400.
    pub ticks: u64,
    /// Number of agents, at most one per cell. Default: 40.
    pub agents: usize,
    /// Tumor disc radius. Default: 8.
    pub tumor_radius: usize,
    /// Tumor disc centre. Default: `(rows / 2, cols / 2)`.
    pub tumor_centre: Option<GridPos>,
    /// Chebyshev sensing range for tumor cells. `None` (the default) is
    /// unlimited; `Some(0)` senses only the agent's own cell, which makes
    /// the search a pure random walk.
    ///
    /// The default seeks greedily because a pure random walk does not
    /// reliably finish in 400 ticks: with `Some(0)`, seeds 0 to 4 leave
    /// 9, 41, 3, 6 and 2 tumor cells, while `None` clears the whole disc
    /// for every seed in `0..200`.
    pub sensing_radius: Option<usize>,
}

impl Default for OncologyConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            edge: EdgeBehavior::Clamp,
            seed: 0,
            ticks: 400,
            agents: 40,
            tumor_radius: 8,
            tumor_centre: None,
            sensing_radius: None,
        }
    }
}

impl OncologyConfig {
    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.edge)?)
    }

    /// Tumor centre with the default applied.
    pub fn resolved_tumor_centre(&self) -> GridPos {
        self.tumor_centre
            .unwrap_or_else(|| GridPos::new(self.rows / 2, self.cols / 2))
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid.
        let grid = self.grid()?;
        // 2. At least one tick.
        check_ticks(self.ticks)?;
        // 3. Agent feasibility.
        DiscreteAgentPool::check_count(&grid, self.agents)?;
        // 4. Tumor centre inside the grid; the disc itself may be clipped.
        grid.check(self.resolved_tumor_centre())?;
        // 5. Tumor no wider than the grid.
        check_disc_radius("tumor_radius", self.tumor_radius, &grid)?;
        Ok(())
    }
}

// ── ManufacturingConfig ────────────────────────────────────────────

/// Material-transport swarm assembling a path.
///
/// Raw material starts on `particles` distinct random cells. Empty-handed
/// agents fetch the nearest material; loaded agents carry it to the
/// nearest empty path cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturingConfig {
    /// Grid rows. Default: 50.
    pub rows: usize,
    /// Grid columns. Default: 50.
    pub cols: usize,
    /// Default: clamped.
    pub edge: EdgeBehavior,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Total ticks. Default: 250.
    pub ticks: u64,
    /// Number of agents, at most one per cell. Default: 25.
    pub agents: usize,
    /// Raw-material particles, at most one per cell. Default: 150.
    pub particles: usize,
    /// Target path. Default: column `cols / 2`, rows `rows/10..rows - rows/10`.
    pub path: Option<Region>,
    /// Reward for an agent on the path. Default: 1.0.
    pub on_path_reward: f64,
    /// Reward for an agent off the path. Default: -0.1.
    pub off_path_reward: f64,
}

impl Default for ManufacturingConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            edge: EdgeBehavior::Clamp,
            seed: 0,
            ticks: 250,
            agents: 25,
            particles: 150,
            path: None,
            on_path_reward: 1.0,
            off_path_reward: -0.1,
        }
    }
}

impl ManufacturingConfig {
    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.rows, self.cols, self.edge)?)
    }

    /// Path region with the default applied.
    pub fn path_region(&self) -> Region {
        self.path.unwrap_or_else(|| {
            let margin = self.rows / 10;
            let col = self.cols / 2;
            Region::new(margin..self.rows - margin, col..col + 1)
        })
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid.
        let grid = self.grid()?;
        // 2. At least one tick.
        check_ticks(self.ticks)?;
        // 3. Agent and particle feasibility.
        DiscreteAgentPool::check_count(&grid, self.agents)?;
        if self.particles > grid.cell_count() {
            return Err(ConfigError::TooManyParticles {
                requested: self.particles,
                capacity: grid.cell_count(),
            });
        }
        // 4. Path inside the grid.
        self.path_region().check("path", &grid)?;
        // 5. Rewards.
        ParamError::check_finite("on_path_reward", self.on_path_reward)?;
        ParamError::check_finite("off_path_reward", self.off_path_reward)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_validate() {
        RemediationConfig::default().validate().unwrap();
        HealingConfig::default().validate().unwrap();
        RepairConfig::default().validate().unwrap();
        OncologyConfig::default().validate().unwrap();
        ManufacturingConfig::default().validate().unwrap();
    }

    #[test]
    fn default_regions_match_reference_layouts() {
        assert_eq!(
            RepairConfig::default().crack_region(),
            Region::new(24..26, 10..40)
        );
        assert_eq!(
            HealingConfig::default().crack_region(),
            Region::new(15..45, 28..32)
        );
        let path = ManufacturingConfig::default().path_region();
        assert_eq!(path, Region::new(5..45, 25..26));
        assert_eq!(path.cell_count(), 40);
        assert_eq!(RemediationConfig::default().resolved_spill_radius(), 12);
        assert_eq!(
            OncologyConfig::default().resolved_tumor_centre(),
            GridPos::new(25, 25)
        );
    }

    #[test]
    fn zero_size_rejected() {
        let cfg = RepairConfig {
            rows: 0,
            ..RepairConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::EmptySpace)) => {}
            other => panic!("expected EmptySpace, got {other:?}"),
        }
    }

    #[test]
    fn zero_ticks_rejected() {
        let cfg = OncologyConfig {
            ticks: 0,
            ..OncologyConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTicks));
    }

    #[test]
    fn agent_count_over_cell_count_rejected() {
        let cfg = RepairConfig {
            rows: 5,
            cols: 5,
            agents: 26,
            crack: Some(Region::new(2..3, 1..4)),
            ..RepairConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Agents(AgentError::TooManyAgents {
                requested: 26,
                capacity: 25,
            })) => {}
            other => panic!("expected TooManyAgents, got {other:?}"),
        }
    }

    #[test]
    fn radius_over_one_rejected() {
        let cfg = RepairConfig {
            interaction_radius: 2,
            ..RepairConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Agents(AgentError::InvalidRadius { radius: 2, .. })) => {}
            other => panic!("expected InvalidRadius, got {other:?}"),
        }
    }

    #[test]
    fn region_outside_grid_rejected() {
        let cfg = HealingConfig {
            crack: Some(Region::new(10..70, 0..4)),
            ..HealingConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::RegionOutOfBounds { name: "crack", .. }) => {}
            other => panic!("expected RegionOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn param_errors_name_the_field() {
        let cfg = HealingConfig {
            bot_diffusion: f64::NAN,
            ..HealingConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidParameter {
                name: "bot_diffusion",
                ..
            }) => {}
            other => panic!("expected bot_diffusion error, got {other:?}"),
        }

        let mut cfg = RemediationConfig::default();
        cfg.reaction.feed = -1.0;
        match cfg.validate() {
            Err(ConfigError::InvalidParameter { name: "feed", .. }) => {}
            other => panic!("expected feed error, got {other:?}"),
        }
    }

    #[test]
    fn too_many_particles_rejected() {
        let cfg = ManufacturingConfig {
            rows: 10,
            cols: 10,
            particles: 101,
            ..ManufacturingConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyParticles {
                requested: 101,
                capacity: 100,
            })
        );
    }

    #[test]
    fn tumor_centre_outside_grid_rejected() {
        let cfg = OncologyConfig {
            tumor_centre: Some(GridPos::new(50, 0)),
            ..OncologyConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::CoordOutOfBounds { .. })) => {}
            other => panic!("expected CoordOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn oversized_disc_radii_rejected() {
        let cfg: OncologyConfig =
            serde_json::from_str(r#"{ "tumor_radius": 18446744073709551615 }"#).unwrap();
        match cfg.validate() {
            Err(ConfigError::InvalidParameter {
                name: "tumor_radius",
                ..
            }) => {}
            other => panic!("expected InvalidParameter(tumor_radius), got {other:?}"),
        }

        let cfg = RemediationConfig {
            spill_radius: Some(1 << 33),
            ..RemediationConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidParameter {
                name: "spill_radius",
                ..
            }) => {}
            other => panic!("expected InvalidParameter(spill_radius), got {other:?}"),
        }
    }

    #[test]
    fn disc_radius_up_to_grid_extent_accepted() {
        let cfg = OncologyConfig {
            tumor_radius: 50,
            ..OncologyConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
        let cfg = RemediationConfig {
            rows: 20,
            cols: 30,
            spill_radius: Some(31),
            ..RemediationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn region_cells_row_major() {
        let r = Region::new(1..3, 4..6);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(
            cells,
            vec![
                GridPos::new(1, 4),
                GridPos::new(1, 5),
                GridPos::new(2, 4),
                GridPos::new(2, 5)
            ]
        );
        assert!(r.contains(GridPos::new(2, 5)));
        assert!(!r.contains(GridPos::new(3, 5)));
        assert!(Region::new(3..3, 0..5).is_empty());
    }

    proptest! {
        #[test]
        fn region_cells_agree_with_contains(
            rs in 0usize..12, rl in 0usize..8,
            cs in 0usize..12, cl in 0usize..8,
        ) {
            let r = Region::new(rs..rs + rl, cs..cs + cl);
            let cells: Vec<_> = r.cells().collect();
            prop_assert_eq!(cells.len(), r.cell_count());
            prop_assert!(cells.iter().all(|&p| r.contains(p)));
            prop_assert_eq!(r.is_empty(), cells.is_empty());
        }

        #[test]
        fn generated_grids_accept_their_default_regions(
            rows in 10usize..80, cols in 10usize..80,
        ) {
            let repair = RepairConfig { rows, cols, agents: 1, ..RepairConfig::default() };
            prop_assert!(repair.validate().is_ok());
            let healing = HealingConfig { rows, cols, bots: 1, ..HealingConfig::default() };
            prop_assert!(healing.validate().is_ok());
            let mfg = ManufacturingConfig {
                rows, cols, agents: 1, particles: 10, ..ManufacturingConfig::default()
            };
            prop_assert!(mfg.validate().is_ok());
        }
    }
}
