//! Explicit-Euler scalar diffusion with sources and clamping.
//!
//! Constructed via the builder pattern: [`ScalarDiffusion::builder`].

use crate::error::ParamError;
use crate::STENCIL_STABILITY_LIMIT;
use swarmfield_core::GridPos;
use swarmfield_space::{laplacian, Field};

/// One explicit-Euler diffusion step.
///
/// Each call computes:
/// ```text
/// f[i] += coefficient * dt * laplacian(f)[i]
/// ```
/// reading only start-of-step values, then applies post-processing in
/// this order:
///
/// 1. every source cell is overwritten with the source value;
/// 2. every cell is clamped into `[clamp_min, clamp_max]` (each bound
///    optional).
///
/// Source cells may be fixed at build time ([`ScalarDiffusionBuilder::source`])
/// or passed per step ([`ScalarDiffusion::step_with_sources`]) when the
/// source set changes as the simulation runs.
///
/// The scheme is stable while `coefficient * dt <= 0.25`. Larger values
/// are accepted (a warning is logged at build time) and may oscillate or
/// diverge.
///
/// ```
/// use swarmfield_core::GridPos;
/// use swarmfield_propagators::ScalarDiffusion;
/// use swarmfield_space::{EdgeBehavior, Field, Grid};
///
/// let diffusion = ScalarDiffusion::builder()
///     .coefficient(0.1)
///     .clamp(0.0, 1.0)
///     .build()
///     .unwrap();
///
/// let grid = Grid::new(5, 5, EdgeBehavior::Wrap).unwrap();
/// let mut f = Field::filled(grid, 0.0);
/// diffusion.step_with_sources(&mut f, [GridPos::new(2, 2)]);
/// assert_eq!(f[GridPos::new(2, 2)], 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDiffusion {
    coefficient: f64,
    dt: f64,
    source_value: f64,
    sources: Vec<GridPos>,
    clamp_min: Option<f64>,
    clamp_max: Option<f64>,
}

/// Builder for [`ScalarDiffusion`].
///
/// Defaults: zero coefficient, `dt = 1`, source value `1`, no fixed
/// sources, no clamping.
#[derive(Clone, Debug)]
pub struct ScalarDiffusionBuilder {
    coefficient: f64,
    dt: f64,
    source_value: f64,
    sources: Vec<GridPos>,
    clamp_min: Option<f64>,
    clamp_max: Option<f64>,
}

impl ScalarDiffusion {
    /// Create a new builder.
    pub fn builder() -> ScalarDiffusionBuilder {
        ScalarDiffusionBuilder {
            coefficient: 0.0,
            dt: 1.0,
            source_value: 1.0,
            sources: Vec::new(),
            clamp_min: None,
            clamp_max: None,
        }
    }

    /// Diffusion coefficient `D`.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Largest `dt` that keeps this coefficient stable, or `None` when the
    /// coefficient is zero.
    pub fn max_stable_dt(&self) -> Option<f64> {
        max_stable_dt(self.coefficient)
    }

    /// Whether `coefficient * dt` is within the explicit-Euler bound.
    pub fn is_stable(&self) -> bool {
        self.coefficient * self.dt <= STENCIL_STABILITY_LIMIT
    }

    /// Advance `field` by one step using only the fixed sources.
    pub fn step(&self, field: &mut Field) {
        self.step_with_sources(field, std::iter::empty());
    }

    /// Advance `field` by one step. `extra_sources` are held at the source
    /// value in addition to the fixed sources; positions outside the grid
    /// are ignored.
    pub fn step_with_sources(
        &self,
        field: &mut Field,
        extra_sources: impl IntoIterator<Item = GridPos>,
    ) {
        if self.coefficient > 0.0 {
            let lap = laplacian(field);
            let rate = self.coefficient * self.dt;
            for (v, l) in field.as_mut_slice().iter_mut().zip(lap.as_slice()) {
                *v += rate * l;
            }
        }

        for pos in self.sources.iter().copied().chain(extra_sources) {
            if field.grid().contains(pos) {
                field[pos] = self.source_value;
            }
        }

        match (self.clamp_min, self.clamp_max) {
            (Some(lo), Some(hi)) => field.clamp_in_place(lo, hi),
            (Some(lo), None) => field.map_in_place(|v| v.max(lo)),
            (None, Some(hi)) => field.map_in_place(|v| v.min(hi)),
            (None, None) => {}
        }
    }
}

/// `1 / (4 D)` for `D > 0`.
pub fn max_stable_dt(coefficient: f64) -> Option<f64> {
    (coefficient > 0.0).then(|| STENCIL_STABILITY_LIMIT / coefficient)
}

impl ScalarDiffusionBuilder {
    /// Set the diffusion coefficient. Must be finite and `>= 0`.
    pub fn coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    /// Set the time step. Must be finite and `> 0`.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Value written into source cells after each step.
    pub fn source_value(mut self, value: f64) -> Self {
        self.source_value = value;
        self
    }

    /// Add a fixed source cell.
    pub fn source(mut self, pos: GridPos) -> Self {
        self.sources.push(pos);
        self
    }

    /// Add several fixed source cells.
    pub fn sources(mut self, positions: impl IntoIterator<Item = GridPos>) -> Self {
        self.sources.extend(positions);
        self
    }

    /// Lower bound applied after every step.
    pub fn clamp_min(mut self, lo: f64) -> Self {
        self.clamp_min = Some(lo);
        self
    }

    /// Upper bound applied after every step.
    pub fn clamp_max(mut self, hi: f64) -> Self {
        self.clamp_max = Some(hi);
        self
    }

    /// Clamp every cell into `[lo, hi]` after every step.
    pub fn clamp(self, lo: f64, hi: f64) -> Self {
        self.clamp_min(lo).clamp_max(hi)
    }

    /// Validate and build.
    pub fn build(self) -> Result<ScalarDiffusion, ParamError> {
        let coefficient = ParamError::check_non_negative("coefficient", self.coefficient)?;
        let dt = ParamError::check_positive("dt", self.dt)?;
        ParamError::check_finite("source_value", self.source_value)?;
        if let Some(lo) = self.clamp_min {
            ParamError::check_finite("clamp_min", lo)?;
        }
        if let Some(hi) = self.clamp_max {
            ParamError::check_finite("clamp_max", hi)?;
        }
        if let (Some(lo), Some(hi)) = (self.clamp_min, self.clamp_max) {
            if lo > hi {
                return Err(ParamError {
                    name: "clamp_min",
                    value: lo,
                    reason: "must not exceed clamp_max",
                });
            }
        }

        if coefficient * dt > STENCIL_STABILITY_LIMIT {
            tracing::warn!(
                coefficient,
                dt,
                limit = STENCIL_STABILITY_LIMIT,
                "diffusion step exceeds the explicit-Euler stability bound"
            );
        }

        Ok(ScalarDiffusion {
            coefficient,
            dt,
            source_value: self.source_value,
            sources: self.sources,
            clamp_min: self.clamp_min,
            clamp_max: self.clamp_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use swarmfield_space::{EdgeBehavior, Grid};
    use swarmfield_test_utils::strategies::arb_grid;
    use swarmfield_test_utils::{clamp_grid, spike, wrap_grid};

    fn grid(edge: EdgeBehavior) -> Grid {
        match edge {
            EdgeBehavior::Wrap => wrap_grid(5, 5),
            EdgeBehavior::Clamp => clamp_grid(5, 5),
        }
    }

    #[test]
    fn single_step_spreads_quarter_rate() {
        let d = ScalarDiffusion::builder().coefficient(0.1).build().unwrap();
        let mut f = spike(grid(EdgeBehavior::Clamp), GridPos::new(2, 2));
        d.step(&mut f);
        assert!((f[GridPos::new(2, 2)] - 0.6).abs() < 1e-12);
        assert!((f[GridPos::new(1, 2)] - 0.1).abs() < 1e-12);
        assert_eq!(f[GridPos::new(1, 1)], 0.0);
    }

    #[test]
    fn zero_coefficient_is_identity() {
        let d = ScalarDiffusion::builder().build().unwrap();
        let mut f = spike(grid(EdgeBehavior::Wrap), GridPos::new(2, 2));
        let before = f.clone();
        d.step(&mut f);
        assert_eq!(f, before);
    }

    #[test]
    fn mass_conserved_without_sources_or_clamp() {
        for edge in [EdgeBehavior::Wrap, EdgeBehavior::Clamp] {
            let d = ScalarDiffusion::builder().coefficient(0.2).build().unwrap();
            let mut f = Field::from_fn(grid(edge), |p| (p.row * 5 + p.col) as f64 / 25.0);
            let mass = f.sum();
            for _ in 0..50 {
                d.step(&mut f);
            }
            assert!((f.sum() - mass).abs() < 1e-9, "{edge}");
        }
    }

    #[test]
    fn sources_applied_before_clamp() {
        let d = ScalarDiffusion::builder()
            .coefficient(0.1)
            .source_value(5.0)
            .source(GridPos::new(0, 0))
            .clamp(0.0, 1.0)
            .build()
            .unwrap();
        let mut f = Field::filled(grid(EdgeBehavior::Clamp), 0.0);
        d.step(&mut f);
        assert_eq!(f[GridPos::new(0, 0)], 1.0);
    }

    #[test]
    fn per_step_sources_out_of_bounds_ignored() {
        let d = ScalarDiffusion::builder().build().unwrap();
        let mut f = Field::filled(grid(EdgeBehavior::Clamp), 0.0);
        d.step_with_sources(&mut f, [GridPos::new(9, 9), GridPos::new(4, 4)]);
        assert_eq!(f.sum(), 1.0);
        assert_eq!(f[GridPos::new(4, 4)], 1.0);
    }

    #[test]
    fn one_sided_clamp() {
        let d = ScalarDiffusion::builder().clamp_min(0.0).build().unwrap();
        let mut f = Field::from_vec(Grid::new(1, 3, EdgeBehavior::Clamp).unwrap(), vec![-1.0, 2.0, 0.5])
            .unwrap();
        d.step(&mut f);
        assert_eq!(f.as_slice(), &[0.0, 2.0, 0.5]);
    }

    #[test]
    fn build_rejects_invalid_parameters() {
        match ScalarDiffusion::builder().coefficient(-0.1).build() {
            Err(ParamError { name: "coefficient", .. }) => {}
            other => panic!("expected coefficient error, got {other:?}"),
        }
        match ScalarDiffusion::builder().dt(0.0).build() {
            Err(ParamError { name: "dt", .. }) => {}
            other => panic!("expected dt error, got {other:?}"),
        }
        match ScalarDiffusion::builder().clamp(1.0, 0.0).build() {
            Err(ParamError { name: "clamp_min", .. }) => {}
            other => panic!("expected clamp error, got {other:?}"),
        }
    }

    #[test]
    fn stability_bound() {
        let d = ScalarDiffusion::builder().coefficient(0.1).build().unwrap();
        assert_eq!(d.max_stable_dt(), Some(2.5));
        assert!(d.is_stable());
        let fast = ScalarDiffusion::builder().coefficient(0.1).dt(3.0).build().unwrap();
        assert!(!fast.is_stable());
        assert_eq!(max_stable_dt(0.0), None);
    }

    proptest! {
        #[test]
        fn unclamped_diffusion_conserves_mass(
            grid in arb_grid(16),
            coefficient in 0.0f64..0.25,
            seed in 0usize..1000,
        ) {
            let d = ScalarDiffusion::builder().coefficient(coefficient).build().unwrap();
            let mut f = Field::from_fn(grid, |p| ((p.row * 31 + p.col * 17 + seed) % 11) as f64);
            let mass = f.sum();
            for _ in 0..10 {
                d.step(&mut f);
            }
            prop_assert!((f.sum() - mass).abs() < 1e-9 * mass.max(1.0));
        }
    }
}
