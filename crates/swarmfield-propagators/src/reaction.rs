//! Gray-Scott two-species reaction-diffusion.

use crate::error::ParamError;
use crate::STENCIL_STABILITY_LIMIT;
use serde::{Deserialize, Serialize};
use swarmfield_space::{laplacian, Field, SpaceError};

/// Gray-Scott rate constants and time step.
///
/// Field names follow the usual notation: `feed` is `F`, `kill` is `k`,
/// `du`/`dv` are the diffusion coefficients of `U` and `V`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayScottParams {
    /// Feed rate `F`.
    pub feed: f64,
    /// Kill rate `k`.
    pub kill: f64,
    /// Diffusion coefficient of `U`.
    pub du: f64,
    /// Diffusion coefficient of `V`.
    pub dv: f64,
    /// Time step.
    pub dt: f64,
}

impl Default for GrayScottParams {
    /// The spot-forming regime `F = 0.035, k = 0.065, Du = 0.16, Dv = 0.08`
    /// at `dt = 1`.
    fn default() -> Self {
        Self {
            feed: 0.035,
            kill: 0.065,
            du: 0.16,
            dv: 0.08,
            dt: 1.0,
        }
    }
}

impl GrayScottParams {
    /// Check every parameter. Rates and coefficients must be finite and
    /// `>= 0`; `dt` must be finite and `> 0`.
    pub fn validate(&self) -> Result<(), ParamError> {
        ParamError::check_non_negative("feed", self.feed)?;
        ParamError::check_non_negative("kill", self.kill)?;
        ParamError::check_non_negative("du", self.du)?;
        ParamError::check_non_negative("dv", self.dv)?;
        ParamError::check_positive("dt", self.dt)?;
        Ok(())
    }
}

/// A validated Gray-Scott operator.
///
/// Each step computes, from start-of-step values only:
/// ```text
/// dU = Du·∇²U − U·V² + F·(1 − U)
/// dV = Dv·∇²V + U·V² − (F + k)·V
/// U += dt·dU
/// V += dt·dV
/// ```
/// No clamping is applied; for stable parameters both fields stay in
/// `[0, 1]` on their own.
///
/// ```
/// use swarmfield_propagators::{GrayScott, GrayScottParams};
/// use swarmfield_space::{EdgeBehavior, Field, Grid};
///
/// let gs = GrayScott::new(GrayScottParams::default()).unwrap();
/// let grid = Grid::new(8, 8, EdgeBehavior::Wrap).unwrap();
/// let mut u = Field::filled(grid, 1.0);
/// let mut v = Field::filled(grid, 0.0);
/// gs.step(&mut u, &mut v).unwrap();
/// // U = 1, V = 0 is a fixed point.
/// assert!(u.as_slice().iter().all(|&x| x == 1.0));
/// assert!(v.as_slice().iter().all(|&x| x == 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayScott {
    params: GrayScottParams,
}

impl GrayScott {
    /// Validate `params` and build the operator.
    pub fn new(params: GrayScottParams) -> Result<Self, ParamError> {
        params.validate()?;
        if !Self::params_stable(&params) {
            tracing::warn!(
                du = params.du,
                dv = params.dv,
                dt = params.dt,
                "gray-scott step exceeds the explicit-Euler stability bound"
            );
        }
        Ok(Self { params })
    }

    /// The operator's parameters.
    pub fn params(&self) -> &GrayScottParams {
        &self.params
    }

    /// Whether `max(Du, Dv) * dt` is within the explicit-Euler bound.
    pub fn is_stable(&self) -> bool {
        Self::params_stable(&self.params)
    }

    fn params_stable(p: &GrayScottParams) -> bool {
        p.du.max(p.dv) * p.dt <= STENCIL_STABILITY_LIMIT
    }

    /// Advance `u` and `v` by one step.
    ///
    /// Returns `Err(SpaceError::ShapeMismatch)` if the fields differ in
    /// shape; neither field is modified in that case.
    pub fn step(&self, u: &mut Field, v: &mut Field) -> Result<(), SpaceError> {
        u.ensure_same_shape(v)?;
        let GrayScottParams {
            feed,
            kill,
            du,
            dv,
            dt,
        } = self.params;

        let lap_u = laplacian(u);
        let lap_v = laplacian(v);
        let cells = u
            .as_mut_slice()
            .iter_mut()
            .zip(v.as_mut_slice().iter_mut())
            .zip(lap_u.as_slice().iter().zip(lap_v.as_slice()));
        for ((uu, vv), (&lu, &lv)) in cells {
            let uvv = *uu * *vv * *vv;
            let d_u = du * lu - uvv + feed * (1.0 - *uu);
            let d_v = dv * lv + uvv - (feed + kill) * *vv;
            *uu += dt * d_u;
            *vv += dt * d_v;
        }
        Ok(())
    }
}
