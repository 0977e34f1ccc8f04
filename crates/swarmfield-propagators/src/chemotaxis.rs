//! Chemotactic advection of a density field.

use crate::error::ParamError;
use swarmfield_space::{central_difference, gradient, Axis, Field, SpaceError};

/// Moves density along the gradient of a signal field.
///
/// With sensitivity `chi`, one step computes
/// ```text
/// flux_r = −chi · b · ∂s/∂row
/// flux_c = −chi · b · ∂s/∂col
/// b     −= ∂flux_r/∂row + ∂flux_c/∂col
/// ```
/// using central differences under the grid's edge behavior. Density
/// moves *against* the signal gradient when `chi > 0` and *up* the
/// gradient when `chi < 0`.
///
/// Advection does not clamp; callers that need a non-negative density
/// apply their own floor afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChemotacticAdvection {
    sensitivity: f64,
}

impl ChemotacticAdvection {
    /// Build with the given sensitivity `chi`, which must be finite.
    pub fn new(sensitivity: f64) -> Result<Self, ParamError> {
        let sensitivity = ParamError::check_finite("chemotactic_sensitivity", sensitivity)?;
        Ok(Self { sensitivity })
    }

    /// The sensitivity `chi`.
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Advance `density` by one advection step driven by `signal`.
    ///
    /// Returns `Err(SpaceError::ShapeMismatch)` if the shapes differ.
    pub fn step(&self, density: &mut Field, signal: &Field) -> Result<(), SpaceError> {
        density.ensure_same_shape(signal)?;
        if self.sensitivity == 0.0 {
            return Ok(());
        }

        let (grad_r, grad_c) = gradient(signal);
        let flux = |grad: &Field| {
            let mut out = grad.clone();
            for (f, &b) in out.as_mut_slice().iter_mut().zip(density.as_slice()) {
                *f *= -self.sensitivity * b;
            }
            out
        };
        let flux_r = flux(&grad_r);
        let flux_c = flux(&grad_c);

        density.add_scaled(&central_difference(&flux_r, Axis::Row), -1.0)?;
        density.add_scaled(&central_difference(&flux_c, Axis::Col), -1.0)?;
        Ok(())
    }
}
