//! Benchmark profiles for the swarmfield simulation workspace.
//!
//! - [`remediation_profile`]: the 100x100 Gray-Scott reference grid
//! - [`remediation_stress_profile`]: 316x316 (~100K cells)
//! - [`healing_profile`]: the 60x60 continuum reference with 1000 bots
//! - [`swarm_profile`]: a discrete-agent grid at arbitrary scale

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swarmfield_engine::{HealingConfig, OncologyConfig, RemediationConfig};

/// Gray-Scott on 100x100 with the reference constants.
pub fn remediation_profile(seed: u64) -> RemediationConfig {
    RemediationConfig {
        seed,
        ..RemediationConfig::default()
    }
}

/// Gray-Scott on 316x316 with the reference constants.
pub fn remediation_stress_profile(seed: u64) -> RemediationConfig {
    RemediationConfig {
        rows: 316,
        cols: 316,
        seed,
        ..RemediationConfig::default()
    }
}

/// Continuum healing at the reference size.
pub fn healing_profile(seed: u64) -> HealingConfig {
    HealingConfig {
        seed,
        ..HealingConfig::default()
    }
}

/// Oncology with `agents` hunters on a `side x side` grid and a tumor
/// scaled to an eighth of the side.
///
/// Ticks are effectively unbounded so a benchmark can step it freely.
pub fn swarm_profile(side: usize, agents: usize, seed: u64) -> OncologyConfig {
    OncologyConfig {
        rows: side,
        cols: side,
        agents,
        tumor_radius: (side / 8).max(1),
        ticks: u64::MAX,
        seed,
        ..OncologyConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        remediation_profile(0).validate().unwrap();
        remediation_stress_profile(0).validate().unwrap();
        healing_profile(0).validate().unwrap();
        swarm_profile(200, 500, 0).validate().unwrap();
    }

    #[test]
    fn stress_is_ten_times_reference() {
        let r = remediation_profile(0);
        let s = remediation_stress_profile(0);
        assert!(s.rows * s.cols >= 10 * r.rows * r.cols - 1_000);
    }
}
