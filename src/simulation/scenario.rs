//! Build a fully-initialized simulation scenario from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - canvas bounds with the wraparound margin (`Bounds`)
//! - the particle field at t = 0 (`Field`)
//! - the spawn policy and the seeded random source
//!
//! The visualization layer owns a `Scenario` and drives it once per frame.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::integrator::advance;
use crate::simulation::params::{Bounds, FieldInputs, Parameters};
use crate::simulation::spawn::Spawner;
use crate::simulation::states::Field;

/// Runtime bundle for one simulation run. Constructed once from a
/// [`ScenarioConfig`]; the frame loop is its sole mutator.
pub struct Scenario {
    pub parameters: Parameters,
    pub bounds: Bounds,
    pub field: Field,
    pub spawner: Spawner,
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            gravity_strength: p_cfg.gravity_strength,
            base_mass: p_cfg.base_mass,
            trail_length: cfg.field.trail_length,
            fade_alpha: p_cfg.fade_alpha,
            seed: p_cfg.seed,
        };

        let bounds = Bounds {
            width: cfg.window.width,
            height: cfg.window.height,
            margin: cfg.field.margin,
        };

        let spawner = Spawner {
            base_mass: parameters.base_mass,
            trail_length: parameters.trail_length,
        };

        // Deterministic runs: one seeded rng drives spawn and respawn rolls
        let mut rng = StdRng::seed_from_u64(parameters.seed);

        // Particles: fixed count, randomized in-bounds positions at t = 0
        let particles = (0..cfg.field.particle_count)
            .map(|_| spawner.spawn(&bounds, &mut rng))
            .collect();

        let field = Field { particles, t: 0 };

        Self {
            parameters,
            bounds,
            field,
            spawner,
            rng,
        }
    }

    /// Advance the field by one frame with the given external inputs.
    /// Live base-mass changes land in the spawner here, so they affect only
    /// future respawns.
    pub fn advance(&mut self, inputs: &FieldInputs) {
        self.spawner.base_mass = inputs.base_mass;
        advance(
            &mut self.field,
            inputs,
            &self.bounds,
            &self.spawner,
            &mut self.rng,
        );
    }
}
