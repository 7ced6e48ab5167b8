//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WindowConfig`]     – canvas extent in simulation units
//! - [`FieldConfig`]      – particle count, trail capacity, wrap margin
//! - [`ParametersConfig`] – force strength, base mass, fade opacity, seed
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario file
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! window:
//!   width: 1280.0
//!   height: 720.0
//!
//! field:
//!   particle_count: 100
//!   trail_length: 3       # trail buffer capacity
//!   margin: 100.0         # overshoot past each edge before wrapping
//!
//! parameters:
//!   gravity_strength: 50.0  # pull strength, doubles as force radius
//!   base_mass: 3.0          # base mass for spawns and respawns
//!   fade_alpha: 0.1         # per-frame translucent clear opacity
//!   seed: 42                # deterministic seed
//! ```
//!
//! Every section carries a `Default`, so a missing file (or a partial one)
//! falls back to the canonical 100-particle scenario above.

use serde::Deserialize;

/// Canvas extent the simulation runs in.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Field structure: how many particles and how they wrap.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize, // fixed for the run, particles are never destroyed
    pub trail_length: usize,   // trail buffer capacity
    pub margin: f64,           // wraparound margin past each canvas edge
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            trail_length: 3,
            margin: 100.0,
        }
    }
}

/// Numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity_strength: f64, // pull strength; also the effective force radius
    pub base_mass: f64,        // base mass for spawn/respawn rolls
    pub fade_alpha: f32,       // per-frame full-area clear opacity
    pub seed: u64,             // deterministic seed to make runs reproducible
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity_strength: 50.0,
            base_mass: 3.0,
            fade_alpha: 0.1,
            seed: 42,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub window: WindowConfig,         // canvas extent
    pub field: FieldConfig,           // particle count and wrap behavior
    pub parameters: ParametersConfig, // force/mass/fade/seed parameters
}
