//! Spawn and respawn policy.
//!
//! One reusable `Spawner` covers both lifecycle entry points:
//! - `spawn` builds a fresh particle at simulation start (random in-bounds
//!   position, small mass jitter),
//! - `respawn` re-rolls a particle in place after a boundary exit (wide mass
//!   jitter, fresh velocity, color back to white).
//!
//! Particles are never destroyed; the field count is fixed for the run.

use rand::Rng;

use crate::simulation::params::Bounds;
use crate::simulation::states::{NVec2, Particle, Rgb, Trail};

/// Mass jitter applied at initial spawn: base ± 0.2.
const SPAWN_JITTER: f64 = 0.2;

/// Respawn mass jitter span: base + [0, 8) - 0.2, i.e. [base-0.2, base+7.8).
const RESPAWN_JITTER_SPAN: f64 = 8.0;

/// Lower clamp keeping mass strictly positive for any configured base.
const MASS_FLOOR: f64 = 0.1;

/// Spawn-parameter policy shared by initial construction and every respawn.
/// `base_mass` is live-updated by the host each frame and only affects
/// future rolls, never in-flight particles.
#[derive(Debug, Clone)]
pub struct Spawner {
    pub base_mass: f64,
    pub trail_length: usize,
}

impl Spawner {
    /// Build a particle at a uniformly random in-bounds position with a
    /// small mass jitter and a fresh random velocity.
    pub fn spawn(&self, bounds: &Bounds, rng: &mut impl Rng) -> Particle {
        let x = NVec2::new(
            rng.gen_range(0.0..bounds.width),
            rng.gen_range(0.0..bounds.height),
        );
        let m = (self.base_mass + rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER)).max(MASS_FLOOR);

        Particle {
            x,
            v: random_velocity(rng),
            m,
            color: Rgb::WHITE,
            trail: Trail::new(self.trail_length),
            total_distance: 0.0,
        }
    }

    /// Re-roll mass, velocity, and color after a boundary exit. Position is
    /// left alone (the boundary policy has already placed the particle at
    /// its re-entry point) and the trail is kept.
    pub fn respawn(&self, p: &mut Particle, rng: &mut impl Rng) {
        p.m = (self.base_mass + rng.gen_range(0.0..RESPAWN_JITTER_SPAN) - SPAWN_JITTER)
            .max(MASS_FLOOR);
        p.v = random_velocity(rng);
        p.color = Rgb::WHITE;
    }
}

/// Velocity uniform in [-1, 1] on each axis.
fn random_velocity(rng: &mut impl Rng) -> NVec2 {
    NVec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
}
