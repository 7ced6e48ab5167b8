//! Fixed-step frame advance for the particle field.
//!
//! One call to [`advance`] is one frame: per particle, apply the pointer
//! force (if any), record the trail, integrate position with explicit Euler
//! (one unit of simulated time per frame), handle the boundary, and
//! accumulate the speed statistic. Single-threaded by design; the caller is
//! the sole mutator of the field.

use rand::Rng;

use super::forces::GravityWell;
use super::params::{Bounds, FieldInputs};
use super::spawn::Spawner;
use super::states::{Field, Particle, Rgb};

/// Advance the field by one frame.
///
/// The pointer position and scalars in `inputs` are read once here; absence
/// of a pointer means zero force and a white color reset for every particle.
pub fn advance(
    field: &mut Field,
    inputs: &FieldInputs,
    bounds: &Bounds,
    spawner: &Spawner,
    rng: &mut impl Rng,
) {
    // At most one force source per frame, built from the pointer if present.
    let well = inputs.pointer.map(|pos| GravityWell {
        pos,
        strength: inputs.strength,
    });

    for p in field.particles.iter_mut() {
        match &well {
            Some(w) => w.apply(p),
            // No active source: no kick, color back to neutral.
            None => p.color = Rgb::WHITE,
        }
        step_particle(p, bounds, spawner, rng);
    }

    field.t += 1;
}

/// One Euler step for a single particle:
/// trail record, `x += v`, boundary wrap -> respawn, speed statistic.
fn step_particle(p: &mut Particle, bounds: &Bounds, spawner: &Spawner, rng: &mut impl Rng) {
    // Record the pre-step position; the trail evicts its oldest sample.
    p.trail.record(p.x);

    // Explicit Euler with dt = 1 frame.
    p.x += p.v;

    // Boundary transition: wrap to the opposite margin edge and re-roll
    // mass/velocity/color through the shared spawn policy.
    if let Some(reentry) = bounds.wrap(p.x) {
        p.x = reentry;
        spawner.respawn(p, rng);
    }

    // Speed, not displacement: respawns contribute their fresh velocity.
    p.total_distance += p.v.norm();
}
