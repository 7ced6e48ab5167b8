//! Runtime parameters and per-frame inputs for the simulation.
//!
//! `Parameters` holds the settings fixed at scenario build time:
//! - initial force strength and base mass,
//! - trail capacity and fade opacity,
//! - random seed.
//!
//! `Bounds` is the canvas extent plus the wraparound margin, and owns the
//! boundary predicate. `FieldInputs` is the explicit per-frame input context
//! (pointer position and live scalars) read by the integrator.

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity_strength: f64, // initial pull strength, doubles as force radius
    pub base_mass: f64, // initial base mass for spawns
    pub trail_length: usize, // trail buffer capacity
    pub fade_alpha: f32, // per-frame full-area fill opacity
    pub seed: u64, // deterministic seed to make runs reproducible
}

/// Canvas extent in simulation units plus the wraparound margin.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64, // overshoot allowed past each edge before wrapping
}

impl Bounds {
    /// Margin-wrap boundary predicate. Returns the re-entry position when
    /// `x` has left `[-margin, extent + margin]` on either axis: the
    /// out-of-range axis flips to the opposite margin edge, the other axis
    /// is preserved. `None` while the particle is still in flight.
    pub fn wrap(&self, x: NVec2) -> Option<NVec2> {
        let mut wrapped = x;
        let mut exited = false;

        if x.x < -self.margin {
            wrapped.x = self.width + self.margin;
            exited = true;
        } else if x.x > self.width + self.margin {
            wrapped.x = -self.margin;
            exited = true;
        }

        if x.y < -self.margin {
            wrapped.y = self.height + self.margin;
            exited = true;
        } else if x.y > self.height + self.margin {
            wrapped.y = -self.margin;
            exited = true;
        }

        exited.then_some(wrapped)
    }
}

/// External inputs read once per frame. The pointer is `None` when no
/// pointer is active; that is a normal state, not an error, and means zero
/// force this frame. `strength` and `base_mass` are live-adjustable by the
/// host; base mass only affects future respawns.
#[derive(Debug, Clone, Copy)]
pub struct FieldInputs {
    pub pointer: Option<NVec2>,
    pub strength: f64,
    pub base_mass: f64,
}
