//! The pointer-driven attractive force ("gravity well").
//!
//! A single inverse-square source pulls every particle toward the pointer
//! and drives the force-to-color feedback. There is exactly one active
//! source per frame; the integrator constructs a well only when the host
//! reports a pointer position.

use crate::simulation::states::{NVec2, Particle, Rgb};

/// Inverse-square attractor at a fixed point with a range gate: the force
/// (and the color ramp) only applies within `d < strength`, so the strength
/// value doubles as the effective radius.
#[derive(Debug, Clone, Copy)]
pub struct GravityWell {
    pub pos: NVec2,
    pub strength: f64,
}

impl GravityWell {
    /// Kick the particle's velocity toward the well and recompute its color.
    ///
    /// Force magnitude is `strength / d^2`, applied along the unit vector
    /// toward the source. The `d > 0` guard skips the kick entirely when the
    /// particle sits exactly on the source, so no division by zero can
    /// occur. Outside the range gate the particle is unaffected and its
    /// color resets to white.
    pub fn apply(&self, p: &mut Particle) {
        // r is the displacement vector from the particle to the source;
        // the particle feels a pull along +r.
        let r = self.pos - p.x;

        // Squared separation distance |r|^2.
        let d2 = r.norm_squared();
        let d = d2.sqrt();

        // Inverse-square law: f = strength / |r|^2.
        let f = self.strength / d2;

        if d > 0.0 && d < self.strength {
            // Velocity kick along the unit vector toward the source,
            // scaled by the force magnitude. Additive and unbounded:
            // there is no damping and no speed clamp.
            p.v += (f / d) * r;

            // Color feedback: normalized intensity ramps the red channel
            // from 255 (barely affected) down to 0 (at the source).
            let intensity = (f / self.strength).min(1.0);
            p.color = Rgb {
                r: (255.0 - intensity * 255.0).round() as u8,
                g: 0,
                b: 0,
            };
        } else {
            // Out of range (or dead center): unaffected, back to white.
            p.color = Rgb::WHITE;
        }
    }
}
