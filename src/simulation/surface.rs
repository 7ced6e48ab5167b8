//! Render-surface contract the core draws through.
//!
//! The host environment supplies a fixed-size 2D drawable implementing
//! [`Surface`]; the core only ever issues these two primitives. Tests use a
//! recording implementation to inspect the draw pass.

use crate::simulation::states::{NVec2, Rgb};

/// A 2D drawable surface with two primitives:
/// - a full-area translucent black fill (the frame-to-frame smear effect)
/// - a filled circle with per-call color and alpha
pub trait Surface {
    /// Fill the whole surface with black at the given opacity.
    fn fade(&mut self, alpha: f32);

    /// Fill a circle of the given radius at `center`.
    fn fill_circle(&mut self, center: NVec2, radius: f64, color: Rgb, alpha: f32);
}
