//! Interactive 2D viewer driving the simulation frame loop.
//!
//! macroquad owns the window and the frame scheduler; this module reads the
//! pointer and keyboard once per frame, advances the scenario, and draws
//! through the [`Surface`] contract. The keyboard stands in for the original
//! parameter sliders:
//! - Up / Down    adjust gravity strength
//! - Left / Right adjust the base mass for future respawns

use macroquad::prelude::*;

use crate::simulation::params::{Bounds, FieldInputs};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};
use crate::simulation::surface::Surface;

const STRENGTH_STEP: f64 = 1.0;
const STRENGTH_MIN: f64 = 1.0;
const STRENGTH_MAX: f64 = 500.0;
const BASE_MASS_STEP: f64 = 0.05;
const BASE_MASS_MIN: f64 = 0.3;
const BASE_MASS_MAX: f64 = 20.0;

/// [`Surface`] implementation over the macroquad canvas. macroquad keeps the
/// previous frame when nothing clears it, so the translucent fade fill
/// produces the surface-level smear on top of the per-particle trails.
struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn fade(&mut self, alpha: f32) {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, alpha),
        );
    }

    fn fill_circle(&mut self, center: NVec2, radius: f64, color: Rgb, alpha: f32) {
        let c = Color::new(
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            alpha,
        );
        draw_circle(center.x as f32, center.y as f32, radius as f32, c);
    }
}

pub async fn run_2d(mut scenario: Scenario) {
    println!(
        "run_2d: starting viewer with {} particles",
        scenario.field.particles.len()
    );

    request_new_screen_size(
        scenario.bounds.width as f32,
        scenario.bounds.height as f32,
    );

    // Live-adjustable parameters, seeded from the scenario config.
    let mut strength = scenario.parameters.gravity_strength;
    let mut base_mass = scenario.parameters.base_mass;

    // The pointer only becomes a force source once it has actually moved;
    // until then macroquad reports (0, 0) with no pointer present.
    let mut last_mouse = mouse_position();
    let mut pointer_armed = false;

    clear_background(BLACK);

    loop {
        if is_key_down(KeyCode::Up) {
            strength = (strength + STRENGTH_STEP).min(STRENGTH_MAX);
        }
        if is_key_down(KeyCode::Down) {
            strength = (strength - STRENGTH_STEP).max(STRENGTH_MIN);
        }
        if is_key_down(KeyCode::Right) {
            base_mass = (base_mass + BASE_MASS_STEP).min(BASE_MASS_MAX);
        }
        if is_key_down(KeyCode::Left) {
            base_mass = (base_mass - BASE_MASS_STEP).max(BASE_MASS_MIN);
        }

        let mouse = mouse_position();
        if mouse != last_mouse {
            pointer_armed = true;
            last_mouse = mouse;
        }
        let pointer = pointer_position(mouse, pointer_armed, &scenario.bounds);

        let inputs = FieldInputs {
            pointer,
            strength,
            base_mass,
        };
        scenario.advance(&inputs);

        let mut surface = MacroquadSurface;
        surface.fade(scenario.parameters.fade_alpha);
        scenario.field.draw(&mut surface);

        draw_text(
            &format!("avg distance: {:.2}", scenario.field.average_distance()),
            12.0,
            24.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("strength: {:.0}   base mass: {:.2}", strength, base_mass),
            12.0,
            44.0,
            20.0,
            WHITE,
        );

        next_frame().await;
    }
}

/// The pointer counts as active while it is armed and inside the canvas;
/// leaving the window is the "no force source" state.
fn pointer_position(mouse: (f32, f32), armed: bool, bounds: &Bounds) -> Option<NVec2> {
    let (mx, my) = (mouse.0 as f64, mouse.1 as f64);
    let inside = mx >= 0.0 && mx <= bounds.width && my >= 0.0 && my <= bounds.height;
    (armed && inside).then(|| NVec2::new(mx, my))
}
