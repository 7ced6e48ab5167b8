//! Core state types for the gravity-well simulation.
//!
//! Defines the particle and field structs:
//! - `Particle` using `NVec2` (position, velocity) plus mass, color, trail
//! - `Field` holding the ordered particle collection
//!
//! The field holds the list of particles and the current frame count `t`.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::simulation::surface::Surface;

pub type NVec2 = Vector2<f64>;

/// RGB color, one byte per channel. Channels stay in [0, 255] by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
}

/// FIFO-bounded buffer of past positions, oldest first.
/// Used only for rendering, never for physics.
#[derive(Debug, Clone)]
pub struct Trail {
    samples: VecDeque<NVec2>,
    cap: usize,
}

impl Trail {
    pub fn new(cap: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(cap + 1),
            cap,
        }
    }

    /// Append a position; evict the oldest sample once over capacity.
    pub fn record(&mut self, x: NVec2) {
        self.samples.push_back(x);
        if self.samples.len() > self.cap {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate oldest sample first.
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.samples.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, doubles as base render radius
    pub color: Rgb, // recomputed each frame from force magnitude
    pub trail: Trail, // past positions, oldest first
    pub total_distance: f64, // running sum of per-frame speed
}

impl Particle {
    /// Draw the trail as a comet tail: one filled circle per sample, alpha
    /// ramping from 0 (oldest) toward 1 (newest), size shrinking with age.
    /// Pure read of particle state; the only side effects are surface calls.
    pub fn draw(&self, surface: &mut impl Surface) {
        let n = self.trail.len();
        for (i, sample) in self.trail.iter().enumerate() {
            let alpha = i as f32 / n as f32;
            let size = self.m * (1.0 - alpha as f64 * 0.7);
            surface.fill_circle(*sample, size, self.color, alpha);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub particles: Vec<Particle>, // field order is update and draw order
    pub t: u64, // frames advanced so far
}

impl Field {
    /// Average of the per-particle running distance totals.
    /// Published by the host UI for display; zero for an empty field.
    pub fn average_distance(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f64 = self.particles.iter().map(|p| p.total_distance).sum();
        total / self.particles.len() as f64
    }

    /// Draw every particle in field order.
    pub fn draw(&self, surface: &mut impl Surface) {
        for p in &self.particles {
            p.draw(surface);
        }
    }
}
