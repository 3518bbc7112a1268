//! Background particle field.
//!
//! A fixed number of points drift across the surface at constant speed,
//! bouncing off the four edges. Every unordered pair closer than the link
//! distance is joined by a faint line whose opacity falls off linearly with
//! distance.
//!
//! Link detection is a plain O(n²) pairwise pass with no spatial index.

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;
use crate::task::TaskHandle;

/// One drifting point, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    /// Heading in radians
    pub direction: f32,
}

impl Particle {
    /// Move one step along the heading, then reflect the heading on any axis
    /// whose bounds were left. The position itself is never clamped; the
    /// reflected heading brings the particle back on the next step.
    #[inline]
    pub fn advance(&mut self, width: f32, height: f32) {
        self.x += self.direction.cos() * self.speed;
        self.y += self.direction.sin() * self.speed;
        if self.x < 0.0 || self.x > width {
            self.direction = PI - self.direction;
        }
        if self.y < 0.0 || self.y > height {
            self.direction = -self.direction;
        }
    }
}

/// A line between two particles (indices into [`ParticleField::particles`])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// Already clamped to `[0, 1]`
    pub opacity: f32,
}

/// Opacity of a link at `distance`, never negative.
#[inline]
pub fn link_opacity(distance: f32, config: &ParticleConfig) -> f32 {
    (config.link_opacity_base - distance / config.link_opacity_divisor).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    config: ParticleConfig,
}

impl ParticleField {
    /// Empty field with a zero-sized surface; call [`resize`](Self::resize) to seed it.
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            particles: Vec::with_capacity(config.count),
            width: 0.0,
            height: 0.0,
            config,
        }
    }

    /// Field over an explicit particle set (no reseeding).
    pub fn from_particles(
        config: ParticleConfig,
        width: f32,
        height: f32,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            width,
            height,
            config,
        }
    }

    /// Resize the surface and regenerate every particle. No particle survives.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles.clear();
        let c = &self.config;
        for _ in 0..c.count {
            self.particles.push(Particle {
                x: rng.gen::<f32>() * self.width,
                y: rng.gen::<f32>() * self.height,
                radius: rng.gen::<f32>() * c.radius_span + c.radius_min,
                speed: rng.gen::<f32>() * c.speed_span + c.speed_min,
                direction: rng.gen::<f32>() * PI * 2.0,
            });
        }
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.advance(w, h);
        }
    }

    /// All pairs closer than the link distance.
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            let pi = &self.particles[i];
            for j in (i + 1)..self.particles.len() {
                let pj = &self.particles[j];
                let dx = pi.x - pj.x;
                let dy = pi.y - pj.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < max {
                    out.push(Link {
                        a: i,
                        b: j,
                        distance,
                        opacity: link_opacity(distance, &self.config),
                    });
                }
            }
        }
        out
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}

/// Frame-driven owner of a [`ParticleField`].
///
/// `start` hands back a [`TaskHandle`]; once it is cancelled `frame` stops
/// stepping and reports that no further repaint is needed.
pub struct ParticleAnimator {
    field: ParticleField,
    rng: StdRng,
    handle: TaskHandle,
    frames: u64,
}

impl ParticleAnimator {
    pub fn start(config: ParticleConfig, width: f32, height: f32) -> (Self, TaskHandle) {
        Self::start_with_rng(config, width, height, StdRng::from_entropy())
    }

    pub fn start_with_rng(
        config: ParticleConfig,
        width: f32,
        height: f32,
        mut rng: StdRng,
    ) -> (Self, TaskHandle) {
        let mut field = ParticleField::new(config);
        field.resize(width, height, &mut rng);
        log::debug!(
            "Particle field started: {} particles on {}x{}",
            field.particles.len(),
            width,
            height
        );
        let handle = TaskHandle::new();
        let animator = Self {
            field,
            rng,
            handle: handle.clone(),
            frames: 0,
        };
        (animator, handle)
    }

    /// Run one frame against the current surface size.
    ///
    /// Returns `false` once cancelled; the caller should stop scheduling frames.
    pub fn frame(&mut self, width: f32, height: f32) -> bool {
        if self.handle.is_cancelled() {
            return false;
        }
        if self.field.size() != (width.max(0.0), height.max(0.0)) {
            log::debug!("Surface resized to {}x{}, reseeding particles", width, height);
            self.field.resize(width, height, &mut self.rng);
        }
        self.field.step();
        self.frames += 1;
        true
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_cancelled()
    }
}
