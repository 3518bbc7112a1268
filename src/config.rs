//! Tunables for every animated component.
//!
//! `ShowcaseConfig::default()` reproduces the reference look; the `with_*`
//! builders override individual values.

use std::path::PathBuf;
use std::time::Duration;

/// Particle field parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Number of particles, fixed for the lifetime of a field
    pub count: usize,
    /// Radius is drawn from `[radius_min, radius_min + radius_span)`
    pub radius_min: f32,
    pub radius_span: f32,
    /// Speed is drawn from `[speed_min, speed_min + speed_span)`
    pub speed_min: f32,
    pub speed_span: f32,
    /// Pairs closer than this are joined by a line
    pub link_distance: f32,
    /// Link opacity = `link_opacity_base - distance / link_opacity_divisor`
    pub link_opacity_base: f32,
    pub link_opacity_divisor: f32,
    /// Disc fill, RGBA
    pub color: [u8; 4],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 70,
            radius_min: 0.6,
            radius_span: 1.8,
            speed_min: 0.1,
            speed_span: 0.4,
            link_distance: 120.0,
            link_opacity_base: 0.12,
            link_opacity_divisor: 1200.0,
            // rgba(106, 227, 255, 0.7)
            color: [106, 227, 255, 179],
        }
    }
}

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    pub particles: ParticleConfig,
    /// Fraction of an element that must be on screen before it is revealed
    pub reveal_threshold: f32,
    /// Counters reach their target in roughly this many frames
    pub counter_frames: u32,
    pub spotlight_interval: Duration,
    pub window_size: [f32; 2],
    /// Base directory for relative project links
    pub document_root: PathBuf,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            reveal_threshold: 0.3,
            counter_frames: 60,
            spotlight_interval: Duration::from_secs(4),
            window_size: [1280.0, 800.0],
            document_root: PathBuf::from("."),
        }
    }
}

impl ShowcaseConfig {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particles.count = count;
        self
    }

    pub fn with_reveal_threshold(mut self, threshold: f32) -> Self {
        self.reveal_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_spotlight_interval(mut self, interval: Duration) -> Self {
        self.spotlight_interval = interval;
        self
    }

    pub fn with_document_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.document_root = root.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_look() {
        let cfg = ShowcaseConfig::default();
        assert_eq!(cfg.particles.count, 70);
        assert!((cfg.particles.link_distance - 120.0).abs() < 1e-6);
        assert!((cfg.reveal_threshold - 0.3).abs() < 1e-6);
        assert_eq!(cfg.counter_frames, 60);
        assert_eq!(cfg.spotlight_interval, Duration::from_secs(4));
    }

    #[test]
    fn builders_override() {
        let cfg = ShowcaseConfig::default()
            .with_particle_count(12)
            .with_reveal_threshold(1.7)
            .with_spotlight_interval(Duration::from_millis(250))
            .with_document_root("/srv/portfolio");
        assert_eq!(cfg.particles.count, 12);
        assert!((cfg.reveal_threshold - 1.0).abs() < 1e-6);
        assert_eq!(cfg.spotlight_interval, Duration::from_millis(250));
        assert_eq!(cfg.document_root, PathBuf::from("/srv/portfolio"));
    }
}
