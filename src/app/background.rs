//! Particle field painted on the background layer behind every panel.

use eframe::egui;

use portfolio_showcase::render::particles::{ParticleAnimator, ParticleField};

use super::ShowcaseApp;
use crate::ui::theme;

impl ShowcaseApp {
    /// Paint the backdrop and advance the particle animation by one frame.
    pub fn draw_background(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(screen, 0.0, theme::BACKGROUND);

        let Some(animator) = self.particles.as_mut() else {
            if self.particle_task.is_none() {
                self.start_particles(screen);
                ctx.request_repaint();
            }
            return;
        };

        if !animator.frame(screen.width(), screen.height()) {
            log::debug!("Particle loop stopped after {} frames", animator.frames());
            self.particles = None;
            return;
        }

        painter.extend(field_shapes(animator.field(), screen.min.to_vec2()));

        ctx.request_repaint();
    }

    fn start_particles(&mut self, screen: egui::Rect) {
        let (animator, task) =
            ParticleAnimator::start(self.config.particles.clone(), screen.width(), screen.height());
        self.particles = Some(animator);
        self.particle_task = Some(task);
    }

    pub fn particles_enabled(&self) -> bool {
        self.particle_task
            .as_ref()
            .map(|t| !t.is_cancelled())
            .unwrap_or(true)
    }

    /// Cancel the running loop, or clear the handle so the next frame starts
    /// a fresh field.
    pub fn set_particles_enabled(&mut self, enabled: bool) {
        if enabled {
            if self.particle_task.as_ref().is_some_and(|t| t.is_cancelled()) {
                self.particle_task = None;
                self.particles = None;
            }
        } else if let Some(task) = &self.particle_task {
            task.cancel();
        }
        log::info!("Particles {}", if enabled { "on" } else { "off" });
    }
}

/// Discs first, then links, so the lines are stroked over the filled points.
pub fn field_shapes(field: &ParticleField, origin: egui::Vec2) -> Vec<egui::Shape> {
    let [r, g, b, a] = field.config().color;
    let disc = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
    let particles = field.particles();

    let mut shapes: Vec<egui::Shape> = particles
        .iter()
        .map(|p| egui::Shape::circle_filled(egui::pos2(p.x, p.y) + origin, p.radius, disc))
        .collect();

    for link in field.links() {
        let (Some(p), Some(q)) = (particles.get(link.a), particles.get(link.b)) else {
            continue;
        };
        let alpha = (link.opacity * 255.0).round() as u8;
        shapes.push(egui::Shape::line_segment(
            [egui::pos2(p.x, p.y) + origin, egui::pos2(q.x, q.y) + origin],
            egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)),
        ));
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_showcase::config::ParticleConfig;
    use portfolio_showcase::render::particles::Particle;

    fn particle(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            radius: 1.5,
            speed: 0.0,
            direction: 0.0,
        }
    }

    #[test]
    fn links_are_stroked_after_discs() {
        let field = ParticleField::from_particles(
            ParticleConfig::default(),
            800.0,
            600.0,
            vec![particle(10.0, 10.0), particle(60.0, 10.0), particle(500.0, 500.0)],
        );
        let shapes = field_shapes(&field, egui::Vec2::ZERO);
        assert_eq!(shapes.len(), 4);
        assert!(shapes[..3].iter().all(|s| matches!(s, egui::Shape::Circle(_))));
        assert!(matches!(shapes[3], egui::Shape::LineSegment { .. }));
    }

    #[test]
    fn shapes_are_offset_by_origin() {
        let field = ParticleField::from_particles(
            ParticleConfig::default(),
            800.0,
            600.0,
            vec![particle(10.0, 20.0)],
        );
        let shapes = field_shapes(&field, egui::vec2(5.0, 5.0));
        match &shapes[0] {
            egui::Shape::Circle(c) => assert_eq!(c.center, egui::pos2(15.0, 25.0)),
            other => panic!("expected a disc, got {:?}", other),
        }
    }
}
