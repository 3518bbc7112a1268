//! Toolbar rendering for `ShowcaseApp`.
//!
//! Draws the brand label, the page switcher and the particle toggle.

use eframe::egui;

use super::{Page, ShowcaseApp};
use crate::ui::theme;

impl ShowcaseApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("\u{25C6} Portfolio")
                    .strong()
                    .size(16.0)
                    .color(theme::ACCENT),
            );
            ui.add_space(16.0);

            let mut target = self.page;
            ui.selectable_value(&mut target, Page::Home, "Home");
            ui.selectable_value(&mut target, Page::Projects, "Projects");
            if target != self.page {
                self.show_page(target);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut enabled = self.particles_enabled();
                if ui
                    .checkbox(&mut enabled, "Particles")
                    .on_hover_text("Animated background")
                    .changed()
                {
                    self.set_particles_enabled(enabled);
                }
            });
        });
    }
}
