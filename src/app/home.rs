//! Home page: hero text, rotating spotlight and animated counters.

use eframe::egui;

use super::{Page, ShowcaseApp, HOME_REVEAL_KEYS};
use crate::ui::{self, theme};

impl ShowcaseApp {
    pub fn draw_home(&mut self, ui: &mut egui::Ui) {
        let [hero_key, spotlight_key, stats_key] = HOME_REVEAL_KEYS;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(32.0);

                let explore = ui::reveal_scope(ui, &mut self.reveal, hero_key, |ui| {
                    ui.label(
                        egui::RichText::new("DATA SCIENCE \u{00B7} ML \u{00B7} AUTOMATION")
                            .color(theme::ACCENT),
                    );
                    ui.label(
                        egui::RichText::new("Turning messy data into decisions.")
                            .strong()
                            .size(34.0),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Machine learning models, NLP pipelines and market analyses, \
                             each shipped with measurable results.",
                        )
                        .size(16.0)
                        .color(theme::MUTED),
                    );
                    ui.add_space(12.0);
                    ui.button(egui::RichText::new("Explore Projects").size(15.0)).clicked()
                });
                if explore {
                    self.show_page(Page::Projects);
                }

                ui.add_space(28.0);
                let spotlight = self.spotlight.current().cloned();
                ui::reveal_scope(ui, &mut self.reveal, spotlight_key, |ui| {
                    egui::Frame::none()
                        .fill(theme::SURFACE)
                        .stroke(egui::Stroke::new(1.0, theme::BORDER))
                        .rounding(12.0)
                        .inner_margin(16.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width().min(560.0));
                            ui.label(
                                egui::RichText::new("Spotlight")
                                    .size(12.0)
                                    .color(theme::MUTED),
                            );
                            match &spotlight {
                                Some(view) => {
                                    ui.label(egui::RichText::new(&view.title).strong().size(20.0));
                                    if !view.tag.is_empty() {
                                        ui::tag_chip(ui, &view.tag);
                                    }
                                }
                                None => {
                                    ui.colored_label(theme::MUTED, "No projects yet");
                                }
                            }
                        });
                });

                ui.add_space(28.0);
                let counters = &self.counters;
                ui::reveal_scope(ui, &mut self.reveal, stats_key, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for (label, counter) in counters.iter() {
                            egui::Frame::none()
                                .fill(theme::SURFACE)
                                .stroke(egui::Stroke::new(1.0, theme::BORDER))
                                .rounding(12.0)
                                .inner_margin(egui::Margin::symmetric(18.0, 12.0))
                                .show(ui, |ui| {
                                    ui.vertical(|ui| {
                                        ui.label(
                                            egui::RichText::new(counter.text())
                                                .strong()
                                                .size(28.0)
                                                .color(theme::ACCENT),
                                        );
                                        ui.label(egui::RichText::new(label).color(theme::MUTED));
                                    });
                                });
                        }
                    });
                });
                ui.add_space(32.0);
            });
    }
}
