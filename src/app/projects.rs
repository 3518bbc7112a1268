//! Projects page: filter bar, card grid and the detail modal overlay.

use eframe::egui;

use portfolio_showcase::view::gallery::{Filter, FILTERS};

use super::ShowcaseApp;
use crate::ui::{self, theme};

/// Minimum card width before the grid drops a column.
const CARD_MIN_WIDTH: f32 = 320.0;
const MAX_COLUMNS: usize = 3;

impl ShowcaseApp {
    pub fn draw_projects(&mut self, ui: &mut egui::Ui) {
        let Some(mut gallery) = self.gallery.take() else {
            return;
        };

        // Filter bar
        ui.horizontal_wrapped(|ui| {
            for (keyword, label) in FILTERS {
                let active = gallery.filter().keyword() == *keyword;
                if ui.selectable_label(active, *label).clicked() && !active {
                    let filter = Filter::from_keyword(keyword);
                    gallery.apply_filter(&self.catalog, filter, &mut self.reveal);
                }
            }
        });
        ui.add_space(12.0);

        for card in gallery.cards() {
            self.request_thumbnail(&card.image);
        }

        let columns = ((ui.available_width() / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS);
        let mut opened: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if gallery.cards().is_empty() {
                    ui.colored_label(theme::MUTED, "No projects in this category.");
                    return;
                }
                for row in gallery.cards().chunks(columns) {
                    ui.columns(columns, |cols| {
                        for (col, card) in cols.iter_mut().zip(row) {
                            let key = card.reveal_key();
                            let thumb = self.thumb(&card.image);
                            let clicked = ui::reveal_scope(col, &mut self.reveal, &key, |ui| {
                                ui::draw_card(ui, card, &thumb)
                            });
                            if clicked {
                                opened = Some(card.project_id.clone());
                            }
                        }
                    });
                    ui.add_space(12.0);
                }
            });

        if let Some(id) = opened {
            self.modal.open(&self.catalog, &id);
        }
        self.gallery = Some(gallery);
    }

    /// Backdrop plus centered window for the open project, if any.
    pub fn draw_modal(&mut self, ctx: &egui::Context) {
        let Some(view) = self.modal.view().cloned() else {
            return;
        };

        // Clicking the backdrop closes the modal
        let backdrop = egui::Area::new(egui::Id::new("modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen = ctx.screen_rect();
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(170));
                ui.allocate_rect(screen, egui::Sense::click())
            });
        let mut close = backdrop.inner.clicked();

        let thumb = self.thumb(&view.image);
        egui::Window::new("project_modal")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(theme::SURFACE)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .rounding(14.0)
                    .inner_margin(18.0),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(ctx.screen_rect().height() * 0.8)
                    .show(ui, |ui| {
                        let root = &self.config.document_root;
                        if ui::draw_modal_body(ui, &view, &thumb, root) {
                            close = true;
                        }
                    });
            });

        if close {
            self.modal.close();
        }
    }
}
