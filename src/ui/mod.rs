//! Stateless egui helpers shared by the pages: theme colours, chips, cards,
//! the modal body and the reveal-on-scroll wrapper.

use std::path::Path;

use eframe::egui;
use portfolio_showcase::render::reveal::RevealTracker;
use portfolio_showcase::view::{CardView, KpiChip, ModalView};

// ─── Theme ────────────────────────────────────────────────────────────────────

pub mod theme {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(7, 11, 24);
    pub const SURFACE: Color32 = Color32::from_rgba_premultiplied(14, 22, 42, 220);
    pub const BORDER: Color32 = Color32::from_rgb(36, 52, 84);
    pub const ACCENT: Color32 = Color32::from_rgb(106, 227, 255);
    pub const MUTED: Color32 = Color32::from_rgb(150, 165, 190);
    pub const CHIP: Color32 = Color32::from_rgb(20, 34, 60);
}

// ─── Reveal ───────────────────────────────────────────────────────────────────

/// Draw `add_contents` faded and slid in according to the reveal state of `key`,
/// then report the drawn rect back to the tracker.
pub fn reveal_scope<R>(
    ui: &mut egui::Ui,
    reveal: &mut RevealTracker,
    key: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let viewport = ui.clip_rect();
    let shown = reveal.is_visible(key);
    let t = ui
        .ctx()
        .animate_bool_with_time(egui::Id::new(("reveal", key)), shown, 0.6);
    let inner = ui.scope(|ui| {
        ui.set_opacity(t);
        ui.add_space((1.0 - t) * 24.0);
        add_contents(ui)
    });
    if reveal.update(key, inner.response.rect, viewport) && !shown {
        ui.ctx().request_repaint();
    }
    inner.inner
}

// ─── Chips ────────────────────────────────────────────────────────────────────

pub fn tag_chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(theme::CHIP)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(theme::ACCENT));
        });
}

pub fn tag_row(ui: &mut egui::Ui, tags: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            tag_chip(ui, tag);
        }
    });
}

pub fn kpi_row(ui: &mut egui::Ui, kpis: &[KpiChip]) {
    ui.horizontal_wrapped(|ui| {
        for kpi in kpis {
            egui::Frame::none()
                .fill(theme::CHIP)
                .stroke(egui::Stroke::new(1.0, theme::BORDER))
                .rounding(8.0)
                .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&kpi.value)
                                .strong()
                                .size(15.0)
                                .color(theme::ACCENT),
                        );
                        ui.label(egui::RichText::new(&kpi.label).size(11.0).color(theme::MUTED));
                    });
                });
        }
    });
}

// ─── Images ───────────────────────────────────────────────────────────────────

/// Load state of one project image.
#[derive(Clone)]
pub enum Thumb {
    Loaded(egui::TextureHandle),
    Pending,
    Failed,
}

impl Thumb {
    /// Caption drawn over the placeholder, if any.
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            Thumb::Failed => Some("Image unavailable"),
            Thumb::Loaded(_) | Thumb::Pending => None,
        }
    }
}

/// Texture if loaded, otherwise a flat placeholder of the same height.
pub fn thumbnail(ui: &mut egui::Ui, thumb: &Thumb, height: f32) {
    let width = ui.available_width();
    match thumb {
        Thumb::Loaded(tex) => {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(tex))
                    .max_width(width)
                    .max_height(height)
                    .rounding(8.0),
            );
        }
        Thumb::Pending | Thumb::Failed => {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 8.0, theme::CHIP);
            if let Some(text) = thumb.placeholder_text() {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(13.0),
                    theme::MUTED,
                );
            }
        }
    }
}

// ─── Card & modal ─────────────────────────────────────────────────────────────

/// Draw one gallery card. Returns true when its "View Details" trigger was clicked.
pub fn draw_card(ui: &mut egui::Ui, card: &CardView, thumb: &Thumb) -> bool {
    let mut clicked = false;
    egui::Frame::none()
        .fill(theme::SURFACE)
        .stroke(egui::Stroke::new(1.0, theme::BORDER))
        .rounding(12.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            thumbnail(ui, thumb, 140.0);
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&card.title).strong().size(16.0));
                tag_chip(ui, &card.date);
            });
            ui.label(egui::RichText::new(&card.description).color(theme::MUTED));
            ui.add_space(4.0);
            kpi_row(ui, &card.kpis);
            tag_row(ui, &card.tags);
            ui.add_space(4.0);
            clicked = ui.button("View Details").clicked();
        });
    clicked
}

/// Draw the modal content. Returns true when a close control was clicked.
pub fn draw_modal_body(
    ui: &mut egui::Ui,
    view: &ModalView,
    thumb: &Thumb,
    document_root: &Path,
) -> bool {
    let mut close = false;
    ui.set_max_width(560.0);

    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new(&view.title).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{00D7}").clicked() {
                close = true;
            }
        });
    });
    ui.label(egui::RichText::new(&view.subtitle).color(theme::ACCENT));
    ui.add_space(6.0);
    thumbnail(ui, thumb, 200.0);
    ui.add_space(6.0);
    ui.label(&view.description);

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Highlights").strong());
    for item in &view.highlights {
        ui.horizontal_wrapped(|ui| {
            ui.label("  \u{2022}");
            ui.label(item);
        });
    }
    ui.add_space(6.0);
    tag_row(ui, &view.tags);
    kpi_row(ui, &view.kpis);
    ui.separator();

    ui.horizontal(|ui| {
        match &view.link_target {
            Some(target) => match target.resolve(document_root) {
                Ok(url) => {
                    let name = truncate_str(&target.display_label(), 48);
                    let label = format!("Open Project: {}", name);
                    ui.hyperlink_to(label, url.as_str());
                }
                Err(e) => {
                    log::debug!("{}", e);
                    ui.colored_label(theme::MUTED, "Link unavailable");
                }
            },
            None => {
                ui.colored_label(theme::MUTED, "Link unavailable");
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Close").clicked() {
                close = true;
            }
        });
    });
    close
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_thumbnails_get_a_caption() {
        assert_eq!(Thumb::Pending.placeholder_text(), None);
        assert_eq!(Thumb::Failed.placeholder_text(), Some("Image unavailable"));
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_str("report.pdf", 48), "report.pdf");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("ÅÅÅÅÅÅ", 5), "ÅÅ...");
    }
}
