//! `ShowcaseApp`: the top-level egui application state.
//!
//! This module declares the `ShowcaseApp` struct, its constructor and the
//! `eframe::App` impl. Drawing is split across the sibling sub-modules:
//!
//! - `background` : particle field behind every page
//! - `toolbar`    : page navigation strip
//! - `home`       : hero, spotlight and counters
//! - `projects`   : filter bar, gallery grid and detail modal

pub mod background;
pub mod home;
pub mod projects;
pub mod toolbar;

use std::time::Instant;

use eframe::egui;

use portfolio_showcase::catalog::data::HERO_STATS;
use portfolio_showcase::catalog::Catalog;
use portfolio_showcase::config::ShowcaseConfig;
use portfolio_showcase::render::counter::CounterBoard;
use portfolio_showcase::render::particles::ParticleAnimator;
use portfolio_showcase::render::reveal::RevealTracker;
use portfolio_showcase::task::TaskHandle;
use portfolio_showcase::view::gallery::Gallery;
use portfolio_showcase::view::modal::ModalController;
use portfolio_showcase::view::spotlight::SpotlightRotator;

use crate::ui::Thumb;

/// Reveal keys of the home page sections.
pub const HOME_REVEAL_KEYS: [&str; 3] = ["home:hero", "home:spotlight", "home:stats"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
}

// ─── Application state ───────────────────────────────────────────────────────

pub struct ShowcaseApp {
    pub config: ShowcaseConfig,
    pub catalog: Catalog,
    pub page: Page,
    // Background animation
    pub particles: Option<ParticleAnimator>,
    pub particle_task: Option<TaskHandle>,
    pub reveal: RevealTracker,
    pub counters: CounterBoard,
    pub spotlight: SpotlightRotator,
    /// Built on the first visit to the projects page
    pub gallery: Option<Gallery>,
    pub modal: ModalController,
    // Thumbnails
    #[cfg(feature = "remote-images")]
    pub image_loader: portfolio_showcase::net::image::ImageLoader,
    #[cfg(feature = "remote-images")]
    pub image_textures: std::collections::HashMap<String, egui::TextureHandle>,
}

impl ShowcaseApp {
    pub fn new(catalog: Catalog, config: ShowcaseConfig) -> Self {
        let mut reveal = RevealTracker::new(config.reveal_threshold);
        reveal.observe_all(HOME_REVEAL_KEYS);

        let mut spotlight = SpotlightRotator::new(config.spotlight_interval);
        spotlight.start(&catalog, Instant::now());

        let counters = CounterBoard::start(HERO_STATS, config.counter_frames);

        Self {
            config,
            catalog,
            page: Page::Home,
            particles: None,
            particle_task: None,
            reveal,
            counters,
            spotlight,
            gallery: None,
            modal: ModalController::new(),
            #[cfg(feature = "remote-images")]
            image_loader: portfolio_showcase::net::image::ImageLoader::new(),
            #[cfg(feature = "remote-images")]
            image_textures: std::collections::HashMap::new(),
        }
    }

    /// Switch page. Entering Home restarts the counters; the gallery is only
    /// built once the projects page is first shown.
    pub fn show_page(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        log::debug!("Page: {:?} -> {:?}", self.page, page);
        match page {
            Page::Home => {
                self.modal.close();
                self.counters = CounterBoard::start(HERO_STATS, self.config.counter_frames);
            }
            Page::Projects => {
                if self.gallery.is_none() {
                    self.gallery = Some(Gallery::new(&self.catalog, &mut self.reveal));
                }
            }
        }
        self.page = page;
    }

    /// Poll the thumbnail loader and upload finished images as textures.
    #[cfg(feature = "remote-images")]
    pub fn upload_thumbnails(&mut self, ctx: &egui::Context) {
        self.image_loader.poll();
        for (url, data) in self.image_loader.take_loaded() {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [data.width as usize, data.height as usize],
                &data.rgba,
            );
            let tex =
                ctx.load_texture(format!("thumb_{}", url), image, egui::TextureOptions::LINEAR);
            self.image_textures.insert(url, tex);
        }
        if self.image_loader.pending_count() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    /// Queue a thumbnail download.
    #[cfg(feature = "remote-images")]
    pub fn request_thumbnail(&mut self, url: &str) {
        self.image_loader.request(url);
    }

    #[cfg(not(feature = "remote-images"))]
    pub fn request_thumbnail(&mut self, _url: &str) {}

    #[cfg(feature = "remote-images")]
    pub fn thumb(&self, url: &str) -> Thumb {
        match self.image_textures.get(url) {
            Some(tex) => Thumb::Loaded(tex.clone()),
            None if self.image_loader.is_failed(url) => Thumb::Failed,
            None => Thumb::Pending,
        }
    }

    /// Without remote images every card shows the placeholder.
    #[cfg(not(feature = "remote-images"))]
    pub fn thumb(&self, _url: &str) -> Thumb {
        Thumb::Pending
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        #[cfg(feature = "remote-images")]
        self.upload_thumbnails(ctx);

        self.draw_background(ctx);

        self.spotlight.poll(&self.catalog, now);
        let counting = self.page == Page::Home && self.counters.tick_all();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.modal.handle_key(egui::Key::Escape);
        }

        // Top toolbar
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_black_alpha(140))
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
            )
            .show(ctx, |ui| {
                self.draw_toolbar(ui);
            });

        // Main content area
        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(24.0))
            .show(ctx, |ui| match self.page {
                Page::Home => self.draw_home(ui),
                Page::Projects => self.draw_projects(ui),
            });

        if self.page == Page::Projects {
            self.draw_modal(ctx);
        }

        if counting {
            ctx.request_repaint();
        }
        if let Some(wait) = self.spotlight.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl Drop for ShowcaseApp {
    fn drop(&mut self) {
        if let Some(task) = &self.particle_task {
            task.cancel();
        }
    }
}
