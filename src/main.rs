use eframe::egui;

use portfolio_showcase::catalog::Catalog;
use portfolio_showcase::config::ShowcaseConfig;

mod app;
mod ui;

use app::ShowcaseApp;

fn main() {
    env_logger::init();

    let catalog = match Catalog::builtin() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid project catalog: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} projects", catalog.len());

    let config = ShowcaseConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Portfolio Showcase"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Portfolio Showcase",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ShowcaseApp::new(catalog, config)))
        }),
    );
    if let Err(e) = result {
        log::error!("Failed to start Portfolio Showcase: {}", e);
        std::process::exit(1);
    }
}
