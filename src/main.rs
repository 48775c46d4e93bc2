// src/main.rs
//
// Calculatrice avancée — point d'entrée natif
// -------------------------------------------
// But:
// - eframe::run_native + NativeOptions
// - journalisation tracing, filtrable via RUST_LOG
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d'entrée seulement

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre principale.
const TITRE_APP: &str = "Calculatrice avancée";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("démarrage de {TITRE_APP}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([400.0, 600.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| Ok(Box::new(AppCalc::nouveau(&cc.egui_ctx)))),
    )
}
