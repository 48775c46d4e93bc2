// src/app.rs
//
// Calculatrice avancée — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + ressources.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App
//
// Important:
// - La gestion de Enter est faite dans vue.rs (au bon endroit: quand le
//   champ a le focus).

pub mod etat;
pub mod ressources;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal :
        // ESC = effacer seulement l'entrée.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // fenêtres flottantes (historique, confirmation de sortie)
        self.fenetres(ctx);
    }
}
