// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Fenêtre principale : titre, champ équation, zone résultat, trois actions
//   (Calculer / Historique / Quitter)
// - Clavier : Enter évalue (quand le champ est focus), focus redonné après clic
// - Historique : fenêtre flottante en lecture seule, du plus ancien au plus récent
// - Quitter : confirmation Oui/Non avant fermeture du viewport
//
// Note :
// - L'erreur détaillée s'affiche sous les actions; la zone résultat montre "Erreur".

use eframe::egui;

use super::etat::AppCalc;

/// Côté (en points) des icônes dans les boutons.
const TAILLE_ICONE: f32 = 18.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice avancée");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);

                self.ui_actions(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    /// Fenêtres flottantes (historique + confirmation de sortie).
    /// À appeler depuis update(), après le panneau central.
    pub fn fenetres(&mut self, ctx: &egui::Context) {
        self.ui_fenetre_historique(ctx);
        self.ui_fenetre_quitter(ctx);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Équation :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, sqrt(16), sin(pi/4)")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // On évite les déclenchements "globaux" quand l'utilisateur clique ailleurs.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer_entree();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let calculer = Self::bouton_icone(ui, &self.ressources.icone_calculer, "Calculer")
                .on_hover_text("Évalue l'équation (ou touche Entrée)");
            if calculer.clicked() {
                self.calculer_entree();
            }

            let historique = Self::bouton_icone(ui, &self.ressources.icone_historique, "Historique")
                .on_hover_text("Les calculs réussis de la session");
            if historique.clicked() {
                self.basculer_historique();
            }

            let quitter = ui.add_sized([90.0, 34.0], egui::Button::new("Quitter"));
            if quitter.clicked() {
                self.demander_quitter();
            }
        });
    }

    /* ------------------------ Fenêtres ------------------------ */

    fn ui_fenetre_historique(&mut self, ctx: &egui::Context) {
        if !self.fenetre_historique {
            return;
        }

        let mut ouverte = true;
        let mut retour = false;

        egui::Window::new("Historique des calculs")
            .open(&mut ouverte)
            .default_size([300.0, 400.0])
            .show(ctx, |ui| {
                ui.label(format!("{} calcul(s) cette session", self.historique.longueur()));
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(320.0)
                    .show(ui, |ui| {
                        if self.historique.est_vide() {
                            ui.monospace("(aucun calcul)");
                        } else {
                            // lecture seule, ordre d'insertion
                            for entree in self.historique.entrees() {
                                ui.monospace(entree);
                            }
                        }
                    });

                ui.add_space(6.0);
                if ui.button("Retour à la calculatrice").clicked() {
                    retour = true;
                }
            });

        self.fenetre_historique = ouverte && !retour;
        if retour {
            self.focus_entree = true;
        }
    }

    fn ui_fenetre_quitter(&mut self, ctx: &egui::Context) {
        if !self.confirmation_quitter {
            return;
        }

        egui::Window::new("Quitter")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Voulez-vous vraiment quitter ?");
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("Oui").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("Non").clicked() {
                        self.annuler_quitter();
                    }
                });
            });
    }

    /* ------------------------ Briques ------------------------ */

    fn bouton_icone(
        ui: &mut egui::Ui,
        icone: &Option<egui::TextureHandle>,
        libelle: &str,
    ) -> egui::Response {
        // dégradé gracieux : texte seul si l'icône a manqué au chargement
        let bouton = match icone {
            Some(texture) => egui::Button::image_and_text(
                egui::Image::new((texture.id(), egui::vec2(TAILLE_ICONE, TAILLE_ICONE))),
                libelle,
            ),
            None => egui::Button::new(libelle),
        };
        ui.add_sized([110.0, 34.0], bouton)
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
