//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! historique de session, fenêtres) et offrir des actions simples sans
//! logique d'affichage.
//!
//! Contrats :
//! - Toute évaluation passe par noyau::calculer (aucun parsing ici).
//! - L'historique appartient à la session : jamais vidé, jamais réordonné.
//! - En cas d'erreur, l'entrée est conservée pour correction.

use eframe::egui;

use crate::app::ressources::Ressources;
use crate::noyau::{calculer, Historique};

/// Texte de la zone résultat quand l'évaluation échoue.
const AFFICHAGE_ERREUR: &str = "Erreur";

/// Texte de la zone résultat au démarrage.
const AFFICHAGE_INITIAL: &str = "0";

pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // résultat formaté (4 décimales) ou "Erreur"
    pub erreur: String,   // cause détaillée (vide si succès)

    // --- session ---
    pub historique: Historique,

    // --- fenêtres ---
    pub fenetre_historique: bool,
    pub confirmation_quitter: bool,

    // --- ressources (icônes; boutons en texte seul si absentes) ---
    pub ressources: Ressources,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl AppCalc {
    pub fn nouveau(ctx: &egui::Context) -> Self {
        Self {
            entree: String::new(),
            resultat: AFFICHAGE_INITIAL.to_string(),
            erreur: String::new(),
            historique: Historique::nouveau(),
            fenetre_historique: false,
            confirmation_quitter: false,
            ressources: Ressources::charger(ctx),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// Calculer : pipeline complet sur l'entrée courante.
    ///
    /// Choix UX :
    /// - Succès : le résultat remplace l'affichage, l'erreur s'efface.
    /// - Échec : affichage "Erreur" + cause détaillée, l'entrée RESTE telle
    ///   quelle (l'utilisateur corrige au lieu de retaper).
    pub fn calculer_entree(&mut self) {
        match calculer(&self.entree, &mut self.historique) {
            Ok(calcul) => {
                self.resultat = calcul.affichage;
                self.erreur.clear();
            }
            Err(e) => {
                self.resultat = AFFICHAGE_ERREUR.to_string();
                self.erreur = e.to_string();
            }
        }
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Ouvre/ferme la fenêtre d'historique.
    pub fn basculer_historique(&mut self) {
        self.fenetre_historique = !self.fenetre_historique;
    }

    /// Demande la confirmation de sortie (la vue affiche Oui/Non).
    pub fn demander_quitter(&mut self) {
        self.confirmation_quitter = true;
    }

    pub fn annuler_quitter(&mut self) {
        self.confirmation_quitter = false;
        self.focus_entree = true;
    }
}
