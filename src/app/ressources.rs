//! src/app/ressources.rs
//!
//! Icônes des boutons (Calculer / Historique).
//!
//! Contrat : une icône absente ou illisible dégrade l'apparence du bouton
//! (texte seul) mais n'empêche jamais le démarrage ni le calcul.

use eframe::egui;
use thiserror::Error;
use tracing::warn;

const ICONE_CALCULER: &str = "assets/icones/calculatrice.png";
const ICONE_HISTORIQUE: &str = "assets/icones/historique.png";

/// Échec de chargement d'une ressource de présentation (non fatal).
#[derive(Debug, Error)]
pub enum ErreurRessource {
    #[error("chargement de {chemin}: {source}")]
    Chargement {
        chemin: String,
        #[source]
        source: image::ImageError,
    },
}

/// Textures prêtes pour la vue. Chaque champ absent = bouton en texte seul.
pub struct Ressources {
    pub icone_calculer: Option<egui::TextureHandle>,
    pub icone_historique: Option<egui::TextureHandle>,
}

impl Ressources {
    /// Charge les icônes une fois, au démarrage. Ne retourne jamais
    /// d'erreur : un échec est journalisé et le champ reste None.
    pub fn charger(ctx: &egui::Context) -> Self {
        Self {
            icone_calculer: charge_icone(ctx, "icone_calculer", ICONE_CALCULER),
            icone_historique: charge_icone(ctx, "icone_historique", ICONE_HISTORIQUE),
        }
    }
}

fn charge_icone(ctx: &egui::Context, nom: &str, chemin: &str) -> Option<egui::TextureHandle> {
    match lit_icone(ctx, nom, chemin) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("icône indisponible ({nom}): {e}");
            None
        }
    }
}

fn lit_icone(
    ctx: &egui::Context,
    nom: &str,
    chemin: &str,
) -> Result<egui::TextureHandle, ErreurRessource> {
    let img = image::open(chemin).map_err(|source| ErreurRessource::Chargement {
        chemin: chemin.to_string(),
        source,
    })?;

    let rgba = img.to_rgba8();
    let taille = [rgba.width() as usize, rgba.height() as usize];
    let pixels = egui::ColorImage::from_rgba_unmultiplied(taille, rgba.as_flat_samples().as_slice());

    Ok(ctx.load_texture(nom, pixels, egui::TextureOptions::LINEAR))
}
