// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du pipeline.
// - ErreurSaisie     : refus AVANT évaluation (validation)
// - ErreurEvaluation : échec PENDANT l'évaluation (syntaxe, domaine, zéro)
// - ErreurCalcul     : enveloppe pour l'appel unique vue -> noyau
//
// Contrat : aucune de ces erreurs ne termine le processus. La vue affiche
// "Erreur" et conserve l'entrée pour correction.

use thiserror::Error;

/// Refus de l'entrée avant toute évaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    /// Entrée vide (ou uniquement des espaces).
    #[error("Entrée vide")]
    EntreeVide,

    /// Caractère hors de l'alphabet autorisé.
    #[error("caractère interdit: '{0}'")]
    CaractereInterdit(char),
}

/// Échec de l'évaluation d'une expression.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEvaluation {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("expression mal formée: {0}")]
    Syntaxe(String),

    #[error("parenthèses non fermées")]
    ParentheseOuverte,

    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors domaine (sqrt d'un négatif, log d'un non positif).
    #[error("{fonction}: argument hors domaine ({argument})")]
    Domaine {
        fonction: &'static str,
        argument: f64,
    },

    /// Débordement, 0^-1, etc. : tout NaN/inf est refusé.
    #[error("résultat non fini")]
    ResultatNonFini,
}

/// Erreur globale du pipeline (validation puis évaluation).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error(transparent)]
    Saisie(#[from] ErreurSaisie),

    #[error(transparent)]
    Evaluation(#[from] ErreurEvaluation),
}
