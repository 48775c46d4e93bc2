//! Noyau de calcul
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie d'erreurs (saisie / évaluation / ressource à part)
//! - valide.rs     : validation par classe de caractères
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST + évaluation f64 (domaines contrôlés)
//! - format.rs     : résultat à 4 décimales + forme canonique
//! - historique.rs : journal de session (ajout seul)
//! - eval.rs       : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod valide;

#[cfg(test)]
mod tests_pipeline;


// API publique minimale
pub use erreurs::{ErreurCalcul, ErreurEvaluation, ErreurSaisie};
pub use eval::{calculer, evaluer, Calcul};
pub use historique::Historique;
pub use valide::valider;
