//! Noyau — évaluation (pipeline réel)
//!
//! valider -> tokenize -> RPN -> Expr -> évaluation f64 -> formatage -> historique
//!
//! Remarque : l'historique est passé explicitement par l'appelant (état UI),
//! le pipeline lui-même ne possède aucun état.

use tracing::debug;

use super::erreurs::{ErreurCalcul, ErreurEvaluation};
use super::format::{format_expr, format_resultat};
use super::historique::Historique;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};
use super::valide::valider;

/// Résultat d'un calcul réussi.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    /// Forme canonique de l'expression (celle inscrite à l'historique).
    pub expression: String,
    /// Valeur numérique.
    pub valeur: f64,
    /// Valeur formatée à 4 décimales (celle affichée).
    pub affichage: String,
}

/// Évalue une expression. Pur : aucun effet sur l'historique.
pub fn evaluer(expression: &str) -> Result<Calcul, ErreurEvaluation> {
    let jetons = tokenize(expression)?;
    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;

    let valeur = expr.evaluer()?;

    Ok(Calcul {
        expression: format_expr(&expr),
        valeur,
        affichage: format_resultat(valeur),
    })
}

/// API publique : pipeline complet (validation, évaluation, historique).
///
/// En cas de succès, l'entrée "expression = résultat" est ajoutée à
/// l'historique. En cas d'échec — validation ou évaluation — l'historique
/// reste strictement inchangé.
pub fn calculer(expression: &str, historique: &mut Historique) -> Result<Calcul, ErreurCalcul> {
    valider(expression)?;

    let calcul = evaluer(expression)?;

    debug!(
        expression = %calcul.expression,
        valeur = calcul.valeur,
        resultat = %calcul.affichage,
        "calcul réussi"
    );
    historique.ajouter(format!("{} = {}", calcul.expression, calcul.affichage));

    Ok(calcul)
}
