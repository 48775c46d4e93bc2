// src/noyau/valide.rs
//
// Validation par classe de caractères (AVANT évaluation).
//
// Alphabet autorisé (après retrait des espaces):
// - chiffres + point décimal
// - opérateurs + - * / ^ %
// - parenthèses
// - lettres des noms reconnus (sqrt, log, sin, cos, tan, pi), majuscules incluses
//
// NOTE: ce filtre ne garantit PAS qu'une expression est bien formée
// (parenthèses équilibrées, opérandes présentes…) — c'est le rôle de
// l'analyse dans rpn.rs. Il rejette seulement les caractères étrangers.

use super::erreurs::ErreurSaisie;

/// Lettres couvertes par les noms reconnus : sqrt, log, sin, cos, tan, pi.
const LETTRES_AUTORISEES: &str = "sqrtlogincap";

/// Vérifie l'entrée utilisateur avant toute évaluation.
pub fn valider(expression: &str) -> Result<(), ErreurSaisie> {
    if expression.trim().is_empty() {
        return Err(ErreurSaisie::EntreeVide);
    }

    for c in expression.chars() {
        if c.is_whitespace() || est_autorise(c) {
            continue;
        }
        return Err(ErreurSaisie::CaractereInterdit(c));
    }

    Ok(())
}

fn est_autorise(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(c, '+' | '-' | '*' | '/' | '^' | '%' | '(' | ')' | '.')
        || LETTRES_AUTORISEES.contains(c.to_ascii_lowercase())
}
