//! Tests pipeline (campagne) : contrats + robustesse + limites contrôlées.
//!
//! - précédence / associativité / moins unaire
//! - fonctions et constante π (insensibles à la casse)
//! - erreurs typées : domaine, division par zéro, syntaxe, débordement
//! - historique : croissance exacte d'une entrée par succès, ordre préservé
//! - budget temps sur les stress (anti-gel)

use std::time::{Duration, Instant};

use super::erreurs::{ErreurCalcul, ErreurEvaluation, ErreurSaisie};
use super::eval::{calculer, evaluer};
use super::historique::Historique;

fn affichage(s: &str) -> String {
    evaluer(s)
        .unwrap_or_else(|e| panic!("evaluer({s:?}) erreur: {e}"))
        .affichage
}

fn erreur(s: &str) -> ErreurEvaluation {
    match evaluer(s) {
        Ok(c) => panic!("evaluer({s:?}) aurait dû échouer, a donné {:?}", c.affichage),
        Err(e) => e,
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn precedence_et_associativite() {
    assert_eq!(affichage("2+3*4"), "14.0000");
    assert_eq!(affichage("(2+3)*4"), "20.0000");
    assert_eq!(affichage("10-4-3"), "3.0000");
    assert_eq!(affichage("2*3^2"), "18.0000");
    // '^' associatif à droite : 2^(3^2)
    assert_eq!(affichage("2^3^2"), "512.0000");
    assert_eq!(affichage("100/10/5"), "2.0000");
}

#[test]
fn moins_unaire() {
    assert_eq!(affichage("-4"), "-4.0000");
    assert_eq!(affichage("-2^2"), "-4.0000");
    assert_eq!(affichage("(-2)^2"), "4.0000");
    assert_eq!(affichage("2*-3"), "-6.0000");
    assert_eq!(affichage("2^-2"), "0.2500");
    assert_eq!(affichage("-(2+3)"), "-5.0000");
}

#[test]
fn decimaux() {
    assert_eq!(affichage("1.5*2"), "3.0000");
    assert_eq!(affichage(".5+.5"), "1.0000");
    assert_eq!(affichage("10/4"), "2.5000");
}

#[test]
fn modulo_plancher() {
    assert_eq!(affichage("7%4"), "3.0000");
    assert_eq!(affichage("7.5 % 2"), "1.5000");
    // signe du diviseur
    assert_eq!(affichage("-7 % 3"), "2.0000");
    assert_eq!(affichage("7 % -3"), "-2.0000");
}

#[test]
fn espaces_et_majuscules() {
    assert_eq!(affichage("  2   +2 "), "4.0000");
    assert_eq!(affichage("SIN(PI/2)"), "1.0000");
    assert_eq!(affichage("Sqrt(16)"), "4.0000");
}

/* ------------------------ Fonctions + π ------------------------ */

#[test]
fn fonctions_de_base() {
    assert_eq!(affichage("sin(0)"), "0.0000");
    assert_eq!(affichage("cos(0)"), "1.0000");
    assert_eq!(affichage("tan(0)"), "0.0000");
    assert_eq!(affichage("log(1)"), "0.0000");
    assert_eq!(affichage("sqrt(sqrt(16))"), "2.0000");
}

#[test]
fn pi_et_combinaisons() {
    assert_eq!(affichage("pi"), "3.1416");
    assert_eq!(affichage("2*pi"), "6.2832");
    assert_eq!(affichage("cos(pi)"), "-1.0000");
    // sin(π) est un epsilon numérique : le formatage à 4 décimales le lisse
    assert_eq!(affichage("sin(pi)"), "0.0000");
    assert_eq!(affichage("2*sin(pi/2)+1"), "3.0000");
}

#[test]
fn log_neperien() {
    // log = ln (base e)
    let c = evaluer("log(2.718281828459045)").unwrap();
    assert_eq!(c.affichage, "1.0000");
}

/* ------------------------ Erreurs typées ------------------------ */

#[test]
fn erreurs_de_domaine() {
    assert!(matches!(
        erreur("sqrt(0-4)"),
        ErreurEvaluation::Domaine { fonction: "sqrt", .. }
    ));
    assert!(matches!(
        erreur("log(0)"),
        ErreurEvaluation::Domaine { fonction: "log", .. }
    ));
    assert!(matches!(
        erreur("log(0-1)"),
        ErreurEvaluation::Domaine { fonction: "log", .. }
    ));
}

#[test]
fn division_et_modulo_par_zero() {
    assert_eq!(erreur("10/0"), ErreurEvaluation::DivisionParZero);
    assert_eq!(erreur("1/(2-2)"), ErreurEvaluation::DivisionParZero);
    assert_eq!(erreur("5%0"), ErreurEvaluation::DivisionParZero);
}

#[test]
fn resultat_non_fini() {
    assert_eq!(erreur("10^400"), ErreurEvaluation::ResultatNonFini);
    assert_eq!(erreur("0^-1"), ErreurEvaluation::ResultatNonFini);
}

#[test]
fn erreurs_de_syntaxe() {
    assert!(matches!(erreur("2+"), ErreurEvaluation::Syntaxe(_)));
    assert!(matches!(erreur("2 3"), ErreurEvaluation::Syntaxe(_)));
    assert!(matches!(erreur("()"), ErreurEvaluation::Syntaxe(_)));
    assert!(matches!(erreur("2++2"), ErreurEvaluation::Syntaxe(_)));
    assert_eq!(erreur("(2+3"), ErreurEvaluation::ParentheseOuverte);
    assert!(matches!(erreur("2+3)"), ErreurEvaluation::Syntaxe(_)));
    assert_eq!(
        erreur("sinus(1)"),
        ErreurEvaluation::FonctionInconnue("sinus".into())
    );
    assert_eq!(
        erreur("1.2.3"),
        ErreurEvaluation::NombreInvalide("1.2.3".into())
    );
}

/* ------------------------ Pipeline complet + historique ------------------------ */

#[test]
fn validation_avant_evaluation() {
    let mut h = Historique::nouveau();

    // la classe de caractères bloque avant le parseur : "2x" n'est pas
    // une "fonction inconnue", c'est un caractère interdit
    assert_eq!(
        calculer("2x+1", &mut h),
        Err(ErreurCalcul::Saisie(ErreurSaisie::CaractereInterdit('x')))
    );
    assert_eq!(
        calculer("  ", &mut h),
        Err(ErreurCalcul::Saisie(ErreurSaisie::EntreeVide))
    );
    assert!(h.est_vide());
}

#[test]
fn historique_croissance_et_ordre() {
    let mut h = Historique::nouveau();

    let exprs = ["1+1", "sqrt(16)", "pi", "2^10"];
    for (k, s) in exprs.iter().enumerate() {
        calculer(s, &mut h).unwrap();
        assert_eq!(h.longueur(), k + 1, "s={s:?}");
    }

    // les échecs n'apparaissent jamais
    assert!(calculer("1/0", &mut h).is_err());
    assert!(calculer("sqrt(0-1)", &mut h).is_err());
    assert_eq!(h.longueur(), exprs.len());

    let entrees: Vec<&str> = h.entrees().collect();
    assert_eq!(
        entrees,
        vec![
            "1+1 = 2.0000",
            "sqrt(16) = 4.0000",
            "π = 3.1416",
            "2^10 = 1024.0000",
        ]
    );
}

#[test]
fn forme_canonique_dans_historique() {
    let mut h = Historique::nouveau();

    // la forme canonique normalise espaces et casse, et garde les
    // parenthèses porteuses de sens
    calculer("  2 +  2", &mut h).unwrap();
    calculer("( 2 + 3 ) * 4", &mut h).unwrap();
    calculer("SIN(PI/2)", &mut h).unwrap();

    let entrees: Vec<&str> = h.entrees().collect();
    assert_eq!(
        entrees,
        vec![
            "2+2 = 4.0000",
            "(2+3)*4 = 20.0000",
            "sin(π/2) = 1.0000",
        ]
    );
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn stress_somme_longue_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..200 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push('1');
        budget(t0, max);
    }

    assert_eq!(affichage(&expr), "200.0000");
}

#[test]
fn stress_parentheses_imbriquees_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // ((((…1…)))) : 100 niveaux
    let expr = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    budget(t0, max);

    assert_eq!(affichage(&expr), "1.0000");
}
