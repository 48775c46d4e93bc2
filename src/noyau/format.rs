// src/noyau/format.rs

use super::expr::Expr;

/// Formate un résultat à exactement 4 chiffres après la virgule.
pub fn format_resultat(v: f64) -> String {
    format!("{v:.4}")
}

/// Forme canonique de l'expression (celle inscrite à l'historique) :
/// parenthésage minimal, π affiché "π".
pub fn format_expr(e: &Expr) -> String {
    format_prec(e, 0)
}

/// Précédence d'affichage (0 = jamais de parenthèses autour).
fn precedence(e: &Expr) -> u8 {
    use Expr::*;
    match e {
        Add(_, _) | Sub(_, _) => 1,
        Mul(_, _) | Div(_, _) | Rem(_, _) => 2,
        Neg(_) => 3,
        Pow(_, _) => 4,
        Num(_) | Pi | Sqrt(_) | Log(_) | Sin(_) | Cos(_) | Tan(_) => 5,
    }
}

fn format_prec(e: &Expr, minimum: u8) -> String {
    use Expr::*;

    let p = precedence(e);
    let s = match e {
        Num(x) => format!("{x}"),
        Pi => "π".to_string(),

        Neg(x) => format!("-{}", format_prec(x, p)),

        Sqrt(x) => format!("sqrt({})", format_expr(x)),
        Log(x) => format!("log({})", format_expr(x)),
        Sin(x) => format!("sin({})", format_expr(x)),
        Cos(x) => format!("cos({})", format_expr(x)),
        Tan(x) => format!("tan({})", format_expr(x)),

        // associatif à gauche : l'opérande droite de même précédence
        // garde ses parenthèses ("2-(3-1)")
        Add(a, b) => format!("{}+{}", format_prec(a, p), format_prec(b, p + 1)),
        Sub(a, b) => format!("{}-{}", format_prec(a, p), format_prec(b, p + 1)),
        Mul(a, b) => format!("{}*{}", format_prec(a, p), format_prec(b, p + 1)),
        Div(a, b) => format!("{}/{}", format_prec(a, p), format_prec(b, p + 1)),
        Rem(a, b) => format!("{}%{}", format_prec(a, p), format_prec(b, p + 1)),

        // '^' associatif à droite
        Pow(a, b) => format!("{}^{}", format_prec(a, p + 1), format_prec(b, p)),
    };

    if p < minimum {
        format!("({s})")
    } else {
        s
    }
}
