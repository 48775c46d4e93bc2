// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ {sqrt, log, sin, cos, tan} => fonction unaire (postfixée en RPN)
//    - sinon => erreur "fonction inconnue"
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, il devient Tok::MoinsU
//      (associatif à droite, même précédence que ^) :
//      "-2^2" => -(2^2) et "2*-3" => -6
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs "collés" à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreurs::ErreurEvaluation;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Caret | Tok::MoinsU => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::MoinsU)
}

/// Identificateurs reconnus comme fonctions (unaire).
fn is_fonction_ident(name: &str) -> bool {
    matches!(name, "sqrt" | "log" | "sin" | "cos" | "tan")
}

fn est_fonction_au_sommet(ops: &[Tok]) -> bool {
    matches!(ops.last(), Some(Tok::Ident(name)) if is_fonction_ident(name.as_str()))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEvaluation> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Pi => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if !is_fonction_ident(&name) {
                    return Err(ErreurEvaluation::FonctionInconnue(name));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Tok::Ident(name));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurEvaluation::Syntaxe(
                        "parenthèse fermante sans ouvrante".into(),
                    ));
                }

                // si une fonction est au sommet, on la sort aussi
                if est_fonction_au_sommet(&ops) {
                    out.push(ops.pop().unwrap());
                }

                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // moins unaire : opérateur préfixe dédié, simplement empilé
                // (il ne dépile rien : il ne porte que sur la valeur à venir)
                ops.push(Tok::MoinsU);
                prev_was_value = false;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Tok::Ident(name) = top {
                        if is_fonction_ident(name.as_str()) {
                            break;
                        }
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::MoinsU => {
                // tokenize ne produit jamais MoinsU
                return Err(ErreurEvaluation::Syntaxe("jeton inattendu".into()));
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEvaluation::ParentheseOuverte);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEvaluation> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push(Expr::Num(n)),
            Tok::Pi => st.push(Expr::Pi),

            Tok::MoinsU => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::Syntaxe("opérande manquante".into()))?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::Syntaxe("opérande manquante".into()))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::Syntaxe("opérande manquante".into()))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::Percent => Expr::Rem(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::Ident(name) => {
                if !is_fonction_ident(name.as_str()) {
                    return Err(ErreurEvaluation::FonctionInconnue(name));
                }
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEvaluation::Syntaxe("fonction sans argument".into()))?;
                let e = match name.as_str() {
                    "sqrt" => Expr::Sqrt(Box::new(x)),
                    "log" => Expr::Log(Box::new(x)),
                    "sin" => Expr::Sin(Box::new(x)),
                    "cos" => Expr::Cos(Box::new(x)),
                    "tan" => Expr::Tan(Box::new(x)),
                    _ => unreachable!(),
                };
                st.push(e);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEvaluation::Syntaxe("parenthèse inattendue en RPN".into()))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEvaluation::Syntaxe("expression invalide".into()));
    }
    Ok(st.pop().unwrap())
}
