// src/noyau/expr.rs
//
// AST arithmétique (flottants f64).
// - Num : littéral décimal
// - Pi  : constante π
// Les fonctions (sqrt/log/sin/cos/tan) portent exactement un argument.
//
// IMPORTANT (SAFE):
// - evaluer() contrôle les domaines explicitement : pas de NaN/inf silencieux.
// - log est le logarithme népérien.

use super::erreurs::ErreurEvaluation;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Pi,

    Neg(Box<Expr>),

    Sqrt(Box<Expr>),
    Log(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Rem(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l'arbre en f64.
    ///
    /// Contrôles de domaine:
    /// - division et modulo par zéro
    /// - sqrt d'un négatif, log d'un non strictement positif
    /// - tout résultat non fini (débordement, 0^-1, …) est refusé
    pub fn evaluer(&self) -> Result<f64, ErreurEvaluation> {
        use Expr::*;

        let v = match self {
            Num(x) => *x,
            Pi => std::f64::consts::PI,

            Neg(x) => -x.evaluer()?,

            Sqrt(x) => {
                let a = x.evaluer()?;
                if a < 0.0 {
                    return Err(ErreurEvaluation::Domaine {
                        fonction: "sqrt",
                        argument: a,
                    });
                }
                a.sqrt()
            }

            Log(x) => {
                let a = x.evaluer()?;
                if a <= 0.0 {
                    return Err(ErreurEvaluation::Domaine {
                        fonction: "log",
                        argument: a,
                    });
                }
                a.ln()
            }

            Sin(x) => x.evaluer()?.sin(),
            Cos(x) => x.evaluer()?.cos(),
            Tan(x) => x.evaluer()?.tan(),

            Add(a, b) => a.evaluer()? + b.evaluer()?,
            Sub(a, b) => a.evaluer()? - b.evaluer()?,
            Mul(a, b) => a.evaluer()? * b.evaluer()?,

            Div(a, b) => {
                let x = a.evaluer()?;
                let y = b.evaluer()?;
                if y == 0.0 {
                    return Err(ErreurEvaluation::DivisionParZero);
                }
                x / y
            }

            // Modulo plancher : le signe suit le diviseur.
            Rem(a, b) => {
                let x = a.evaluer()?;
                let y = b.evaluer()?;
                if y == 0.0 {
                    return Err(ErreurEvaluation::DivisionParZero);
                }
                x - y * (x / y).floor()
            }

            Pow(a, b) => a.evaluer()?.powf(b.evaluer()?),
        };

        if v.is_finite() {
            Ok(v)
        } else {
            Err(ErreurEvaluation::ResultatNonFini)
        }
    }
}
