// src/noyau/jetons.rs

use super::erreurs::ErreurEvaluation;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,

    // Noms de fonctions (sqrt/log/sin/cos/tan).
    // NOTE: le parse (RPN->Expr) vérifie que le nom est bien connu.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // %

    // Moins unaire. Jamais produit par tokenize : injecté par rpn.rs
    // quand un '-' arrive en position de préfixe.
    MoinsU,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .25)
/// - opérateurs + - * / ^ %
/// - parenthèses ( )
/// - identifiants [a-zA-Z]+ (normalisés en minuscules), "pi" devient Tok::Pi
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEvaluation> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            // Normalisation : "pi" est une constante, pas une fonction.
            if w == "pi" {
                out.push(Tok::Pi);
            } else {
                out.push(Tok::Ident(w));
            }
            continue;
        }

        // Nombre décimal : chiffres avec au plus un point ("12", "3.5", ".25").
        let point_puis_chiffre = c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit();
        if c.is_ascii_digit() || point_puis_chiffre {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let n: f64 = texte
                .parse()
                .map_err(|_| ErreurEvaluation::NombreInvalide(texte.clone()))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurEvaluation::CaractereInattendu(c));
    }

    Ok(out)
}
