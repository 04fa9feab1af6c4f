// src/noyau/jetons.rs

use super::erreur::{CalcError, CalcResult};
use super::operateurs::Operator;
use super::options::Options;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),

    // Symbole brut : la table des opérateurs tranchera (OperatorNotFound sinon).
    Operator(char),

    LeftParen,
    RightParen,
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op.symbol())
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres (chiffres adjacents fusionnés : "12" -> Number(12))
/// - décimaux si `options.decimales` (ex: 2.5, .5, 3.)
/// - tout autre caractère non blanc -> un jeton d’un caractère
///
/// Les espaces ne font que séparer. Entrée vide => vecteur vide.
/// En mode strict, un caractère hors `+ - * / ^ ( )` est refusé ici
/// (position = index de caractère dans `s`).
pub fn tokenize(s: &str, options: &Options) -> CalcResult<Vec<Token>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    let est_chiffre = |c: char| c.is_ascii_digit() || (options.decimales && c == '.');

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if est_chiffre(c) {
            let start = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let n = lit
                .parse::<f64>()
                .map_err(|_| CalcError::InvalidNumber(lit.clone()))?;
            out.push(Token::Number(n));
            continue;
        }

        let tok = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => {
                if options.strict && Operator::try_from(c).is_err() {
                    return Err(CalcError::InvalidCharacter { ch: c, pos: i });
                }
                Token::Operator(c)
            }
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Token::Number(n) => format_nombre(*n),
            Token::Operator(c) => c.to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

/// Affichage d’un nombre : entier sans ".0", sinon forme courte de Rust.
pub fn format_nombre(n: f64) -> String {
    format!("{n}")
}
