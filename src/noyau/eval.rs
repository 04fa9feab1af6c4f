//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile d’opérandes -> f64
//!
//! Chaque étape matérialise sa sortie (pas de fusion) et la première erreur
//! remonte telle quelle : aucun résultat partiel.

use super::erreur::{CalcError, CalcResult};
use super::jetons::{format_tokens, tokenize, Token};
use super::operateurs::Operator;
use super::options::Options;
use super::rpn::to_postfix;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Réduit une suite RPN à une seule valeur.
///
/// Opérateur : dépile d1 (droite) puis d2 (gauche), empile `d2 <op> d1`.
/// À la fin, il doit rester exactement une valeur.
pub fn eval_postfix(postfix: &[Token]) -> CalcResult<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(postfix.len());

    for tok in postfix {
        match *tok {
            Token::Number(n) => st.push(n),

            Token::Operator(c) => {
                let d1 = st.pop().ok_or(CalcError::MissingOperand)?;
                let d2 = st.pop().ok_or(CalcError::MissingOperand)?;
                let op = Operator::try_from(c)?;
                st.push(op.apply(d2, d1)?);
            }

            // une RPN bien formée n’en contient jamais
            Token::LeftParen | Token::RightParen => return Err(CalcError::MissingOperator),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(CalcError::MissingOperator),
    }
}

/// API publique : évalue une expression avec les réglages par défaut.
///
/// Entrée vide (après trim) => `f64::NAN` : « rien à évaluer », pas une erreur.
pub fn evaluate(expr_str: &str) -> CalcResult<f64> {
    evaluate_with(expr_str, &Options::default())
}

pub fn evaluate_with(expr_str: &str, options: &Options) -> CalcResult<f64> {
    evaluate_traced(expr_str, options).map(|(v, _d)| v)
}

/// Comme [`evaluate_with`], et retourne aussi la démarche (jetons, RPN) pour l’affichage.
pub fn evaluate_traced(expr_str: &str, options: &Options) -> CalcResult<(f64, Demarche)> {
    if expr_str.trim().is_empty() {
        return Ok((f64::NAN, Demarche::default()));
    }

    // pas de trim ici : les positions d’InvalidCharacter restent celles de l’appelant
    let res = pipeline(expr_str, options);
    if let Err(e) = &res {
        log::debug!("échec pour {expr_str:?}: {e}");
    }
    res
}

fn pipeline(s: &str, options: &Options) -> CalcResult<(f64, Demarche)> {
    // 1) Jetons
    let jetons = tokenize(s, options)?;
    let jetons_txt = format_tokens(&jetons);
    log::debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_postfix(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    log::debug!("rpn: {rpn_txt}");

    // 3) Valeur
    let v = eval_postfix(&rpn)?;

    Ok((
        v,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}
