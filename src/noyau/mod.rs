//! Noyau d’évaluation arithmétique (f64)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs (CalcError)
//! - operateurs.rs : table des opérateurs (précédence, associativité, application)
//! - options.rs    : réglages (décimales, mode strict)
//! - jetons.rs     : tokenisation + format “démarche”
//! - rpn.rs        : shunting-yard (infixe -> postfix)
//! - eval.rs       : pile d’opérandes + pipeline complet
//!
//! Aucun état partagé entre deux appels : chaque évaluation possède ses piles.

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateurs;
pub mod options;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::{CalcError, CalcResult};
pub use eval::{eval_postfix, evaluate, evaluate_traced, evaluate_with, Demarche};
pub use jetons::{format_tokens, tokenize, Token};
pub use operateurs::{Assoc, Operator};
pub use options::Options;
pub use rpn::to_postfix;
