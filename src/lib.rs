//! Calculatrice RPN : expressions `+ - * / ^` avec parenthèses -> f64.
//!
//! ```
//! assert_eq!(calculatrice_rpn::evaluate("(3+4)*2"), Ok(14.0));
//! assert!(calculatrice_rpn::evaluate("   ").unwrap().is_nan());
//! ```

pub mod noyau;

pub use noyau::{
    evaluate, evaluate_traced, evaluate_with, CalcError, CalcResult, Demarche, Options,
};
