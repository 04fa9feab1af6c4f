// src/noyau/options.rs

/// Réglages de lecture, passés à la tokenisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// `.` fait partie des nombres (ex: 2.5). Sinon `.` devient un jeton “opérateur”.
    pub decimales: bool,
    /// Refuse tout caractère inconnu dès la tokenisation (InvalidCharacter)
    /// au lieu de le laisser échouer plus tard (OperatorNotFound).
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            decimales: true,
            strict: false,
        }
    }
}
