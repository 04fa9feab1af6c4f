// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Le contrat porte sur le GENRE (variante), pas sur le texte.

/// Erreur d’évaluation : la première détectée interrompt tout le pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Un opérateur n’a pas ses deux opérandes.
    #[error("opérande manquant ou invalide")]
    MissingOperand,

    /// Diviseur exactement nul (0 ou -0).
    #[error("division par zéro")]
    DivisionByZero,

    /// Pile finale != 1 valeur, ou parenthèses déséquilibrées.
    #[error("opérateur ou parenthèse manquant")]
    MissingOperator,

    /// Symbole hors de `+ - * / ^` arrivé jusqu’à la table des opérateurs.
    #[error("opérateur introuvable: '{0}'")]
    OperatorNotFound(char),

    /// Mode strict seulement : caractère refusé dès la tokenisation.
    #[error("caractère inattendu: '{ch}' (position {pos})")]
    InvalidCharacter { ch: char, pos: usize },

    /// Littéral numérique mal formé (ex: "1.2.3", ".").
    #[error("nombre invalide: \"{0}\"")]
    InvalidNumber(String),
}

/// Raccourci pour les étapes du noyau.
pub type CalcResult<T> = Result<T, CalcError>;
