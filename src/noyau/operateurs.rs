// src/noyau/operateurs.rs
//
// Table des opérateurs : précédence + associativité + application.
// Données constantes, partagées sans verrou (rien de mutable ici).
//
//   op | préc. | assoc.
//   ---+-------+-------
//   + -|   2   | gauche
//   * /|   3   | gauche
//   ^  |   4   | droite

use num_traits::Float;

use super::erreur::{CalcError, CalcResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Mul | Operator::Div => 3,
            Operator::Pow => 4,
        }
    }

    pub fn associativity(self) -> Assoc {
        match self {
            Operator::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    /// Applique `gauche <op> droite`.
    ///
    /// `droite` est l’opérande dépilé en premier (d1), `gauche` le second (d2).
    /// Division : refus si le diviseur vaut exactement zéro (signe ignoré).
    /// Puissance : règles IEEE-754 de `powf` (NaN pour base < 0 et exposant fractionnaire).
    pub fn apply<F: Float>(self, gauche: F, droite: F) -> CalcResult<F> {
        let v = match self {
            Operator::Add => gauche + droite,
            Operator::Sub => gauche - droite,
            Operator::Mul => gauche * droite,
            Operator::Div => {
                if droite.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                gauche / droite
            }
            Operator::Pow => gauche.powf(droite),
        };
        Ok(v)
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            '^' => Ok(Operator::Pow),
            autre => Err(CalcError::OperatorNotFound(autre)),
        }
    }
}
