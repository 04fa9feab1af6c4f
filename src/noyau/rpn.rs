// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfix)
//
// Règles:
// - Number : sortie directe
// - '(' : empilée (précédence synthétique 1, jamais dépilée par comparaison)
// - ')' : dépile vers la sortie jusqu’à '(' (jetée). Sans '(' => MissingOperator
// - opérateur : dépile TANT QUE le sommet est un opérateur
//     - de précédence plus forte, ou
//     - de précédence égale ET l’entrant est associatif à gauche
//   puis empile l’entrant. '^' (droite) ne dépile donc pas un '^'.
// - fin : '(' restante => MissingOperator, sinon vide la pile (sommet d’abord)
//
// NOTE:
// - Un seul dépilement par opérateur plus faible ne suffit pas :
//   "1-2*3+4" donnerait "1 2 3 * 4 + -" (= -9) au lieu de -1.
// - Aucune parenthèse ne survit à la conversion.

use super::erreur::{CalcError, CalcResult};
use super::jetons::Token;
use super::operateurs::{Assoc, Operator};

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pile {
    Op(Operator),
    ParenOuvrante,
}

impl Pile {
    fn precedence(self) -> u8 {
        match self {
            Pile::Op(op) => op.precedence(),
            Pile::ParenOuvrante => 1,
        }
    }
}

/// Vrai si `sommet` doit sortir avant d’empiler `entrant`.
fn doit_depiler(sommet: Pile, entrant: Operator) -> bool {
    match sommet {
        Pile::ParenOuvrante => false,
        Pile::Op(_) => {
            let p_top = sommet.precedence();
            let p_tok = entrant.precedence();
            match entrant.associativity() {
                Assoc::Left => p_top >= p_tok,
                Assoc::Right => p_top > p_tok,
            }
        }
    }
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Number(3), Operator('+'), Number(4), Operator('*'), Number(2)]
///   rpn:    [Number(3), Number(4), Number(2), Operator('*'), Operator('+')]
pub fn to_postfix(tokens: &[Token]) -> CalcResult<Vec<Token>> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();
    let mut profondeur: usize = 0;

    for tok in tokens.iter().copied() {
        match tok {
            Token::Number(_) => out.push(tok),

            Token::LeftParen => {
                ops.push(Pile::ParenOuvrante);
                profondeur += 1;
            }

            Token::RightParen => {
                if profondeur == 0 {
                    log::debug!("')' sans '(' correspondante");
                    return Err(CalcError::MissingOperator);
                }
                profondeur -= 1;

                // dépile jusqu’à '(' (garantie présente par `profondeur`)
                while let Some(top) = ops.pop() {
                    match top {
                        Pile::ParenOuvrante => break,
                        Pile::Op(op) => out.push(op.into()),
                    }
                }
            }

            Token::Operator(c) => {
                let entrant = Operator::try_from(c)?;

                while let Some(&top) = ops.last() {
                    if !doit_depiler(top, entrant) {
                        break;
                    }
                    ops.pop();
                    if let Pile::Op(op) = top {
                        log::trace!("dépile '{}' avant '{}'", op.symbol(), c);
                        out.push(op.into());
                    }
                }

                ops.push(Pile::Op(entrant));
            }
        }
    }

    if profondeur != 0 {
        log::debug!("{profondeur} parenthèse(s) non fermée(s)");
        return Err(CalcError::MissingOperator);
    }

    // vide la pile ops (sommet d’abord)
    while let Some(top) = ops.pop() {
        match top {
            Pile::Op(op) => out.push(op.into()),
            // inatteignable : profondeur == 0
            Pile::ParenOuvrante => return Err(CalcError::MissingOperator),
        }
    }

    Ok(out)
}
