//! Tests de propriétés (proptest) du pipeline complet.
//!
//! 1. **Jamais de panique** : toute chaîne produit une valeur ou une erreur
//! 2. **Idempotence** : réévaluer la même chaîne donne le même résultat
//! 3. **Conformité** : pour une expression bien formée générée depuis un arbre,
//!    le pipeline (jetons -> RPN -> pile) donne la valeur de l’arbre évalué directement,
//!    ou les deux échouent par division par zéro
//! 4. **RPN sans parenthèses** et une seule valeur finale

use proptest::prelude::*;

use super::erreur::CalcError;
use super::jetons::{tokenize, Token};
use super::operateurs::{Assoc, Operator};
use super::options::Options;
use super::rpn::to_postfix;
use super::{eval_postfix, evaluate};

/* ------------------------ Arbre de référence ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Feuille(u32),
    Bin(Operator, Box<Arbre>, Box<Arbre>),
    // parenthèses redondantes, pour varier le texte sans changer le sens
    Paren(Box<Arbre>),
}

impl Arbre {
    /// Évaluation directe, post-ordre (gauche, droite, opérateur) comme la pile RPN.
    fn valeur(&self) -> Result<f64, CalcError> {
        match self {
            Arbre::Feuille(n) => Ok(f64::from(*n)),
            Arbre::Paren(a) => a.valeur(),
            Arbre::Bin(op, a, b) => {
                let g = a.valeur()?;
                let d = b.valeur()?;
                op.apply(g, d)
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Arbre::Bin(op, _, _) => op.precedence(),
            _ => u8::MAX,
        }
    }

    /// Texte infixe avec le minimum de parenthèses pour garder la structure.
    fn texte(&self) -> String {
        match self {
            Arbre::Feuille(n) => n.to_string(),
            Arbre::Paren(a) => format!("({})", a.texte()),
            Arbre::Bin(op, a, b) => {
                let p = op.precedence();
                let (pg, pd) = (a.precedence(), b.precedence());
                let paren_g = pg < p || (pg == p && op.associativity() == Assoc::Right);
                let paren_d = pd < p || (pd == p && op.associativity() == Assoc::Left);
                let g = if paren_g {
                    format!("({})", a.texte())
                } else {
                    a.texte()
                };
                let d = if paren_d {
                    format!("({})", b.texte())
                } else {
                    b.texte()
                };
                format!("{g} {} {d}", op.symbol())
            }
        }
    }
}

fn arb_operateur() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arb_arbre() -> impl Strategy<Value = Arbre> {
    let feuille = (0u32..50).prop_map(Arbre::Feuille);
    feuille.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            4 => (arb_operateur(), inner.clone(), inner.clone())
                .prop_map(|(op, a, b)| Arbre::Bin(op, Box::new(a), Box::new(b))),
            1 => inner.prop_map(|a| Arbre::Paren(Box::new(a))),
        ]
    })
}

fn meme_resultat(a: &Result<f64, CalcError>, b: &Result<f64, CalcError>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn jamais_de_panique(s in "\\PC{0,40}") {
        let _ = evaluate(&s);
    }

    #[test]
    fn jamais_de_panique_alphabet_calcul(s in "[0-9. +*/^()-]{0,40}") {
        let _ = evaluate(&s);
    }

    #[test]
    fn idempotence(s in "[0-9 +*/^()-]{0,30}") {
        let a = evaluate(&s);
        let b = evaluate(&s);
        prop_assert!(meme_resultat(&a, &b), "s={:?} {:?} vs {:?}", s, a, b);
    }

    #[test]
    fn conforme_a_l_arbre(arbre in arb_arbre()) {
        let texte = arbre.texte();
        let attendu = arbre.valeur();
        let obtenu = evaluate(&texte);
        prop_assert!(
            meme_resultat(&attendu, &obtenu),
            "texte={:?} attendu={:?} obtenu={:?}", texte, attendu, obtenu
        );
    }

    #[test]
    fn rpn_sans_parentheses_et_une_valeur(arbre in arb_arbre()) {
        let texte = arbre.texte();
        let jetons = tokenize(&texte, &Options::default()).unwrap();
        let rpn = to_postfix(&jetons).unwrap();

        prop_assert!(rpn.iter().all(|t| matches!(t, Token::Number(_) | Token::Operator(_))));
        let nb = rpn.iter().filter(|t| matches!(t, Token::Number(_))).count();
        let ops = rpn.len() - nb;
        prop_assert_eq!(nb, ops + 1);

        // une seule valeur, sauf division par zéro
        match eval_postfix(&rpn) {
            Ok(_) | Err(CalcError::DivisionByZero) => {}
            Err(e) => prop_assert!(false, "texte={:?} err={}", texte, e),
        }
    }
}
