//! Tests scientifiques (campagne) : vecteurs de référence + invariants + limites contrôlées.
//!
//! But : vérifier le pipeline complet sur des cas connus, sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur de parenthèses, longueur)
//!
//! Notes :
//! - Pas de moins unaire : un négatif s’écrit (0-x).
//! - Les valeurs attendues sont des entiers ou des dyadiques : égalité stricte en f64.

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::evaluate;

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_err(expr: &str, attendu: CalcError) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Vecteurs de référence ------------------------ */

#[test]
fn sci_vecteurs_de_reference() {
    assert_val("3+4", 7.0);
    assert_val("3+4*2", 11.0);
    assert_val("(3+4)*2", 14.0);
    assert_val("2^3^2", 512.0);
    assert_val("12+3", 15.0);
    assert_err("10/0", CalcError::DivisionByZero);
    assert_err("3+", CalcError::MissingOperand);
    assert_err("+3", CalcError::MissingOperand);
    assert_err("(3+4", CalcError::MissingOperator);
}

#[test]
fn sci_vide_nan() {
    for s in ["", " ", "\t\n", "        "] {
        assert!(eval_ok(s).is_nan(), "expr={s:?}");
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_chaines_melangees() {
    // toutes les positions d’un opérateur faible entre deux forts
    assert_val("1-2*3+4", -1.0);
    assert_val("1+2*3-4", 3.0);
    assert_val("2*3-4/2+1", 5.0);
    assert_val("2^2*3-1", 11.0);
    assert_val("1+2^3*2", 17.0);
    assert_val("8-2^2^2/4", 4.0);
}

#[test]
fn sci_gauche_a_droite() {
    assert_val("20-5-3-2", 10.0);
    assert_val("64/4/2/2", 4.0);
    assert_val("2*3/6*5", 5.0);
    assert_val("10-2+3", 11.0);
}

#[test]
fn sci_droite_a_gauche() {
    assert_val("2^2^3", 256.0);
    assert_val("(2^2)^3", 64.0);
    assert_val("2^1^5^7", 2.0);
}

#[test]
fn sci_negatifs_par_soustraction() {
    assert_val("(0-3)*(0-4)", 12.0);
    assert_val("(0-2)^3", -8.0);
    assert_val("(0-2)^2", 4.0);
    // diviseur -0 : toujours une division par zéro
    assert_err("1/(0*(0-1))", CalcError::DivisionByZero);
}

#[test]
fn sci_decimaux() {
    assert_val("0.5+0.25", 0.75);
    assert_val("1.5*4", 6.0);
    assert_val(".5*.5", 0.25);
    assert_val("2^0.5^2", 2.0_f64.powf(0.25));
}

#[test]
fn sci_ieee_aux_limites() {
    assert!(eval_ok("(0-1)^0.5").is_nan());
    assert_eq!(eval_ok("10^400"), f64::INFINITY);
    assert_val("0^0", 1.0);
    assert_val("2^(0-2)", 0.25);
}

/* ------------------------ Erreurs : la première gagne ------------------------ */

#[test]
fn sci_premiere_erreur_remonte() {
    // conversion avant évaluation : la parenthèse l’emporte sur la division
    assert_err("(1/0", CalcError::MissingOperator);
    // symbole inconnu rencontré avant la fin du balayage
    assert_err("(1$2", CalcError::OperatorNotFound('$'));
    // ')' orpheline détectée à sa position
    assert_err("1)$", CalcError::MissingOperator);
    assert_err("1 + + 2", CalcError::MissingOperand);
    assert_err("1 2 3 +", CalcError::MissingOperator);
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);
    assert_val(&expr, 1.0);

    let manquante = format!("{}1{}", "(".repeat(n), ")".repeat(n - 1));
    assert_err(&manquante, CalcError::MissingOperator);
    budget(t0, max);
}

#[test]
fn sci_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["1"; 5000].join("+");
    assert_val(&expr, 5000.0);

    // puissances en chaîne : pile d’opérateurs pleine jusqu’à la fin
    let tour = vec!["1"; 2000].join("^");
    assert_val(&tour, 1.0);
    budget(t0, max);
}
