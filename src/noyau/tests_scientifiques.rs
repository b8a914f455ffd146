//! Tests scientifiques (campagne) : scénarios + bornes + propriétés.
//!
//! But : fixer le comportement observable du pipeline complet.
//! - scénarios chiffrés (précédence, associativité, moins unaire, multiplication implicite)
//! - une erreur documentée par cas limite
//! - propriétés (proptest) : prétraitement idempotent, jamais de panique
//! - stress borné (budget temps global)

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::erreur::ErreurEval;
use super::evaluate;
use super::prealable::preprocess;

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_err(expr: &str, attendu: ErreurEval) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_precedence() {
    assert_val("2+3*4", 14.0);
    assert_val("2*3+4", 10.0);
    assert_val("(2+3)*4", 20.0);
}

#[test]
fn sci_moins_unaire() {
    assert_val("-5+3", -2.0);
    assert_val("-(2+3)", -5.0);
    assert_val("3--2", 5.0);
    assert_val("2*-3", -6.0);
    assert_val("(-2)*(-3)", 6.0);
    assert_val("-(2+3)*4", -20.0);
}

#[test]
fn sci_multiplication_implicite() {
    assert_val("2(3+4)", 14.0);
    assert_val("(1+1)(2+2)", 8.0);
    assert_val("(2)3", 6.0);
    assert_val("8/2(2+2)", 16.0);
}

#[test]
fn sci_gauche_associatif() {
    assert_val("10/2/5", 1.0);
    assert_val("10-4-3", 3.0);
}

#[test]
fn sci_flottants() {
    assert_val("0.1+0.2", 0.1 + 0.2);
    assert_val("1/4", 0.25);
    assert_val(".5*4", 2.0);
}

#[test]
fn sci_blancs() {
    assert_val("  2 +\t3 * 4\n", 14.0);
}

/* ------------------------ Bornes ------------------------ */

#[test]
fn sci_bornes() {
    assert_err("2/0", ErreurEval::DivisionByZero);
    assert_err("2+", ErreurEval::InvalidExpression);
    assert_err("(2+3", ErreurEval::MismatchedParentheses);
    assert_err("2+3)", ErreurEval::MismatchedParentheses);
    assert_err("2..3", ErreurEval::InvalidNumberFormat);
    assert_err("2&3", ErreurEval::InvalidCharacter('&'));
}

#[test]
fn sci_vide() {
    assert_err("", ErreurEval::InvalidExpression);
    assert_err("   ", ErreurEval::InvalidExpression);
    assert_err("()", ErreurEval::InvalidExpression);
}

#[test]
fn sci_double_moins_unaire() {
    // un Neg ne rend pas le '-' suivant unaire : "--2" n’a pas d’opérande gauche
    assert_err("--2", ErreurEval::InvalidExpression);
}

#[test]
fn sci_division_par_zero_calculee() {
    assert_err("1/(2-2)", ErreurEval::DivisionByZero);
    assert_err("1/-0", ErreurEval::DivisionByZero);
}

#[test]
fn sci_messages() {
    let msg = |s: &str| evaluate(s).err().map(|e| e.to_string()).unwrap_or_default();
    assert_eq!(msg("2/0"), "Math Error: Division by zero");
    assert_eq!(msg("2&3"), "Invalid Character: &");
    assert_eq!(msg("(2"), "Mismatched Parentheses");
    assert_eq!(msg("2..3"), "Invalid number format");
    assert_eq!(msg("*"), "Invalid expression");
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pile explicite partout : pas de récursion, pas de débordement
    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);

    assert_val(&expr, 1.0);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2_000].join("+");
    budget(t0, max);

    assert_val(&expr, 1000.0);
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn prop_preprocess_idempotent(s in "[0-9().+*/ -]{0,40}") {
        let une = preprocess(&s);
        prop_assert_eq!(preprocess(&une), une);
    }

    #[test]
    fn prop_evaluate_ne_panique_pas(s in "\\PC{0,60}") {
        let _ = evaluate(&s);
    }

    #[test]
    fn prop_alphabet_valide_jamais_caractere_invalide(s in "[0-9().+*/ -]{0,40}") {
        prop_assert!(!matches!(evaluate(&s), Err(ErreurEval::InvalidCharacter(_))));
    }

    #[test]
    fn prop_entier_litteral(n in 0u32..1_000_000) {
        prop_assert_eq!(evaluate(&n.to_string()), Ok(f64::from(n)));
        prop_assert_eq!(evaluate(&format!("-{n}")), Ok(-f64::from(n)));
    }
}
