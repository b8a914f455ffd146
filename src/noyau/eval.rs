//! Noyau : évaluation (pipeline réel)
//!
//! preprocess -> tokenize -> RPN -> pile d’opérandes -> f64
//!
//! Chaque étape rend son résultat ou UNE erreur ; la première erreur arrête tout.

use tracing::debug;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize, OpBin};
use super::prealable::preprocess;
use super::rpn::{format_rpn, to_rpn, Instr};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub prealable: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression en f64.
pub fn evaluate(expression: &str) -> Result<f64, ErreurEval> {
    evaluate_detail(expression).map(|(v, _)| v)
}

/// Comme `evaluate`, mais retourne aussi la démarche (texte prétraité, jetons, RPN).
pub fn evaluate_detail(expression: &str) -> Result<(f64, Demarche), ErreurEval> {
    // 1) Multiplication implicite
    let prealable = preprocess(expression);

    // 2) Jetons
    let jetons = tokenize(&prealable)?;
    let jetons_txt = format_tokens(&jetons);
    debug!(expression, jetons = %jetons_txt, "jetons");

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_rpn(&rpn);
    debug!(rpn = %rpn_txt, "rpn");

    // 4) Pile
    let valeur = evaluate_rpn(&rpn)?;

    Ok((
        valeur,
        Demarche {
            prealable,
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}

/// Évalue une RPN avec une pile d’opérandes explicite.
pub fn evaluate_rpn(rpn: &[Instr]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for instr in rpn {
        match *instr {
            Instr::Num(v) => st.push(v),

            Instr::Neg => {
                let a = st.pop().ok_or(ErreurEval::InvalidExpression)?;
                st.push(-a);
            }

            Instr::Op(op) => {
                // droite d’abord, puis gauche
                let b = st.pop().ok_or(ErreurEval::InvalidExpression)?;
                let a = st.pop().ok_or(ErreurEval::InvalidExpression)?;
                st.push(appliquer(op, a, b)?);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::InvalidExpression),
    }
}

fn appliquer(op: OpBin, a: f64, b: f64) -> Result<f64, ErreurEval> {
    Ok(match op {
        OpBin::Plus => a + b,
        OpBin::Minus => a - b,
        OpBin::Star => a * b,
        OpBin::Slash => {
            // égalité exacte (0.0 == -0.0)
            if b == 0.0 {
                return Err(ErreurEval::DivisionByZero);
            }
            a / b
        }
    })
}
