// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), sans parenthèses
//
// Règles:
// - Neg (moins unaire) : empilé, précédence 3 ; sort avant tout binaire
//   qui arrive ensuite, ou juste après la ')' qui ferme son argument
// - Binaires : gauche-associatifs (on dépile tant que top >= courant)
//
// NOTE:
// - Le type Instr n’a pas de parenthèses : une RPN ne peut pas en contenir.

use super::erreur::ErreurEval;
use super::format::format_resultat;
use super::jetons::{OpBin, Tok, PRECEDENCE_NEG};

/// Instruction RPN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instr {
    Num(f64),
    Op(OpBin),
    Neg,
}

/// Précédence d’un jeton de la pile d’opérateurs (0 = parenthèse, jamais dépilée par précédence).
fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Op(op) => op.precedence(),
        Tok::Neg => PRECEDENCE_NEG,
        Tok::Num(_) | Tok::LPar | Tok::RPar => 0,
    }
}

/// Jeton de pile -> instruction de sortie. Les parenthèses n’ont pas d’instruction.
fn vers_instr(t: Tok) -> Result<Instr, ErreurEval> {
    match t {
        Tok::Num(v) => Ok(Instr::Num(v)),
        Tok::Op(op) => Ok(Instr::Op(op)),
        Tok::Neg => Ok(Instr::Neg),
        Tok::LPar | Tok::RPar => Err(ErreurEval::MismatchedParentheses),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Neg, LPar, Num(2), Op(Plus), Num(3), RPar]
///   rpn:    [Num(2), Num(3), Op(Plus), Neg]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Instr>, ErreurEval> {
    let mut out: Vec<Instr> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(v) => out.push(Instr::Num(v)),

            // jamais comparé à l’arrivée : il attend son argument
            Tok::Neg => ops.push(tok),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::RPar) || precedence(&top) < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(vers_instr(top)?);
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        None => return Err(ErreurEval::MismatchedParentheses),
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(vers_instr(top)?),
                    }
                }

                // -(...) : la négation s’applique dès la fermeture
                if let Some(Tok::Neg) = ops.last() {
                    ops.pop();
                    out.push(Instr::Neg);
                }
            }
        }
    }

    // vide la pile ops (une parenthèse restante => non fermée)
    while let Some(op) = ops.pop() {
        out.push(vers_instr(op)?);
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : RPN en texte.
pub fn format_rpn(rpn: &[Instr]) -> String {
    rpn.iter()
        .map(|i| match i {
            Instr::Num(v) => format_resultat(*v),
            Instr::Op(op) => op.symbole().to_string(),
            Instr::Neg => "neg".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
