//! Noyau RPN (f64)
//!
//! Organisation interne :
//! - prealable.rs : blancs retirés + multiplication implicite
//! - jetons.rs    : tokenisation (moins unaire décidé ici)
//! - rpn.rs       : shunting-yard -> instructions postfixées
//! - eval.rs      : pile d’opérandes + pipeline complet
//! - format.rs    : affichage d’un f64 (façon navigateur)
//! - erreur.rs    : erreurs (message affiché tel quel)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod prealable;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{evaluate, evaluate_detail, Demarche};
pub use format::format_resultat;
