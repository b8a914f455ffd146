//! Calculatrice RPN
//!
//! - noyau : évaluateur d’expressions (prétraitement -> jetons -> RPN -> pile), f64
//! - app   : état + vue egui (natif + web), journal de session

pub mod app;
pub mod noyau;

// API publique minimale
pub use noyau::{evaluate, ErreurEval};
