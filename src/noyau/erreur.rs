// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du pipeline. Le message (`Display`) est montré tel quel à l’utilisateur.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurEval {
    #[error("Invalid Character: {0}")]
    InvalidCharacter(char),

    #[error("Invalid number format")]
    InvalidNumberFormat,

    #[error("Mismatched Parentheses")]
    MismatchedParentheses,

    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Math Error: Division by zero")]
    DivisionByZero,
}
