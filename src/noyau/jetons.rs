// src/noyau/jetons.rs

use super::erreur::ErreurEval;
use super::format::format_resultat;

/// Opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Plus,
    Minus,
    Star,
    Slash,
}

impl OpBin {
    pub fn precedence(self) -> u8 {
        match self {
            OpBin::Plus | OpBin::Minus => 1,
            OpBin::Star | OpBin::Slash => 2,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            OpBin::Plus => '+',
            OpBin::Minus => '-',
            OpBin::Star => '*',
            OpBin::Slash => '/',
        }
    }
}

/// Précédence du moins unaire : plus forte que tout opérateur binaire.
pub const PRECEDENCE_NEG: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(OpBin),

    // Moins unaire (décidé ici, pas dans le shunting-yard)
    Neg,

    LPar,
    RPar,
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une chaîne (déjà passée par `preprocess`) en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.), un seul point par nombre
/// - opérateurs + - * /
/// - moins unaire : '-' en tête, après un opérateur binaire ou après '('
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == ' ' {
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres et de points
        if est_chiffre(c) {
            let start = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&texte)?));
            continue;
        }

        let tok = match c {
            '+' => Tok::Op(OpBin::Plus),
            '*' => Tok::Op(OpBin::Star),
            '/' => Tok::Op(OpBin::Slash),

            // Regard en arrière sur le DERNIER jeton émis.
            // NOTE: un Neg précédent ne rend pas ce '-' unaire ("--2" => Neg, Minus, 2).
            '-' => match out.last() {
                None | Some(Tok::Op(_)) | Some(Tok::LPar) => Tok::Neg,
                _ => Tok::Op(OpBin::Minus),
            },

            '(' => Tok::LPar,
            ')' => Tok::RPar,

            _ => return Err(ErreurEval::InvalidCharacter(c)),
        };

        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Lit une suite chiffres/points en f64 fini.
/// "." seul ou un nombre qui déborde en infini sont refusés comme format invalide.
fn lire_nombre(texte: &str) -> Result<f64, ErreurEval> {
    if texte.matches('.').count() > 1 {
        return Err(ErreurEval::InvalidNumberFormat);
    }

    match texte.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurEval::InvalidNumberFormat),
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format_resultat(*v),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
