//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (expression, affichage, erreur, journal, thème)
//! et offrir les actions du pavé (saisie, C, DEL, =) sans logique d’affichage.
//!
//! Contrats :
//! - Le noyau n’est appelé que par `egal()`, via `noyau::evaluate_detail`.
//! - Une erreur ne touche ni l’affichage ni l’expression : seul `erreur` change.
//! - Journal borné (JOURNAL_MAX), le plus récent en tête.

use tracing::{info, warn};

use crate::noyau::{self, Demarche};

/// Garde-fou : nombre max d’entrées gardées dans le journal de session.
pub const JOURNAL_MAX: usize = 200;

/// Opérateurs (et point) soumis aux règles de saisie.
const SYMBOLES_OP: [char; 5] = ['+', '-', '*', '/', '.'];

/// Opérateurs après lesquels un '-' est un moins unaire.
const OPERATEURS: [char; 4] = ['+', '-', '*', '/'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Clair,
    Sombre,
}

/// Une opération évaluée avec succès.
#[derive(Clone, Debug, PartialEq)]
pub struct EntreeJournal {
    pub id: u64,
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expr: String,

    // --- sorties ---
    pub affichage: String, // texte montré (saisie en cours ou dernier résultat)
    pub erreur: String,    // message d’erreur du noyau (affiché tel quel)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- journal (session) ---
    pub journal: Vec<EntreeJournal>,
    prochain_id: u64,

    // --- paramètres ---
    pub theme: Theme,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Saisie d’un symbole (pavé ou clavier).
    ///
    /// Règles pour `+ - * / .` :
    /// - entrée vide : seul '-' est accepté
    /// - après un autre symbole : on remplace le dernier,
    ///   sauf '-' après un opérateur (moins unaire) qui s’ajoute
    pub fn saisir(&mut self, c: char) {
        self.erreur.clear();

        if SYMBOLES_OP.contains(&c) {
            if self.expr.is_empty() && c != '-' {
                return;
            }

            if let Some(dernier) = self.expr.chars().last() {
                let unaire = c == '-' && OPERATEURS.contains(&dernier);
                if SYMBOLES_OP.contains(&dernier) && !unaire {
                    self.expr.pop();
                    self.affichage.pop();
                    self.expr.push(c);
                    self.affichage.push(c);
                    return;
                }
            }
        }

        self.expr.push(c);
        self.affichage.push(c);
    }

    /// C : efface expression, affichage et erreur.
    pub fn effacer(&mut self) {
        self.expr.clear();
        self.affichage.clear();
        self.erreur.clear();
    }

    /// DEL : retire le dernier symbole.
    pub fn supprimer(&mut self) {
        self.expr.pop();
        self.affichage.pop();
        self.erreur.clear();
    }

    /// = : évalue l’expression via le noyau.
    ///
    /// Succès : le résultat remplace l’expression (on peut enchaîner) et part au journal.
    /// Échec  : message dans `erreur`, le reste est conservé.
    pub fn egal(&mut self) {
        if self.expr.is_empty() {
            return;
        }

        match noyau::evaluate_detail(&self.expr) {
            Ok((valeur, demarche)) => {
                let resultat = noyau::format_resultat(valeur);
                info!(expression = %self.expr, %resultat, "évaluation");

                let expression = std::mem::replace(&mut self.expr, resultat.clone());
                self.affichage = resultat.clone();
                self.erreur.clear();
                self.demarche = demarche;
                self.journaliser(expression, resultat);
            }
            Err(e) => {
                warn!(expression = %self.expr, erreur = %e, "évaluation refusée");
                self.erreur = e.to_string();
            }
        }
    }

    /* ------------------------ Journal ------------------------ */

    fn journaliser(&mut self, expression: String, resultat: String) {
        self.prochain_id += 1;
        self.journal.insert(
            0,
            EntreeJournal {
                id: self.prochain_id,
                expression,
                resultat,
            },
        );
        self.journal.truncate(JOURNAL_MAX);
    }

    /// Retire une entrée ; retourne false si l’id est inconnu.
    pub fn supprimer_entree(&mut self, id: u64) -> bool {
        let avant = self.journal.len();
        self.journal.retain(|e| e.id != id);
        let retiree = self.journal.len() != avant;
        if retiree {
            info!(id, "entrée du journal supprimée");
        }
        retiree
    }

    pub fn vider_journal(&mut self) {
        info!(n = self.journal.len(), "journal vidé");
        self.journal.clear();
    }

    /// Texte à copier : "expression = résultat".
    pub fn texte_entree(&self, id: u64) -> Option<String> {
        self.journal
            .iter()
            .find(|e| e.id == id)
            .map(|e| format!("{} = {}", e.expression, e.resultat))
    }

    /* ------------------------ Thème ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Clair => Theme::Sombre,
            Theme::Sombre => Theme::Clair,
        };
    }
}
