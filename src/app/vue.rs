// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé 4×5 : ( ) C DEL / 7 8 9 / ... / 0 . = +
// - Clavier : Enter (ou '=') évalue, Backspace = DEL, Escape = C
// - Journal : copie + suppression par entrée, "Tout effacer"
//
// Note :
// - Aucune règle de saisie ici : tout passe par AppCalc::saisir.

use eframe::egui;

use super::etat::{AppCalc, Theme};

/// Pavé, ligne par ligne (4 colonnes, opérateurs à droite).
const PAVE: [[&str; 4]; 5] = [
    ["(", ")", "C", "DEL"],
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Caractères du clavier physique transmis à `saisir`.
const TOUCHES_SAISIE: &str = "0123456789.+-*/()";

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice RPN");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.ui_theme(ui);
                    });
                });
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_journal(ui);
            });
    }

    /// Clavier physique (événements de la frame).
    pub fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        if c == '=' {
                            self.egal();
                        } else if TOUCHES_SAISIE.contains(c) {
                            self.saisir(c);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.egal(),
                    egui::Key::Backspace => self.supprimer(),
                    egui::Key::Escape => self.effacer(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_theme(&mut self, ui: &mut egui::Ui) {
        // libellé = thème vers lequel on bascule
        let label = match self.theme {
            Theme::Clair => "Sombre",
            Theme::Sombre => "Clair",
        };
        if ui
            .button(label)
            .on_hover_text("Basculer clair / sombre")
            .clicked()
        {
            self.basculer_theme();
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.erreur.is_empty() {
                        ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                    } else if self.affichage.is_empty() {
                        ui.monospace(egui::RichText::new("0").size(24.0));
                    } else {
                        ui.monospace(egui::RichText::new(&self.affichage).size(24.0));
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(touche));
        if !resp.clicked() {
            return;
        }

        match touche {
            "C" => self.effacer(),
            "DEL" => self.supprimer(),
            "=" => self.egal(),
            _ => {
                for c in touche.chars() {
                    self.saisir(c);
                }
            }
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Prétraité", &self.demarche.prealable);
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        ui.monospace(contenu);
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        ui.heading("Journal");

        if self.journal.is_empty() {
            ui.weak("Aucune opération pour l’instant");
            return;
        }

        // Actions différées : on ne modifie pas le journal pendant qu’on le parcourt.
        let mut a_supprimer: Option<u64> = None;
        let mut a_copier: Option<u64> = None;

        egui::ScrollArea::vertical()
            .id_salt("journal_scroll")
            .max_height(260.0)
            .show(ui, |ui| {
                for e in &self.journal {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.monospace(&e.expression);
                            ui.small(format!("= {}", e.resultat));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Suppr.").clicked() {
                                a_supprimer = Some(e.id);
                            }
                            if ui.small_button("Copier").clicked() {
                                a_copier = Some(e.id);
                            }
                        });
                    });
                    ui.separator();
                }
            });

        if let Some(texte) = a_copier.and_then(|id| self.texte_entree(id)) {
            ui.ctx().copy_text(texte);
        }
        if let Some(id) = a_supprimer {
            self.supprimer_entree(id);
        }

        ui.horizontal(|ui| {
            let n = self.journal.len();
            ui.label(format!("{n} opération{}", if n > 1 { "s" } else { "" }));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Tout effacer").clicked() {
                    self.vider_journal();
                }
            });
        });
    }
}
