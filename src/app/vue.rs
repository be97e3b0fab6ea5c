// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage du tampon (lecture seule) : la saisie passe par les boutons ou le clavier
// - Clavier : chiffres/opérateurs ajoutés, Enter évalue, Backspace efface, Escape = C
// - Évaluation : copie du tampon -> noyau -> texte formaté

use eframe::egui;
use tracing::warn;

use super::etat::{AppCalc, Touche};
use crate::noyau::{calculer_detaille, format_issue, format_resultat};

/// Caractères acceptés au clavier (ajoutés tels quels au tampon).
fn est_symbole(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%' | '^')
}

/// Traduit un évènement clavier egui en touche de calculatrice.
/// Un évènement texte peut porter plusieurs caractères (collage, IME).
pub fn touches_clavier(ev: &egui::Event) -> Vec<Touche> {
    match ev {
        egui::Event::Text(t) => t
            .chars()
            .filter(|&c| est_symbole(c))
            .map(Touche::Symbole)
            .collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => vec![Touche::Egal],
            egui::Key::Backspace => vec![Touche::Retour],
            egui::Key::Escape => vec![Touche::Effacer],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

impl AppCalc {
    /// Point d’entrée unique des touches (boutons + clavier).
    pub fn action(&mut self, touche: Touche) {
        match touche {
            Touche::Egal => self.eval_via_noyau(),
            t => self.appuyer(t),
        }
    }

    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let entree = if self.entree.is_empty() {
                        " "
                    } else {
                        self.entree.as_str()
                    };
                    ui.label(egui::RichText::new(entree).monospace().size(22.0));

                    let resultat = egui::RichText::new(self.resultat.as_str())
                        .monospace()
                        .size(18.0);
                    if self.resultat.starts_with("Erreur") {
                        ui.label(resultat.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(resultat.strong());
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [[(&str, Touche); 4]; 6] = [
            [
                ("C", Touche::Effacer),
                ("CE", Touche::EffacerNombre),
                ("DEL", Touche::Retour),
                ("/", Touche::Symbole('/')),
            ],
            [
                ("7", Touche::Symbole('7')),
                ("8", Touche::Symbole('8')),
                ("9", Touche::Symbole('9')),
                ("*", Touche::Symbole('*')),
            ],
            [
                ("4", Touche::Symbole('4')),
                ("5", Touche::Symbole('5')),
                ("6", Touche::Symbole('6')),
                ("-", Touche::Symbole('-')),
            ],
            [
                ("1", Touche::Symbole('1')),
                ("2", Touche::Symbole('2')),
                ("3", Touche::Symbole('3')),
                ("+", Touche::Symbole('+')),
            ],
            [
                ("(", Touche::Symbole('(')),
                (")", Touche::Symbole(')')),
                ("%", Touche::Symbole('%')),
                ("^", Touche::Symbole('^')),
            ],
            [
                ("+/-", Touche::Signe),
                ("0", Touche::Symbole('0')),
                (".", Touche::Symbole('.')),
                ("=", Touche::Egal),
            ],
        ];

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for (label, touche) in ligne {
                        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
                        if resp.clicked() {
                            self.action(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        // default_open ne compte qu’au premier affichage (egui mémorise ensuite)
        egui::CollapsingHeader::new("Démarche")
            .default_open(self.demarche_ouverte)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
        ui.horizontal_wrapped(|ui| {
            ui.label(format!("{titre} :"));
            ui.monospace(contenu);
        });
    }

    /// Évalue le tampon via le noyau, puis dépose le texte formaté et la démarche.
    /// Tampon vide (ou seulement des espaces) : rien n’est évalué.
    fn eval_via_noyau(&mut self) {
        if self.entree.trim().is_empty() {
            return;
        }

        match calculer_detaille(Some(&self.entree)) {
            Ok((valeur, demarche)) => {
                self.set_resultat(format_resultat(valeur), demarche);
            }
            Err(e) => {
                warn!(
                    entree = self.entree.as_str(),
                    categorie = ?e.categorie(),
                    "calcul refusé : {e}"
                );
                self.set_erreur(format_issue(&Err(e)));
            }
        }
    }
}
