//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir le tampon d’édition (l’expression en cours de saisie), le résultat
//! affiché et la démarche, et offrir les opérations d’édition (C, CE, DEL, ±).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : le noyau reçoit une copie du tampon.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::Demarche;

/// Touches de la calculatrice (boutons ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre, '.', opérateur, '%' ou parenthèse : ajouté tel quel.
    Symbole(char),
    /// C : efface entrée + résultat.
    Effacer,
    /// CE : efface le dernier nombre saisi.
    EffacerNombre,
    /// DEL : efface le dernier caractère.
    Retour,
    /// ± : inverse le signe du dernier nombre.
    Signe,
    /// = : évaluation (gérée par la vue, ne modifie pas le tampon).
    Egal,
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // texte affiché (valeur formatée ou "Erreur : ...")

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,
    pub demarche_ouverte: bool,
}

/// Caractères après lesquels un '-' est unaire (même règle que le noyau).
fn ouvre_unaire(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '%' | '(')
}

/// Indice (octets) du début du nombre final : suite de chiffres / '.' en fin de texte.
/// Vaut `s.len()` s’il n’y a pas de nombre final.
fn debut_nombre_final(s: &str) -> usize {
    s.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.')
        .len()
}

impl AppCalc {
    pub fn new(demarche_ouverte: bool) -> Self {
        Self {
            demarche_ouverte,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Applique une touche au tampon. `Touche::Egal` ne touche pas au tampon.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Symbole(c) => self.entree.push(c),
            Touche::Effacer => self.effacer_tout(),
            Touche::EffacerNombre => self.effacer_nombre(),
            Touche::Retour => {
                self.entree.pop();
            }
            Touche::Signe => self.inverser_signe(),
            Touche::Egal => {}
        }
    }

    /// C : entrée + résultat + démarche.
    pub fn effacer_tout(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.demarche = Demarche::default();
    }

    /// CE : retire le dernier nombre (chiffres et points finaux).
    pub fn effacer_nombre(&mut self) {
        let debut = debut_nombre_final(&self.entree);
        self.entree.truncate(debut);
    }

    /// ± sur le dernier nombre `N` :
    /// - "(-N)" final => "N"
    /// - '-' unaire devant N (en tête, ou après opérateur / '(') => retiré
    /// - '+' / '-' binaire devant N => opérateur inversé
    /// - N en tête ou après '(' => "-N"
    /// - N après * / ^ % ou ')' => "(-N)" (le noyau ne gère pas "3*-5")
    pub fn inverser_signe(&mut self) {
        if let Some(sans_par) = self.entree.strip_suffix(')') {
            let debut = debut_nombre_final(sans_par);
            if debut < sans_par.len() && sans_par[..debut].ends_with("(-") {
                let n = sans_par[debut..].to_string();
                self.entree.truncate(debut - 2);
                self.entree.push_str(&n);
            }
            return;
        }

        let debut = debut_nombre_final(&self.entree);
        if debut == self.entree.len() {
            return; // pas de nombre final
        }
        let n = self.entree.split_off(debut);

        match self.entree.chars().last() {
            None | Some('(') => self.entree.push('-'),
            Some('-') => {
                self.entree.pop();
                let unaire = self.entree.chars().last().is_none_or(ouvre_unaire);
                if !unaire {
                    self.entree.push('+');
                }
            }
            Some('+') => {
                self.entree.pop();
                self.entree.push('-');
            }
            Some(_) => {
                self.entree.push_str("(-");
                self.entree.push_str(&n);
                self.entree.push(')');
                return;
            }
        }
        self.entree.push_str(&n);
    }

    /// Utilitaire : déposer un résultat (texte formaté + démarche).
    pub fn set_resultat(&mut self, texte: impl Into<String>, demarche: Demarche) {
        self.resultat = texte.into();
        self.demarche = demarche;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// La démarche est effacée (pipeline interrompu, non fiable).
    pub fn set_erreur(&mut self, texte: impl Into<String>) {
        self.resultat = texte.into();
        self.demarche = Demarche::default();
    }
}
