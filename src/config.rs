//! Configuration (natif seulement) : fichier TOML optionnel.
//!
//! Chemin par défaut : `<config_dir>/calculatrice/config.toml`.
//!
//! ```toml
//! journal = "debug"
//! demarche_ouverte = true
//!
//! [fenetre]
//! largeur = 360.0
//! hauteur = 520.0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture impossible de {}: {source}", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide dans {}: {source}", .chemin.display())]
    Toml {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 360.0,
            hauteur: 520.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fenetre: Fenetre,
    /// Filtre `tracing` (syntaxe EnvFilter), remplacé par `--log` ou `RUST_LOG`.
    pub journal: String,
    /// Panneau « Démarche » déplié au lancement.
    pub demarche_ouverte: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fenetre: Fenetre::default(),
            journal: "info".to_string(),
            demarche_ouverte: false,
        }
    }
}

pub fn chemin_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calculatrice").join("config.toml"))
}

pub fn parse_config(texte: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(texte)
}

/// Charge la configuration.
///
/// - chemin explicite : le fichier doit exister
/// - chemin par défaut absent : valeurs par défaut
pub fn charger(chemin: Option<&Path>) -> Result<Config, ErreurConfig> {
    let (chemin, explicite) = match chemin {
        Some(p) => (p.to_path_buf(), true),
        None => match chemin_defaut() {
            Some(p) => (p, false),
            None => return Ok(Config::default()),
        },
    };

    if !explicite && !chemin.exists() {
        return Ok(Config::default());
    }

    let texte = std::fs::read_to_string(&chemin).map_err(|source| ErreurConfig::Lecture {
        chemin: chemin.clone(),
        source,
    })?;
    parse_config(&texte).map_err(|source| ErreurConfig::Toml { chemin, source })
}
