// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par cause, classées par étape du pipeline.
// Chaque étape échoue vite (pas de récupération partielle).

use thiserror::Error;

/// Étape du pipeline qui a refusé l’expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    /// Équation absente.
    Entree,
    /// Caractère ou littéral numérique refusé par le tokenizer.
    Lexique,
    /// Parenthèses non appariées (shunting-yard).
    Syntaxe,
    /// Forme de pile invalide ou division par zéro (évaluation RPN).
    Evaluation,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurCalcul {
    #[error("l'équation ne peut pas être nulle")]
    EntreeNulle,

    #[error("jeton inconnu : '{0}'")]
    JetonInconnu(char),

    #[error("nombre invalide : {0}")]
    NombreInvalide(String),

    #[error("parenthèses non appariées")]
    Parentheses,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("expression invalide")]
    ExpressionInvalide,
}

impl ErreurCalcul {
    pub fn categorie(&self) -> Categorie {
        match self {
            Self::EntreeNulle => Categorie::Entree,
            Self::JetonInconnu(_) | Self::NombreInvalide(_) => Categorie::Lexique,
            Self::Parentheses => Categorie::Syntaxe,
            Self::DivisionParZero | Self::ExpressionInvalide => Categorie::Evaluation,
        }
    }
}
