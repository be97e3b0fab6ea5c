//! Noyau de calcul infixe (pur, sans état global)
//!
//! Organisation interne :
//! - normalisation.rs : espaces, multiplication implicite, moins unaire
//! - jetons.rs        : tokenisation
//! - rpn.rs           : shunting-yard (infixe -> postfixe)
//! - eval.rs          : pile RPN + pipeline complet (`calculer`)
//! - format.rs        : affichage du résultat
//! - erreur.rs        : erreurs classées par étape

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalisation;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{calculer, calculer_detaille, Demarche};
pub use format::{format_issue, format_resultat};
