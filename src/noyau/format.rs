// src/noyau/format.rs
//
// Affichage du résultat. Fonction totale : aucune valeur ne fait échouer l’affichage.

use super::erreur::ErreurCalcul;

/// Au-delà (ou en deçà, hors zéro) : notation exponentielle.
const SEUIL_GRAND: f64 = 1e10;
const SEUIL_PETIT: f64 = 1e-10;

/// Chiffres après la virgule (arrondi et mantisse exponentielle).
const DECIMALES: usize = 10;

/// f64 -> texte d’affichage.
///
/// - NaN => "Error", ±∞ => "Infinity" / "-Infinity"
/// - |x| >= 1e10 ou 0 < |x| < 1e-10 => "1.0000000000e+12"
/// - sinon arrondi à 10 décimales, sans zéros finaux : "0.3", "-2", "0.0000000001"
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "Error".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let a = x.abs();
    if a >= SEUIL_GRAND || (a < SEUIL_PETIT && x != 0.0) {
        return format_exponentiel(x);
    }

    // Arrondi à 10 décimales, puis plus courte écriture de la valeur arrondie.
    let fixe = format!("{x:.DECIMALES$}");
    let arrondi = fixe.parse::<f64>().unwrap_or(x);
    if arrondi == 0.0 {
        // couvre aussi -0
        return "0".to_string();
    }
    format!("{arrondi}")
}

/// "1.0000000000e12" (Rust) -> "1.0000000000e+12" : exposant toujours signé.
fn format_exponentiel(x: f64) -> String {
    let brut = format!("{x:.DECIMALES$e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}

/// Résultat complet -> texte d’affichage (erreurs préfixées).
pub fn format_issue(issue: &Result<f64, ErreurCalcul>) -> String {
    match issue {
        Ok(v) => format_resultat(*v),
        Err(e) => format!("Erreur : {e}"),
    }
}
