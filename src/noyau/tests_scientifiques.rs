//! Tests scientifiques (campagne) : bout en bout, du texte brut au texte affiché.
//!
//! But : vérifier les propriétés du pipeline complet sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Les signes enchaînés ("3*-2", "3--5") suivent la réécriture simple du moins unaire :
//!   on fige le comportement actuel, ce n’est PAS la valeur mathématique attendue.
//! - Le pourcentage est postfixé et lie plus fort que * et /, moins fort que ^.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::erreur::Categorie;
use super::{calculer, format_issue};

fn affiche(expr: &str) -> String {
    format_issue(&calculer(Some(expr)))
}

fn assert_affiche(expr: &str, attendu: &str) {
    assert_eq!(affiche(expr), attendu, "expr={expr:?}");
}

fn assert_categorie(expr: &str, attendue: Categorie) {
    let e = calculer(Some(expr)).expect_err(expr);
    assert_eq!(e.categorie(), attendue, "expr={expr:?} err={e}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés de base ------------------------ */

#[test]
fn sci_priorites_et_associativite() {
    assert_affiche("1+2*3", "7");
    assert_affiche("2^3^2", "512");
    assert_affiche("(1+2)*3", "9");
    assert_affiche("2(3)", "6");
    assert_affiche("(2)(3)", "6");
    assert_affiche("-5+3", "-2");
}

#[test]
fn sci_pourcentage() {
    assert_affiche("50%", "0.5");
    assert_affiche("100+50%", "100.5");
    assert_affiche("10%*10%", "0.01");
}

#[test]
fn sci_signes_enchaines_figes() {
    assert_affiche("3*-2", "-2");
    assert_affiche("3--5", "-2");
    assert_affiche("--5", "Erreur : expression invalide");
}

#[test]
fn sci_vide_et_espaces() {
    assert_affiche("", "0");
    assert_affiche("   ", "0");
    assert_affiche(" ( 1 + 2 ) * 3 ", "9");
}

/* ------------------------ Erreurs classées ------------------------ */

#[test]
fn sci_erreurs_classees() {
    assert_categorie("5/0", Categorie::Evaluation);
    assert_categorie("(1+2", Categorie::Syntaxe);
    assert_categorie("1+2)", Categorie::Syntaxe);
    assert_categorie("2x", Categorie::Lexique);
    assert_categorie("1.2.3", Categorie::Lexique);
    assert_categorie("+", Categorie::Evaluation);

    assert_affiche("5/0", "Erreur : division par zéro");
    assert_affiche("(1+2", "Erreur : parenthèses non appariées");
}

/* ------------------------ Affichage des magnitudes ------------------------ */

#[test]
fn sci_magnitudes_extremes() {
    assert_affiche("10^12", "1.0000000000e+12");
    assert_affiche("1/10^10", "0.0000000001");
    assert_affiche("1/10^11", "1.0000000000e-11");
    assert_affiche("10^400", "Infinity");
    assert_affiche("0-10^400", "-Infinity");
    assert_affiche("(0-1)^0.5", "Error");
    assert_affiche("1^10^400", "Error");
    assert_affiche("1^((0-1)^0.5)", "Error");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 500 niveaux : la conversion est itérative, pas de récursion
    let n = 500;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    budget(t0, max);

    assert_affiche(&expr, "501");
    budget(t0, max);
}

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let mut expr = String::new();
    for k in 0..2000 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
    }
    budget(t0, max);

    assert_affiche(&expr, "1000");
    budget(t0, max);
}

#[test]
fn sci_stress_puissances_droite() {
    // 1^1^...^1 : 300 puissances empilées (associatif à droite => pile pleine)
    let expr = vec!["1"; 300].join("^");
    assert_affiche(&expr, "1");
}

/* ------------------------ Appels concurrents ------------------------ */

#[test]
fn sci_appels_concurrents_independants() {
    let fils: Vec<_> = (0..8)
        .map(|k| {
            std::thread::spawn(move || {
                let expr = format!("{k}*(2+3)-{k}");
                (k, calculer(Some(&expr)))
            })
        })
        .collect();

    for f in fils {
        let (k, r) = f.join().expect("fil de calcul");
        assert_eq!(r, Ok(f64::from(k) * 4.0));
    }
}
