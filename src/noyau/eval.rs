//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> jetons -> RPN (shunting-yard) -> pile numérique -> f64
//!
//! Chaque étape est une fonction pure ; la première erreur interrompt le pipeline.

use tracing::{debug, trace};

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize, Op};
use super::normalisation::normaliser;
use super::rpn::{format_rpn, to_rpn, ElemRpn};

/// Trace lisible des étapes (affichée sous le résultat).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une équation.
///
/// - `None` (équation absente) => `ErreurCalcul::EntreeNulle`
/// - vide après suppression des espaces => `Ok(0.0)`
/// - sinon : valeur finie, infinie ou NaN, ou erreur classée
pub fn calculer(equation: Option<&str>) -> Result<f64, ErreurCalcul> {
    calculer_detaille(equation).map(|(v, _)| v)
}

/// Comme [`calculer`], avec la démarche.
///
/// En cas d’erreur, la démarche n’est pas retournée (elle n’est pas fiable).
pub fn calculer_detaille(equation: Option<&str>) -> Result<(f64, Demarche), ErreurCalcul> {
    let brut = equation.ok_or(ErreurCalcul::EntreeNulle)?;

    // 1) Normalisation
    let normalisee = normaliser(brut);
    if normalisee.is_empty() {
        return Ok((
            0.0,
            Demarche {
                normalisee,
                ..Demarche::default()
            },
        ));
    }

    // 2) Jetons
    let jetons = tokenize(&normalisee)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_rpn(&rpn), "postfixe");

    // 4) Pile
    let valeur = eval_rpn(&rpn)?;
    debug!(normalisee = normalisee.as_str(), valeur, "expression évaluée");

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        normalisee,
    };
    Ok((valeur, d))
}

/// Évalue une séquence postfixée avec une seule pile.
pub fn eval_rpn(rpn: &[ElemRpn]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for e in rpn {
        match *e {
            ElemRpn::Num(v) => st.push(v),

            ElemRpn::Pourcent => {
                let v = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                st.push(v / 100.0);
            }

            ElemRpn::Op(op) => {
                // b = sommet, a = dessous : "a - b", jamais l’inverse
                let b = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;

                let r = match op {
                    Op::Plus => a + b,
                    Op::Minus => a - b,
                    Op::Star => a * b,
                    Op::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                    Op::Caret => puissance(a, b),
                };
                st.push(r);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}

/// `a^b`, avec NaN pour `1^NaN` et `(±1)^(±∞)` (indéterminés), là où `powf` rend 1.
fn puissance(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}
