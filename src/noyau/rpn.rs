// src/noyau/rpn.rs
//
// Shunting-yard : suite de Tok (infixe) -> RPN (postfixe)
//
// Précédences (plus grand = plus fort) :
//   ^ = 4 (associatif à droite)
//   % = 3 (unaire postfixé, mais rangé dans la table pour les comparaisons)
//   * / = 2, + - = 1 (associatifs à gauche)
//
// L’ordre des opérandes est conservé ; seuls les opérateurs sont réordonnés.

use super::erreur::ErreurCalcul;
use super::jetons::{Op, Tok};

/// Élément d’une séquence postfixée (jamais de parenthèse).
#[derive(Clone, Debug, PartialEq)]
pub enum ElemRpn {
    Num(f64),
    Op(Op),
    Pourcent,
}

/// Contenu de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum SurPile {
    Op(Op),
    Pourcent,
    LPar,
}

const PREC_POURCENT: i32 = 3;

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
        Op::Caret => 4,
    }
}

fn is_right_associative(op: Op) -> bool {
    matches!(op, Op::Caret)
}

/// Précédence d’un élément de pile ; None pour '(' (barrière).
fn precedence_pile(p: SurPile) -> Option<i32> {
    match p {
        SurPile::Op(op) => Some(precedence(op)),
        SurPile::Pourcent => Some(PREC_POURCENT),
        SurPile::LPar => None,
    }
}

fn vers_sortie(p: SurPile) -> Option<ElemRpn> {
    match p {
        SurPile::Op(op) => Some(ElemRpn::Op(op)),
        SurPile::Pourcent => Some(ElemRpn::Pourcent),
        SurPile::LPar => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<ElemRpn>, ErreurCalcul> {
    let mut out: Vec<ElemRpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<SurPile> = Vec::new();

    for tok in tokens {
        match *tok {
            Tok::Num(v) => out.push(ElemRpn::Num(v)),

            Tok::Pourcent => {
                // dépile ce qui lie au moins aussi fort que '%' (donc ^ et %)
                depile_tant_que(&mut ops, &mut out, |p_top| p_top >= PREC_POURCENT);
                ops.push(SurPile::Pourcent);
            }

            Tok::Op(op) => {
                let p_tok = precedence(op);
                let droite = is_right_associative(op);
                depile_tant_que(&mut ops, &mut out, |p_top| {
                    if droite {
                        p_tok < p_top
                    } else {
                        p_tok <= p_top
                    }
                });
                ops.push(SurPile::Op(op));
            }

            Tok::LPar => ops.push(SurPile::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(SurPile::LPar) => break,
                        Some(p) => out.extend(vers_sortie(p)),
                        None => return Err(ErreurCalcul::Parentheses),
                    }
                }
            }
        }
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match vers_sortie(p) {
            Some(e) => out.push(e),
            None => return Err(ErreurCalcul::Parentheses), // '(' jamais fermée
        }
    }

    Ok(out)
}

/// Dépile vers la sortie tant que le sommet est un opérateur (pas '(')
/// et que `doit_pop(précédence du sommet)` est vrai.
fn depile_tant_que(
    ops: &mut Vec<SurPile>,
    out: &mut Vec<ElemRpn>,
    doit_pop: impl Fn(i32) -> bool,
) {
    while let Some(&top) = ops.last() {
        let Some(p_top) = precedence_pile(top) else {
            break;
        };
        if !doit_pop(p_top) {
            break;
        }
        ops.pop();
        out.extend(vers_sortie(top));
    }
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[ElemRpn]) -> String {
    rpn.iter()
        .map(|e| match e {
            ElemRpn::Num(v) => format!("{v}"),
            ElemRpn::Op(op) => op.symbole().to_string(),
            ElemRpn::Pourcent => "%".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
