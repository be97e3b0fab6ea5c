// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Op {
    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '^' => Some(Op::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),

    // pourcentage postfixé : "50%" => 0.5
    Pourcent,

    LPar,
    RPar,
}

/// Tokenize une chaîne DÉJÀ normalisée (sans espaces).
/// Supporte:
/// - nombres décimaux: 12, 3.25
/// - opérateurs + - * / ^
/// - pourcentage postfixé %
/// - parenthèses ( )
///
/// Un littéral numérique doit avoir la forme `chiffres('.'chiffres)?` :
/// "1.2.3", ".5" ou "5." sont refusés (NombreInvalide).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : on accumule chiffres et points, la forme est validée ensuite
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_nombre(&lexeme)?));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '%' => Tok::Pourcent,
            _ => match Op::depuis_char(c) {
                Some(op) => Tok::Op(op),
                None => return Err(ErreurCalcul::JetonInconnu(c)),
            },
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// `chiffres('.'chiffres)?` => f64
fn parse_nombre(lexeme: &str) -> Result<f64, ErreurCalcul> {
    let invalide = || ErreurCalcul::NombreInvalide(lexeme.to_string());

    let (entier, frac) = match lexeme.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (lexeme, None),
    };

    let chiffres_ok = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    if !chiffres_ok(entier) || frac.is_some_and(|f| !chiffres_ok(f)) {
        return Err(invalide());
    }

    lexeme.parse::<f64>().map_err(|_| invalide())
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Pourcent => "%".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
