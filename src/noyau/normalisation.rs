// src/noyau/normalisation.rs
//
// Normalisation du texte brut, avant tokenisation.
// Trois passes linéaires, dans cet ordre :
// 1) suppression des espaces
// 2) multiplication implicite : "2(3)" => "2*(3)", "(2)(3)" => "(2)*(3)", "(2)3" => "(2)*3"
// 3) moins unaire : "-5" => "0-5", "(-2)" => "(0-2)"
//
// NOTE (limite connue, volontairement conservée) :
// la passe 3 ne réécrit qu’un signe par paire "opérateur + '-'" et ne revisite
// pas le caractère consommé. Donc "3*-2" => "3*0-2" (vaut -2) et
// "--5" => "0--5" (rejeté plus loin comme expression invalide).

/// Caractères après lesquels un '-' est considéré comme unaire.
fn ouvre_unaire(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '%' | '(')
}

/// Normalise une expression brute (espaces, multiplication implicite, moins unaire).
pub fn normaliser(brut: &str) -> String {
    let sans_espaces: String = brut.chars().filter(|c| !c.is_whitespace()).collect();
    let s = multiplication_avant_parenthese(&sans_espaces);
    let s = multiplication_apres_parenthese(&s);
    moins_unaire(&s)
}

/// Passe 2a : chiffre ou ')' suivi de '(' => insère '*'.
fn multiplication_avant_parenthese(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let suivant = chars.get(i + 1).copied();
        if (c.is_ascii_digit() || c == ')') && suivant == Some('(') {
            out.push('*');
        }
    }
    out
}

/// Passe 2b : ')' suivi d’un chiffre ou de '(' => insère '*'.
/// Après la passe 2a, ")(" est déjà devenu ")*(" : pas de double insertion.
fn multiplication_apres_parenthese(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if c != ')' {
            continue;
        }
        if let Some(&suivant) = chars.get(i + 1) {
            if suivant.is_ascii_digit() || suivant == '(' {
                out.push('*');
            }
        }
    }
    out
}

/// Passe 3 : '-' en tête, ou juste après `+ - * / ^ % (`, devient "0-".
/// Un caractère qui sert de contexte gauche est consommé avec le '-' qui le suit.
fn moins_unaire(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    let mut i = 0;

    // '-' en tête
    if chars.first() == Some(&'-') {
        out.push_str("0-");
        i = 1;
    }

    while i < chars.len() {
        let c = chars[i];
        if ouvre_unaire(c) && chars.get(i + 1) == Some(&'-') {
            out.push(c);
            out.push_str("0-");
            i += 2;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}
