// src/noyau/prealable.rs
//
// Passe préalable (avant les jetons) :
// - retire tous les blancs
// - rend explicite la multiplication implicite :
//     2(3)    -> 2*(3)
//     (2)3    -> (2)*3
//     (2)(3)  -> (2)*(3)
//
// Ne rejette rien : la validité des caractères est l’affaire de tokenize().

/// Réécrit l’entrée brute en insérant les `*` implicites.
pub fn preprocess(brut: &str) -> String {
    let chars: Vec<char> = brut.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = String::with_capacity(chars.len() * 2);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);

        let Some(&suivant) = chars.get(i + 1) else {
            break;
        };

        let implicite = (c.is_ascii_digit() && suivant == '(')
            || (c == ')' && suivant.is_ascii_digit())
            || (c == ')' && suivant == '(');

        if implicite {
            out.push('*');
        }
    }

    out
}
