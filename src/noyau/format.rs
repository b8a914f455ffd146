// src/noyau/format.rs
//
// Affichage d’un résultat f64 comme le ferait un navigateur (Number -> texte) :
// - chiffres les plus courts qui relisent la même valeur
// - entiers sans ".0"          (14, pas 14.0)
// - -0 affiché "0"
// - notation exponentielle si exposant décimal >= 21 ou < -6 (1e+21, 1.5e-7)
// - Infinity / -Infinity / NaN

/// Texte d’un résultat, prêt pour l’affichage et le journal.
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let signe = if v < 0.0 { "-" } else { "" };
    let (chiffres, exposant) = chiffres_courts(v.abs());
    format!("{signe}{}", placer_point(&chiffres, exposant))
}

/// Chiffres significatifs (sans point) + exposant décimal du premier chiffre.
/// `{:e}` donne déjà la plus courte écriture exacte : "1.2345e2" -> ("12345", 2).
fn chiffres_courts(x: f64) -> (String, i32) {
    let sci = format!("{x:e}");
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant = exp.parse::<i32>().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    (chiffres, exposant)
}

fn placer_point(chiffres: &str, exposant: i32) -> String {
    let k = chiffres.len() as i32;
    // n = position du point décimal par rapport au premier chiffre
    let n = exposant + 1;

    if k <= n && n <= 21 {
        return format!("{chiffres}{}", "0".repeat((n - k) as usize));
    }
    if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        return format!("{ent}.{frac}");
    }
    if -6 < n && n <= 0 {
        return format!("0.{}{chiffres}", "0".repeat((-n) as usize));
    }

    let signe_exp = if n - 1 >= 0 { '+' } else { '-' };
    let abs_exp = (n - 1).abs();
    let (tete, reste) = chiffres.split_at(1);
    if reste.is_empty() {
        format!("{tete}e{signe_exp}{abs_exp}")
    } else {
        format!("{tete}.{reste}e{signe_exp}{abs_exp}")
    }
}
