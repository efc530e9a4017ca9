// src/noyau/format.rs
//
// Nombre <-> texte de l’écran.
//
// Règle d’affichage (identique au Number->String d’ECMAScript, IEEE-754 double) :
// - chiffres : plus courte forme qui relit la même valeur
// - notation décimale simple si 1e-6 <= |x| < 1e21
// - sinon notation exposant : 1e+21, 1.5e-7
// - -0 s’affiche "0"
// - non fini (débordement) : "0"

/// Bornes de la notation décimale simple.
const SEUIL_EXPOSANT_HAUT: f64 = 1e21;
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

/// Formate une valeur pour l’écran (voir règle en tête de fichier).
pub fn formater_nombre(x: f64) -> String {
    if !x.is_finite() {
        log::debug!("valeur non finie ({x}) => 0");
        return "0".to_string();
    }
    if x == 0.0 {
        // couvre aussi -0
        return "0".to_string();
    }

    let abs = x.abs();
    if (SEUIL_EXPOSANT_BAS..SEUIL_EXPOSANT_HAUT).contains(&abs) {
        return format!("{x}");
    }

    // `{:e}` donne déjà la plus courte mantisse : "1e21", "-1.5e-7".
    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}

/// Relit l’écran comme `parseFloat` : plus long préfixe numérique valide.
/// Illisible ou non fini => 0.
pub fn lire_nombre(texte: &str) -> f64 {
    let s = texte.trim_start();

    let mut fins: Vec<usize> = s.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
    fins.reverse();

    for fin in fins {
        let prefixe = &s[..fin];
        // f64::from_str accepte "inf"/"nan" : jamais produits par l’écran, mais on filtre.
        if !prefixe.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
        {
            return 0.0;
        }
        if let Ok(v) = prefixe.parse::<f64>() {
            return if v.is_finite() { v } else { 0.0 };
        }
    }
    0.0
}

/// Nombre de chiffres décimaux tapés (signe, point et exposant exclus).
pub fn compter_chiffres(texte: &str) -> usize {
    texte
        .split(['e', 'E'])
        .next()
        .unwrap_or("")
        .chars()
        .filter(char::is_ascii_digit)
        .count()
}
