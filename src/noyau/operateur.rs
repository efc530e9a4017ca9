// src/noyau/operateur.rs

use std::fmt;
use std::str::FromStr;

use super::touche::ErreurTouche;

/// Les quatre opérations de base (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Symbole affiché sur le bouton et dans l’indicateur "8 ×".
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// prev ∘ current, gauche à droite.
    ///
    /// Division par zéro : résultat défini = 0 (pas d’infini, pas de NaN).
    pub fn appliquer(self, prev: f64, current: f64) -> f64 {
        match self {
            Operateur::Plus => prev + current,
            Operateur::Moins => prev - current,
            Operateur::Fois => prev * current,
            Operateur::Divise => {
                if current != 0.0 {
                    prev / current
                } else {
                    log::debug!("division par zéro : {prev} ÷ 0 => 0");
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurTouche;

    /// Symboles affichés + alias clavier (*, x, /, :).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operateur::Plus),
            "-" | "−" => Ok(Operateur::Moins),
            "×" | "*" | "x" | "X" => Ok(Operateur::Fois),
            "÷" | "/" | ":" => Ok(Operateur::Divise),
            autre => Err(ErreurTouche::SymboleInconnu(autre.to_string())),
        }
    }
}
