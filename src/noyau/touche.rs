// src/noyau/touche.rs
//
// Événements d’entrée du moteur (un par bouton / touche clavier).

use thiserror::Error;

use super::operateur::Operateur;

/// Erreurs de décodage d’une entrée (le moteur lui-même ne peut pas échouer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurTouche {
    #[error("chiffre hors plage : {0} (attendu 0..=9)")]
    ChiffreHorsPlage(u8),

    #[error("symbole inconnu : {0:?}")]
    SymboleInconnu(String),

    #[error("caractère sans touche associée : {0:?}")]
    CaractereInconnu(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Toujours 0..=9 (garanti par `Touche::chiffre` / `TryFrom<char>`).
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Egal,
    Effacer,
    Retour,
    Pourcent,
    ChangerSigne,
}

impl Touche {
    pub fn chiffre(d: u8) -> Result<Self, ErreurTouche> {
        if d <= 9 {
            Ok(Touche::Chiffre(d))
        } else {
            Err(ErreurTouche::ChiffreHorsPlage(d))
        }
    }

    /// Libellé du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Point => ".".into(),
            Touche::Operateur(op) => op.symbole().into(),
            Touche::Egal => "=".into(),
            Touche::Effacer => "C".into(),
            Touche::Retour => "←".into(),
            Touche::Pourcent => "%".into(),
            Touche::ChangerSigne => "+/-".into(),
        }
    }
}

impl TryFrom<char> for Touche {
    type Error = ErreurTouche;

    /// Clavier : chiffres, . ou , , opérateurs (+ alias), =, %, c.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if let Some(d) = c.to_digit(10) {
            return Touche::chiffre(d as u8);
        }
        match c {
            '.' | ',' => Ok(Touche::Point),
            '=' => Ok(Touche::Egal),
            '%' => Ok(Touche::Pourcent),
            'c' | 'C' => Ok(Touche::Effacer),
            _ => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf)
                    .parse::<Operateur>()
                    .map(Touche::Operateur)
                    .map_err(|_| ErreurTouche::CaractereInconnu(c))
            }
        }
    }
}
