//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur et y router les entrées (boutons + clavier).
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par le noyau).
//! - Une entrée clavier inconnue est ignorée, jamais fatale.

use crate::noyau::{MoteurCalc, Operateur, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: MoteurCalc,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: MoteurCalc::new(),
        }
    }
}

impl AppCalc {
    /// Bouton ou touche déjà décodée.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    /// Texte clavier : chaque caractère reconnu devient une touche.
    pub fn saisir_texte(&mut self, texte: &str) {
        for c in texte.chars() {
            match Touche::try_from(c) {
                Ok(t) => self.appuyer(t),
                Err(e) => log::trace!("clavier ignoré : {e}"),
            }
        }
    }

    /// ESC / Suppr : remise à zéro.
    pub fn effacer(&mut self) {
        self.moteur.effacer();
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Opérateur à surligner : mémorisé et pas encore de second opérande.
    pub fn operateur_actif(&self) -> Option<Operateur> {
        match self.moteur.en_attente() {
            Some((_, op)) if self.moteur.attend_nouvelle_saisie() => Some(op),
            _ => None,
        }
    }
}
