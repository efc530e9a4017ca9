//! Noyau — moteur de la calculatrice (machine à états de saisie).
//!
//! Évaluation gauche à droite, sans priorité ni parenthèses :
//! chaque appui d’opérateur calcule l’opération en attente (si un second
//! opérande a été tapé), puis mémorise le nouvel opérateur.
//!
//! Contrats :
//! - `affichage` n’est jamais vide et se relit toujours en nombre fini.
//! - valeur + opérateur en attente vivent ensemble (un seul `Option`).
//! - Toutes les actions réussissent (division par zéro => 0).

use super::format::{compter_chiffres, formater_nombre, lire_nombre};
use super::operateur::Operateur;
use super::touche::Touche;

/// Garde-fou : chiffres acceptés dans un nombre tapé.
/// 308 chiffres entiers restent sous f64::MAX (~1.8e308) : l’écran reste fini.
pub const MAX_CHIFFRES_SAISIE: usize = 308;

/// Valeur de remise à zéro de l’écran.
const AFFICHAGE_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct MoteurCalc {
    affichage: String,
    en_attente: Option<(f64, Operateur)>,
    attente_nouvelle_saisie: bool,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            en_attente: None,
            attente_nouvelle_saisie: true,
        }
    }
}

impl MoteurCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    /// Texte de l’écran (à relire après chaque événement).
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Opérande gauche + opérateur mémorisés.
    pub fn en_attente(&self) -> Option<(f64, Operateur)> {
        self.en_attente
    }

    pub fn attend_nouvelle_saisie(&self) -> bool {
        self.attente_nouvelle_saisie
    }

    /// Indicateur au-dessus de l’écran : "8 ×", vide sans opération.
    pub fn expression_en_cours(&self) -> String {
        self.en_attente
            .map(|(v, op)| format!("{} {}", formater_nombre(v), op.symbole()))
            .unwrap_or_default()
    }

    fn valeur_courante(&self) -> f64 {
        lire_nombre(&self.affichage)
    }

    /// "1.5e-7" : forme produite par le formatage, jamais par la saisie.
    fn en_notation_exposant(&self) -> bool {
        self.affichage.contains(['e', 'E'])
    }

    /// Un chiffre ou un point repart d’un nombre neuf.
    fn nouvelle_saisie(&self) -> bool {
        self.attente_nouvelle_saisie || self.en_notation_exposant()
    }

    /* ------------------------ Événements ------------------------ */

    /// Point d’entrée unique de la vue.
    pub fn appuyer(&mut self, touche: Touche) {
        log::trace!("touche {touche:?} (écran={:?})", self.affichage);
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.point(),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour(),
            Touche::Pourcent => self.pourcent(),
            Touche::ChangerSigne => self.changer_signe(),
        }
    }

    pub fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            log::trace!("chiffre {d} ignoré (hors 0..=9)");
            return;
        };

        if self.nouvelle_saisie() {
            self.affichage = c.to_string();
            self.attente_nouvelle_saisie = false;
        } else if self.affichage == "0" {
            // pas de zéros en tête
            self.affichage = c.to_string();
        } else if self.affichage == "-0" {
            // "-0.5" + retour×2 : le signe reste
            self.affichage = format!("-{c}");
        } else if compter_chiffres(&self.affichage) >= MAX_CHIFFRES_SAISIE {
            log::trace!("chiffre {d} ignoré (saisie pleine)");
        } else {
            self.affichage.push(c);
        }
    }

    pub fn point(&mut self) {
        if self.nouvelle_saisie() {
            self.affichage = "0.".to_string();
            self.attente_nouvelle_saisie = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    pub fn operateur(&mut self, op: Operateur) {
        let courant = self.valeur_courante();
        let precedent = self.en_attente;

        self.en_attente = match precedent {
            // un second opérande a vraiment été tapé : on enchaîne
            Some((prev, ancien)) if !self.attente_nouvelle_saisie => {
                let resultat = self.deposer_resultat(ancien.appliquer(prev, courant));
                Some((resultat, op))
            }
            // sinon : nouvelle opération, ou simple changement d’opérateur
            _ => Some((courant, op)),
        };

        self.attente_nouvelle_saisie = true;
    }

    /// Sans opération en attente : rien.
    pub fn egal(&mut self) {
        let Some((prev, op)) = self.en_attente.take() else {
            return;
        };
        let courant = self.valeur_courante();
        self.deposer_resultat(op.appliquer(prev, courant));
        self.attente_nouvelle_saisie = true;
    }

    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    pub fn retour(&mut self) {
        // "1e+21" -> "1e+2" -> "1e+" : illisible, on repart de zéro
        if self.affichage.chars().count() <= 1 || self.en_notation_exposant() {
            self.reinitialiser_affichage();
            return;
        }

        self.affichage.pop();

        // "-5" -> "-" : plus rien à lire
        if compter_chiffres(&self.affichage) == 0 {
            self.reinitialiser_affichage();
        }
    }

    pub fn pourcent(&mut self) {
        let v = self.valeur_courante() / 100.0;
        self.deposer_resultat(v);
        self.attente_nouvelle_saisie = true;
    }

    /// `attente_nouvelle_saisie` inchangé.
    pub fn changer_signe(&mut self) {
        let v = self.valeur_courante() * -1.0;
        self.deposer_resultat(v);
    }

    /* ------------------------ Utilitaires ------------------------ */

    fn reinitialiser_affichage(&mut self) {
        self.affichage = AFFICHAGE_INITIAL.to_string();
        self.attente_nouvelle_saisie = true;
    }

    /// Écrit `v` à l’écran et renvoie la valeur réellement affichée
    /// (débordement => 0, comme l’écran).
    fn deposer_resultat(&mut self, v: f64) -> f64 {
        self.affichage = formater_nombre(v);
        if v.is_finite() {
            v
        } else {
            0.0
        }
    }
}
