//! Tests de propriétés : comportement observable de l’écran.
//!
//! Chaque test part d’un moteur neuf (ou d’un `effacer`) et tape une séquence
//! de touches, comme un utilisateur sur le pavé.

use super::format::lire_nombre;
use super::moteur::MoteurCalc;
use super::operateur::Operateur;
use super::touche::Touche;

fn taper(m: &mut MoteurCalc, sequence: &str) {
    for c in sequence.chars() {
        let t = Touche::try_from(c).unwrap_or_else(|e| panic!("seq={sequence:?} err={e}"));
        m.appuyer(t);
    }
}

fn ecran_apres(sequence: &str) -> String {
    let mut m = MoteurCalc::new();
    taper(&mut m, sequence);
    m.affichage().to_string()
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn prop_concatenation_des_chiffres() {
    assert_eq!(ecran_apres("123"), "123");
    assert_eq!(ecran_apres("9081"), "9081");
    assert_eq!(ecran_apres("0"), "0");
    assert_eq!(ecran_apres("00"), "0");
    assert_eq!(ecran_apres("0100"), "100");
}

#[test]
fn prop_concatenation_au_dela_de_quinze_chiffres() {
    assert_eq!(ecran_apres("1234567890123456"), "1234567890123456");
    assert_eq!(
        ecran_apres("98765432109876543210123"),
        "98765432109876543210123"
    );
}

#[test]
fn prop_ecran_toujours_nombre_valide_apres_exposant() {
    // "-1e-7" à l’écran pendant la saisie : la touche suivante repart de zéro
    let mut m = MoteurCalc::new();
    taper(&mut m, ".0000001");
    m.appuyer(Touche::ChangerSigne);
    taper(&mut m, ".5");
    assert_eq!(m.affichage(), "0.5");

    let mut m = MoteurCalc::new();
    taper(&mut m, ".0000001");
    m.appuyer(Touche::ChangerSigne);
    taper(&mut m, "5");
    assert_eq!(m.affichage(), "5");
    assert!(m.affichage().parse::<f64>().is_ok());
}

#[test]
fn prop_concatenation_apres_effacer() {
    let mut m = MoteurCalc::new();
    taper(&mut m, "77+8");
    m.effacer();
    taper(&mut m, "123");
    assert_eq!(m.affichage(), "123");
}

#[test]
fn prop_double_point() {
    assert_eq!(ecran_apres(".."), "0.");
    assert_eq!(ecran_apres("1.2.3"), "1.23");
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn prop_enchainement_sans_egal() {
    let mut m = MoteurCalc::new();
    taper(&mut m, "5+3");
    m.appuyer(Touche::Operateur(Operateur::Fois));
    assert_eq!(m.affichage(), "8");
    assert_eq!(m.en_attente(), Some((8.0, Operateur::Fois)));

    taper(&mut m, "2=");
    assert_eq!(m.affichage(), "16");
    assert_eq!(m.en_attente(), None);
}

#[test]
fn prop_gauche_a_droite_sans_priorite() {
    // 2 + 3 × 4 = 20 (et non 14)
    assert_eq!(ecran_apres("2+3*4="), "20");
    assert_eq!(ecran_apres("10-4/2="), "3");
}

#[test]
fn prop_artefact_flottant() {
    assert_eq!(ecran_apres(".1+.2="), "0.30000000000000004");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn prop_division_par_zero() {
    assert_eq!(ecran_apres("5/0="), "0");
    assert_eq!(ecran_apres("5÷0="), "0");
}

#[test]
fn prop_division_par_zero_en_chaine() {
    let mut m = MoteurCalc::new();
    taper(&mut m, "5/0+");
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.en_attente(), Some((0.0, Operateur::Plus)));
}

/* ------------------------ Retour ------------------------ */

#[test]
fn prop_retour_un_caractere() {
    let mut m = MoteurCalc::new();
    taper(&mut m, "7");
    m.appuyer(Touche::Retour);
    assert_eq!(m.affichage(), "0");
    assert!(m.attend_nouvelle_saisie());

    // le chiffre suivant remplace
    taper(&mut m, "4");
    assert_eq!(m.affichage(), "4");
}

#[test]
fn prop_retour_sur_resultat_garde_le_drapeau() {
    let mut m = MoteurCalc::new();
    taper(&mut m, "12*3=");
    m.appuyer(Touche::Retour);
    assert_eq!(m.affichage(), "3");
    taper(&mut m, "9");
    assert_eq!(m.affichage(), "9");
}

/* ------------------------ Pourcent / signe ------------------------ */

#[test]
fn prop_pourcent() {
    assert_eq!(ecran_apres("50%"), "0.5");
    assert_eq!(ecran_apres("5%"), "0.05");
}

#[test]
fn prop_changer_signe_involutif() {
    for seq in ["0", "7", "123", "0.5", "1.25", "5+3=", ".1+.2=", "1/3=", "50%"] {
        let mut m = MoteurCalc::new();
        taper(&mut m, seq);
        let avant = m.affichage().to_string();
        m.appuyer(Touche::ChangerSigne);
        m.appuyer(Touche::ChangerSigne);
        assert_eq!(m.affichage(), avant, "seq={seq:?}");
    }
}

#[test]
fn prop_changer_signe_valeur() {
    let mut m = MoteurCalc::new();
    taper(&mut m, "0.50");
    m.appuyer(Touche::ChangerSigne);
    assert_eq!(lire_nombre(m.affichage()), -0.5);
    m.appuyer(Touche::ChangerSigne);
    assert_eq!(lire_nombre(m.affichage()), 0.5);
}

/* ------------------------ Effacer ------------------------ */

#[test]
fn prop_effacer_revient_a_l_etat_initial() {
    for seq in ["", "9", "5+", "5+3*", "1.5%", "7/0=", "..", "12C"] {
        let mut m = MoteurCalc::new();
        taper(&mut m, seq);
        m.appuyer(Touche::Effacer);
        assert_eq!(m, MoteurCalc::new(), "seq={seq:?}");
    }
}
