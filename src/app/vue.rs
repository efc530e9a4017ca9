// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : indicateur d’opération ("8 ×") + valeur, alignés à droite
// - Pavé 4×5 : C +/- % ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / ← 0 . =
// - Opérateur mémorisé surligné tant que le second opérande n’est pas tapé
// - Aucune logique ici : chaque clic devient une `Touche` pour le moteur.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

const TAILLE_BOUTON: [f32; 2] = [72.0, 60.0];
const TAILLE_ECRAN: f32 = 44.0;

const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Effacer,
        Touche::ChangerSigne,
        Touche::Pourcent,
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::Retour,
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Egal,
    ],
];

/// Famille visuelle d’un bouton.
#[derive(Clone, Copy, Debug)]
enum Genre {
    Nombre,
    Operateur,
    Special,
    Egal,
}

impl Genre {
    fn de(touche: Touche) -> Self {
        match touche {
            Touche::Chiffre(_) | Touche::Point | Touche::Retour => Genre::Nombre,
            Touche::Operateur(_) => Genre::Operateur,
            Touche::Effacer | Touche::ChangerSigne | Touche::Pourcent => Genre::Special,
            Touche::Egal => Genre::Egal,
        }
    }

    fn fond(self) -> egui::Color32 {
        match self {
            Genre::Nombre => egui::Color32::from_rgb(74, 38, 86),
            Genre::Operateur => egui::Color32::from_rgb(214, 74, 150),
            Genre::Special => egui::Color32::from_rgb(120, 60, 130),
            Genre::Egal => egui::Color32::from_rgb(236, 110, 170),
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        ui.vertical_centered(|ui| {
            ui.heading(crate::TITRE_APP);
        });
        ui.add_space(12.0);

        self.ui_ecran(ui);

        ui.add_space(12.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // hauteur stable même sans opération
                    let indicateur = self.moteur.expression_en_cours();
                    ui.label(egui::RichText::new(indicateur).monospace().weak());
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let texte = egui::RichText::new(touche.libelle())
            .size(22.0)
            .color(egui::Color32::WHITE);
        let mut bouton = egui::Button::new(texte).fill(Genre::de(touche).fond());
        if let (Touche::Operateur(op), Some(actif)) = (touche, self.operateur_actif()) {
            if op == actif {
                bouton = bouton.stroke(egui::Stroke::new(2.0, egui::Color32::WHITE));
            }
        }

        if ui.add_sized(TAILLE_BOUTON, bouton).clicked() {
            self.appuyer(touche);
        }
    }
}
