//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - operateur.rs : + - × ÷ et leur application (÷0 => 0)
//! - format.rs    : nombre <-> texte de l’écran
//! - touche.rs    : événements d’entrée + décodage clavier
//! - moteur.rs    : état de l’écran + réactions aux touches

pub mod format;
pub mod moteur;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use moteur::MoteurCalc;
pub use operateur::Operateur;
pub use touche::Touche;
