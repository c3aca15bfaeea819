//! Physics module
//!
//! Collision-aware movers для контроллера: headless пол и Rapier adapter.

pub mod movement;

// Re-export основных типов
pub use movement::{
    KinematicMover,
    RapierMover,
    TranslationMover,
    spawn_character,
    spawn_rapier_character,
};
