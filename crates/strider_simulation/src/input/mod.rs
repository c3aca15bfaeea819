//! Input domain: события от host input layer
//!
//! Содержит:
//! - ControllerInput / InputAction (Move, Run, Jump, Look)
//! - latch_controller_input (events → MotionContext, CameraRig)

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;
