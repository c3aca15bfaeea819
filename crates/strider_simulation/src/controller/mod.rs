//! Character controller module (third-person, camera-relative)
//!
//! ECS ответственность:
//! - MotionContext: latched input + velocities + jump chain
//! - CharacterStateMachine: Grounded/Jump root + Idle/Walk/Run sub-state
//! - Jump integrator: launch, gravity, landing, reset timer
//!
//! Host ответственность (через ports):
//! - CollisionMover: move with collision + ground flag
//! - AnimationSink: animation graph параметры
//! - CameraYawSource: yaw камеры

use bevy::prelude::*;
use bevy_rapier3d::plugin::PhysicsSet;

pub mod components;
pub mod gravity;
pub mod machine;
pub mod ports;
pub mod rotation;
pub mod states;
pub mod systems;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod machine_tests;

// Re-export основных типов
pub use components::*;
pub use machine::{CharacterStateMachine, TickIo};
pub use ports::{AnimParam, AnimationSink, CameraYawSource, CollisionMover};
pub use rotation::{heading, input_yaw_degrees, WORLD_FORWARD};
pub use states::{LocomotionState, RootState, RootTransition};
pub use systems::{tick_kinematic_characters, tick_rapier_characters};

use crate::camera::apply_camera_look;
use crate::input::{latch_controller_input, ControllerInput};

/// Character Controller Plugin
///
/// Регистрирует controller системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. latch_controller_input: ControllerInput events → MotionContext
/// 2. tick_kinematic_characters: FSM tick (headless mover)
/// 3. tick_rapier_characters: FSM tick (Rapier mover)
/// 4. apply_camera_look: Look → CameraRig (виден контроллеру на следующем tick'е)
///
/// Вся цепочка идёт до Rapier SyncBackend: translation, записанный в tick'е,
/// применяется physics step'ом того же FixedUpdate.
pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ControllerInput>();

        app.add_systems(
            FixedUpdate,
            (
                latch_controller_input,
                tick_kinematic_characters,
                tick_rapier_characters,
                apply_camera_look,
            )
                .chain() // Последовательное выполнение
                .before(PhysicsSet::SyncBackend),
        );
    }
}
