//! Controller input events
//!
//! Источник (device polling, engine bridge) пишет события, ECS latch'ит их
//! в MotionContext/CameraRig в начале следующего fixed tick'а.

use bevy::prelude::*;

/// Действие input (press/release/value)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum InputAction {
    /// Move value: x = strafe, y = forward. `Vec2::ZERO` = canceled
    Move(Vec2),
    /// Run button (true = pressed)
    Run(bool),
    /// Jump button (true = pressed)
    Jump(bool),
    /// Look value (latched, применяется каждый tick пока не придёт новое)
    Look(Vec2),
}

/// Event: input для конкретного персонажа
///
/// # Архитектура
/// - Emit: host input layer (device events → ControllerInput)
/// - Consume: `latch_controller_input` (FixedUpdate, до controller tick)
#[derive(Event, Debug, Clone, Copy)]
pub struct ControllerInput {
    pub entity: Entity,
    pub action: InputAction,
}

impl ControllerInput {
    pub fn new(entity: Entity, action: InputAction) -> Self {
        Self { entity, action }
    }
}
