//! Camera rig: источник yaw для camera-relative движения
//!
//! Look input накапливается в yaw/pitch follow target'а.
//! Smoothing и позиционирование камеры: на стороне host'а.

use bevy::prelude::*;

use crate::controller::{CameraYawSource, CharacterMotor, ControllerConfig};

/// Orbit rig, прикреплённый к персонажу
///
/// # Порядок
/// Look применяется ПОСЛЕ controller tick'а, поэтому контроллер
/// видит yaw предыдущего tick'а.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    /// Yaw (градусы), без ограничений
    pub yaw: f32,
    /// Pitch (градусы), clamp [min_pitch, max_pitch]
    pub pitch: f32,
    /// Latched Look value
    pub look: Vec2,
}

impl CameraRig {
    pub fn on_look(&mut self, value: Vec2) {
        self.look = value;
    }

    /// Применяет latched look (раз за tick)
    pub fn apply_look(&mut self, config: &ControllerConfig) {
        self.pitch = (self.pitch + self.look.y * config.look_sensitivity)
            .clamp(config.min_pitch, config.max_pitch);
        self.yaw += self.look.x * config.look_sensitivity;
    }
}

impl CameraYawSource for CameraRig {
    fn yaw_degrees(&self) -> f32 {
        self.yaw
    }
}

/// Система: применение Look ко всем rig'ам персонажей
pub fn apply_camera_look(mut query: Query<(&mut CameraRig, &CharacterMotor)>) {
    for (mut rig, motor) in query.iter_mut() {
        if rig.look != Vec2::ZERO {
            rig.apply_look(motor.config());
        }
    }
}
