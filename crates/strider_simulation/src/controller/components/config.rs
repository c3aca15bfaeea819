//! Controller tunables + валидация конфигурации.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::MotionContext;
use crate::animation::AnimatorParams;
use crate::camera::CameraRig;
use crate::controller::CharacterStateMachine;
use crate::jump::JumpPhysicsTable;

/// Ошибки конфигурации контроллера
///
/// Отклоняются при создании `CharacterMotor`, в tick path не попадают.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be negative, got {value}")]
    NonNegative { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("pitch range is inverted: min {min} > max {max}")]
    InvertedPitchRange { min: f32, max: f32 },

    #[error("failed to parse controller config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonFinite { field })
        }
    }

    pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
        Self::check_finite(field, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { field, value })
        }
    }

    pub(crate) fn check_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
        Self::check_finite(field, value)?;
        if value < 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonNegative { field, value })
        }
    }
}

/// Параметры контроллера персонажа
///
/// Defaults: значения, под которые настроены анимации и камера.
/// Отдельным компонентом не бывает: живёт внутри `CharacterMotor` вместе с jump table.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Высота первого прыжка (units)
    pub max_jump_height: f32,
    /// Полная длительность первого прыжка (секунды, apex на половине)
    pub max_jump_time: f32,
    /// Скорость поворота: slerp factor = rotation_factor * dt (не clamp'ится)
    pub rotation_factor: f32,
    /// speed_multiplier когда movement нажат
    pub move_speed: f32,
    /// Run = move_speed * run_multiplier
    pub run_multiplier: f32,
    /// Вертикальная скорость на земле (чуть вниз, чтобы ground check не мигал)
    pub grounded_gravity: f32,
    /// Множитель gravity при падении
    pub fall_multiplier: f32,
    /// Clamp applied скорости падения
    pub terminal_velocity: f32,
    /// Через сколько секунд после приземления сбрасывается jump_count
    pub jump_reset_delay: f32,
    /// Градусы поворота камеры на единицу Look input
    pub look_sensitivity: f32,
    /// Pitch камеры (градусы)
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_jump_height: 4.0,
            max_jump_time: 0.75,
            rotation_factor: 15.0,
            move_speed: 4.0,
            run_multiplier: 2.2,
            grounded_gravity: -0.05,
            fall_multiplier: 2.0,
            terminal_velocity: -20.0,
            jump_reset_delay: 0.5,
            look_sensitivity: 0.3,
            min_pitch: -18.0,
            max_pitch: 50.0,
        }
    }
}

impl ControllerConfig {
    /// Парсит JSON (отсутствующие поля берутся из Default) и валидирует
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_positive("max_jump_height", self.max_jump_height)?;
        ConfigError::check_positive("max_jump_time", self.max_jump_time)?;
        ConfigError::check_positive("rotation_factor", self.rotation_factor)?;
        ConfigError::check_positive("move_speed", self.move_speed)?;
        ConfigError::check_positive("run_multiplier", self.run_multiplier)?;
        ConfigError::check_negative("grounded_gravity", self.grounded_gravity)?;
        ConfigError::check_positive("fall_multiplier", self.fall_multiplier)?;
        ConfigError::check_negative("terminal_velocity", self.terminal_velocity)?;
        ConfigError::check_positive("jump_reset_delay", self.jump_reset_delay)?;
        ConfigError::check_finite("look_sensitivity", self.look_sensitivity)?;
        ConfigError::check_finite("min_pitch", self.min_pitch)?;
        ConfigError::check_finite("max_pitch", self.max_pitch)?;

        if self.min_pitch > self.max_pitch {
            return Err(ConfigError::InvertedPitchRange {
                min: self.min_pitch,
                max: self.max_pitch,
            });
        }

        Ok(())
    }
}

/// Валидированный config + производная jump таблица
///
/// Таблица попадает в ECS только через `CharacterMotor::new`,
/// поэтому tick path работает только с проверенными константами.
/// Остальные компоненты персонажа добавляются автоматически (required components).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(MotionContext, CharacterStateMachine, AnimatorParams, CameraRig, Transform)]
pub struct CharacterMotor {
    config: ControllerConfig,
    table: JumpPhysicsTable,
}

impl CharacterMotor {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = JumpPhysicsTable::new(config.max_jump_height, config.max_jump_time)?;
        Ok(Self { config, table })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn table(&self) -> &JumpPhysicsTable {
        &self.table
    }
}
