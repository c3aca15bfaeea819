//! "Move with collision" реализации для контроллера
//!
//! Архитектура:
//! - KinematicMover: headless mover (плоский пол, без Rapier) для тестов и симуляции
//! - RapierMover: adapter над KinematicCharacterController (Rapier двигает, мы читаем grounded)
//!
//! Оба вызываются контроллером ровно раз за tick через `CollisionMover`.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::controller::{CharacterMotor, CollisionMover, ConfigError, ControllerConfig};

/// Headless mover: пол на `floor_height`, без стен
///
/// Grounded считается сразу после move (как у engine character controller'а).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct KinematicMover {
    /// Высота пола (y)
    pub floor_height: f32,
    /// Результат последнего move
    pub grounded: bool,
}

impl KinematicMover {
    pub fn with_floor(floor_height: f32) -> Self {
        Self {
            floor_height,
            grounded: false,
        }
    }
}

/// KinematicMover + translation персонажа на время одного tick'а
pub struct TranslationMover<'a> {
    pub body: &'a mut KinematicMover,
    pub translation: &'a mut Vec3,
}

impl CollisionMover for TranslationMover<'_> {
    fn move_by(&mut self, displacement: Vec3) {
        *self.translation += displacement;

        // Ниже пола не проваливаемся: прижимаемся и считаемся grounded
        if self.translation.y <= self.body.floor_height {
            self.translation.y = self.body.floor_height;
            self.body.grounded = true;
        } else {
            self.body.grounded = false;
        }
    }

    fn is_grounded(&self) -> bool {
        self.body.grounded
    }
}

/// Adapter над Rapier KinematicCharacterController
///
/// Rapier применяет translation в physics step ПОСЛЕ нашего tick'а,
/// поэтому `grounded`: результат предыдущего move. Если текущий move
/// идёт вверх (launch), считаем что земли уже нет.
pub struct RapierMover<'a> {
    controller: &'a mut KinematicCharacterController,
    was_grounded: bool,
    requested: Vec3,
}

impl<'a> RapierMover<'a> {
    pub fn new(controller: &'a mut KinematicCharacterController, was_grounded: bool) -> Self {
        Self {
            controller,
            was_grounded,
            requested: Vec3::ZERO,
        }
    }
}

impl CollisionMover for RapierMover<'_> {
    fn move_by(&mut self, displacement: Vec3) {
        self.requested = displacement;
        self.controller.translation = Some(displacement);
    }

    fn is_grounded(&self) -> bool {
        self.was_grounded && self.requested.y <= 0.0
    }
}

/// Spawn helper для headless персонажа
///
/// Создает entity с полным набором компонентов:
/// - CharacterMotor (+ required: MotionContext, CharacterStateMachine, AnimatorParams, CameraRig, Transform)
/// - KinematicMover с полом на уровне spawn позиции
pub fn spawn_character(
    commands: &mut Commands,
    position: Vec3,
    config: ControllerConfig,
) -> Result<Entity, ConfigError> {
    let motor = CharacterMotor::new(config)?;

    Ok(commands
        .spawn((
            Transform::from_translation(position),
            motor,
            KinematicMover::with_floor(position.y),
        ))
        .id())
}

/// Spawn helper для персонажа с Rapier коллизиями
///
/// - RigidBody::KinematicPositionBased + capsule collider
/// - KinematicCharacterController (translation пишет контроллер каждый tick)
pub fn spawn_rapier_character(
    commands: &mut Commands,
    position: Vec3,
    config: ControllerConfig,
) -> Result<Entity, ConfigError> {
    let motor = CharacterMotor::new(config)?;

    Ok(commands
        .spawn((
            Transform::from_translation(position),
            motor,
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4), // Высота 1.8m (0.5 * 2 + 0.4 * 2), радиус 0.4m
            KinematicCharacterController::default(),
        ))
        .id())
}
