//! Внешние collaborators контроллера (только интерфейсы).
//!
//! Контроллер не знает про движок: collision, анимации и камера
//! подключаются через эти traits. ECS реализации: в `physics`,
//! `animation`, `camera`.

use bevy::prelude::*;

/// Именованные параметры animation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AnimParam {
    IsWalking,
    IsRunning,
    IsJumping,
    JumpCount,
}

impl AnimParam {
    /// Имя параметра в animation graph
    pub fn name(&self) -> &'static str {
        match self {
            AnimParam::IsWalking => "isWalking",
            AnimParam::IsRunning => "isRunning",
            AnimParam::IsJumping => "isJumping",
            AnimParam::JumpCount => "jumpCount",
        }
    }
}

/// Sink для animation параметров (контроллер только пишет)
pub trait AnimationSink {
    fn set_bool(&mut self, param: AnimParam, value: bool);
    fn set_int(&mut self, param: AnimParam, value: i32);
}

/// "Move with collision" primitive
///
/// Вызывается ровно один раз за tick с displacement (velocity * dt).
/// `is_grounded` читается integrator'ом после `move_by`.
pub trait CollisionMover {
    fn move_by(&mut self, displacement: Vec3);
    fn is_grounded(&self) -> bool;
}

/// Источник yaw камеры (градусы), читается раз за tick
pub trait CameraYawSource {
    fn yaw_degrees(&self) -> f32;
}

/// Фиксированный yaw (камера не вращается)
impl CameraYawSource for f32 {
    fn yaw_degrees(&self) -> f32 {
        *self
    }
}
