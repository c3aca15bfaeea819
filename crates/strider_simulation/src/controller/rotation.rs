//! Rotation handling: camera-relative heading + slerp facing.
//!
//! Конвенция осей: forward = +Z, yaw вокруг +Y,
//! `heading(θ) = (sin θ, 0, cos θ)`.

use bevy::prelude::*;

use super::components::{ControllerConfig, MotionContext};

/// Направление "вперёд" в мире до поворота
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Yaw направления input (градусы, [0, 360))
///
/// Input (x, y) трактуется как (x, 0, y) в мире: (0, 1) → 0°, (1, 0) → 90°.
pub fn input_yaw_degrees(input: Vec2) -> f32 {
    input.x.atan2(input.y).to_degrees().rem_euclid(360.0)
}

/// Единичный вектор направления для yaw (градусы)
pub fn heading(yaw_degrees: f32) -> Vec3 {
    Quat::from_rotation_y(yaw_degrees.to_radians()) * WORLD_FORWARD
}

/// Обновляет target_rotation/speed_multiplier и поворачивает facing.
///
/// Slerp factor = `rotation_factor * dt` без clamp: при большом dt
/// поворот может перескочить target.
pub fn handle_rotation(
    ctx: &mut MotionContext,
    facing: &mut Quat,
    camera_yaw: f32,
    config: &ControllerConfig,
    dt: f32,
) {
    if ctx.is_movement_pressed {
        ctx.speed_multiplier = config.move_speed;
        ctx.target_rotation = input_yaw_degrees(ctx.movement_input) + camera_yaw;
    } else {
        // Стоим: держим facing по камере
        ctx.speed_multiplier = 0.0;
        ctx.target_rotation = camera_yaw;
    }

    let target = Quat::from_rotation_y(ctx.target_rotation.to_radians());
    *facing = facing.slerp(target, config.rotation_factor * dt);
}
