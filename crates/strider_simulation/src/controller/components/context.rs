//! MotionContext: общие данные движения одного персонажа.
//!
//! Архитектура:
//! - Input handlers только latch'ат значения (никаких вычислений)
//! - Состояния FSM получают `&mut MotionContext` явно, без back-reference
//! - Один владелец: entity персонажа

use bevy::prelude::*;

use crate::jump::{JumpResetTimer, MAX_JUMP_COUNT};

/// Shared motion context персонажа
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct MotionContext {
    /// Raw horizontal input (x = strafe, y = forward), latched
    pub movement_input: Vec2,
    /// true если хотя бы одна ось input не ноль
    pub is_movement_pressed: bool,
    pub is_run_pressed: bool,
    pub is_jump_pressed: bool,

    /// Горизонталь перезаписывает активный locomotion state, вертикаль интегрируется
    pub current_velocity: Vec3,
    /// То, что реально уходит в mover (вертикаль сглажена)
    pub applied_velocity: Vec3,

    /// Прыжков в текущей цепочке (0..=3)
    pub jump_count: u8,
    /// Jump удерживался при приземлении: нужен новый press
    pub require_new_jump_press: bool,
    /// Идёт анимация прыжка (launch → landing)
    pub is_jump_animating: bool,

    /// Yaw, к которому поворачивается персонаж (градусы)
    pub target_rotation: f32,
    /// Базовая скорость locomotion на этот tick (0 когда стоим)
    pub speed_multiplier: f32,

    /// Часы персонажа (секунды симуляции, f64: шаг 1/60 различим и после суток uptime)
    pub clock: f64,
    /// Отложенный сброс jump_count
    pub jump_reset: JumpResetTimer,
}

impl MotionContext {
    /// Move value event (started/performed/canceled)
    pub fn on_move(&mut self, input: Vec2) {
        self.movement_input = input;
        self.is_movement_pressed = input.x != 0.0 || input.y != 0.0;
    }

    /// Run press/release
    pub fn on_run(&mut self, pressed: bool) {
        self.is_run_pressed = pressed;
    }

    /// Jump press/release
    ///
    /// Любое событие jump снимает `require_new_jump_press`: release → press
    /// всегда даёт новый прыжок, даже если оба пришли между tick'ами.
    pub fn on_jump(&mut self, pressed: bool) {
        self.is_jump_pressed = pressed;
        self.require_new_jump_press = false;
    }

    /// Условие launch (землю проверяет integrator)
    pub fn wants_jump(&self) -> bool {
        self.is_jump_pressed && !self.require_new_jump_press && self.jump_count < MAX_JUMP_COUNT
    }

    /// Падение: скорость уже не вверх, либо jump отпущен (short hop)
    pub fn is_falling(&self) -> bool {
        self.current_velocity.y <= 0.0 || !self.is_jump_pressed
    }
}
