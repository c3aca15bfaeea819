//! Animation parameters: ECS sink для animation graph
//!
//! Контроллер пишет сюда isWalking/isRunning/isJumping/jumpCount,
//! host синхронизирует компонент со своим animation graph.
//! Записи безусловные: повторная запись того же значения ничего не меняет.

use bevy::prelude::*;

use crate::controller::{AnimParam, AnimationSink};

/// Текущие значения параметров animation graph
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    pub is_walking: bool,
    pub is_running: bool,
    pub is_jumping: bool,
    pub jump_count: i32,
}

impl AnimationSink for AnimatorParams {
    fn set_bool(&mut self, param: AnimParam, value: bool) {
        match param {
            AnimParam::IsWalking => self.is_walking = value,
            AnimParam::IsRunning => self.is_running = value,
            AnimParam::IsJumping => self.is_jumping = value,
            AnimParam::JumpCount => {
                crate::log_error(&format!("Animator: {} is not a bool parameter", param.name()));
            }
        }
    }

    fn set_int(&mut self, param: AnimParam, value: i32) {
        match param {
            AnimParam::JumpCount => self.jump_count = value,
            _ => crate::log_error(&format!("Animator: {} is not an int parameter", param.name())),
        }
    }
}
