//! Gravity & jump integrator.
//!
//! Работает после move: обновлённая вертикальная скорость уходит в mover
//! только на следующем tick'е.

use super::components::{CharacterMotor, ControllerConfig, MotionContext};
use super::ports::{AnimParam, AnimationSink};
use crate::jump::{JumpPhysicsTable, MAX_JUMP_COUNT};

/// Grounded steady state: прижимаем к земле небольшой отрицательной скоростью
pub fn hold_grounded(ctx: &mut MotionContext, config: &ControllerConfig) {
    ctx.current_velocity.y = config.grounded_gravity;
    ctx.applied_velocity.y = config.grounded_gravity;
}

/// Запуск прыжка `jump_count + 1`
///
/// Вызывающий гарантирует `jump_count < MAX_JUMP_COUNT` (`MotionContext::wants_jump`).
pub fn launch(ctx: &mut MotionContext, table: &JumpPhysicsTable, animator: &mut dyn AnimationSink) {
    debug_assert!(ctx.jump_count < MAX_JUMP_COUNT);

    ctx.jump_reset.cancel();
    animator.set_bool(AnimParam::IsJumping, true);
    ctx.is_jump_animating = true;

    ctx.jump_count += 1;
    animator.set_int(AnimParam::JumpCount, i32::from(ctx.jump_count));

    let velocity = table.initial_velocity(ctx.jump_count);
    ctx.current_velocity.y = velocity;
    ctx.applied_velocity.y = velocity;

    crate::log(&format!("Jump: launch #{} (v0 = {:.2})", ctx.jump_count, velocity));
}

/// Приземление после Jump
///
/// Третий прыжок сбрасывает цепочку сразу, остальные через reset timer.
pub fn land(ctx: &mut MotionContext, config: &ControllerConfig, animator: &mut dyn AnimationSink) {
    if ctx.is_jump_animating {
        animator.set_bool(AnimParam::IsJumping, false);
        ctx.is_jump_animating = false;

        if ctx.jump_count >= MAX_JUMP_COUNT {
            ctx.jump_count = 0;
            animator.set_int(AnimParam::JumpCount, 0);
            crate::log("Jump: chain finished, jump count reset");
        } else {
            ctx.jump_reset.arm(ctx.clock, config.jump_reset_delay);
        }
    }

    // Jump ещё зажат → следующий прыжок только по новому press
    if ctx.is_jump_pressed {
        ctx.require_new_jump_press = true;
    }
}

/// Poll reset timer (начало tick'а)
pub fn poll_jump_reset(ctx: &mut MotionContext, animator: &mut dyn AnimationSink) {
    if ctx.jump_reset.poll(ctx.clock) {
        ctx.jump_count = 0;
        animator.set_int(AnimParam::JumpCount, 0);
        crate::log("Jump: reset timer expired, jump count reset");
    }
}

/// Airborne: gravity текущего прыжка, fall multiplier при падении
///
/// Applied скорость = среднее prev/new (сглаживает snap на переходе в fall),
/// при падении clamp'ится terminal_velocity.
pub fn apply_airborne_gravity(ctx: &mut MotionContext, motor: &CharacterMotor, dt: f32) {
    let config = motor.config();
    let gravity = motor.table().gravity(ctx.jump_count);
    let previous = ctx.current_velocity.y;

    if ctx.is_falling() {
        ctx.current_velocity.y = previous + gravity * config.fall_multiplier * dt;
        ctx.applied_velocity.y = ((previous + ctx.current_velocity.y) * 0.5).max(config.terminal_velocity);
    } else {
        ctx.current_velocity.y = previous + gravity * dt;
        ctx.applied_velocity.y = (previous + ctx.current_velocity.y) * 0.5;
    }
}
