//! FSM состояния контроллера
//!
//! Иерархия:
//! - Root: Grounded | Jump (переключается ground contact + jump request)
//! - Locomotion (sub-state): Idle | Walk | Run (переключается input)
//!
//! Locomotion живёт независимо от root: Run остаётся Run и в прыжке.

use bevy::prelude::*;

use super::components::{CharacterMotor, ControllerConfig, MotionContext};
use super::gravity;
use super::ports::{AnimParam, AnimationSink};
use super::rotation::heading;

/// Horizontal sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum LocomotionState {
    #[default]
    Idle,
    Walk,
    Run,
}

impl LocomotionState {
    pub fn name(&self) -> &'static str {
        match self {
            LocomotionState::Idle => "Idle",
            LocomotionState::Walk => "Walk",
            LocomotionState::Run => "Run",
        }
    }

    /// Transition table (не больше одного перехода за tick)
    ///
    /// | From | Condition           | To   |
    /// |------|---------------------|------|
    /// | Idle | movement            | Walk |
    /// | Walk | !movement           | Idle |
    /// | Walk | movement && run     | Run  |
    /// | Run  | !movement           | Idle |
    /// | Run  | movement && !run    | Walk |
    pub fn next(&self, ctx: &MotionContext) -> Option<LocomotionState> {
        match self {
            LocomotionState::Idle if ctx.is_movement_pressed => Some(LocomotionState::Walk),
            LocomotionState::Walk if !ctx.is_movement_pressed => Some(LocomotionState::Idle),
            LocomotionState::Walk if ctx.is_run_pressed => Some(LocomotionState::Run),
            LocomotionState::Run if !ctx.is_movement_pressed => Some(LocomotionState::Idle),
            LocomotionState::Run if !ctx.is_run_pressed => Some(LocomotionState::Walk),
            _ => None,
        }
    }

    /// Выставляет (isWalking, isRunning) под состояние
    pub fn enter(&self, animator: &mut dyn AnimationSink) {
        let (walking, running) = match self {
            LocomotionState::Idle => (false, false),
            LocomotionState::Walk => (true, false),
            LocomotionState::Run => (true, true),
        };
        animator.set_bool(AnimParam::IsWalking, walking);
        animator.set_bool(AnimParam::IsRunning, running);
    }

    /// Горизонтальная скорость на этот tick
    pub fn horizontal_velocity(&self, ctx: &MotionContext, config: &ControllerConfig) -> Vec3 {
        match self {
            LocomotionState::Idle => Vec3::ZERO,
            LocomotionState::Walk => heading(ctx.target_rotation) * ctx.speed_multiplier,
            LocomotionState::Run => {
                heading(ctx.target_rotation) * ctx.speed_multiplier * config.run_multiplier
            }
        }
    }
}

/// Root state (ground contact)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum RootState {
    #[default]
    Grounded,
    /// В воздухе: после launch или сход с края
    Jump,
}

/// Переход root state, решённый integrator'ом после move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootTransition {
    /// Grounded → Jump с запуском прыжка
    Launch,
    /// Grounded → Jump без прыжка (земля пропала)
    Fall,
    /// Jump → Grounded
    Land,
}

impl RootState {
    pub fn name(&self) -> &'static str {
        match self {
            RootState::Grounded => "Grounded",
            RootState::Jump => "Jump",
        }
    }

    /// Root transition по ground flag mover'а (после move)
    pub fn next(&self, ctx: &MotionContext, grounded: bool) -> Option<RootTransition> {
        match (self, grounded) {
            (RootState::Grounded, true) if ctx.wants_jump() => Some(RootTransition::Launch),
            (RootState::Grounded, false) => Some(RootTransition::Fall),
            (RootState::Jump, true) => Some(RootTransition::Land),
            _ => None,
        }
    }

    pub fn enter(
        &self,
        transition: Option<RootTransition>,
        ctx: &mut MotionContext,
        motor: &CharacterMotor,
        animator: &mut dyn AnimationSink,
    ) {
        match self {
            RootState::Grounded => gravity::hold_grounded(ctx, motor.config()),
            RootState::Jump => {
                if transition == Some(RootTransition::Launch) {
                    gravity::launch(ctx, motor.table(), animator);
                }
            }
        }
    }

    pub fn exit(&self, ctx: &mut MotionContext, motor: &CharacterMotor, animator: &mut dyn AnimationSink) {
        if let RootState::Jump = self {
            gravity::land(ctx, motor.config(), animator);
        }
    }

    /// Вертикальная интеграция пока состояние активно
    pub fn update(&self, ctx: &mut MotionContext, motor: &CharacterMotor, dt: f32) {
        match self {
            RootState::Grounded => gravity::hold_grounded(ctx, motor.config()),
            RootState::Jump => gravity::apply_airborne_gravity(ctx, motor, dt),
        }
    }
}

impl RootTransition {
    pub fn target(&self) -> RootState {
        match self {
            RootTransition::Launch | RootTransition::Fall => RootState::Jump,
            RootTransition::Land => RootState::Grounded,
        }
    }
}
