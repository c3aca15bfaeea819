//! CharacterStateMachine: активные состояния + порядок tick'а.
//!
//! Порядок выполнения одного tick'а:
//! 1. poll reset timer (jump_count → 0 по истечении)
//! 2. rotation (target_rotation, speed_multiplier, facing slerp)
//! 3. locomotion switch (Idle/Walk/Run) + горизонтальная скорость
//! 4. mover.move_by(applied_velocity * dt)
//! 5. root switch/update (launch, landing, gravity): для следующего tick'а

use bevy::prelude::*;

use super::components::{CharacterMotor, MotionContext};
use super::ports::{AnimationSink, CameraYawSource, CollisionMover};
use super::rotation::handle_rotation;
use super::states::{LocomotionState, RootState, RootTransition};

/// Collaborators одного tick'а
pub struct TickIo<'a> {
    pub camera: &'a dyn CameraYawSource,
    pub mover: &'a mut dyn CollisionMover,
    pub animator: &'a mut dyn AnimationSink,
}

/// Активные состояния персонажа
///
/// Ровно один root и один locomotion state активны в любой момент.
/// Начальное состояние Grounded/Idle активируется (enter) на первом tick'е.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct CharacterStateMachine {
    root: RootState,
    locomotion: LocomotionState,
    activated: bool,
}

impl CharacterStateMachine {
    pub fn root(&self) -> RootState {
        self.root
    }

    pub fn locomotion(&self) -> LocomotionState {
        self.locomotion
    }

    pub fn is_grounded(&self) -> bool {
        self.root == RootState::Grounded
    }

    /// Один tick симуляции персонажа
    pub fn tick(
        &mut self,
        ctx: &mut MotionContext,
        motor: &CharacterMotor,
        facing: &mut Quat,
        io: TickIo<'_>,
        dt: f32,
    ) {
        let TickIo { camera, mover, animator } = io;

        if !self.activated {
            self.activate(ctx, motor, animator);
        }

        ctx.clock += f64::from(dt);
        super::gravity::poll_jump_reset(ctx, animator);

        handle_rotation(ctx, facing, camera.yaw_degrees(), motor.config(), dt);

        if let Some(next) = self.locomotion.next(ctx) {
            self.switch_locomotion(next, animator);
        }

        let horizontal = self.locomotion.horizontal_velocity(ctx, motor.config());
        ctx.current_velocity.x = horizontal.x;
        ctx.current_velocity.z = horizontal.z;
        ctx.applied_velocity.x = horizontal.x;
        ctx.applied_velocity.z = horizontal.z;

        mover.move_by(ctx.applied_velocity * dt);
        let grounded = mover.is_grounded();

        match self.root.next(ctx, grounded) {
            Some(transition) => {
                self.switch_root(transition, ctx, motor, animator);
                // Сход с края: gravity начинает работать в этот же tick
                if transition == RootTransition::Fall {
                    self.root.update(ctx, motor, dt);
                }
            }
            None => self.root.update(ctx, motor, dt),
        }
    }

    /// Enter начальных состояний (Grounded + Idle)
    fn activate(&mut self, ctx: &mut MotionContext, motor: &CharacterMotor, animator: &mut dyn AnimationSink) {
        self.root.enter(None, ctx, motor, animator);
        self.locomotion.enter(animator);
        self.activated = true;
    }

    /// exit старого → replace → enter нового
    fn switch_locomotion(&mut self, next: LocomotionState, animator: &mut dyn AnimationSink) {
        crate::log(&format!("Locomotion: {} → {}", self.locomotion.name(), next.name()));
        self.locomotion = next;
        self.locomotion.enter(animator);
    }

    fn switch_root(
        &mut self,
        transition: RootTransition,
        ctx: &mut MotionContext,
        motor: &CharacterMotor,
        animator: &mut dyn AnimationSink,
    ) {
        let next = transition.target();
        crate::log(&format!(
            "Root: {} → {} ({:?}, jump_count = {})",
            self.root.name(),
            next.name(),
            transition,
            ctx.jump_count
        ));

        self.root.exit(ctx, motor, animator);
        self.root = next;
        self.root.enter(Some(transition), ctx, motor, animator);
    }
}
