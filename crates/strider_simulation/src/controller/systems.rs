//! Controller tick systems (FixedUpdate).
//!
//! Две системы на два вида mover'а:
//! - headless (KinematicMover, translation двигаем сами)
//! - Rapier (KinematicCharacterController, translation применяет Rapier)

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{CharacterMotor, MotionContext};
use super::machine::{CharacterStateMachine, TickIo};
use crate::animation::AnimatorParams;
use crate::camera::CameraRig;
use crate::physics::{KinematicMover, RapierMover, TranslationMover};

/// Система: tick персонажей с headless mover'ом
pub fn tick_kinematic_characters(
    time: Res<Time<Fixed>>,
    mut query: Query<
        (
            &CharacterMotor,
            &mut MotionContext,
            &mut CharacterStateMachine,
            &mut AnimatorParams,
            &CameraRig,
            &mut KinematicMover,
            &mut Transform,
        ),
        Without<KinematicCharacterController>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (motor, mut ctx, mut machine, mut animator, rig, mut body, transform) in query.iter_mut() {
        let transform = transform.into_inner();
        let mut mover = TranslationMover {
            body: &mut *body,
            translation: &mut transform.translation,
        };

        machine.tick(
            &mut ctx,
            motor,
            &mut transform.rotation,
            TickIo {
                camera: rig,
                mover: &mut mover,
                animator: &mut *animator,
            },
            dt,
        );
    }
}

/// Система: tick персонажей с Rapier character controller'ом
///
/// Output пишет Rapier (SyncBackend) после нашего tick'а, так что это
/// grounded предыдущего move. До первого output держим текущий root state:
/// без physics step персонаж не приземляется сам по себе.
pub fn tick_rapier_characters(
    time: Res<Time<Fixed>>,
    mut query: Query<(
        &CharacterMotor,
        &mut MotionContext,
        &mut CharacterStateMachine,
        &mut AnimatorParams,
        &CameraRig,
        &mut KinematicCharacterController,
        Option<&KinematicCharacterControllerOutput>,
        &mut Transform,
    )>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (motor, mut ctx, mut machine, mut animator, rig, mut controller, output, mut transform) in
        query.iter_mut()
    {
        let was_grounded = output.map_or(machine.is_grounded(), |output| output.grounded);
        let mut mover = RapierMover::new(&mut *controller, was_grounded);

        machine.tick(
            &mut ctx,
            motor,
            &mut transform.rotation,
            TickIo {
                camera: rig,
                mover: &mut mover,
                animator: &mut *animator,
            },
            dt,
        );
    }
}
