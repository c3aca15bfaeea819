//! Input latch systems.

use bevy::prelude::*;

use super::events::{ControllerInput, InputAction};
use crate::camera::CameraRig;
use crate::controller::MotionContext;

/// Latch одного действия (без вычислений, только запись полей)
pub fn apply_input_action(ctx: &mut MotionContext, rig: Option<&mut CameraRig>, action: InputAction) {
    match action {
        InputAction::Move(value) => ctx.on_move(value),
        InputAction::Run(pressed) => ctx.on_run(pressed),
        InputAction::Jump(pressed) => ctx.on_jump(pressed),
        InputAction::Look(value) => {
            if let Some(rig) = rig {
                rig.on_look(value);
            }
        }
    }
}

/// Система: ControllerInput → MotionContext / CameraRig
///
/// События для entity без MotionContext (despawned, не персонаж) пропускаются.
pub fn latch_controller_input(
    mut events: EventReader<ControllerInput>,
    mut characters: Query<(&mut MotionContext, Option<&mut CameraRig>)>,
) {
    for event in events.read() {
        let Ok((mut ctx, rig)) = characters.get_mut(event.entity) else {
            crate::log_warning(&format!(
                "Input: {:?} for {:?} dropped (no MotionContext)",
                event.action, event.entity
            ));
            continue;
        };

        apply_input_action(&mut ctx, rig.map(|rig| rig.into_inner()), event.action);
    }
}
