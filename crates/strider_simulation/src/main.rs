//! Headless симуляция Strider
//!
//! Один персонаж, случайный (seeded) input script. Для проверки
//! контроллера без движка и детерминизма прогонов.

use bevy::prelude::*;
use rand::Rng;
use strider_simulation::{
    create_headless_app, log_error, log_info, run_fixed_ticks, spawn_character, CharacterStateMachine,
    ControllerConfig, ControllerInput, DeterministicRng, InputAction, MotionContext,
};

const TICKS: u32 = 1200;
const INPUT_INTERVAL: u32 = 20;

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting Strider headless simulation (seed: {})", seed));

    let character = {
        let world = app.world_mut();
        let spawned = {
            let mut commands = world.commands();
            spawn_character(&mut commands, Vec3::ZERO, ControllerConfig::default())
        };
        world.flush();
        spawned
    };

    let character = match character {
        Ok(entity) => entity,
        Err(err) => {
            log_error(&format!("Invalid controller config: {}", err));
            return;
        }
    };

    for tick in 0..TICKS {
        if tick % INPUT_INTERVAL == 0 {
            let action = {
                let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
                random_action(&mut rng.rng)
            };
            app.world_mut().send_event(ControllerInput::new(character, action));
        }

        run_fixed_ticks(&mut app, 1);

        if tick % 120 == 0 {
            let world = app.world();
            if let (Some(transform), Some(ctx), Some(machine)) = (
                world.get::<Transform>(character),
                world.get::<MotionContext>(character),
                world.get::<CharacterStateMachine>(character),
            ) {
                log_info(&format!(
                    "Tick {}: {}/{} at {:.2?} (jump_count = {})",
                    tick,
                    machine.root().name(),
                    machine.locomotion().name(),
                    transform.translation,
                    ctx.jump_count
                ));
            }
        }
    }

    log_info("Simulation complete!");
}

/// Случайное действие input (move/run/jump/look)
fn random_action(rng: &mut impl Rng) -> InputAction {
    match rng.gen_range(0..4) {
        0 => {
            let direction = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            InputAction::Move(direction)
        }
        1 => InputAction::Run(rng.gen_bool(0.5)),
        2 => InputAction::Jump(rng.gen_bool(0.5)),
        _ => InputAction::Look(Vec2::new(rng.gen_range(-5.0..=5.0), rng.gen_range(-2.0..=2.0))),
    }
}
