//! Strider Simulation Core
//!
//! Third-person character controller на Bevy 0.16 (headless ECS)
//!
//! Архитектура:
//! - controller: FSM (Grounded/Jump + Idle/Walk/Run), rotation, jump integrator
//! - jump: jump physics table + reset timer
//! - input/camera/animation: ECS стороны ports контроллера
//! - physics: movers (headless пол, Rapier character controller; Rapier step в FixedUpdate)

use bevy::prelude::*;
use bevy_rapier3d::plugin::TimestepMode;
use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod animation;
pub mod camera;
pub mod controller;
pub mod input;
pub mod jump;
pub mod logger;
pub mod physics;

// Re-export основных типов для удобства
pub use animation::AnimatorParams;
pub use camera::CameraRig;
pub use controller::{
    CharacterControllerPlugin, CharacterMotor, CharacterStateMachine, ConfigError, ControllerConfig,
    LocomotionState, MotionContext, RootState,
};
pub use input::{ControllerInput, InputAction};
pub use jump::{JumpPhysicsTable, JumpResetTimer, MAX_JUMP_COUNT};
pub use logger::{
    init_logger, log, log_error, log_info, log_level, log_warning, log_with_level, set_log_level, set_logger,
    set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use physics::{spawn_character, spawn_rapier_character, KinematicMover};

/// Fixed tick rate симуляции
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для controller tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            // Rapier шагает тем же fixed dt, что и контроллер (Time не читает)
            .insert_resource(TimestepMode::Fixed {
                dt: (1.0 / SIMULATION_HZ) as f32,
                substeps: 1,
            })
            .add_plugins((
                RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule(),
                CharacterControllerPlugin,
            ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Startup schedules прогоняются сразу (Rapier context создаётся в PreStartup).
/// Первый `update` имеет нулевой delta, так что FixedUpdate ещё не запускается.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin, SimulationPlugin))
        .insert_resource(DeterministicRng::new(seed));

    app.finish();
    app.cleanup();
    app.update();

    app
}

/// Прогоняет `ticks` fixed step'ов напрямую (без wall clock)
///
/// `App::update` зависит от реального времени, поэтому тесты и headless
/// прогон двигают `Time<Fixed>` вручную и запускают FixedUpdate.
pub fn run_fixed_ticks(app: &mut App, ticks: u32) {
    let world = app.world_mut();
    for _ in 0..ticks {
        let timestep = world.resource::<Time<Fixed>>().timestep();
        world.resource_mut::<Time<Fixed>>().advance_by(timestep);
        world.run_schedule(FixedUpdate);
    }
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
