//! Tests for CharacterStateMachine tick (без ECS, плоский пол на y = 0).

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::animation::AnimatorParams;
    use crate::controller::{
        AnimParam, AnimationSink, CharacterMotor, CharacterStateMachine, ControllerConfig,
        LocomotionState, MotionContext, RootState, TickIo,
    };
    use crate::jump::MAX_JUMP_COUNT;
    use crate::physics::{KinematicMover, TranslationMover};

    const DT: f32 = 1.0 / 60.0;
    const MAX_TICKS: usize = 600;

    /// Animator, который запоминает каждую запись (bool как 0/1)
    #[derive(Default)]
    struct RecordingAnimator {
        params: AnimatorParams,
        writes: Vec<(AnimParam, i32)>,
    }

    impl RecordingAnimator {
        fn history(&self, param: AnimParam) -> Vec<i32> {
            self.writes
                .iter()
                .filter(|(p, _)| *p == param)
                .map(|(_, v)| *v)
                .collect()
        }
    }

    impl AnimationSink for RecordingAnimator {
        fn set_bool(&mut self, param: AnimParam, value: bool) {
            self.writes.push((param, i32::from(value)));
            self.params.set_bool(param, value);
        }

        fn set_int(&mut self, param: AnimParam, value: i32) {
            self.writes.push((param, value));
            self.params.set_int(param, value);
        }
    }

    struct Harness {
        machine: CharacterStateMachine,
        ctx: MotionContext,
        motor: CharacterMotor,
        facing: Quat,
        position: Vec3,
        body: KinematicMover,
        animator: RecordingAnimator,
        camera_yaw: f32,
    }

    impl Harness {
        fn new() -> Self {
            Self::at(Vec3::ZERO)
        }

        fn at(position: Vec3) -> Self {
            Self {
                machine: CharacterStateMachine::default(),
                ctx: MotionContext::default(),
                motor: CharacterMotor::new(ControllerConfig::default()).unwrap(),
                facing: Quat::IDENTITY,
                position,
                body: KinematicMover::with_floor(0.0),
                animator: RecordingAnimator::default(),
                camera_yaw: 0.0,
            }
        }

        fn tick(&mut self) {
            let mut mover = TranslationMover {
                body: &mut self.body,
                translation: &mut self.position,
            };
            self.machine.tick(
                &mut self.ctx,
                &self.motor,
                &mut self.facing,
                TickIo {
                    camera: &self.camera_yaw,
                    mover: &mut mover,
                    animator: &mut self.animator,
                },
                DT,
            );
        }

        fn ticks(&mut self, n: usize) {
            for _ in 0..n {
                self.tick();
            }
        }

        /// Tick'ает пока root не станет `state` (с ограничением)
        fn tick_until_root(&mut self, state: RootState) {
            for _ in 0..MAX_TICKS {
                self.tick();
                if self.machine.root() == state {
                    return;
                }
            }
            panic!("root state {:?} not reached", state);
        }

        /// Press → launch → release → landing
        fn short_hop(&mut self) {
            self.ctx.on_jump(true);
            self.tick_until_root(RootState::Jump);
            self.ctx.on_jump(false);
            self.tick_until_root(RootState::Grounded);
        }
    }

    #[test]
    fn test_initial_state_activated_on_first_tick() {
        let mut h = Harness::new();
        h.tick();

        assert_eq!(h.machine.root(), RootState::Grounded);
        assert_eq!(h.machine.locomotion(), LocomotionState::Idle);
        assert_eq!(h.animator.history(AnimParam::IsWalking), vec![0]);
        assert_eq!(h.ctx.current_velocity.y, -0.05);
    }

    #[test]
    fn test_idle_walk_idle_scenario() {
        let mut h = Harness::new();
        h.tick();

        h.ctx.on_move(Vec2::new(1.0, 0.0));
        h.tick();
        assert_eq!(h.machine.locomotion(), LocomotionState::Walk);
        assert!((h.ctx.applied_velocity.x - 4.0).abs() < 1e-4);
        assert!(h.position.x > 0.0);

        h.ctx.on_move(Vec2::ZERO);
        h.tick();
        assert_eq!(h.machine.locomotion(), LocomotionState::Idle);
        assert_eq!(h.ctx.applied_velocity.x, 0.0);
        assert_eq!(h.ctx.applied_velocity.z, 0.0);

        // Idle enter → Walk enter → Idle enter
        assert_eq!(h.animator.history(AnimParam::IsWalking), vec![0, 1, 0]);
        assert_eq!(h.animator.history(AnimParam::IsRunning), vec![0, 0, 0]);
    }

    #[test]
    fn test_locomotion_transition_table() {
        use LocomotionState::*;

        // (from, movement, run) → expected
        let table = [
            (Idle, false, false, None),
            (Idle, false, true, None),
            (Idle, true, false, Some(Walk)),
            (Idle, true, true, Some(Walk)),
            (Walk, false, false, Some(Idle)),
            (Walk, false, true, Some(Idle)),
            (Walk, true, false, None),
            (Walk, true, true, Some(Run)),
            (Run, false, false, Some(Idle)),
            (Run, false, true, Some(Idle)),
            (Run, true, false, Some(Walk)),
            (Run, true, true, None),
        ];

        for (from, movement, run, expected) in table {
            let mut ctx = MotionContext::default();
            ctx.on_move(if movement { Vec2::new(0.3, 0.0) } else { Vec2::ZERO });
            ctx.on_run(run);

            assert_eq!(
                from.next(&ctx),
                expected,
                "from {:?} movement={} run={}",
                from,
                movement,
                run
            );
        }
    }

    #[test]
    fn test_idle_to_run_takes_two_ticks() {
        let mut h = Harness::new();
        h.tick();

        h.ctx.on_move(Vec2::new(0.0, 1.0));
        h.ctx.on_run(true);

        h.tick();
        assert_eq!(h.machine.locomotion(), LocomotionState::Walk);

        h.tick();
        assert_eq!(h.machine.locomotion(), LocomotionState::Run);

        let horizontal = Vec2::new(h.ctx.applied_velocity.x, h.ctx.applied_velocity.z);
        assert!((horizontal.length() - 4.0 * 2.2).abs() < 1e-3);
        assert!(h.animator.params.is_running);
    }

    #[test]
    fn test_camera_relative_walk() {
        let mut h = Harness::new();
        h.camera_yaw = 90.0;
        h.tick();

        h.ctx.on_move(Vec2::new(0.0, 1.0));
        h.ticks(60);

        // Forward input при камере на 90° → движение по +X
        assert!(h.position.x > 3.9);
        assert!(h.position.z.abs() < 1e-3);

        let forward = h.facing * Vec3::Z;
        assert!((forward.x - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_run_jump_launch() {
        let mut h = Harness::new();
        h.tick();
        h.ctx.on_move(Vec2::new(0.0, 1.0));
        h.ctx.on_run(true);
        h.ticks(2);
        assert_eq!(h.machine.locomotion(), LocomotionState::Run);

        h.ctx.on_jump(true);
        h.tick();

        assert_eq!(h.machine.root(), RootState::Jump);
        assert_eq!(h.machine.locomotion(), LocomotionState::Run);
        assert_eq!(h.ctx.jump_count, 1);
        assert_eq!(h.ctx.current_velocity.y, h.motor.table().initial_velocity(1));
        assert!(h.animator.params.is_jumping);
        assert_eq!(h.animator.params.jump_count, 1);

        // Следующий tick: уходим вверх, горизонталь Run сохраняется
        h.tick();
        assert!(h.position.y > 0.0);
        assert!(!h.body.grounded);
        assert!(h.ctx.applied_velocity.z > 8.0);
    }

    #[test]
    fn test_grounded_hold_is_idempotent() {
        let mut h = Harness::new();
        h.ticks(120);

        assert_eq!(h.machine.root(), RootState::Grounded);
        assert_eq!(h.ctx.current_velocity.y, -0.05);
        assert_eq!(h.ctx.applied_velocity.y, -0.05);
        assert_eq!(h.position, Vec3::ZERO);
        assert!(h.animator.history(AnimParam::IsJumping).is_empty());
    }

    #[test]
    fn test_triple_jump_chain_resets_on_landing() {
        let mut h = Harness::new();
        h.tick();

        let mut counts = Vec::new();
        for _ in 0..MAX_JUMP_COUNT {
            h.ctx.on_jump(true);
            h.tick_until_root(RootState::Jump);
            counts.push(h.ctx.jump_count);
            h.ctx.on_jump(false);

            for _ in 0..MAX_TICKS {
                if h.machine.root() == RootState::Grounded {
                    break;
                }
                counts.push(h.ctx.jump_count);
                h.tick();
            }
            assert_eq!(h.machine.root(), RootState::Grounded);
        }

        // До финального приземления count только растёт
        assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(counts.last(), Some(&3));

        // Третье приземление сбрасывает сразу, таймер не взводится
        assert_eq!(h.ctx.jump_count, 0);
        assert!(!h.ctx.jump_reset.is_armed());
        assert_eq!(h.animator.params.jump_count, 0);
        assert_eq!(h.animator.history(AnimParam::JumpCount), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_chain_uses_per_jump_velocity() {
        let mut h = Harness::new();
        h.tick();

        h.short_hop();
        h.ctx.on_jump(true);
        h.tick_until_root(RootState::Jump);

        assert_eq!(h.ctx.jump_count, 2);
        assert_eq!(h.ctx.current_velocity.y, h.motor.table().initial_velocity(2));
    }

    #[test]
    fn test_reset_timer_after_landing() {
        let mut h = Harness::new();
        h.tick();
        h.short_hop();

        assert_eq!(h.ctx.jump_count, 1);
        assert!(h.ctx.jump_reset.is_armed());
        assert!(!h.animator.params.is_jumping);

        h.ticks(29); // < 0.5s
        assert_eq!(h.ctx.jump_count, 1);

        h.ticks(3);
        assert_eq!(h.ctx.jump_count, 0);
        assert!(!h.ctx.jump_reset.is_armed());
        assert_eq!(h.animator.params.jump_count, 0);

        // После сброса цепочка начинается заново
        h.ctx.on_jump(true);
        h.tick_until_root(RootState::Jump);
        assert_eq!(h.ctx.jump_count, 1);
    }

    #[test]
    fn test_reset_timer_after_long_uptime() {
        // Часы персонажа после 3.5, 7 и 115 суток работы сервера
        for start in [300_000.0, 600_000.0, 10_000_000.0] {
            let mut h = Harness::new();
            h.tick();
            h.ctx.clock = start;
            h.short_hop();
            assert_eq!(h.ctx.jump_count, 1, "clock {}", start);

            h.ticks(29);
            assert_eq!(h.ctx.jump_count, 1, "reset too early at clock {}", start);

            h.ticks(3);
            assert_eq!(h.ctx.jump_count, 0, "reset missed at clock {}", start);
            assert!(!h.ctx.jump_reset.is_armed());
        }
    }

    #[test]
    fn test_held_jump_requires_new_press() {
        let mut h = Harness::new();
        h.tick();

        // Держим jump весь прыжок
        h.ctx.on_jump(true);
        h.tick_until_root(RootState::Jump);
        h.tick_until_root(RootState::Grounded);

        assert!(h.ctx.require_new_jump_press);
        assert!(!h.ctx.wants_jump());

        h.ticks(5);
        assert_eq!(h.machine.root(), RootState::Grounded);
        assert_eq!(h.ctx.jump_count, 1);

        // Release + press между tick'ами → новый прыжок
        h.ctx.on_jump(false);
        h.ctx.on_jump(true);
        h.tick();
        assert_eq!(h.machine.root(), RootState::Jump);
        assert_eq!(h.ctx.jump_count, 2);
    }

    #[test]
    fn test_held_jump_floats_longer_than_tap() {
        let airtime = |hold: bool| {
            let mut h = Harness::new();
            h.tick();
            h.ctx.on_jump(true);
            h.tick_until_root(RootState::Jump);
            if !hold {
                h.ctx.on_jump(false);
            }
            let mut ticks = 0;
            while h.machine.root() == RootState::Jump && ticks < MAX_TICKS {
                h.tick();
                ticks += 1;
            }
            ticks
        };

        assert!(airtime(true) > airtime(false));
    }

    #[test]
    fn test_ledge_fall_keeps_jump_count() {
        let mut h = Harness::at(Vec3::new(0.0, 2.0, 0.0));
        h.tick();

        assert_eq!(h.machine.root(), RootState::Jump);
        assert_eq!(h.ctx.jump_count, 0);
        assert!(h.ctx.current_velocity.y < -0.05);

        // Jump в воздухе не запускает прыжок
        h.ctx.on_jump(true);
        h.tick();
        assert_eq!(h.ctx.jump_count, 0);
        h.ctx.on_jump(false);

        h.tick_until_root(RootState::Grounded);
        assert_eq!(h.position.y, 0.0);
        assert_eq!(h.ctx.jump_count, 0);
        assert!(!h.ctx.jump_reset.is_armed());
        assert!(h.animator.history(AnimParam::IsJumping).is_empty());
    }

    #[test]
    fn test_fall_speed_clamped_by_terminal_velocity() {
        let mut h = Harness::at(Vec3::new(0.0, 500.0, 0.0));
        h.ticks(300);

        assert_eq!(h.machine.root(), RootState::Jump);
        assert!(h.ctx.applied_velocity.y >= -20.0);
        assert!(h.ctx.current_velocity.y < -20.0);
    }
}
