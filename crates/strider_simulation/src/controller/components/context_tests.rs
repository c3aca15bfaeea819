//! Tests for MotionContext input latching.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::controller::MotionContext;

    #[test]
    fn test_context_default() {
        let ctx = MotionContext::default();
        assert!(!ctx.is_movement_pressed);
        assert_eq!(ctx.jump_count, 0);
        assert!(!ctx.jump_reset.is_armed());
    }

    #[test]
    fn test_movement_pressed_derived_from_axes() {
        let mut ctx = MotionContext::default();

        ctx.on_move(Vec2::new(0.0, 1.0));
        assert!(ctx.is_movement_pressed);

        ctx.on_move(Vec2::new(-0.3, 0.0));
        assert!(ctx.is_movement_pressed);

        ctx.on_move(Vec2::ZERO);
        assert!(!ctx.is_movement_pressed);
        assert_eq!(ctx.movement_input, Vec2::ZERO);
    }

    #[test]
    fn test_jump_event_clears_new_press_requirement() {
        let mut ctx = MotionContext::default();
        ctx.on_jump(true);
        ctx.require_new_jump_press = true;
        assert!(!ctx.wants_jump());

        // Release + press между tick'ами
        ctx.on_jump(false);
        ctx.on_jump(true);
        assert!(!ctx.require_new_jump_press);
        assert!(ctx.wants_jump());
    }

    #[test]
    fn test_wants_jump_gated_by_chain_length() {
        let mut ctx = MotionContext::default();
        ctx.on_jump(true);

        ctx.jump_count = 2;
        assert!(ctx.wants_jump());

        ctx.jump_count = 3;
        assert!(!ctx.wants_jump());
    }

    #[test]
    fn test_falling_when_jump_released() {
        let mut ctx = MotionContext::default();
        ctx.current_velocity.y = 5.0;

        ctx.on_jump(true);
        assert!(!ctx.is_falling()); // держим jump, летим вверх

        ctx.on_jump(false);
        assert!(ctx.is_falling()); // short hop: fall multiplier сразу

        ctx.on_jump(true);
        ctx.current_velocity.y = 0.0;
        assert!(ctx.is_falling()); // apex
    }
}
