//! Jump physics table: gravity + launch velocity на каждый прыжок в цепочке.
//!
//! Прыжок N (1..=3) настроен так, чтобы достигать apex за `time_N / 2`
//! на высоте `height_N`:
//! - `height_N = max_jump_height + 2 * (N - 1)`
//! - `time_N = max_jump_time * (1 + 0.25 * (N - 1))`
//! - `v0 = 2h / t_apex`, `g = -2h / t_apex²`
//!
//! Таблица считается один раз при создании и дальше только читается.

use bevy::prelude::*;

use crate::controller::ConfigError;

/// Максимум прыжков в цепочке (третий финальный, после него сразу reset)
pub const MAX_JUMP_COUNT: u8 = 3;

/// Прибавка высоты за каждый следующий прыжок цепочки (units)
const EXTRA_HEIGHT_PER_JUMP: f32 = 2.0;

/// Прибавка длительности за каждый следующий прыжок цепочки (доля от base)
const EXTRA_TIME_PER_JUMP: f32 = 0.25;

/// Целевая дуга одного прыжка (до применения формул)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpArc {
    /// Высота apex (units)
    pub height: f32,
    /// Полная длительность прыжка (apex достигается на половине)
    pub duration: f32,
}

impl JumpArc {
    pub fn time_to_apex(&self) -> f32 {
        self.duration / 2.0
    }
}

/// Таблица gravity/velocity, индексированная jump_count (0..=3)
///
/// Инварианты:
/// - `gravity[0] == gravity[1]` (падение без прыжка использует base gravity)
/// - `initial_velocity[0]` не используется (0.0)
/// - для N в 1..=3: `v0 + g * t_apex ≈ 0`
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct JumpPhysicsTable {
    base_height: f32,
    base_time: f32,
    initial_velocity: [f32; 4],
    gravity: [f32; 4],
}

impl JumpPhysicsTable {
    /// Строит таблицу из базовых tunables.
    ///
    /// Неположительные или не-finite значения отклоняются здесь, чтобы
    /// tick path никогда не видел NaN/inf констант.
    pub fn new(max_jump_height: f32, max_jump_time: f32) -> Result<Self, ConfigError> {
        ConfigError::check_positive("max_jump_height", max_jump_height)?;
        ConfigError::check_positive("max_jump_time", max_jump_time)?;

        let mut table = Self {
            base_height: max_jump_height,
            base_time: max_jump_time,
            initial_velocity: [0.0; 4],
            gravity: [0.0; 4],
        };

        for jump in 1..=MAX_JUMP_COUNT {
            let arc = table.arc(jump);
            let apex = arc.time_to_apex();
            table.initial_velocity[jump as usize] = (2.0 * arc.height) / apex;
            table.gravity[jump as usize] = (-2.0 * arc.height) / (apex * apex);
        }
        table.gravity[0] = table.gravity[1];

        Ok(table)
    }

    /// Целевая дуга прыжка `jump` (1..=3)
    pub fn arc(&self, jump: u8) -> JumpArc {
        debug_assert!((1..=MAX_JUMP_COUNT).contains(&jump), "jump index {} out of table", jump);
        let extra = f32::from(jump.saturating_sub(1));
        JumpArc {
            height: self.base_height + EXTRA_HEIGHT_PER_JUMP * extra,
            duration: self.base_time * (1.0 + EXTRA_TIME_PER_JUMP * extra),
        }
    }

    /// Скорость запуска для прыжка `jump` (1..=3)
    ///
    /// Индекс > 3 это логическая ошибка вызывающего (gate должен стоять до lookup).
    pub fn initial_velocity(&self, jump: u8) -> f32 {
        debug_assert!(jump >= 1, "initial velocity requested for jump 0");
        self.initial_velocity[jump as usize]
    }

    /// Gravity в воздухе после прыжка `jump_count` (0..=3)
    pub fn gravity(&self, jump_count: u8) -> f32 {
        self.gravity[jump_count as usize]
    }
}
