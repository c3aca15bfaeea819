//! Отложенный сброс jump_count после приземления.
//!
//! Вместо scheduler'а/корутины: armed deadline в секундах симуляции,
//! сравнивается с часами персонажа каждый tick. Cancel = сброс deadline.

use bevy::prelude::*;

/// One-shot таймер сброса цепочки прыжков
///
/// Инвариант: не более одного armed deadline на персонажа
/// (повторный `arm` перезаписывает предыдущий).
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct JumpResetTimer {
    deadline: Option<f64>,
}

impl JumpResetTimer {
    /// Взводит таймер: сработает когда часы достигнут `now + delay`
    pub fn arm(&mut self, now: f64, delay: f32) {
        self.deadline = Some(now + f64::from(delay));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Возвращает `true` ровно один раз: на первом poll после deadline
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
