//! Jump domain: физика прыжковой цепочки
//!
//! Содержит:
//! - JumpPhysicsTable (gravity + initial velocity для прыжков 1..=3)
//! - JumpResetTimer (отложенный сброс jump_count после приземления)

pub mod table;
pub mod timer;


pub use table::*;
pub use timer::*;
