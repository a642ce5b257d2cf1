//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - All I/O happens outside the tick, at session boundaries

pub mod aabb;
pub mod breakout;
pub mod command;
pub mod flappy;
pub mod session;

pub use aabb::{Aabb, Hit, HitAxis, intersect, reflect};
pub use breakout::{Ball, Brick, BreakoutState, Paddle};
pub use command::{Command, CommandQueue};
pub use flappy::{Bird, FlappyState, Pipe};
pub use session::{GamePhase, GameSession};
