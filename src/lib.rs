//! Mini Arcade - small canvas arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game sessions)
//! - `renderer`: Canvas 2D drawing (wasm only)
//! - `stats`: Per-game play statistics persisted to LocalStorage
//! - `settings`: Player preferences
//! - `guess`: Number-guessing feedback logic

pub mod guess;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod stats;

pub use settings::Settings;
pub use stats::GameStats;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Breakout playfield
    pub const BREAKOUT_WIDTH: f32 = 800.0;
    pub const BREAKOUT_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Gap between paddle bottom and playfield bottom
    pub const PADDLE_MARGIN: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_SPEED: f32 = 320.0;
    /// Speed added per cleared level
    pub const BALL_SPEED_INCREMENT: f32 = 40.0;
    /// Horizontal deflection per unit of paddle-hit offset
    pub const PADDLE_ENGLISH: f32 = 160.0;

    /// Brick grid
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_HEIGHT: f32 = 24.0;
    /// Vertical offset of the first brick row
    pub const BRICK_TOP: f32 = 60.0;
    /// Points for the top row; each lower row is worth less
    pub const BRICK_TOP_ROW_POINTS: u32 = 100;
    pub const BRICK_ROW_POINT_STEP: u32 = 20;

    pub const BREAKOUT_START_LIVES: u8 = 3;

    /// Flappy playfield
    pub const FLAPPY_WIDTH: f32 = 400.0;
    pub const FLAPPY_HEIGHT: f32 = 600.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_RADIUS: f32 = 14.0;
    /// Downward acceleration (pixels/s^2)
    pub const GRAVITY: f32 = 1400.0;
    /// Upward velocity set on flap (pixels/s, negative is up)
    pub const FLAP_IMPULSE: f32 = -420.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 160.0;
    /// Horizontal distance between consecutive pipe spawns
    pub const PIPE_SPACING: f32 = 220.0;
    /// Leftward pipe scroll speed (pixels/s)
    pub const PIPE_SPEED: f32 = 160.0;
    pub const PIPE_POINTS: u32 = 1;
}
