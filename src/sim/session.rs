//! Game session state machine
//!
//! Every game instance owns exactly one `GameSession`. Phase transitions
//! are one-directional within a session (Menu -> Playing -> Result); only
//! a restart or a return to the menu from `Result` reopens the cycle.

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle start screen, waiting for a start command
    Menu,
    /// Active gameplay (ticks run unless paused)
    Playing,
    /// Run ended; frozen until restart or return to menu
    Result,
}

/// Per-session counters and phase
///
/// Created when a game page mounts, reset on start/restart, frozen on
/// transition to `Result`. Never shared across games or tabs.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u8,
    /// 1-based level counter (Breakout; stays 1 for Flappy)
    pub level: u32,
    /// Pause freezes the physics step without changing phase
    pub paused: bool,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameSession {
    /// New session in the menu phase
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: 0,
            level: 1,
            paused: false,
            ticks: 0,
        }
    }

    /// Menu/Result -> Playing: reset all counters to initial values
    pub fn start(&mut self, lives: u8) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = lives;
        self.level = 1;
        self.paused = false;
        self.ticks = 0;
    }

    /// Toggle pause; only meaningful while playing
    pub fn toggle_pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.paused = !self.paused;
        }
    }

    /// True if the physics step should run this tick
    pub fn ticking(&self) -> bool {
        self.phase == GamePhase::Playing && !self.paused
    }

    /// Award points for a destroyed obstacle
    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Lose one life; transitions to `Result` when none remain.
    /// Returns true if the session ended.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::Result;
            true
        } else {
            false
        }
    }

    /// Level advance: not a phase change, an internal sub-transition.
    /// Grants a bonus life alongside the level bump.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.lives = self.lives.saturating_add(1);
    }

    /// Result -> Menu
    pub fn to_menu(&mut self) {
        if self.phase == GamePhase::Result {
            self.phase = GamePhase::Menu;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
