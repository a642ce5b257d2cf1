//! Breakout simulation
//!
//! Paddle at the bottom, ball bouncing through a brick grid. The ball and
//! paddle reset at session start and on each lost life; bricks are
//! repopulated when a level starts and are never resurrected mid-session.

use glam::Vec2;

use super::aabb::{self, Aabb, HitAxis};
use super::command::Command;
use super::session::{GamePhase, GameSession};
use crate::consts::*;

/// The moving ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Current speed magnitude (grows with level)
    pub speed: f32,
}

impl Ball {
    pub fn new() -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        };
        ball.reset(BREAKOUT_WIDTH / 2.0);
        ball
    }

    /// Place the ball just above the paddle, heading up at a slight angle
    pub fn reset(&mut self, paddle_x: f32) {
        let paddle_top = BREAKOUT_HEIGHT - PADDLE_MARGIN - PADDLE_HEIGHT;
        self.pos = Vec2::new(paddle_x, paddle_top - self.radius - 2.0);
        self.vel = Vec2::new(0.4, -1.0).normalize() * self.speed;
    }

    /// AABB around the ball circle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle; x is the center, y is fixed near the bottom
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            x: BREAKOUT_WIDTH / 2.0,
            width: PADDLE_WIDTH,
        }
    }

    pub fn top(&self) -> f32 {
        BREAKOUT_HEIGHT - PADDLE_MARGIN - PADDLE_HEIGHT
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(
            self.x - self.width / 2.0,
            self.top(),
            self.width,
            PADDLE_HEIGHT,
        )
    }

    /// Move the paddle center directly to a target, clamped to the playfield
    pub fn move_to(&mut self, target_x: f32) {
        let half = self.width / 2.0;
        self.x = target_x.clamp(half, BREAKOUT_WIDTH - half);
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

/// A destructible brick
#[derive(Debug, Clone)]
pub struct Brick {
    pub bounds: Aabb,
    pub row: usize,
    pub points: u32,
    pub visible: bool,
}

/// Complete Breakout game state
#[derive(Debug, Clone)]
pub struct BreakoutState {
    pub session: GameSession,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
}

impl BreakoutState {
    /// New instance in the menu phase, with a grid laid out for the idle
    /// screen
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            ball: Ball::new(),
            paddle: Paddle::new(),
            bricks: brick_grid(),
        }
    }

    /// Begin a fresh session
    pub fn start(&mut self) {
        self.session.start(BREAKOUT_START_LIVES);
        self.paddle = Paddle::new();
        self.ball = Ball::new();
        self.bricks = brick_grid();
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Reset ball and paddle positions, keeping the current ball speed
    fn respawn(&mut self) {
        self.paddle = Paddle::new();
        let speed = self.ball.speed;
        self.ball = Ball::new();
        self.ball.speed = speed;
        self.ball.reset(self.paddle.x);
    }
}

impl Default for BreakoutState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the brick grid for a level. Top row is worth the most.
pub fn brick_grid() -> Vec<Brick> {
    let brick_w = BREAKOUT_WIDTH / BRICK_COLS as f32;
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        let points = BRICK_TOP_ROW_POINTS - BRICK_ROW_POINT_STEP * row as u32;
        for col in 0..BRICK_COLS {
            let x = col as f32 * brick_w;
            let y = BRICK_TOP + row as f32 * BRICK_HEIGHT;
            // Inset by 2px on each side so bricks read as separate tiles
            bricks.push(Brick {
                bounds: Aabb::from_rect(x + 2.0, y + 2.0, brick_w - 4.0, BRICK_HEIGHT - 4.0),
                row,
                points,
                visible: true,
            });
        }
    }
    bricks
}

/// Advance the Breakout state by one fixed timestep
pub fn tick(state: &mut BreakoutState, commands: &[Command], dt: f32) {
    for cmd in commands {
        match *cmd {
            Command::Start if state.session.phase == GamePhase::Menu => state.start(),
            Command::Restart if state.session.phase == GamePhase::Result => state.start(),
            Command::Menu if state.session.phase == GamePhase::Result => {
                state.session.to_menu();
            }
            Command::Pause => state.session.toggle_pause(),
            Command::PaddleTo(x) if state.session.ticking() => state.paddle.move_to(x),
            Command::Nudge(dx) if state.session.ticking() => {
                let x = state.paddle.x + dx;
                state.paddle.move_to(x);
            }
            _ => {}
        }
    }

    if !state.session.ticking() {
        return;
    }
    state.session.ticks += 1;

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    // Walls: reflect and clamp
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x + ball.radius > BREAKOUT_WIDTH {
        ball.pos.x = BREAKOUT_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
    }

    // Bottom exit: life lost
    if ball.pos.y - ball.radius > BREAKOUT_HEIGHT {
        let over = state.session.lose_life();
        if !over {
            state.respawn();
        }
        return;
    }

    // Paddle bounce with "english": horizontal deflection scales with how
    // far from the paddle center the ball lands
    if ball.vel.y > 0.0 && ball.bounds().overlaps(&state.paddle.bounds()) {
        let offset = (ball.pos.x - state.paddle.x) / (state.paddle.width / 2.0);
        let offset = offset.clamp(-1.0, 1.0);
        ball.vel.y = -ball.vel.y.abs();
        ball.vel.x += offset * PADDLE_ENGLISH;
        ball.vel = ball.vel.normalize_or_zero() * ball.speed;
        ball.pos.y = state.paddle.top() - ball.radius;
    }

    // Brick collisions: at most one brick per tick so a single contact
    // can't double-reflect
    let ball_box = ball.bounds();
    for brick in state.bricks.iter_mut().filter(|b| b.visible) {
        if let Some(hit) = aabb::intersect(&ball_box, &brick.bounds) {
            brick.visible = false;
            state.session.award(brick.points);
            ball.vel = aabb::reflect(ball.vel, hit.axis);
            // Push out along the bounce axis so we don't re-enter next tick
            match hit.axis {
                HitAxis::Horizontal => {
                    ball.pos.x += hit.penetration * ball.vel.x.signum();
                }
                HitAxis::Vertical => {
                    ball.pos.y += hit.penetration * ball.vel.y.signum();
                }
            }
            break;
        }
    }

    // Level cleared: speed up, bonus life, fresh grid
    if state.bricks_remaining() == 0 {
        state.session.advance_level();
        state.ball.speed += BALL_SPEED_INCREMENT;
        state.bricks = brick_grid();
        state.respawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn playing_state() -> BreakoutState {
        let mut state = BreakoutState::new();
        tick(&mut state, &[Command::Start], SIM_DT);
        state
    }

    /// Drop the ball straight down from below the grid so no brick is hit
    fn park_ball(state: &mut BreakoutState) {
        state.ball.pos = Vec2::new(400.0, 400.0);
        state.ball.vel = Vec2::new(0.0, state.ball.speed);
    }

    #[test]
    fn test_start_command_begins_session() {
        let state = playing_state();
        assert_eq!(state.session.phase, GamePhase::Playing);
        assert_eq!(state.session.lives, BREAKOUT_START_LIVES);
        assert_eq!(state.session.score, 0);
        assert_eq!(state.bricks.len(), BRICK_ROWS * BRICK_COLS);
    }

    #[test]
    fn test_free_flight_is_euler_integration() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(120.0, -80.0);
        let before = state.ball.pos;
        let vel = state.ball.vel;

        tick(&mut state, &[], SIM_DT);
        let expected = before + vel * SIM_DT;
        assert!((state.ball.pos - expected).length() < 0.001);
    }

    #[test]
    fn test_wall_reflection_clamps_position() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(3.0, 300.0);
        state.ball.vel = Vec2::new(-200.0, 50.0);

        tick(&mut state, &[], SIM_DT);
        assert!(state.ball.pos.x >= state.ball.radius);
        assert!(state.ball.vel.x > 0.0);
    }

    #[test]
    fn test_brick_hit_awards_points_exactly_once() {
        let mut state = playing_state();
        // Aim at a top-row brick (worth 100) from just below it
        let target = state.bricks[3].bounds;
        state.ball.pos = Vec2::new(target.center().x, target.max.y + state.ball.radius + 1.0);
        state.ball.vel = Vec2::new(0.0, -200.0);

        tick(&mut state, &[], SIM_DT);
        assert!(!state.bricks[3].visible);
        assert_eq!(state.session.score, 100);
        assert!(state.ball.vel.y > 0.0, "should bounce downward");

        // Ball is now heading away; further ticks must not re-award
        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.score, 100);
    }

    #[test]
    fn test_brick_points_by_row() {
        let state = BreakoutState::new();
        assert_eq!(state.bricks[0].points, 100);
        let bottom = &state.bricks[(BRICK_ROWS - 1) * BRICK_COLS];
        assert_eq!(bottom.points, 100 - 20 * (BRICK_ROWS as u32 - 1));
    }

    #[test]
    fn test_three_missed_returns_end_the_session() {
        let mut state = playing_state();
        for expected_lives in [2, 1] {
            state.ball.pos = Vec2::new(400.0, BREAKOUT_HEIGHT + 20.0);
            state.ball.vel = Vec2::new(0.0, 100.0);
            tick(&mut state, &[], SIM_DT);
            assert_eq!(state.session.lives, expected_lives);
            assert_eq!(state.session.phase, GamePhase::Playing);
        }

        state.ball.pos = Vec2::new(400.0, BREAKOUT_HEIGHT + 20.0);
        state.ball.vel = Vec2::new(0.0, 100.0);
        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.lives, 0);
        assert_eq!(state.session.phase, GamePhase::Result);

        // Frozen: no further physics until a new session starts
        let ticks = state.session.ticks;
        let pos = state.ball.pos;
        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.ticks, ticks);
        assert_eq!(state.ball.pos, pos);
    }

    #[test]
    fn test_life_lost_resets_ball_to_paddle() {
        let mut state = playing_state();
        state.paddle.move_to(600.0);
        state.ball.pos = Vec2::new(100.0, BREAKOUT_HEIGHT + 20.0);
        state.ball.vel = Vec2::new(0.0, 100.0);

        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.lives, 2);
        // Fresh paddle and ball positions
        assert_eq!(state.paddle.x, BREAKOUT_WIDTH / 2.0);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_pause_freezes_physics() {
        let mut state = playing_state();
        park_ball(&mut state);
        let pos = state.ball.pos;

        tick(&mut state, &[Command::Pause], SIM_DT);
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.session.phase, GamePhase::Playing);

        tick(&mut state, &[Command::Pause], SIM_DT);
        assert_ne!(state.ball.pos, pos);
    }

    #[test]
    fn test_level_clear_advances_and_speeds_up() {
        let mut state = playing_state();
        park_ball(&mut state);
        let speed_before = state.ball.speed;
        for brick in &mut state.bricks {
            brick.visible = false;
        }

        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.level, 2);
        assert_eq!(state.session.lives, BREAKOUT_START_LIVES + 1);
        assert_eq!(state.ball.speed, speed_before + BALL_SPEED_INCREMENT);
        assert_eq!(state.bricks_remaining(), BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_from_result() {
        let mut state = playing_state();
        state.session.lives = 1;
        state.ball.pos = Vec2::new(400.0, BREAKOUT_HEIGHT + 20.0);
        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.phase, GamePhase::Result);

        tick(&mut state, &[Command::Restart], SIM_DT);
        assert_eq!(state.session.phase, GamePhase::Playing);
        assert_eq!(state.session.score, 0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Paddle target commands always leave the paddle inside the
            /// playfield
            #[test]
            fn paddle_target_clamped(target in -10_000.0f32..10_000.0) {
                let mut state = playing_state();
                tick(&mut state, &[Command::PaddleTo(target)], SIM_DT);
                let half = state.paddle.width / 2.0;
                prop_assert!(state.paddle.x >= half);
                prop_assert!(state.paddle.x <= BREAKOUT_WIDTH - half);
            }

            /// One tick of free flight moves the ball by exactly vel * dt
            #[test]
            fn free_flight_integration(
                vx in -300.0f32..300.0,
                vy in -300.0f32..-50.0,
            ) {
                let mut state = playing_state();
                state.ball.pos = Vec2::new(400.0, 450.0);
                state.ball.vel = Vec2::new(vx, vy);
                let expected = state.ball.pos + state.ball.vel * SIM_DT;

                tick(&mut state, &[], SIM_DT);
                prop_assert!((state.ball.pos - expected).length() < 0.001);
            }
        }
    }
}
