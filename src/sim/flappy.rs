//! Flappy bird simulation
//!
//! The bird holds a fixed x; pipes scroll left and spawn on a fixed
//! horizontal cadence with seeded-RNG gap placement, so a run is fully
//! reproducible from its seed and command stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::command::Command;
use super::session::{GamePhase, GameSession};
use crate::consts::*;

/// Margin keeping pipe gaps away from the ceiling and ground
const GAP_MARGIN: f32 = 40.0;

/// The controlled bird
#[derive(Debug, Clone)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, FLAPPY_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: BIRD_RADIUS,
        }
    }

    /// Fixed upward impulse; velocity is replaced, not accumulated
    pub fn flap(&mut self) {
        self.vel.y = FLAP_IMPULSE;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair with a vertical gap
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Vertical center of the gap
    pub gap_center: f32,
    /// Set once the bird has cleared this pipe
    pub scored: bool,
}

impl Pipe {
    pub fn top_bounds(&self) -> Aabb {
        let gap_top = self.gap_center - PIPE_GAP / 2.0;
        Aabb::from_rect(self.x, 0.0, PIPE_WIDTH, gap_top)
    }

    pub fn bottom_bounds(&self) -> Aabb {
        let gap_bottom = self.gap_center + PIPE_GAP / 2.0;
        Aabb::from_rect(self.x, gap_bottom, PIPE_WIDTH, FLAPPY_HEIGHT - gap_bottom)
    }
}

/// Complete Flappy game state
#[derive(Debug, Clone)]
pub struct FlappyState {
    pub session: GameSession,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl FlappyState {
    pub fn new(seed: u64) -> Self {
        Self {
            session: GameSession::new(),
            bird: Bird::new(),
            pipes: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a fresh session; one life, pipes respawn from scratch
    pub fn start(&mut self) {
        self.session.start(1);
        self.bird = Bird::new();
        self.pipes.clear();
    }

    fn spawn_pipe(&mut self) {
        let min = PIPE_GAP / 2.0 + GAP_MARGIN;
        let max = FLAPPY_HEIGHT - PIPE_GAP / 2.0 - GAP_MARGIN;
        let gap_center = self.rng.random_range(min..max);
        self.pipes.push(Pipe {
            x: FLAPPY_WIDTH,
            gap_center,
            scored: false,
        });
    }
}

/// Advance the Flappy state by one fixed timestep
pub fn tick(state: &mut FlappyState, commands: &[Command], dt: f32) {
    let mut flap = false;
    for cmd in commands {
        match *cmd {
            Command::Start if state.session.phase == GamePhase::Menu => state.start(),
            Command::Restart if state.session.phase == GamePhase::Result => state.start(),
            Command::Menu if state.session.phase == GamePhase::Result => {
                state.session.to_menu();
            }
            Command::Pause => state.session.toggle_pause(),
            Command::Flap => flap = true,
            _ => {}
        }
    }

    if !state.session.ticking() {
        return;
    }
    state.session.ticks += 1;

    // Control, then gravity, then integrate
    if flap {
        state.bird.flap();
    }
    state.bird.vel.y += GRAVITY * dt;
    state.bird.pos += state.bird.vel * dt;

    // Ceiling clamps; only pipes and the ground are fatal
    if state.bird.pos.y - state.bird.radius < 0.0 {
        state.bird.pos.y = state.bird.radius;
        state.bird.vel.y = 0.0;
    }

    // Scroll pipes and spawn on the cadence threshold
    for pipe in &mut state.pipes {
        pipe.x -= PIPE_SPEED * dt;
    }
    let needs_pipe = state
        .pipes
        .last()
        .map(|p| p.x < FLAPPY_WIDTH - PIPE_SPACING)
        .unwrap_or(true);
    if needs_pipe {
        state.spawn_pipe();
    }

    // Score each pipe exactly once, when its trailing edge passes the bird
    for pipe in &mut state.pipes {
        if !pipe.scored && pipe.x + PIPE_WIDTH < state.bird.pos.x - state.bird.radius {
            pipe.scored = true;
            state.session.award(PIPE_POINTS);
        }
    }

    // Off-screen pipes are gone for good
    state.pipes.retain(|p| p.x + PIPE_WIDTH > 0.0);

    // Fatal contacts: any pipe half, or the ground
    let bird_box = state.bird.bounds();
    let hit_pipe = state
        .pipes
        .iter()
        .any(|p| bird_box.overlaps(&p.top_bounds()) || bird_box.overlaps(&p.bottom_bounds()));
    let hit_ground = state.bird.pos.y + state.bird.radius >= FLAPPY_HEIGHT;

    if hit_pipe || hit_ground {
        state.session.lose_life();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn playing_state() -> FlappyState {
        let mut state = FlappyState::new(7);
        tick(&mut state, &[Command::Start], SIM_DT);
        state
    }

    #[test]
    fn test_flap_replaces_vertical_velocity() {
        let mut state = playing_state();
        state.bird.vel.y = 300.0;

        tick(&mut state, &[Command::Flap], SIM_DT);
        // Impulse applied before gravity for the same tick
        let expected = FLAP_IMPULSE + GRAVITY * SIM_DT;
        assert!((state.bird.vel.y - expected).abs() < 0.001);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut state = playing_state();
        let v0 = state.bird.vel.y;

        tick(&mut state, &[], SIM_DT);
        tick(&mut state, &[], SIM_DT);
        let expected = v0 + 2.0 * GRAVITY * SIM_DT;
        assert!((state.bird.vel.y - expected).abs() < 0.001);
    }

    #[test]
    fn test_first_pipe_spawns_immediately() {
        let state = playing_state();
        assert_eq!(state.pipes.len(), 1);
        assert!(state.pipes[0].x <= FLAPPY_WIDTH);
    }

    #[test]
    fn test_pipe_spawn_cadence() {
        let mut state = playing_state();
        // Keep the bird safely inside the first gap while pipes scroll
        for _ in 0..600 {
            if let Some(pipe) = state.pipes.iter().find(|p| !p.scored) {
                state.bird.pos.y = pipe.gap_center;
            }
            state.bird.vel.y = 0.0;
            tick(&mut state, &[], SIM_DT);
            if state.session.phase != GamePhase::Playing {
                break;
            }
        }
        assert_eq!(state.session.phase, GamePhase::Playing);
        // Consecutive pipes sit one spacing apart, give or take the scroll
        // distance of the tick that crossed the threshold
        let slack = PIPE_SPEED * SIM_DT + 0.001;
        for pair in state.pipes.windows(2) {
            let gap = pair[1].x - pair[0].x;
            assert!(
                gap >= PIPE_SPACING - 0.001 && gap <= PIPE_SPACING + slack,
                "gap was {gap}"
            );
        }
    }

    #[test]
    fn test_pipe_scores_exactly_once() {
        let mut state = playing_state();
        state.pipes.clear();
        state.pipes.push(Pipe {
            x: BIRD_X - BIRD_RADIUS - PIPE_WIDTH - 1.0,
            gap_center: state.bird.pos.y,
            scored: false,
        });
        state.bird.vel.y = 0.0;

        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.score, PIPE_POINTS);
        assert!(state.pipes[0].scored);

        state.bird.pos.y = state.pipes[0].gap_center;
        state.bird.vel.y = 0.0;
        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.score, PIPE_POINTS);
    }

    #[test]
    fn test_pipe_collision_is_fatal() {
        let mut state = playing_state();
        state.pipes.clear();
        state.pipes.push(Pipe {
            x: BIRD_X - PIPE_WIDTH / 2.0,
            gap_center: state.bird.pos.y + 300.0,
            scored: false,
        });

        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.phase, GamePhase::Result);

        // Frozen after the terminal transition
        let pos = state.bird.pos;
        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.bird.pos, pos);
    }

    #[test]
    fn test_ground_is_fatal() {
        let mut state = playing_state();
        state.bird.pos.y = FLAPPY_HEIGHT - state.bird.radius - 1.0;
        state.bird.vel.y = 400.0;
        state.pipes.clear();

        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.session.phase, GamePhase::Result);
    }

    #[test]
    fn test_ceiling_clamps_without_loss() {
        let mut state = playing_state();
        state.bird.pos.y = state.bird.radius + 1.0;
        state.bird.vel.y = -500.0;
        state.pipes.clear();

        tick(&mut state, &[], SIM_DT);
        assert_eq!(state.bird.pos.y, state.bird.radius);
        assert_eq!(state.bird.vel.y, 0.0);
        assert_eq!(state.session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = FlappyState::new(42);
        let mut b = FlappyState::new(42);
        let script = [Command::Start, Command::Flap];
        tick(&mut a, &script, SIM_DT);
        tick(&mut b, &script, SIM_DT);
        for _ in 0..120 {
            tick(&mut a, &[Command::Flap], SIM_DT);
            tick(&mut b, &[Command::Flap], SIM_DT);
        }
        assert_eq!(a.bird.pos, b.bird.pos);
        assert_eq!(a.pipes.len(), b.pipes.len());
        for (pa, pb) in a.pipes.iter().zip(&b.pipes) {
            assert_eq!(pa.gap_center, pb.gap_center);
            assert_eq!(pa.x, pb.x);
        }
    }

    #[test]
    fn test_gap_stays_inside_playfield() {
        let mut state = FlappyState::new(99);
        for _ in 0..50 {
            state.spawn_pipe();
        }
        for pipe in &state.pipes {
            assert!(pipe.gap_center - PIPE_GAP / 2.0 >= GAP_MARGIN - 0.001);
            assert!(pipe.gap_center + PIPE_GAP / 2.0 <= FLAPPY_HEIGHT - GAP_MARGIN + 0.001);
        }
    }
}
