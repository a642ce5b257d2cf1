//! Canvas 2D rendering
//!
//! Draw functions are pure readers: they take the simulation state by
//! shared reference and paint one frame. Calling them twice with no tick
//! in between paints the same frame. No game logic lives here.

mod breakout;
mod flappy;

pub use breakout::draw_breakout;
pub use flappy::draw_flappy;

use web_sys::CanvasRenderingContext2d;

use crate::sim::{GamePhase, GameSession};

/// Dim the playfield and center a title/subtitle pair
fn draw_overlay(ctx: &CanvasRenderingContext2d, w: f64, h: f64, title: &str, subtitle: &str) {
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#ffffff");
    ctx.set_text_align("center");
    ctx.set_font("bold 36px sans-serif");
    ctx.fill_text(title, w / 2.0, h / 2.0 - 10.0).ok();
    ctx.set_font("18px sans-serif");
    ctx.fill_text(subtitle, w / 2.0, h / 2.0 + 28.0).ok();
}

/// Phase-dependent overlay shared by both games
fn draw_session_overlay(ctx: &CanvasRenderingContext2d, session: &GameSession, w: f64, h: f64) {
    match session.phase {
        GamePhase::Menu => {
            draw_overlay(ctx, w, h, "Ready?", "Click or press Space to start");
        }
        GamePhase::Playing if session.paused => {
            draw_overlay(ctx, w, h, "Paused", "Press Escape to resume");
        }
        GamePhase::Playing => {}
        GamePhase::Result => {
            let line = format!("Score {} - press Space to play again", session.score);
            draw_overlay(ctx, w, h, "Game Over", &line);
        }
    }
}

/// Score line in the top-left corner
fn draw_score(ctx: &CanvasRenderingContext2d, session: &GameSession) {
    ctx.set_fill_style_str("#ffffff");
    ctx.set_text_align("left");
    ctx.set_font("16px monospace");
    ctx.fill_text(&format!("Score {}", session.score), 12.0, 24.0)
        .ok();
}
