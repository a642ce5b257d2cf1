//! Flappy frame drawing

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{draw_score, draw_session_overlay};
use crate::consts::{FLAPPY_HEIGHT, FLAPPY_WIDTH};
use crate::sim::FlappyState;

/// Paint one Flappy frame
pub fn draw_flappy(ctx: &CanvasRenderingContext2d, state: &FlappyState) {
    let w = FLAPPY_WIDTH as f64;
    let h = FLAPPY_HEIGHT as f64;

    ctx.set_fill_style_str("#70c5ce");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#2e9e4f");
    for pipe in &state.pipes {
        for half in [pipe.top_bounds(), pipe.bottom_bounds()] {
            ctx.fill_rect(
                half.min.x as f64,
                half.min.y as f64,
                half.width() as f64,
                half.height() as f64,
            );
        }
    }

    // Ground strip
    ctx.set_fill_style_str("#d8b26e");
    ctx.fill_rect(0.0, h - 6.0, w, 6.0);

    ctx.set_fill_style_str("#f7d51d");
    ctx.begin_path();
    ctx.arc(
        state.bird.pos.x as f64,
        state.bird.pos.y as f64,
        state.bird.radius as f64,
        0.0,
        TAU,
    )
    .ok();
    ctx.fill();

    draw_score(ctx, &state.session);
    draw_session_overlay(ctx, &state.session, w, h);
}
