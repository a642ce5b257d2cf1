//! Breakout frame drawing

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{draw_score, draw_session_overlay};
use crate::consts::{BREAKOUT_HEIGHT, BREAKOUT_WIDTH};
use crate::sim::BreakoutState;

/// One color per brick row, top to bottom
const ROW_COLORS: [&str; 5] = ["#ef476f", "#f78c6b", "#ffd166", "#06d6a0", "#118ab2"];

/// Paint one Breakout frame
pub fn draw_breakout(ctx: &CanvasRenderingContext2d, state: &BreakoutState) {
    let w = BREAKOUT_WIDTH as f64;
    let h = BREAKOUT_HEIGHT as f64;

    ctx.set_fill_style_str("#101820");
    ctx.fill_rect(0.0, 0.0, w, h);

    for brick in state.bricks.iter().filter(|b| b.visible) {
        let color = ROW_COLORS[brick.row % ROW_COLORS.len()];
        ctx.set_fill_style_str(color);
        ctx.fill_rect(
            brick.bounds.min.x as f64,
            brick.bounds.min.y as f64,
            brick.bounds.width() as f64,
            brick.bounds.height() as f64,
        );
    }

    let paddle = state.paddle.bounds();
    ctx.set_fill_style_str("#e8e8e8");
    ctx.fill_rect(
        paddle.min.x as f64,
        paddle.min.y as f64,
        paddle.width() as f64,
        paddle.height() as f64,
    );

    ctx.set_fill_style_str("#ffd166");
    ctx.begin_path();
    ctx.arc(
        state.ball.pos.x as f64,
        state.ball.pos.y as f64,
        state.ball.radius as f64,
        0.0,
        TAU,
    )
    .ok();
    ctx.fill();

    draw_score(ctx, &state.session);
    ctx.set_text_align("right");
    ctx.fill_text(
        &format!("Lives {}  Level {}", state.session.lives, state.session.level),
        w - 12.0,
        24.0,
    )
    .ok();

    draw_session_overlay(ctx, &state.session, w, h);
}
