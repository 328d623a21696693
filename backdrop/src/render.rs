//! Rendering: paints one particle field into a 2D context.
//!
//! This is the only module that issues `Canvas2D` calls. It reads field state
//! and never mutates it. Fallible calls propagate as `Result<(), JsValue>`;
//! [`crate::engine::Backdrop::frame`] logs failures and keeps animating.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::field::ParticleField;

/// Clear the surface and draw every particle as a filled circle in `color`.
///
/// # Errors
///
/// Returns `Err` if an `arc` call is rejected by the context.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, color: &str) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    ctx.set_fill_style_str(color);

    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.r, 0.0, TAU)?;
        ctx.fill();
    }

    Ok(())
}
