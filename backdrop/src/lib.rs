//! Decorative particle backdrops for the portfolio pages.
//!
//! Each registered `<canvas>` gets its own field of drifting points that
//! bounce off the canvas edges. The simulation is plain Rust and is tested
//! natively; only [`render`] and [`engine`] touch the browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Density, velocity, radius and colour constants |
//! | [`particle`] | A single moving point and its boundary reflection |
//! | [`field`] | One surface's particle population, rebuilt on resize |
//! | [`render`] | Draws a field into a 2D context |
//! | [`engine`] | Testable [`engine::BackdropCore`] plus canvas ownership and the frame loop |

pub mod consts;
pub mod engine;
pub mod field;
pub mod particle;
pub mod render;
