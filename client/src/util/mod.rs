//! Utility helpers shared across the page controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless plumbing with no page knowledge of its own: rate limiting for
//! bursty browser events and the smooth-scroll arithmetic.

pub mod debounce;
pub mod scroll;
