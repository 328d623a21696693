//! # client
//!
//! Page behaviours for the portfolio site, compiled to WebAssembly and loaded
//! by the static pages served from `website/`.
//!
//! Every controller is written against the small DOM seams in [`dom`], so the
//! behaviour is exercised natively with mock elements. The web-sys glue that
//! binds controllers to the real document is compiled only with the `browser`
//! feature; [`bootstrap`] wires everything together once the document is
//! ready.

pub mod dom;
pub mod footer;
pub mod form;
pub mod lifecycle;
pub mod nav;
pub mod reveal;
pub mod selectors;
pub mod theme;
pub mod util;

#[cfg(feature = "browser")]
pub mod background;
#[cfg(feature = "browser")]
pub mod bootstrap;
