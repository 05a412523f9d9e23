#![forbid(unsafe_code)]

//! Core: geometry, animation, host runtime traits and drag/drop events.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod host;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
