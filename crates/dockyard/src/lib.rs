#![forbid(unsafe_code)]

//! Dockyard public facade crate.
//!
//! Re-exports the dock engine and its host-facing types, plus a prelude for
//! day-to-day use.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use dockyard_core::animation::{
    Animation, EasingFn, OffsetTween, Timeline, TweenStatus, ease_in, ease_in_cubic, ease_in_out,
    ease_out, ease_out_cubic, linear,
};
pub use dockyard_core::event::{DragEvent, DropEvent, Invalidation, Velocity};
pub use dockyard_core::geometry::{Offset, Rect, Size};
pub use dockyard_core::host::{
    DockHost, FrameScheduler, FrameSubscription, LayoutQuery, NodeId, OverlayEntryId,
    OverlayLayer,
};

#[cfg(feature = "tracing-json")]
pub use dockyard_core::logging::init_json_subscriber;

// --- Widget re-exports -----------------------------------------------------

pub use dockyard_widgets::{
    Dock, DockConfig, DockError, DockItem, DockItemController, DragSession, DragSessionHandle,
    FlightOverlay, FlightStatus, ItemEffect, ItemPhase, ItemVisualState, OverlayView, RowLayout,
    SlotContent, SlotMetrics, SlotView, neighbor_shift,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for dockyard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dock construction or reorder failure.
    Dock(DockError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dock(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dock(err) => Some(err),
        }
    }
}

impl From<DockError> for Error {
    fn from(err: DockError) -> Self {
        Self::Dock(err)
    }
}

/// Standard result type for dockyard APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Dock, DockConfig, DockHost, DockItem, DragEvent, DropEvent, Error, Offset, Result,
        SlotContent, SlotView,
    };

    pub use crate::{core, widgets};
}

pub use dockyard_core as core;
pub use dockyard_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn build(items: &[char]) -> Result<Dock<char, char>> {
        Ok(Dock::new(items.iter().copied(), |c: &char| *c)?)
    }

    #[test]
    fn dock_errors_convert() {
        let err = build(&['A', 'A']).unwrap_err();
        assert!(matches!(err, Error::Dock(crate::DockError::DuplicateItem { .. })));
        assert_eq!(err.to_string(), "item 'A' appears more than once");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn reorder_through_facade() -> Result<()> {
        let mut dock = build(&['A', 'B', 'C'])?;
        dock.reorder(&'C', &'A')?;
        assert_eq!(dock.items(), &['C', 'A', 'B']);
        Ok(())
    }
}
