#![forbid(unsafe_code)]

//! Pointer-drag and drop-target events delivered by the host runtime.
//!
//! The host owns gesture recognition and hit-testing. It translates raw
//! pointer input into two streams:
//!
//! - [`DragEvent`]s addressed to the item being dragged (the drag source).
//! - [`DropEvent`]s addressed to the slot currently under the pointer (a
//!   drop target), carrying the dragged item as the candidate payload.
//!
//! # Invariants
//!
//! 1. A drag is well-formed: one `Started`, zero or more `Updated`, then
//!    exactly one terminal event (`Ended`, `Completed` or `Cancelled`).
//! 2. A drop target sees `Hover` repeatedly while a candidate is over it and
//!    finishes with either `Accept` or `Leave`.

use bitflags::bitflags;

use crate::geometry::Offset;

/// Pointer velocity at release, in logical pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Velocity vector.
    pub pixels_per_second: Offset,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self {
        pixels_per_second: Offset::ZERO,
    };

    /// Create a velocity from its components.
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self {
            pixels_per_second: Offset::new(dx, dy),
        }
    }
}

/// Lifecycle events for the item being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer was pressed on the item and moved past the drag slop.
    Started {
        /// Global pointer position.
        pointer: Offset,
    },
    /// The pointer moved while dragging.
    Updated {
        /// Global pointer position.
        pointer: Offset,
        /// Movement since the previous update.
        delta: Offset,
    },
    /// The pointer was released.
    ///
    /// `offset` is the global top-left of the drag visual at release, or
    /// `None` when the host could not resolve one.
    Ended {
        /// Release velocity.
        velocity: Velocity,
        /// Global release offset.
        offset: Option<Offset>,
    },
    /// A drop target accepted the item.
    Completed,
    /// The drag was aborted (focus loss, escape, gesture arena rejection).
    Cancelled,
}

impl DragEvent {
    /// Whether this event ends the drag.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended { .. } | Self::Completed | Self::Cancelled)
    }
}

/// Events delivered to a slot acting as a drop target.
#[derive(Debug, Clone, PartialEq)]
pub enum DropEvent<T> {
    /// Hover evaluation. `candidate` is the dragged item, or `None` when the
    /// hover carries no acceptable data.
    Hover {
        /// Dragged item under evaluation.
        candidate: Option<T>,
    },
    /// The candidate was dropped on this slot.
    Accept {
        /// Dropped item.
        payload: T,
    },
    /// The candidate was withdrawn without being dropped here.
    Leave {
        /// The withdrawn item, when the host still knows it.
        payload: Option<T>,
    },
}

bitflags! {
    /// What changed since the host last rendered the dock.
    ///
    /// Every write to the item order or the shared drag session sets a flag;
    /// the host drains them before presenting the next frame and
    /// re-evaluates the affected visuals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        /// The item order changed.
        const ORDER = 0b0000_0001;
        /// The shared drag session changed.
        const SESSION = 0b0000_0010;
        /// An item's visibility, drag flag or shift offset changed.
        const VISUALS = 0b0000_0100;
        /// An overlay entry was inserted, moved or removed.
        const OVERLAY = 0b0000_1000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_events() {
        assert!(!DragEvent::Started { pointer: Offset::ZERO }.is_terminal());
        assert!(
            !DragEvent::Updated {
                pointer: Offset::ZERO,
                delta: Offset::ZERO
            }
            .is_terminal()
        );
        assert!(
            DragEvent::Ended {
                velocity: Velocity::ZERO,
                offset: None
            }
            .is_terminal()
        );
        assert!(DragEvent::Completed.is_terminal());
        assert!(DragEvent::Cancelled.is_terminal());
    }

    #[test]
    fn velocity_constructor() {
        let v = Velocity::new(120.0, -4.0);
        assert_eq!(v.pixels_per_second, Offset::new(120.0, -4.0));
        assert_eq!(Velocity::default(), Velocity::ZERO);
    }

    #[test]
    fn invalidation_accumulates() {
        let mut flags = Invalidation::empty();
        flags |= Invalidation::ORDER;
        flags |= Invalidation::SESSION;
        assert!(flags.contains(Invalidation::ORDER | Invalidation::SESSION));
        assert!(!flags.contains(Invalidation::OVERLAY));
    }

    #[test]
    fn drop_event_carries_payload() {
        let ev = DropEvent::Accept { payload: 'A' };
        match ev {
            DropEvent::Accept { payload } => assert_eq!(payload, 'A'),
            _ => unreachable!("expected Accept"),
        }
    }
}
