#![forbid(unsafe_code)]

//! Declarative dock output.
//!
//! The dock does not draw. [`Dock::view`](crate::dock::Dock::view) and
//! [`Dock::overlay_view`](crate::dock::Dock::overlay_view) describe what
//! should be on screen and the host turns that into its own widgets.

use dockyard_core::geometry::{Offset, Rect, Size};
use dockyard_core::host::{NodeId, OverlayEntryId};

/// What a slot shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotContent<V> {
    /// The item's visual, produced by the caller's render function.
    Item(V),
    /// An empty box of the item's size, shown while the item is dragged or
    /// in flight so the row does not reflow.
    Placeholder,
}

impl<V> SlotContent<V> {
    /// The visual, unless this is a placeholder.
    #[must_use]
    pub fn visual(&self) -> Option<&V> {
        match self {
            Self::Item(v) => Some(v),
            Self::Placeholder => None,
        }
    }

    /// Whether this is a placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// One slot of the row, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<V> {
    /// Layout node of the slot.
    pub node: NodeId,
    /// Position in the row.
    pub index: usize,
    /// Content to draw.
    pub content: SlotContent<V>,
    /// Content size, margins excluded.
    pub size: Size,
    /// Uniform margin around the content.
    pub margin: f32,
    /// Paint-time translation (the neighbour shift).
    pub translation: Offset,
    /// Whether this slot's item is being dragged.
    pub is_dragging: bool,
}

/// A flight ghost in the overlay layer.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView<V> {
    /// Overlay entry the ghost lives in.
    pub entry: OverlayEntryId,
    /// The item's visual.
    pub ghost: V,
    /// Global top-left of the ghost on this frame.
    pub position: Offset,
    /// Static placeholder drawn at the destination for the whole flight.
    pub placeholder: Rect,
}
