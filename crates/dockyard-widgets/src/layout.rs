#![forbid(unsafe_code)]

//! Single-row slot layout.

use dockyard_core::geometry::{Offset, Rect, Size};

use crate::config::SlotMetrics;

/// Lays slots out left to right from `origin`, one slot size apart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowLayout {
    /// Global top-left of the dock.
    pub origin: Offset,
    /// Slot geometry.
    pub metrics: SlotMetrics,
}

impl RowLayout {
    /// Create a row layout.
    #[must_use]
    pub const fn new(origin: Offset, metrics: SlotMetrics) -> Self {
        Self { origin, metrics }
    }

    /// Outer rect of slot `index`, margins included, in global coordinates.
    #[must_use]
    pub fn slot_rect(&self, index: usize) -> Rect {
        let size = self.metrics.slot_size();
        Rect::new(
            self.origin.dx + index as f32 * size.width,
            self.origin.dy,
            size.width,
            size.height,
        )
    }

    /// Content rect of slot `index` (the outer rect inset by the margin).
    #[must_use]
    pub fn content_rect(&self, index: usize) -> Rect {
        let outer = self.slot_rect(index);
        let margin = self.metrics.margin;
        Rect::from_origin_size(
            outer.origin() + Offset::new(margin, margin),
            self.metrics.content_size(),
        )
    }

    /// Size of a dock holding `count` slots.
    #[must_use]
    pub fn dock_size(&self, count: usize) -> Size {
        let slot = self.metrics.slot_size();
        Size::new(slot.width * count as f32, slot.height)
    }

    /// Index of the slot under the global point, if any.
    #[must_use]
    pub fn index_at(&self, point: Offset, count: usize) -> Option<usize> {
        let bounds = Rect::from_origin_size(self.origin, self.dock_size(count));
        if !bounds.contains(point) {
            return None;
        }
        let width = self.metrics.slot_size().width;
        let index = ((point.dx - self.origin.dx) / width).floor() as usize;
        (index < count).then_some(index)
    }
}
