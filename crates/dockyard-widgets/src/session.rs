#![forbid(unsafe_code)]

//! Shared drag session.
//!
//! One [`DragSession`] exists per dock. The item being dragged writes it,
//! every other item reads it to work out which way to shift. It is handed to
//! each controller as a [`DragSessionHandle`] rather than living in a global,
//! so a controller can be exercised against a session of its own.
//!
//! # Invariants
//!
//! 1. Both offsets are [`Offset::UNSET`] exactly when no drag is anchored.
//! 2. Every write that changes the session bumps [`DragSession::revision`].

use std::cell::Cell;
use std::rc::Rc;

use dockyard_core::geometry::Offset;

/// Snapshot of the shared drag coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// The dragged item's pre-drag top-left, in dock coordinates.
    pub anchor_offset: Offset,
    /// The same point in global coordinates, moved by drop targets on
    /// accept and leave.
    pub delta_offset: Offset,
    /// Write counter.
    pub revision: u64,
}

impl Default for DragSession {
    fn default() -> Self {
        Self {
            anchor_offset: Offset::UNSET,
            delta_offset: Offset::UNSET,
            revision: 0,
        }
    }
}

impl DragSession {
    /// Whether a drag has anchored the session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.anchor_offset.is_unset() || !self.delta_offset.is_unset()
    }
}

/// Cheaply cloneable handle to a dock's [`DragSession`].
#[derive(Debug, Clone, Default)]
pub struct DragSessionHandle(Rc<Cell<DragSession>>);

impl DragSessionHandle {
    /// A fresh, unset session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn get(&self) -> DragSession {
        self.0.get()
    }

    /// Current anchor offset.
    #[must_use]
    pub fn anchor(&self) -> Offset {
        self.0.get().anchor_offset
    }

    /// Current delta offset.
    #[must_use]
    pub fn delta(&self) -> Offset {
        self.0.get().delta_offset
    }

    /// Current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.0.get().revision
    }

    /// Whether a drag has anchored the session.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.0.get().is_active()
    }

    /// Set the anchor offset.
    pub fn set_anchor(&self, offset: Offset) {
        self.update(|s| s.anchor_offset = offset);
    }

    /// Set the delta offset.
    pub fn set_delta(&self, offset: Offset) {
        self.update(|s| s.delta_offset = offset);
    }

    /// Return both offsets to the unset sentinel.
    pub fn reset(&self) {
        self.update(|s| {
            s.anchor_offset = Offset::UNSET;
            s.delta_offset = Offset::UNSET;
        });
    }

    /// Whether `other` refers to the same session.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn update(&self, f: impl FnOnce(&mut DragSession)) {
        let before = self.0.get();
        let mut after = before;
        f(&mut after);
        if after.anchor_offset != before.anchor_offset
            || after.delta_offset != before.delta_offset
        {
            after.revision = before.revision.wrapping_add(1);
            self.0.set(after);
        }
    }
}
