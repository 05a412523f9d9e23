#![forbid(unsafe_code)]

//! Facilities the dock consumes from the host UI runtime.
//!
//! The dock never walks a render tree, owns a clock or draws into a window.
//! Everything it needs from the outside world goes through these traits:
//!
//! - [`LayoutQuery`] answers geometry questions about laid-out nodes.
//! - [`FrameScheduler`] hands out frame-tick subscriptions and post-layout
//!   callbacks.
//! - [`OverlayLayer`] inserts and removes entries rendered above normal
//!   layout.
//!
//! [`DockHost`] bundles the three so call sites take a single `&mut impl
//! DockHost`.
//!
//! # Failure Modes
//!
//! Every geometry query returns `Option`. `None` means "no geometry yet"
//! (first layout pass, detached node) and callers must treat it as a no-op
//! for the current frame.

use crate::geometry::{Offset, Size};

/// Identifier for a laid-out element known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a node id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Geometry queries over the host's layout tree.
pub trait LayoutQuery {
    /// Laid-out size of `node`.
    fn size(&self, node: NodeId) -> Option<Size>;

    /// Top-left of `node` relative to `ancestor`, accumulated over every
    /// layout parent in between.
    fn ancestor_layout_offset(&self, node: NodeId, ancestor: NodeId) -> Option<Offset>;

    /// Convert a point in `node`'s local space to global coordinates.
    fn local_to_global(&self, node: NodeId, local: Offset) -> Option<Offset>;

    /// Convert a global point into `node`'s local space.
    fn global_to_local(&self, node: NodeId, global: Offset) -> Option<Offset>;
}

/// Handle for an active frame-tick subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameSubscription(pub u64);

/// Frame clock access.
///
/// While a subscription is held the host calls back into its owner once per
/// frame with the elapsed time. Dropping the subscription without calling
/// [`unsubscribe_frames`](Self::unsubscribe_frames) leaks it on the host
/// side.
pub trait FrameScheduler {
    /// Start receiving frame ticks.
    fn subscribe_frames(&mut self) -> FrameSubscription;

    /// Stop receiving frame ticks for `subscription`.
    fn unsubscribe_frames(&mut self, subscription: FrameSubscription);

    /// Ask to be called back once after the current frame's layout pass,
    /// on behalf of `node`.
    fn schedule_after_layout(&mut self, node: NodeId);
}

/// Identifier for an entry in the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayEntryId(pub u64);

/// The application-wide layer drawn above normal layout.
pub trait OverlayLayer {
    /// Insert a new entry and return its id.
    fn insert_overlay(&mut self) -> OverlayEntryId;

    /// Remove an entry. Returns `false` if it was not present.
    fn remove_overlay(&mut self, entry: OverlayEntryId) -> bool;
}

/// Everything the dock needs from its host.
pub trait DockHost: LayoutQuery + FrameScheduler + OverlayLayer {}

impl<H> DockHost for H where H: LayoutQuery + FrameScheduler + OverlayLayer {}
