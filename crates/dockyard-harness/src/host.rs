#![forbid(unsafe_code)]

//! Headless host runtime.
//!
//! [`HeadlessHost`] implements every host trait over a [`RowLayout`]: slots
//! sit left to right in the dock's current item order, frame subscriptions
//! and overlay entries are plain id sets, and post-layout requests queue up
//! until the driver drains them.

use std::collections::{BTreeSet, HashMap};

use dockyard_core::geometry::{Offset, Rect, Size};
use dockyard_core::host::{
    FrameScheduler, FrameSubscription, LayoutQuery, NodeId, OverlayEntryId, OverlayLayer,
};
use dockyard_widgets::{Dock, DockItem, RowLayout};

/// In-memory host for driving a dock without a UI toolkit.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    layout: RowLayout,
    dock: NodeId,
    slots: HashMap<NodeId, usize>,
    count: usize,
    layout_ready: bool,
    next_id: u64,
    frames: BTreeSet<FrameSubscription>,
    overlays: BTreeSet<OverlayEntryId>,
    after_layout: Vec<NodeId>,
    subscriptions_total: u64,
    overlays_total: u64,
}

impl HeadlessHost {
    /// A host laying slots out with `layout`, with no dock synced yet.
    #[must_use]
    pub fn new(layout: RowLayout) -> Self {
        Self {
            layout,
            dock: NodeId::new(0),
            slots: HashMap::new(),
            count: 0,
            layout_ready: true,
            next_id: 0,
            frames: BTreeSet::new(),
            overlays: BTreeSet::new(),
            after_layout: Vec::new(),
            subscriptions_total: 0,
            overlays_total: 0,
        }
    }

    /// Run a layout pass: place every slot at its item's current index.
    pub fn sync_layout<T: DockItem, V>(&mut self, dock: &Dock<T, V>) {
        self.dock = dock.node();
        self.count = dock.len();
        self.slots = dock
            .items()
            .iter()
            .enumerate()
            .filter_map(|(index, item)| Some((dock.slot_node(item)?, index)))
            .collect();
    }

    /// Simulate the first layout pass (`false`): every geometry query fails.
    pub fn set_layout_ready(&mut self, ready: bool) {
        self.layout_ready = ready;
    }

    /// Whether geometry queries succeed.
    #[must_use]
    pub fn is_layout_ready(&self) -> bool {
        self.layout_ready
    }

    /// The row layout in use.
    #[must_use]
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Global outer rect of `node`'s slot.
    #[must_use]
    pub fn slot_rect(&self, node: NodeId) -> Option<Rect> {
        if !self.layout_ready {
            return None;
        }
        self.slots.get(&node).map(|&index| self.layout.slot_rect(index))
    }

    /// Slot node under a global point.
    #[must_use]
    pub fn hit_test(&self, point: Offset) -> Option<NodeId> {
        let index = self.layout.index_at(point, self.count)?;
        self.slots
            .iter()
            .find_map(|(node, &i)| (i == index).then_some(*node))
    }

    /// Frame subscriptions currently held.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.frames.len()
    }

    /// Frame subscriptions ever handed out.
    #[must_use]
    pub fn subscriptions_total(&self) -> u64 {
        self.subscriptions_total
    }

    /// Overlay entries currently present.
    #[must_use]
    pub fn live_overlays(&self) -> usize {
        self.overlays.len()
    }

    /// Overlay entries ever inserted.
    #[must_use]
    pub fn overlays_total(&self) -> u64 {
        self.overlays_total
    }

    /// Whether a post-layout callback is queued.
    #[must_use]
    pub fn has_pending_after_layout(&self) -> bool {
        !self.after_layout.is_empty()
    }

    /// Drain queued post-layout requests.
    pub fn take_after_layout(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.after_layout)
    }

    fn origin_of(&self, node: NodeId) -> Option<Offset> {
        if !self.layout_ready {
            return None;
        }
        if node == self.dock {
            return Some(self.layout.origin);
        }
        self.slot_rect(node).map(|rect| rect.origin())
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl LayoutQuery for HeadlessHost {
    fn size(&self, node: NodeId) -> Option<Size> {
        if !self.layout_ready {
            return None;
        }
        if node == self.dock {
            return Some(self.layout.dock_size(self.count));
        }
        self.slot_rect(node).map(|rect| rect.size())
    }

    fn ancestor_layout_offset(&self, node: NodeId, ancestor: NodeId) -> Option<Offset> {
        let node_origin = self.origin_of(node)?;
        let ancestor_origin = self.origin_of(ancestor)?;
        Some(node_origin - ancestor_origin)
    }

    fn local_to_global(&self, node: NodeId, local: Offset) -> Option<Offset> {
        Some(self.origin_of(node)? + local)
    }

    fn global_to_local(&self, node: NodeId, global: Offset) -> Option<Offset> {
        Some(global - self.origin_of(node)?)
    }
}

impl FrameScheduler for HeadlessHost {
    fn subscribe_frames(&mut self) -> FrameSubscription {
        let subscription = FrameSubscription(self.next());
        self.frames.insert(subscription);
        self.subscriptions_total += 1;
        subscription
    }

    fn unsubscribe_frames(&mut self, subscription: FrameSubscription) {
        self.frames.remove(&subscription);
    }

    fn schedule_after_layout(&mut self, node: NodeId) {
        self.after_layout.push(node);
    }
}

impl OverlayLayer for HeadlessHost {
    fn insert_overlay(&mut self) -> OverlayEntryId {
        let entry = OverlayEntryId(self.next());
        self.overlays.insert(entry);
        self.overlays_total += 1;
        entry
    }

    fn remove_overlay(&mut self, entry: OverlayEntryId) -> bool {
        self.overlays.remove(&entry)
    }
}
