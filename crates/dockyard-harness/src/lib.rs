#![forbid(unsafe_code)]

//! Headless driver for dock scenarios.
//!
//! [`Harness`] owns a [`Dock`] and a [`HeadlessHost`] and plays the part of
//! the UI toolkit: it delivers drag and drop events, runs a layout pass after
//! each one, answers post-layout requests and ticks the frame clock while the
//! dock holds a subscription. Every step is recorded as a [`FrameRecord`].
//!
//! # Quick Start
//!
//! ```
//! use dockyard_harness::Harness;
//! use dockyard_widgets::Dock;
//!
//! let dock = Dock::new(['A', 'B', 'C', 'D', 'E'], |c: &char| *c).unwrap();
//! let mut h = Harness::new(dock);
//! h.start_drag(&'A');
//! h.hover(&'C', 'A');
//! h.accept(&'C', 'A');
//! h.complete(&'A');
//! h.settle();
//! assert_eq!(h.dock().items(), &['B', 'C', 'A', 'D', 'E']);
//! ```

pub mod host;
pub mod trace;

use std::time::Duration;

use dockyard_core::event::{DragEvent, DropEvent, Velocity};
use dockyard_core::geometry::Offset;
use dockyard_widgets::{Dock, DockItem, RowLayout};

pub use host::HeadlessHost;
pub use trace::{FrameRecord, trace_to_jsonl};

/// One 60 Hz frame.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Upper bound on frames [`Harness::settle`] will run.
pub const MAX_SETTLE_FRAMES: usize = 600;

/// Drives a dock through a headless host.
pub struct Harness<T, V> {
    dock: Dock<T, V>,
    host: HeadlessHost,
    elapsed: Duration,
    records: Vec<FrameRecord>,
}

impl<T: DockItem, V> Harness<T, V> {
    /// Harness with the dock at the global origin.
    #[must_use]
    pub fn new(dock: Dock<T, V>) -> Self {
        let layout = RowLayout::new(Offset::ZERO, dock.config().slot);
        Self::with_layout(dock, layout)
    }

    /// Harness with an explicit row layout.
    #[must_use]
    pub fn with_layout(dock: Dock<T, V>, layout: RowLayout) -> Self {
        let mut host = HeadlessHost::new(layout);
        host.sync_layout(&dock);
        Self {
            dock,
            host,
            elapsed: Duration::ZERO,
            records: Vec::new(),
        }
    }

    /// The dock under test.
    #[must_use]
    pub fn dock(&self) -> &Dock<T, V> {
        &self.dock
    }

    /// Mutable access to the dock.
    pub fn dock_mut(&mut self) -> &mut Dock<T, V> {
        &mut self.dock
    }

    /// The headless host.
    #[must_use]
    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut HeadlessHost {
        &mut self.host
    }

    /// Steps recorded so far.
    #[must_use]
    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    /// The recorded steps as JSON lines.
    #[must_use]
    pub fn trace_jsonl(&self) -> String {
        trace_to_jsonl(&self.records)
    }

    /// Global top-left of `item`'s slot.
    #[must_use]
    pub fn slot_origin(&self, item: &T) -> Option<Offset> {
        let node = self.dock.slot_node(item)?;
        self.host.slot_rect(node).map(|rect| rect.origin())
    }

    // -----------------------------------------------------------------------
    // Drag source
    // -----------------------------------------------------------------------

    /// Press on `item` and move past the drag slop.
    pub fn start_drag(&mut self, item: &T) {
        let pointer = self.slot_origin(item).unwrap_or(Offset::ZERO);
        self.drag(item, DragEvent::Started { pointer }, "start");
    }

    /// Move the pointer while dragging `item`.
    pub fn move_drag(&mut self, item: &T, pointer: Offset, delta: Offset) {
        self.drag(item, DragEvent::Updated { pointer, delta }, "move");
    }

    /// Release `item`; `offset` is the global top-left of the drag visual.
    pub fn release(&mut self, item: &T, offset: Option<Offset>) {
        let event = DragEvent::Ended {
            velocity: Velocity::ZERO,
            offset,
        };
        self.drag(item, event, "release");
    }

    /// A drop target accepted `item`.
    pub fn complete(&mut self, item: &T) {
        self.drag(item, DragEvent::Completed, "complete");
    }

    /// Abort the drag of `item`.
    pub fn cancel(&mut self, item: &T) {
        self.drag(item, DragEvent::Cancelled, "cancel");
    }

    // -----------------------------------------------------------------------
    // Drop target
    // -----------------------------------------------------------------------

    /// Hover `candidate` over `target`'s slot.
    pub fn hover(&mut self, target: &T, candidate: T) {
        let event = DropEvent::Hover {
            candidate: Some(candidate),
        };
        self.drop_event(target, event, "hover");
    }

    /// Hover over `target`'s slot with no acceptable data.
    pub fn hover_empty(&mut self, target: &T) {
        self.drop_event(target, DropEvent::Hover { candidate: None }, "hover_empty");
    }

    /// Drop `payload` on `target`'s slot.
    pub fn accept(&mut self, target: &T, payload: T) {
        self.drop_event(target, DropEvent::Accept { payload }, "accept");
    }

    /// Withdraw the candidate from `target`'s slot.
    pub fn leave(&mut self, target: &T, payload: Option<T>) {
        self.drop_event(target, DropEvent::Leave { payload }, "leave");
    }

    /// Full accepted drop: hover, accept on `target`, then complete.
    pub fn drop_on(&mut self, source: &T, target: &T) {
        self.hover(target, source.clone());
        self.accept(target, source.clone());
        self.complete(source);
    }

    // -----------------------------------------------------------------------
    // Frame clock
    // -----------------------------------------------------------------------

    /// Advance simulated time by `dt`. The dock is only ticked while it
    /// holds a frame subscription, as a real host would.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        if self.dock.subscription().is_some() {
            self.dock.tick(dt, &mut self.host);
        }
        self.layout_pass();
        self.record("tick");
    }

    /// Tick whole frames until nothing animates. Returns the frame count.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.dock.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.advance(FRAME);
            frames += 1;
        }
        frames
    }

    /// Unmount the dock and hand back the host for inspection.
    pub fn unmount(self) -> HeadlessHost {
        let Self { dock, mut host, .. } = self;
        dock.unmount(&mut host);
        host
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn drag(&mut self, item: &T, event: DragEvent, step: &'static str) {
        self.dock.handle_drag(item, event, &mut self.host);
        self.layout_pass();
        self.record(step);
    }

    fn drop_event(&mut self, target: &T, event: DropEvent<T>, step: &'static str) {
        self.dock.handle_drop(target, event, &mut self.host);
        self.layout_pass();
        self.record(step);
    }

    fn layout_pass(&mut self) {
        self.host.sync_layout(&self.dock);
        if !self.host.take_after_layout().is_empty() {
            self.dock.run_after_layout(&mut self.host);
        }
    }

    fn record(&mut self, step: &'static str) {
        let dock = &self.dock;
        let shifted = dock
            .items()
            .iter()
            .filter_map(|item| dock.item_state(item))
            .filter(|state| state.shift_offset != Offset::ZERO)
            .count();
        self.records.push(FrameRecord {
            frame: self.records.len() as u64,
            step,
            elapsed_us: self.elapsed.as_micros() as u64,
            order: dock.items().iter().map(|item| format!("{item:?}")).collect(),
            active: dock.active_drag().map(|item| format!("{item:?}")),
            session_active: dock.session().is_active(),
            shifted,
            flights: dock.flights().len(),
            subscriptions: self.host.active_subscriptions(),
            overlays: self.host.live_overlays(),
            revision: dock.revision(),
        });
    }
}
