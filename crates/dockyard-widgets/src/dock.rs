#![forbid(unsafe_code)]

//! The dock: item order, shared drag session and event routing.
//!
//! [`Dock`] owns the ordered items, one [`DockItemController`] per item, the
//! [`DragSessionHandle`] they share and every [`FlightOverlay`] in the air.
//! The host feeds it drag and drop events plus frame ticks, then renders
//! [`Dock::view`] and [`Dock::overlay_view`].
//!
//! # Invariants
//!
//! 1. Items are unique; the order only changes through [`Dock::reorder`].
//! 2. At most one item is the drag source. When none is, the session is
//!    unset and every neighbour shift is zero.
//! 3. The dock holds a frame subscription exactly while something is
//!    animating.
//! 4. Every order, session or visual change bumps [`Dock::revision`] and
//!    records what changed in [`Dock::take_invalidation`].
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Event for unknown item | Stale host hit-test | Logged at `warn`, ignored |
//! | Second drag while one is active | Multi-pointer input | Logged at `warn`, ignored |
//! | Terminal event after the drag ended | Duplicate delivery | Session reset, otherwise ignored |
//! | Reorder with a non-member | Payload from another dock | [`DockError::NotAMember`], order untouched |

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use dockyard_core::event::{DragEvent, DropEvent, Invalidation};
use dockyard_core::geometry::Offset;
use dockyard_core::host::{DockHost, FrameSubscription, NodeId};

use crate::DockItem;
use crate::config::DockConfig;
use crate::flight::FlightOverlay;
use crate::item::{DockItemController, ItemEffect, ItemVisualState};
use crate::session::DragSessionHandle;
use crate::view::{OverlayView, SlotContent, SlotView};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from dock construction and reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// The item is not in this dock.
    NotAMember {
        /// Debug rendering of the item.
        item: String,
    },
    /// The item was given more than once.
    DuplicateItem {
        /// Debug rendering of the item.
        item: String,
    },
}

impl DockError {
    fn not_a_member(item: &impl fmt::Debug) -> Self {
        Self::NotAMember {
            item: format!("{item:?}"),
        }
    }
}

impl fmt::Display for DockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMember { item } => write!(f, "item {item} is not in the dock"),
            Self::DuplicateItem { item } => write!(f, "item {item} appears more than once"),
        }
    }
}

impl std::error::Error for DockError {}

// ---------------------------------------------------------------------------
// Dock
// ---------------------------------------------------------------------------

type RenderFn<T, V> = Box<dyn Fn(&T) -> V>;

/// A horizontal dock of reorderable items rendered as `V`.
pub struct Dock<T, V> {
    node: NodeId,
    items: Vec<T>,
    controllers: HashMap<T, DockItemController<T>>,
    render: RenderFn<T, V>,
    config: DockConfig,
    session: DragSessionHandle,
    flights: Vec<FlightOverlay<T>>,
    landed: Rc<RefCell<Vec<T>>>,
    subscription: Option<FrameSubscription>,
    active: Option<T>,
    revision: u64,
    seen_session: u64,
    invalidation: Invalidation,
}

impl<T: fmt::Debug, V> fmt::Debug for Dock<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dock")
            .field("node", &self.node)
            .field("items", &self.items)
            .field("config", &self.config)
            .field("session", &self.session)
            .field("flights", &self.flights.len())
            .field("subscription", &self.subscription)
            .field("active", &self.active)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<T: DockItem, V> Dock<T, V> {
    /// Create a dock over `items` (left to right), rendering each through
    /// `render`.
    ///
    /// The dock is laid out as node `0`; the slot of the item initially at
    /// index `i` is node `i + 1` and keeps that node across reorders.
    pub fn new(
        items: impl IntoIterator<Item = T>,
        render: impl Fn(&T) -> V + 'static,
    ) -> Result<Self, DockError> {
        let items: Vec<T> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item) {
                return Err(DockError::DuplicateItem {
                    item: format!("{item:?}"),
                });
            }
        }

        let node = NodeId::new(0);
        let config = DockConfig::default();
        let session = DragSessionHandle::new();
        let controllers = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let slot = NodeId::new(index as u64 + 1);
                let controller =
                    DockItemController::new(item.clone(), slot, node, session.clone(), &config);
                (item.clone(), controller)
            })
            .collect();

        Ok(Self {
            node,
            items,
            controllers,
            render: Box::new(render),
            config,
            session,
            flights: Vec::new(),
            landed: Rc::new(RefCell::new(Vec::new())),
            subscription: None,
            active: None,
            revision: 0,
            seen_session: 0,
            invalidation: Invalidation::empty(),
        })
    }

    /// Replace the configuration (builder). Call before the first event.
    #[must_use]
    pub fn with_config(mut self, config: DockConfig) -> Self {
        self.config = config;
        for controller in self.controllers.values_mut() {
            *controller = DockItemController::new(
                controller.item().clone(),
                controller.slot(),
                self.node,
                self.session.clone(),
                &config,
            );
        }
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Layout node of the dock itself.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Items in slot order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the dock has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of `item` in the row.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// The shared drag session.
    #[must_use]
    pub fn session(&self) -> &DragSessionHandle {
        &self.session
    }

    /// Visual state of `item`.
    #[must_use]
    pub fn item_state(&self, item: &T) -> Option<ItemVisualState> {
        self.controllers.get(item).map(DockItemController::visual_state)
    }

    /// Controller of `item`.
    #[must_use]
    pub fn controller(&self, item: &T) -> Option<&DockItemController<T>> {
        self.controllers.get(item)
    }

    /// Layout node of `item`'s slot.
    #[must_use]
    pub fn slot_node(&self, item: &T) -> Option<NodeId> {
        self.controllers.get(item).map(DockItemController::slot)
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<&T> {
        self.active.as_ref()
    }

    /// Flights currently in the overlay layer.
    #[must_use]
    pub fn flights(&self) -> &[FlightOverlay<T>] {
        &self.flights
    }

    /// The frame subscription held while animating.
    #[must_use]
    pub fn subscription(&self) -> Option<FrameSubscription> {
        self.subscription
    }

    /// Whether any shift or flight is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.flights.is_empty() || self.controllers.values().any(|c| c.is_animating())
    }

    /// Change counter; the host re-renders when it moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drain the change flags accumulated since the last call.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Move `moved` to the index `target` occupies now.
    ///
    /// `target`'s index is taken before `moved` is removed, so moving right
    /// lands `moved` just after `target` and moving left lands it just
    /// before. `moved == target` is a no-op.
    pub fn reorder(&mut self, moved: &T, target: &T) -> Result<(), DockError> {
        let target_index = self
            .index_of(target)
            .ok_or_else(|| DockError::not_a_member(target))?;
        let moved_index = self
            .index_of(moved)
            .ok_or_else(|| DockError::not_a_member(moved))?;
        if moved_index == target_index {
            return Ok(());
        }

        let item = self.items.remove(moved_index);
        self.items.insert(target_index, item);
        dockyard_core::debug!(
            moved = ?moved,
            from = moved_index,
            to = target_index,
            "dock reordered"
        );
        self.mark(Invalidation::ORDER);
        Ok(())
    }

    /// Set the shared anchor offset.
    pub fn set_drag_anchor(&mut self, offset: Offset) {
        self.session.set_anchor(offset);
        self.observe_session();
    }

    /// Set the shared delta offset.
    pub fn set_drag_delta(&mut self, offset: Offset) {
        self.session.set_delta(offset);
        self.observe_session();
    }

    // -----------------------------------------------------------------------
    // Host entry points
    // -----------------------------------------------------------------------

    /// Route a drag lifecycle event for `source`.
    pub fn handle_drag<H: DockHost>(&mut self, source: &T, event: DragEvent, host: &mut H) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dock_drag",
            item = ?source,
            event = drag_event_name(&event)
        )
        .entered();

        if !self.controllers.contains_key(source) {
            dockyard_core::warn!(item = ?source, "drag event for an item not in the dock");
            return;
        }

        match event {
            DragEvent::Started { .. } => self.start_drag(source, event, host),
            DragEvent::Updated { .. } => {
                if self.active.as_ref() == Some(source) {
                    self.route_drag(source, event, host);
                }
            }
            DragEvent::Ended { .. } | DragEvent::Completed | DragEvent::Cancelled => {
                self.finish_drag(source, event, host);
            }
        }
        self.sync(host);
    }

    /// Route a drop-target event for `target`'s slot.
    pub fn handle_drop<H: DockHost>(&mut self, target: &T, event: DropEvent<T>, host: &mut H) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dock_drop",
            item = ?target,
            event = drop_event_name(&event)
        )
        .entered();

        if self.active.is_none() && !matches!(event, DropEvent::Accept { .. }) {
            dockyard_core::trace!(item = ?target, "drop event outside a drag ignored");
            return;
        }
        let Some(controller) = self.controllers.get_mut(target) else {
            dockyard_core::warn!(item = ?target, "drop event for an item not in the dock");
            return;
        };

        let effect = controller.on_drop(event, &*host);
        self.mark(Invalidation::VISUALS);
        if let Some(effect) = effect {
            self.apply(target, effect, host);
        }
        self.sync(host);
    }

    /// Post-layout callback requested on drag start.
    pub fn run_after_layout<H: DockHost>(&mut self, host: &mut H) {
        if let Some(active) = self.active.clone()
            && let Some(controller) = self.controllers.get_mut(&active)
            && !controller.is_anchored()
            && !controller.anchor(&*host)
        {
            dockyard_core::trace!(item = ?active, "post-layout anchor deferred");
        }
        self.sync(host);
    }

    /// Advance every animation by one frame.
    pub fn tick<H: DockHost>(&mut self, dt: Duration, host: &mut H) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dock_tick",
            dt_us = dt.as_micros() as u64,
            flights = self.flights.len()
        )
        .entered();

        let mut shifted = false;
        for controller in self.controllers.values_mut() {
            shifted |= controller.tick(dt);
        }
        if shifted {
            self.mark(Invalidation::VISUALS);
        }

        for flight in &mut self.flights {
            flight.tick(dt, &mut *host);
        }
        if !self.flights.is_empty() {
            self.mark(Invalidation::OVERLAY);
        }
        self.flights.retain(|flight| !flight.is_landed());
        let landed = std::mem::take(&mut *self.landed.borrow_mut());
        for item in landed {
            dockyard_core::debug!(item = ?item, "flight landed");
            if let Some(controller) = self.controllers.get_mut(&item) {
                controller.flight_landed();
            }
            self.mark(Invalidation::VISUALS);
        }

        self.sync(host);
    }

    /// Tear the dock down: remove every overlay entry, release the frame
    /// subscription and reset the session.
    pub fn unmount<H: DockHost>(mut self, host: &mut H) {
        for flight in &mut self.flights {
            flight.teardown(&mut *host);
        }
        self.flights.clear();
        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe_frames(subscription);
        }
        for controller in self.controllers.values_mut() {
            controller.reset();
        }
        self.active = None;
        self.session.reset();
        dockyard_core::debug!(items = self.items.len(), "dock unmounted");
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Slots in row order.
    #[must_use]
    pub fn view(&self) -> Vec<SlotView<V>> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let controller = self.controllers.get(item)?;
                let content = if controller.is_visible() {
                    SlotContent::Item((self.render)(item))
                } else {
                    SlotContent::Placeholder
                };
                Some(SlotView {
                    node: controller.slot(),
                    index,
                    content,
                    size: self.config.slot.content_size(),
                    margin: self.config.slot.margin,
                    translation: controller.shift_offset(),
                    is_dragging: controller.is_dragging(),
                })
            })
            .collect()
    }

    /// Flight ghosts for the overlay layer.
    #[must_use]
    pub fn overlay_view(&self) -> Vec<OverlayView<V>> {
        self.flights
            .iter()
            .filter_map(|flight| {
                Some(OverlayView {
                    entry: flight.entry()?,
                    ghost: (self.render)(flight.item()),
                    position: flight.position(),
                    placeholder: flight.placeholder(),
                })
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn start_drag<H: DockHost>(&mut self, source: &T, event: DragEvent, host: &mut H) {
        if let Some(active) = self.active.as_ref() {
            if active != source {
                dockyard_core::warn!(
                    item = ?source,
                    active = ?active,
                    "drag start ignored: another item is being dragged"
                );
            }
            return;
        }

        let before = self.flights.len();
        self.flights.retain_mut(|flight| {
            if flight.item() == source {
                flight.teardown(&mut *host);
                false
            } else {
                true
            }
        });
        if self.flights.len() != before {
            self.mark(Invalidation::OVERLAY);
        }

        dockyard_core::debug!(item = ?source, "drag started");
        self.active = Some(source.clone());
        self.route_drag(source, event, host);
    }

    fn finish_drag<H: DockHost>(&mut self, source: &T, event: DragEvent, host: &mut H) {
        match self.active.as_ref() {
            Some(active) if active == source => {}
            Some(_) => {
                dockyard_core::trace!(item = ?source, "terminal event for inactive item ignored");
                return;
            }
            None => {
                self.session.reset();
                return;
            }
        }

        dockyard_core::debug!(item = ?source, "drag finished");
        self.active = None;
        self.route_drag(source, event, host);
        self.session.reset();
        for controller in self.controllers.values_mut() {
            controller.clear_hover();
        }
        self.mark(Invalidation::VISUALS);
    }

    fn route_drag<H: DockHost>(&mut self, source: &T, event: DragEvent, host: &mut H) {
        let Some(controller) = self.controllers.get_mut(source) else {
            return;
        };
        let effect = controller.on_drag(event, &*host);
        self.mark(Invalidation::VISUALS);
        if let Some(effect) = effect {
            self.apply(source, effect, host);
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn apply<H: DockHost>(&mut self, origin: &T, effect: ItemEffect<T>, host: &mut H) {
        match effect {
            ItemEffect::AnchorAfterLayout => host.schedule_after_layout(self.node),
            ItemEffect::Reorder { moved, target } => {
                if let Err(err) = self.reorder(&moved, &target) {
                    dockyard_core::warn!(error = %err, "reorder rejected");
                }
            }
            ItemEffect::SpawnFlight { begin, end } => {
                let landed = Rc::clone(&self.landed);
                let item = origin.clone();
                let flight = FlightOverlay::spawn(origin.clone(), begin, end, &self.config, host)
                    .on_landed(move || landed.borrow_mut().push(item.clone()));
                self.flights.push(flight);
                self.mark(Invalidation::OVERLAY);
            }
        }
    }

    fn sync<H: DockHost>(&mut self, host: &mut H) {
        match (self.is_animating(), self.subscription) {
            (true, None) => {
                self.subscription = Some(host.subscribe_frames());
                dockyard_core::trace!("frame subscription acquired");
            }
            (false, Some(subscription)) => {
                host.unsubscribe_frames(subscription);
                self.subscription = None;
                dockyard_core::trace!("frame subscription released");
            }
            _ => {}
        }
        self.observe_session();
    }

    fn observe_session(&mut self) {
        let revision = self.session.revision();
        if revision != self.seen_session {
            self.seen_session = revision;
            self.mark(Invalidation::SESSION);
        }
    }

    fn mark(&mut self, flags: Invalidation) {
        self.invalidation |= flags;
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(feature = "tracing")]
fn drag_event_name(event: &DragEvent) -> &'static str {
    match event {
        DragEvent::Started { .. } => "started",
        DragEvent::Updated { .. } => "updated",
        DragEvent::Ended { .. } => "ended",
        DragEvent::Completed => "completed",
        DragEvent::Cancelled => "cancelled",
    }
}

#[cfg(feature = "tracing")]
fn drop_event_name<T>(event: &DropEvent<T>) -> &'static str {
    match event {
        DropEvent::Hover { candidate: Some(_) } => "hover",
        DropEvent::Hover { candidate: None } => "hover_empty",
        DropEvent::Accept { .. } => "accept",
        DropEvent::Leave { .. } => "leave",
    }
}
