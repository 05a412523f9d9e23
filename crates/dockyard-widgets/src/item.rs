#![forbid(unsafe_code)]

//! Per-item drag controller.
//!
//! A [`DockItemController`] owns one item's visual state and plays two roles:
//!
//! - **Drag source**, while its own item is dragged. It hides the item,
//!   anchors the shared [`DragSessionHandle`] at the slot's position and, on
//!   release, asks for a flight back to wherever the session points.
//! - **Drop target**, while another item hovers over its slot. It slides
//!   its own item one slot width towards the vacated position to preview the
//!   drop, and asks for a reorder on accept (and, by default, on leave).
//!
//! Controllers never touch the item order. Anything that has to happen
//! outside the controller comes back as an [`ItemEffect`].
//!
//! # State Machine
//!
//! ```text
//! Idle ──start──▶ Dragging ──ended (flight)──▶ Settling ──landed──▶ Idle
//!                    │
//!                    └──ended / completed / cancelled──▶ Idle
//!
//! Idle ◀──hover(None) / accept / leave──▶ HoverShifting ◀──hover(Some)── Idle
//! ```
//!
//! A `Settling` item still shifts when hovered; it moves to `HoverShifting`
//! if the hover is still there when its flight lands.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|----------|
//! | Slot has no geometry | First layout pass | Session untouched, anchoring retried on next update |
//! | Session unset during hover | Drag not anchored yet | Shift stays at zero |
//! | Release without offset | Pointer left tracked region | No flight, item shown immediately |

use std::time::Duration;

use dockyard_core::animation::{EasingFn, OffsetTween};
use dockyard_core::event::{DragEvent, DropEvent};
use dockyard_core::geometry::Offset;
use dockyard_core::host::{LayoutQuery, NodeId};

use crate::DockItem;
use crate::config::DockConfig;
use crate::session::DragSessionHandle;

/// Where an item is in its drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemPhase {
    /// At rest in its slot.
    #[default]
    Idle,
    /// Being dragged.
    Dragging,
    /// Released; a flight is carrying its ghost back to the row.
    Settling,
    /// Another item is hovering over this slot.
    HoverShifting,
}

/// Visual state the host renders for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisualState {
    /// Whether this item is the drag source.
    pub is_dragging: bool,
    /// Whether the slot shows the item (`false` shows a placeholder).
    pub is_visible: bool,
    /// Current neighbour-shift translation.
    pub shift_offset: Offset,
}

/// Work a controller hands back to its dock.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEffect<T> {
    /// Ask the host for a post-layout callback so the drag can be anchored.
    AnchorAfterLayout,
    /// Move `moved` to `target`'s position.
    Reorder {
        /// Item to move.
        moved: T,
        /// Item whose index it takes.
        target: T,
    },
    /// Fly the item's ghost from `begin` to `end`, both global.
    SpawnFlight {
        /// Release point.
        begin: Offset,
        /// Destination slot.
        end: Offset,
    },
}

/// Collapse a raw displacement to a one-slot horizontal shift.
///
/// The sign of `raw.dx` picks the direction; the magnitude is always exactly
/// `slot_width`. The vertical component passes through (it is zero for
/// slots in the same row). A non-finite `raw` means no shift.
#[must_use]
pub fn neighbor_shift(raw: Offset, slot_width: f32) -> Offset {
    if !raw.is_finite() {
        return Offset::ZERO;
    }
    let dx = if raw.dx > 0.0 {
        slot_width
    } else if raw.dx < 0.0 {
        -slot_width
    } else {
        0.0
    };
    Offset::new(dx, raw.dy)
}

#[derive(Debug, Clone)]
struct Hover<T> {
    /// Slot's global top-left, captured on the first hover.
    anchor: Offset,
    candidate: Option<T>,
}

/// Drag controller for one item.
#[derive(Debug)]
pub struct DockItemController<T> {
    item: T,
    slot: NodeId,
    dock: NodeId,
    session: DragSessionHandle,
    phase: ItemPhase,
    visible: bool,
    anchored: bool,
    hover: Option<Hover<T>>,
    shift: OffsetTween,
    shift_target: Offset,
    reorder_on_hover_leave: bool,
}

impl<T: DockItem> DockItemController<T> {
    /// Create a controller for `item`, laid out in `slot` inside `dock`.
    #[must_use]
    pub fn new(
        item: T,
        slot: NodeId,
        dock: NodeId,
        session: DragSessionHandle,
        config: &DockConfig,
    ) -> Self {
        Self {
            item,
            slot,
            dock,
            session,
            phase: ItemPhase::Idle,
            visible: true,
            anchored: false,
            hover: None,
            shift: resting_shift(config.effective_shift_duration(), config.shift_easing),
            shift_target: Offset::ZERO,
            reorder_on_hover_leave: config.reorder_on_hover_leave,
        }
    }

    /// The controlled item.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Layout node of this item's slot.
    #[must_use]
    pub fn slot(&self) -> NodeId {
        self.slot
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ItemPhase {
        self.phase
    }

    /// Whether this item is the drag source.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == ItemPhase::Dragging
    }

    /// Whether the slot shows the item.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the drag has been anchored in the shared session.
    #[must_use]
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Whether a candidate is hovering over this slot.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover
            .as_ref()
            .is_some_and(|hover| hover.candidate.is_some())
    }

    /// Current neighbour-shift translation.
    #[must_use]
    pub fn shift_offset(&self) -> Offset {
        self.shift.current()
    }

    /// Whether the neighbour shift is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.shift.is_complete()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn visual_state(&self) -> ItemVisualState {
        ItemVisualState {
            is_dragging: self.is_dragging(),
            is_visible: self.visible,
            shift_offset: self.shift_offset(),
        }
    }

    // -----------------------------------------------------------------------
    // Drag source
    // -----------------------------------------------------------------------

    /// Handle a drag lifecycle event for this item.
    pub fn on_drag(
        &mut self,
        event: DragEvent,
        layout: &impl LayoutQuery,
    ) -> Option<ItemEffect<T>> {
        match event {
            DragEvent::Started { .. } => {
                if self.phase == ItemPhase::Dragging {
                    return None;
                }
                self.clear_hover();
                self.phase = ItemPhase::Dragging;
                self.visible = false;
                self.anchored = false;
                Some(ItemEffect::AnchorAfterLayout)
            }
            DragEvent::Updated { .. } => {
                if self.phase == ItemPhase::Dragging && !self.anchored {
                    self.anchor(layout);
                }
                None
            }
            DragEvent::Ended { offset, .. } => {
                if self.phase != ItemPhase::Dragging {
                    return None;
                }
                let destination = self.session.delta().finite();
                self.session.reset();
                self.anchored = false;
                match (offset.and_then(Offset::finite), destination) {
                    (Some(begin), Some(end)) => {
                        self.phase = ItemPhase::Settling;
                        Some(ItemEffect::SpawnFlight { begin, end })
                    }
                    _ => {
                        self.phase = ItemPhase::Idle;
                        self.visible = true;
                        None
                    }
                }
            }
            DragEvent::Completed | DragEvent::Cancelled => {
                if self.phase != ItemPhase::Dragging {
                    return None;
                }
                self.session.reset();
                self.anchored = false;
                self.phase = ItemPhase::Idle;
                self.visible = true;
                None
            }
        }
    }

    /// Anchor the shared session at this slot.
    ///
    /// Writes the slot's top-left in dock coordinates as the anchor and the
    /// same point in global coordinates as the delta. Returns `false`, and
    /// writes nothing, when the host cannot resolve either position yet.
    pub fn anchor(&mut self, layout: &impl LayoutQuery) -> bool {
        if self.phase != ItemPhase::Dragging {
            return false;
        }
        if self.anchored {
            return true;
        }
        let Some(position) = layout.ancestor_layout_offset(self.slot, self.dock) else {
            dockyard_core::trace!(slot = self.slot.0, "anchor deferred: slot not laid out");
            return false;
        };
        let Some(global) = layout.local_to_global(self.dock, position) else {
            dockyard_core::trace!(slot = self.slot.0, "anchor deferred: dock not laid out");
            return false;
        };
        self.session.set_anchor(position);
        self.session.set_delta(global);
        self.anchored = true;
        true
    }

    /// The flight spawned on release has landed.
    pub fn flight_landed(&mut self) {
        if self.phase == ItemPhase::Settling {
            self.phase = if self.is_hovered() {
                ItemPhase::HoverShifting
            } else {
                ItemPhase::Idle
            };
        }
        if self.phase != ItemPhase::Dragging {
            self.visible = true;
        }
    }

    // -----------------------------------------------------------------------
    // Drop target
    // -----------------------------------------------------------------------

    /// Handle a drop-target event on this item's slot.
    pub fn on_drop(
        &mut self,
        event: DropEvent<T>,
        layout: &impl LayoutQuery,
    ) -> Option<ItemEffect<T>> {
        match event {
            DropEvent::Hover { candidate: None } => {
                if let Some(hover) = self.hover.as_mut() {
                    hover.candidate = None;
                }
                self.snap_shift();
                if self.phase == ItemPhase::HoverShifting {
                    self.phase = ItemPhase::Idle;
                }
                None
            }
            DropEvent::Hover {
                candidate: Some(candidate),
            } => {
                self.hover_with(candidate, layout);
                None
            }
            DropEvent::Accept { payload } => {
                self.restore_delta();
                self.clear_hover();
                Some(ItemEffect::Reorder {
                    moved: payload,
                    target: self.item.clone(),
                })
            }
            DropEvent::Leave { payload } => {
                self.restore_delta();
                let candidate = self.hover.take().and_then(|hover| hover.candidate);
                self.clear_hover();
                if !self.reorder_on_hover_leave {
                    return None;
                }
                payload.or(candidate).map(|moved| ItemEffect::Reorder {
                    moved,
                    target: self.item.clone(),
                })
            }
        }
    }

    /// Drop hover tracking and snap the shift back to zero.
    pub fn clear_hover(&mut self) {
        self.hover = None;
        self.snap_shift();
        if self.phase == ItemPhase::HoverShifting {
            self.phase = ItemPhase::Idle;
        }
    }

    /// Return to rest: visible, not dragging, not hovered.
    pub fn reset(&mut self) {
        self.clear_hover();
        self.phase = ItemPhase::Idle;
        self.visible = true;
        self.anchored = false;
    }

    /// Advance the neighbour shift by one frame. Returns whether the shift
    /// moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.shift.advance(dt).value().is_some()
    }

    fn hover_with(&mut self, candidate: T, layout: &impl LayoutQuery) {
        if self.phase == ItemPhase::Dragging {
            return;
        }
        let Some(position) = layout.local_to_global(self.slot, Offset::ZERO) else {
            dockyard_core::trace!(slot = self.slot.0, "hover ignored: slot not laid out");
            return;
        };
        let Some(size) = layout.size(self.slot) else {
            dockyard_core::trace!(slot = self.slot.0, "hover ignored: slot has no size");
            return;
        };

        match self.hover.as_mut() {
            Some(hover) => hover.candidate = Some(candidate),
            None => {
                self.hover = Some(Hover {
                    anchor: position,
                    candidate: Some(candidate),
                });
            }
        }
        if self.phase == ItemPhase::Idle {
            self.phase = ItemPhase::HoverShifting;
        }

        let target = neighbor_shift(self.session.delta() - position, size.width);
        if target != self.shift_target {
            self.shift_target = target;
            self.shift.restart(Offset::ZERO, target);
        }
    }

    fn restore_delta(&self) {
        if let Some(hover) = self.hover.as_ref()
            && self.session.is_active()
        {
            self.session.set_delta(hover.anchor);
        }
    }

    fn snap_shift(&mut self) {
        self.shift_target = Offset::ZERO;
        self.shift.restart(Offset::ZERO, Offset::ZERO);
        self.shift.stop();
    }
}

fn resting_shift(duration: Duration, easing: EasingFn) -> OffsetTween {
    let mut tween = OffsetTween::new(Offset::ZERO, Offset::ZERO, duration).easing(easing);
    tween.stop();
    tween
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockyard_core::animation::linear;
    use dockyard_core::event::Velocity;
    use dockyard_core::geometry::Size;

    const DOCK: NodeId = NodeId(0);
    const SLOT_W: f32 = 64.0;
    const ORIGIN: Offset = Offset::new(100.0, 300.0);
    const MS_300: Duration = Duration::from_millis(300);
    const MS_600: Duration = Duration::from_millis(600);

    /// Fixed single-row layout: slot node `n` sits at index `n - 1`.
    struct FixedRow {
        ready: bool,
    }

    impl FixedRow {
        fn ready() -> Self {
            Self { ready: true }
        }

        fn slot_origin(node: NodeId) -> Offset {
            Offset::new((node.0 - 1) as f32 * SLOT_W, 0.0)
        }
    }

    impl LayoutQuery for FixedRow {
        fn size(&self, _node: NodeId) -> Option<Size> {
            self.ready.then_some(Size::new(SLOT_W, SLOT_W))
        }

        fn ancestor_layout_offset(&self, node: NodeId, ancestor: NodeId) -> Option<Offset> {
            (self.ready && ancestor == DOCK).then(|| Self::slot_origin(node))
        }

        fn local_to_global(&self, node: NodeId, local: Offset) -> Option<Offset> {
            if !self.ready {
                return None;
            }
            let base = if node == DOCK {
                ORIGIN
            } else {
                ORIGIN + Self::slot_origin(node)
            };
            Some(base + local)
        }

        fn global_to_local(&self, node: NodeId, global: Offset) -> Option<Offset> {
            let base = self.local_to_global(node, Offset::ZERO)?;
            Some(global - base)
        }
    }

    fn config() -> DockConfig {
        DockConfig::default().with_shift_easing(linear)
    }

    fn controller(
        item: char,
        node: u64,
        session: &DragSessionHandle,
    ) -> DockItemController<char> {
        DockItemController::new(item, NodeId(node), DOCK, session.clone(), &config())
    }

    fn start(c: &mut DockItemController<char>, layout: &FixedRow) -> Option<ItemEffect<char>> {
        c.on_drag(
            DragEvent::Started {
                pointer: Offset::ZERO,
            },
            layout,
        )
    }

    fn update(c: &mut DockItemController<char>, layout: &FixedRow) {
        c.on_drag(
            DragEvent::Updated {
                pointer: Offset::ZERO,
                delta: Offset::new(1.0, 0.0),
            },
            layout,
        );
    }

    fn ended(offset: Option<Offset>) -> DragEvent {
        DragEvent::Ended {
            velocity: Velocity::ZERO,
            offset,
        }
    }

    #[test]
    fn neighbor_shift_is_one_slot_wide() {
        assert_eq!(neighbor_shift(Offset::new(3.0, 0.0), 64.0), Offset::new(64.0, 0.0));
        assert_eq!(
            neighbor_shift(Offset::new(-500.0, 2.0), 64.0),
            Offset::new(-64.0, 2.0)
        );
        assert_eq!(neighbor_shift(Offset::new(0.0, 0.0), 64.0), Offset::ZERO);
        assert_eq!(neighbor_shift(Offset::UNSET, 64.0), Offset::ZERO);
    }

    #[test]
    fn drag_start_hides_item_and_requests_anchor() {
        let session = DragSessionHandle::new();
        let mut a = controller('A', 1, &session);
        let effect = start(&mut a, &FixedRow::ready());
        assert_eq!(effect, Some(ItemEffect::AnchorAfterLayout));
        assert!(a.is_dragging());
        assert!(!a.is_visible());
        assert!(!session.is_active());
    }

    #[test]
    fn anchor_writes_dock_and_global_positions() {
        let session = DragSessionHandle::new();
        let mut b = controller('B', 2, &session);
        let layout = FixedRow::ready();
        start(&mut b, &layout);
        assert!(b.anchor(&layout));
        assert_eq!(session.anchor(), Offset::new(64.0, 0.0));
        assert_eq!(session.delta(), Offset::new(164.0, 300.0));
        assert!(b.is_anchored());
    }

    #[test]
    fn anchor_retries_on_update_when_layout_missing() {
        let session = DragSessionHandle::new();
        let mut a = controller('A', 1, &session);
        let mut layout = FixedRow { ready: false };
        start(&mut a, &layout);
        assert!(!a.anchor(&layout));
        update(&mut a, &layout);
        assert!(!session.is_active());
        assert_eq!(session.revision(), 0);

        layout.ready = true;
        update(&mut a, &layout);
        assert!(a.is_anchored());
        assert_eq!(session.delta(), Offset::new(100.0, 300.0));
    }

    #[test]
    fn release_spawns_flight_to_session_delta() {
        let session = DragSessionHandle::new();
        let mut a = controller('A', 1, &session);
        let layout = FixedRow::ready();
        start(&mut a, &layout);
        a.anchor(&layout);

        let effect = a.on_drag(ended(Some(Offset::new(250.0, 120.0))), &layout);
        assert_eq!(
            effect,
            Some(ItemEffect::SpawnFlight {
                begin: Offset::new(250.0, 120.0),
                end: Offset::new(100.0, 300.0),
            })
        );
        assert!(!session.is_active());
        assert!(!a.is_dragging());
        assert!(!a.is_visible());
        assert_eq!(a.phase(), ItemPhase::Settling);

        a.flight_landed();
        assert!(a.is_visible());
        assert_eq!(a.phase(), ItemPhase::Idle);
    }

    #[test]
    fn release_without_offset_restores_immediately() {
        let session = DragSessionHandle::new();
        let mut a = controller('A', 1, &session);
        let layout = FixedRow::ready();
        start(&mut a, &layout);
        a.anchor(&layout);
        assert_eq!(a.on_drag(ended(None), &layout), None);
        assert!(a.is_visible());
        assert!(!a.is_dragging());
        assert!(!session.is_active());
    }

    #[test]
    fn release_before_anchor_restores_immediately() {
        let session = DragSessionHandle::new();
        let mut a = controller('A', 1, &session);
        let layout = FixedRow::ready();
        start(&mut a, &layout);
        assert_eq!(a.on_drag(ended(Some(Offset::new(5.0, 5.0))), &layout), None);
        assert!(a.is_visible());
    }

    #[test]
    fn completion_and_cancellation_show_item_in_place() {
        let layout = FixedRow::ready();
        for terminal in [DragEvent::Completed, DragEvent::Cancelled] {
            let session = DragSessionHandle::new();
            let mut a = controller('A', 1, &session);
            start(&mut a, &layout);
            a.anchor(&layout);
            assert_eq!(a.on_drag(terminal, &layout), None);
            assert!(a.is_visible());
            assert!(!a.is_dragging());
            assert!(!session.is_active());
        }
    }

    #[test]
    fn terminal_event_without_drag_is_ignored() {
        let session = DragSessionHandle::new();
        let mut a = controller('A', 1, &session);
        assert_eq!(a.on_drag(DragEvent::Cancelled, &FixedRow::ready()), None);
        assert_eq!(a.phase(), ItemPhase::Idle);
    }

    #[test]
    fn hover_shifts_towards_vacated_slot() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        let mut c = controller('C', 3, &session);
        start(&mut a, &layout);
        a.anchor(&layout);

        // A sits left of C, so C slides left.
        c.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        assert!(c.is_hovered());
        assert_eq!(c.phase(), ItemPhase::HoverShifting);
        assert!(c.is_animating());
        assert_eq!(c.shift_offset(), Offset::ZERO);

        c.tick(MS_300);
        assert_eq!(c.shift_offset(), Offset::new(-32.0, 0.0));
        c.tick(MS_300);
        assert_eq!(c.shift_offset(), Offset::new(-64.0, 0.0));
        assert!(!c.is_animating());
    }

    #[test]
    fn hover_left_of_source_shifts_right() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut d = controller('D', 4, &session);
        let mut b = controller('B', 2, &session);
        start(&mut d, &layout);
        d.anchor(&layout);
        b.on_drop(DropEvent::Hover { candidate: Some('D') }, &layout);
        b.tick(MS_600);
        assert_eq!(b.shift_offset(), Offset::new(64.0, 0.0));
    }

    #[test]
    fn repeated_hover_does_not_restart_shift() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        let mut c = controller('C', 3, &session);
        start(&mut a, &layout);
        a.anchor(&layout);
        c.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        c.tick(MS_300);
        c.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        assert_eq!(c.shift_offset(), Offset::new(-32.0, 0.0));
    }

    #[test]
    fn hover_without_candidate_snaps_to_zero() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        let mut c = controller('C', 3, &session);
        start(&mut a, &layout);
        a.anchor(&layout);
        c.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        c.tick(MS_300);
        c.on_drop(DropEvent::Hover { candidate: None }, &layout);
        assert_eq!(c.shift_offset(), Offset::ZERO);
        assert!(!c.is_hovered());
        assert!(!c.is_animating());
    }

    #[test]
    fn hover_before_anchor_does_not_shift() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut c = controller('C', 3, &session);
        c.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        c.tick(MS_600);
        assert_eq!(c.shift_offset(), Offset::ZERO);
    }

    #[test]
    fn accept_restores_pre_hover_anchor_and_reorders() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        let mut c = controller('C', 3, &session);
        start(&mut a, &layout);
        a.anchor(&layout);
        c.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);

        let effect = c.on_drop(DropEvent::Accept { payload: 'A' }, &layout);
        assert_eq!(
            effect,
            Some(ItemEffect::Reorder {
                moved: 'A',
                target: 'C'
            })
        );
        assert_eq!(session.delta(), Offset::new(228.0, 300.0));
        assert!(!c.is_hovered());
        assert_eq!(c.shift_offset(), Offset::ZERO);
    }

    #[test]
    fn leave_reorders_previous_candidate() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        let mut b = controller('B', 2, &session);
        start(&mut a, &layout);
        a.anchor(&layout);
        b.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);

        let effect = b.on_drop(DropEvent::Leave { payload: None }, &layout);
        assert_eq!(
            effect,
            Some(ItemEffect::Reorder {
                moved: 'A',
                target: 'B'
            })
        );
        assert_eq!(session.delta(), Offset::new(164.0, 300.0));
        assert_eq!(b.phase(), ItemPhase::Idle);
    }

    #[test]
    fn leave_without_reorder_when_disabled() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let cfg = config().reorder_on_accept_only();
        let mut a = controller('A', 1, &session);
        let mut b = DockItemController::new('B', NodeId(2), DOCK, session.clone(), &cfg);
        start(&mut a, &layout);
        a.anchor(&layout);
        b.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        assert_eq!(b.on_drop(DropEvent::Leave { payload: Some('A') }, &layout), None);
        assert_eq!(session.delta(), Offset::new(164.0, 300.0));
    }

    #[test]
    fn leave_without_hover_still_reorders_payload() {
        let session = DragSessionHandle::new();
        let mut b = controller('B', 2, &session);
        let effect = b.on_drop(DropEvent::Leave { payload: Some('A') }, &FixedRow::ready());
        assert_eq!(
            effect,
            Some(ItemEffect::Reorder {
                moved: 'A',
                target: 'B'
            })
        );
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn leave_without_hover_or_payload_does_nothing() {
        let session = DragSessionHandle::new();
        let mut b = controller('B', 2, &session);
        let effect = b.on_drop(DropEvent::Leave { payload: None }, &FixedRow::ready());
        assert_eq!(effect, None);
        assert_eq!(b.phase(), ItemPhase::Idle);
    }

    #[test]
    fn settling_item_shifts_when_hovered() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        let mut c = controller('C', 3, &session);
        start(&mut a, &layout);
        a.anchor(&layout);
        a.on_drag(ended(Some(Offset::new(400.0, 100.0))), &layout);
        assert_eq!(a.phase(), ItemPhase::Settling);

        start(&mut c, &layout);
        c.anchor(&layout);
        a.on_drop(DropEvent::Hover { candidate: Some('C') }, &layout);
        assert!(a.is_hovered());
        assert_eq!(a.phase(), ItemPhase::Settling);
        a.tick(MS_600);
        assert_eq!(a.shift_offset(), Offset::new(64.0, 0.0));
        assert!(!a.is_visible());

        a.flight_landed();
        assert!(a.is_visible());
        assert_eq!(a.phase(), ItemPhase::HoverShifting);
        assert_eq!(a.shift_offset(), Offset::new(64.0, 0.0));
    }

    #[test]
    fn dragging_item_ignores_hover_over_itself() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        start(&mut a, &layout);
        a.anchor(&layout);
        a.on_drop(DropEvent::Hover { candidate: Some('A') }, &layout);
        assert!(!a.is_hovered());
        assert_eq!(a.phase(), ItemPhase::Dragging);
    }

    #[test]
    fn reset_returns_to_rest() {
        let session = DragSessionHandle::new();
        let layout = FixedRow::ready();
        let mut a = controller('A', 1, &session);
        start(&mut a, &layout);
        a.reset();
        assert_eq!(
            a.visual_state(),
            ItemVisualState {
                is_dragging: false,
                is_visible: true,
                shift_offset: Offset::ZERO,
            }
        );
    }
}
