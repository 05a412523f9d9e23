#![forbid(unsafe_code)]

//! Return flight after a drag is released.
//!
//! A [`FlightOverlay`] lives in the host's overlay layer, above normal
//! layout. It eases a ghost of the released item from the release point to
//! its destination slot and keeps a static placeholder at the destination
//! the whole time. When the ghost arrives the overlay entry is removed and
//! the optional landing callback runs.
//!
//! # Invariants
//!
//! 1. The overlay entry is removed exactly once, either on landing or by
//!    [`FlightOverlay::teardown`], whichever comes first.
//! 2. The landing callback fires at most once and never after a teardown.

use std::fmt;
use std::time::Duration;

use dockyard_core::animation::{OffsetTween, TweenStatus};
use dockyard_core::geometry::{Offset, Rect, Size};
use dockyard_core::host::{OverlayEntryId, OverlayLayer};

use crate::config::DockConfig;

/// Outcome of a [`FlightOverlay::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStatus {
    /// The ghost is at this global position.
    InFlight(Offset),
    /// The ghost has arrived (or the flight was torn down).
    Landed,
}

type LandedCallback = Box<dyn FnMut()>;

/// A ghost flying back into the dock.
pub struct FlightOverlay<T> {
    item: T,
    entry: Option<OverlayEntryId>,
    tween: OffsetTween,
    size: Size,
    on_landed: Option<LandedCallback>,
}

impl<T: fmt::Debug> fmt::Debug for FlightOverlay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightOverlay")
            .field("item", &self.item)
            .field("entry", &self.entry)
            .field("tween", &self.tween)
            .field("size", &self.size)
            .field("on_landed", &self.on_landed.as_ref().map(|_| ".."))
            .finish()
    }
}

impl<T> FlightOverlay<T> {
    /// Insert a new flight into `overlay`, carrying `item` from `begin` to
    /// `end` with the configured flight duration and curve.
    pub fn spawn(
        item: T,
        begin: Offset,
        end: Offset,
        config: &DockConfig,
        overlay: &mut impl OverlayLayer,
    ) -> Self {
        Self::with_duration(item, begin, end, config.effective_flight_duration(), config, overlay)
    }

    /// Like [`spawn`](Self::spawn) with an explicit duration.
    pub fn with_duration(
        item: T,
        begin: Offset,
        end: Offset,
        duration: Duration,
        config: &DockConfig,
        overlay: &mut impl OverlayLayer,
    ) -> Self {
        let entry = overlay.insert_overlay();
        dockyard_core::debug!(entry = entry.0, "flight spawned");
        Self {
            item,
            entry: Some(entry),
            tween: OffsetTween::new(begin, end, duration).easing(config.flight_easing),
            size: config.slot.content_size(),
            on_landed: None,
        }
    }

    /// Register a callback fired once when the ghost lands.
    #[must_use]
    pub fn on_landed(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_landed = Some(Box::new(callback));
        self
    }

    /// The item being carried.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Overlay entry, until landing or teardown.
    #[must_use]
    pub fn entry(&self) -> Option<OverlayEntryId> {
        self.entry
    }

    /// Whether the flight has left the overlay layer.
    #[must_use]
    pub fn is_landed(&self) -> bool {
        self.entry.is_none()
    }

    /// Release point.
    #[must_use]
    pub fn begin(&self) -> Offset {
        self.tween.begin()
    }

    /// Destination.
    #[must_use]
    pub fn end(&self) -> Offset {
        self.tween.end()
    }

    /// Ghost position on this frame.
    #[must_use]
    pub fn position(&self) -> Offset {
        self.tween.current()
    }

    /// Static placeholder drawn at the destination.
    #[must_use]
    pub fn placeholder(&self) -> Rect {
        Rect::from_origin_size(self.tween.end(), self.size)
    }

    /// Advance the flight by one frame.
    pub fn tick(&mut self, dt: Duration, overlay: &mut impl OverlayLayer) -> FlightStatus {
        if self.entry.is_none() {
            return FlightStatus::Landed;
        }
        match self.tween.advance(dt) {
            TweenStatus::Running(position) => FlightStatus::InFlight(position),
            TweenStatus::Completed(_) | TweenStatus::Idle => {
                self.remove_entry(overlay);
                if let Some(mut on_landed) = self.on_landed.take() {
                    on_landed();
                }
                FlightStatus::Landed
            }
        }
    }

    /// Remove the overlay entry without landing. Idempotent.
    ///
    /// Returns `true` if this call removed the entry.
    pub fn teardown(&mut self, overlay: &mut impl OverlayLayer) -> bool {
        self.on_landed = None;
        if self.entry.is_none() {
            return false;
        }
        self.tween.stop();
        self.remove_entry(overlay);
        true
    }

    fn remove_entry(&mut self, overlay: &mut impl OverlayLayer) {
        if let Some(entry) = self.entry.take()
            && !overlay.remove_overlay(entry)
        {
            dockyard_core::warn!(entry = entry.0, "flight overlay entry already gone");
        }
    }
}
