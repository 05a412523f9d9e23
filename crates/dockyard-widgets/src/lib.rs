#![forbid(unsafe_code)]

//! Drag-reorder dock engine.
//!
//! A [`Dock`](dock::Dock) is a single row of fixed-size slots holding a
//! reorderable list of caller-owned items. Each item gets a
//! [`DockItemController`](item::DockItemController) that plays both drag
//! roles: source while it is being dragged, drop target while another item
//! hovers over its slot. Controllers share one
//! [`DragSessionHandle`](session::DragSessionHandle) and report what should
//! happen next as [`ItemEffect`](item::ItemEffect)s, which the dock applies.
//!
//! Everything is driven by the host: pointer events go in through
//! [`Dock::handle_drag`](dock::Dock::handle_drag) and
//! [`Dock::handle_drop`](dock::Dock::handle_drop), time goes in through
//! [`Dock::tick`](dock::Dock::tick), and the host renders what
//! [`Dock::view`](dock::Dock::view) and
//! [`Dock::overlay_view`](dock::Dock::overlay_view) return.

pub mod config;
pub mod dock;
pub mod flight;
pub mod item;
pub mod layout;
pub mod session;
pub mod view;

use std::fmt::Debug;
use std::hash::Hash;

pub use config::{DockConfig, SlotMetrics};
pub use dock::{Dock, DockError};
pub use flight::{FlightOverlay, FlightStatus};
pub use item::{DockItemController, ItemEffect, ItemPhase, ItemVisualState, neighbor_shift};
pub use layout::RowLayout;
pub use session::{DragSession, DragSessionHandle};
pub use view::{OverlayView, SlotContent, SlotView};

/// Capability required of dock items.
///
/// Equality and hashing are the item's identity: the dock keys controllers by
/// it and `reorder` locates items with it, so both must stay stable while the
/// item is in a dock.
pub trait DockItem: Clone + Eq + Hash + Debug + 'static {}

impl<T> DockItem for T where T: Clone + Eq + Hash + Debug + 'static {}
