#![forbid(unsafe_code)]

//! Dock configuration.
//!
//! [`DockConfig::default`] reproduces the reference dock: 48px square
//! content with an 8px margin, 600ms neighbour shifts and a 1s return
//! flight. Hosts that honour a platform "reduce motion" setting can flip
//! [`DockConfig::reduced_motion`], or let [`DockConfig::detect`] read it from
//! the environment.

use std::time::Duration;

use dockyard_core::animation::{EasingFn, ease_in_out, ease_out_cubic};
use dockyard_core::geometry::Size;

/// Environment variable forcing reduced motion (`1`, `true`, `yes`, `on`).
pub const ENV_REDUCED_MOTION: &str = "DOCKYARD_REDUCED_MOTION";

/// Environment variable toggling [`DockConfig::reorder_on_hover_leave`].
pub const ENV_REORDER_ON_HOVER_LEAVE: &str = "DOCKYARD_REORDER_ON_HOVER_LEAVE";

/// Fixed geometry of one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMetrics {
    /// Minimum content width (default: 48).
    pub content_width: f32,
    /// Content height (default: 48).
    pub content_height: f32,
    /// Margin on every side of the content (default: 8).
    pub margin: f32,
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self {
            content_width: 48.0,
            content_height: 48.0,
            margin: 8.0,
        }
    }
}

impl SlotMetrics {
    /// Outer size of a slot, margins included.
    #[must_use]
    pub fn slot_size(&self) -> Size {
        Size::new(
            self.content_width + 2.0 * self.margin,
            self.content_height + 2.0 * self.margin,
        )
    }

    /// Size of the content box, margins excluded.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }
}

/// Behaviour and timing of a dock.
#[derive(Debug, Clone, Copy)]
pub struct DockConfig {
    /// Slot geometry.
    pub slot: SlotMetrics,
    /// Duration of a neighbour shift (default: 600ms).
    pub shift_duration: Duration,
    /// Curve of a neighbour shift (default: ease-in-out).
    pub shift_easing: EasingFn,
    /// Duration of the return flight (default: 1000ms).
    pub flight_duration: Duration,
    /// Curve of the return flight (default: cubic ease-out).
    pub flight_easing: EasingFn,
    /// Whether withdrawing a candidate from a slot commits the same reorder
    /// as dropping it there (default: true).
    ///
    /// Dragging across a slot and away from it permanently moves the dragged
    /// item into that slot's position. Disable to only reorder on accept.
    pub reorder_on_hover_leave: bool,
    /// Collapse every animation to a single frame (default: false).
    pub reduced_motion: bool,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            slot: SlotMetrics::default(),
            shift_duration: Duration::from_millis(600),
            shift_easing: ease_in_out,
            flight_duration: Duration::from_millis(1000),
            flight_easing: ease_out_cubic,
            reorder_on_hover_leave: true,
            reduced_motion: false,
        }
    }
}

impl DockConfig {
    /// Default configuration adjusted by environment variables.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Default configuration adjusted through a custom environment lookup
    /// (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = env_flag(&get_env, ENV_REDUCED_MOTION) {
            config.reduced_motion = value;
        }
        if let Some(value) = env_flag(&get_env, ENV_REORDER_ON_HOVER_LEAVE) {
            config.reorder_on_hover_leave = value;
        }
        config
    }

    /// Set slot geometry.
    #[must_use]
    pub fn with_slot(mut self, slot: SlotMetrics) -> Self {
        self.slot = slot;
        self
    }

    /// Set the neighbour-shift duration.
    #[must_use]
    pub fn with_shift_duration(mut self, duration: Duration) -> Self {
        self.shift_duration = duration;
        self
    }

    /// Set the neighbour-shift curve.
    #[must_use]
    pub fn with_shift_easing(mut self, easing: EasingFn) -> Self {
        self.shift_easing = easing;
        self
    }

    /// Set the return-flight duration.
    #[must_use]
    pub fn with_flight_duration(mut self, duration: Duration) -> Self {
        self.flight_duration = duration;
        self
    }

    /// Set the return-flight curve.
    #[must_use]
    pub fn with_flight_easing(mut self, easing: EasingFn) -> Self {
        self.flight_easing = easing;
        self
    }

    /// Only reorder when a candidate is dropped, never on leave.
    #[must_use]
    pub fn reorder_on_accept_only(mut self) -> Self {
        self.reorder_on_hover_leave = false;
        self
    }

    /// Enable or disable reduced motion.
    #[must_use]
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// Shift duration after applying reduced motion.
    #[must_use]
    pub fn effective_shift_duration(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.shift_duration
        }
    }

    /// Flight duration after applying reduced motion.
    #[must_use]
    pub fn effective_flight_duration(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.flight_duration
        }
    }
}

fn env_flag<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let value = get_env(key)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_reference_dock() {
        let cfg = DockConfig::default();
        assert_eq!(cfg.slot.slot_size(), Size::new(64.0, 64.0));
        assert_eq!(cfg.slot.content_size(), Size::new(48.0, 48.0));
        assert_eq!(cfg.shift_duration, Duration::from_millis(600));
        assert_eq!(cfg.flight_duration, Duration::from_millis(1000));
        assert!(cfg.reorder_on_hover_leave);
        assert!(!cfg.reduced_motion);
    }

    #[test]
    fn builder() {
        let cfg = DockConfig::default()
            .with_slot(SlotMetrics {
                content_width: 32.0,
                content_height: 32.0,
                margin: 4.0,
            })
            .with_shift_duration(Duration::from_millis(200))
            .with_flight_duration(Duration::from_millis(300))
            .reorder_on_accept_only();
        assert_eq!(cfg.slot.slot_size(), Size::new(40.0, 40.0));
        assert_eq!(cfg.effective_shift_duration(), Duration::from_millis(200));
        assert_eq!(cfg.effective_flight_duration(), Duration::from_millis(300));
        assert!(!cfg.reorder_on_hover_leave);
    }

    #[test]
    fn reduced_motion_zeroes_durations() {
        let cfg = DockConfig::default().reduced_motion(true);
        assert_eq!(cfg.effective_shift_duration(), Duration::ZERO);
        assert_eq!(cfg.effective_flight_duration(), Duration::ZERO);
        // Configured values are kept for when the flag is cleared.
        assert_eq!(cfg.shift_duration, Duration::from_millis(600));
    }

    #[test]
    fn env_overrides() {
        let cfg = DockConfig::from_env_with(env(&[
            (ENV_REDUCED_MOTION, "Yes"),
            (ENV_REORDER_ON_HOVER_LEAVE, "0"),
        ]));
        assert!(cfg.reduced_motion);
        assert!(!cfg.reorder_on_hover_leave);
    }

    #[test]
    fn env_garbage_is_ignored() {
        let cfg = DockConfig::from_env_with(env(&[(ENV_REDUCED_MOTION, "maybe")]));
        assert!(!cfg.reduced_motion);
        let cfg = DockConfig::from_env_with(env(&[]));
        assert!(cfg.reorder_on_hover_leave);
    }
}
