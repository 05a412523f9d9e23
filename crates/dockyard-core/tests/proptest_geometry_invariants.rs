//! Property-based invariant tests for geometry primitives (Offset, Rect).
//!
//! 1. Offset addition and subtraction are inverse.
//! 2. Lerp hits both endpoints exactly.
//! 3. The unset sentinel survives arithmetic with finite offsets.
//! 4. Translating a rect moves `contains` with it.
//! 5. Right/bottom edges are consistent with x+width, y+height.

use dockyard_core::geometry::{Offset, Rect};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn offset_strategy() -> impl Strategy<Value = Offset> {
    (-10_000i32..10_000, -10_000i32..10_000).prop_map(|(x, y)| Offset::new(x as f32, y as f32))
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..500, -500i32..500, 1i32..500, 1i32..500)
        .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Add/Sub inverse (integral values are exact in f32)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn add_sub_inverse(a in offset_strategy(), b in offset_strategy()) {
        prop_assert_eq!((a + b) - b, a);
        prop_assert_eq!(a - a, Offset::ZERO);
        prop_assert_eq!(-(-a), a);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Lerp endpoints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lerp_endpoints(a in offset_strategy(), b in offset_strategy()) {
        prop_assert_eq!(a.lerp(b, 0.0), a);
        prop_assert_eq!(a.lerp(b, 1.0), b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Sentinel propagation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unset_propagates(a in offset_strategy()) {
        prop_assert!((Offset::UNSET - a).is_unset());
        prop_assert!((Offset::UNSET + a).is_unset());
        prop_assert!((a - Offset::UNSET).is_unset());
        prop_assert!(!a.is_unset());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Translate preserves containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_moves_contains(r in rect_strategy(), by in offset_strategy()) {
        let moved = r.translate(by);
        prop_assert_eq!(r.contains(r.origin()), moved.contains(moved.origin()));
        prop_assert!(moved.contains(r.center() + by));
        prop_assert_eq!(moved.size(), r.size());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Edge consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_consistent(r in rect_strategy()) {
        prop_assert_eq!(r.right(), r.x + r.width);
        prop_assert_eq!(r.bottom(), r.y + r.height);
        prop_assert!(!r.contains(Offset::new(r.right(), r.y)));
        prop_assert!(!r.contains(Offset::new(r.x, r.bottom())));
    }
}
