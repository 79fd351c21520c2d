//! Property-based tests for the end-reached threshold

use counterparty::egui_app::search::is_end_reached;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_bottom_of_list_is_always_end(content in 1.0f32..10_000.0, viewport in 1.0f32..2_000.0, threshold in 0.01f32..=1.0) {
        let offset = (content - viewport).max(0.0);
        prop_assert!(is_end_reached(offset, content, viewport, threshold));
    }

    #[test]
    fn test_scrolling_down_never_unreaches(
        content in 1.0f32..10_000.0,
        viewport in 1.0f32..2_000.0,
        threshold in 0.01f32..=1.0,
        a in 0.0f32..10_000.0,
        b in 0.0f32..10_000.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if is_end_reached(low, content, viewport, threshold) {
            prop_assert!(is_end_reached(high, content, viewport, threshold));
        }
    }

    #[test]
    fn test_top_of_long_list_is_not_end(viewport in 1.0f32..2_000.0, threshold in 0.01f32..=1.0, extra in 1.0f32..5_000.0) {
        // Content longer than viewport plus the threshold band
        let content = viewport * (1.0 + threshold) + extra;
        prop_assert!(!is_end_reached(0.0, content, viewport, threshold));
    }
}
