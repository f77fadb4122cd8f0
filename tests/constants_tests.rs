// Host-side checks on the generation constants and their relationships.
// The file is self-contained, so include it directly like a fixture.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn batch_size_and_selector_match_page_markup() {
    assert_eq!(STAR_COUNT, 100);
    assert_eq!(CONTAINER_SELECTOR, ".stars");
    assert_eq!(STAR_CLASS, "star");
    assert_eq!(STAR_TAG, "div");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_non_empty_and_positive() {
    assert!(SIZE_BASE_PX > 0.0 && SIZE_SPAN_PX > 0.0);
    assert!(TWINKLE_BASE_SEC > 0.0 && TWINKLE_SPAN_SEC > 0.0);
    assert!(POSITION_MAX_PCT > POSITION_MIN_PCT);
}

#[test]
fn range_endpoints() {
    assert_eq!(SIZE_BASE_PX + SIZE_SPAN_PX, 5.0);
    assert_eq!(TWINKLE_BASE_SEC + TWINKLE_SPAN_SEC, 25.0);
    assert_eq!(POSITION_MIN_PCT, 0.0);
    assert_eq!(POSITION_MAX_PCT, 100.0);
}
