/// Starfield generation constants.
///
/// The star count and container selector are the only knobs; the ranges
/// below describe the half-open intervals each attribute is sampled from.
// Batch size appended per `createStars()` call
pub const STAR_COUNT: usize = 100;

// Container lookup
pub const CONTAINER_SELECTOR: &str = ".stars";

// Star element
pub const STAR_TAG: &str = "div";
pub const STAR_CLASS: &str = "star";

// Size (px): width and height share the same value
pub const SIZE_BASE_PX: f64 = 3.0;
pub const SIZE_SPAN_PX: f64 = 2.0;

// Position (percent of viewport height/width)
pub const POSITION_MIN_PCT: f64 = 0.0;
pub const POSITION_MAX_PCT: f64 = 100.0;

// Twinkle animation cycle (seconds)
pub const TWINKLE_BASE_SEC: f64 = 5.0;
pub const TWINKLE_SPAN_SEC: f64 = 20.0;
