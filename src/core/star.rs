//! The `Star` data model.
//!
//! A star is purely presentational: it is sampled once, rendered to inline
//! CSS and handed to a container. Nothing keeps a reference to it afterwards.

use crate::constants::*;
use rand::Rng;

/// One decorative element with randomized size, position and twinkle timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Edge length in pixels; used for both width and height.
    pub size_px: f64,
    /// Vertical offset in percent of viewport height.
    pub top_vh: f64,
    /// Horizontal offset in percent of viewport width.
    pub left_vw: f64,
    /// Length of one animation cycle in seconds.
    pub twinkle_secs: f64,
}

impl Star {
    /// Sample a star. Every attribute stays strictly below its upper bound.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(SIZE_BASE_PX..SIZE_BASE_PX + SIZE_SPAN_PX),
            top_vh: rng.gen_range(POSITION_MIN_PCT..POSITION_MAX_PCT),
            left_vw: rng.gen_range(POSITION_MIN_PCT..POSITION_MAX_PCT),
            twinkle_secs: rng.gen_range(TWINKLE_BASE_SEC..TWINKLE_BASE_SEC + TWINKLE_SPAN_SEC),
        }
    }

    #[inline]
    pub fn width_px(&self) -> f64 {
        self.size_px
    }

    #[inline]
    pub fn height_px(&self) -> f64 {
        self.size_px
    }

    /// CSS property/value pairs applied inline to the star element.
    pub fn style_declarations(&self) -> [(&'static str, String); 5] {
        [
            ("width", format!("{}px", self.width_px())),
            ("height", format!("{}px", self.height_px())),
            ("top", format!("{}vh", self.top_vh)),
            ("left", format!("{}vw", self.left_vw)),
            ("animation-duration", format!("{}s", self.twinkle_secs)),
        ]
    }

    /// The declarations joined into a `style` attribute value.
    pub fn style_text(&self) -> String {
        self.style_declarations()
            .iter()
            .map(|(prop, value)| format!("{prop}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_text_lists_all_five_properties_in_order() {
        let star = Star {
            size_px: 3.5,
            top_vh: 10.0,
            left_vw: 42.25,
            twinkle_secs: 7.0,
        };
        assert_eq!(
            star.style_text(),
            "width: 3.5px; height: 3.5px; top: 10vh; left: 42.25vw; animation-duration: 7s"
        );
    }
}
