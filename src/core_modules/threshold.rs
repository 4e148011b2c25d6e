// THEORY:
// The `threshold` module decides which pixels participate in a sort. A
// `SortKey` names the channel or derived HSL component the sorter reads from
// a pixel, and a `ThresholdWindow` is a percent range over that key. Both the
// sortability test and the later ordering read the same key, so a pixel that
// was admitted by its lightness is also ordered by its lightness.
//
// The window is explicit caller configuration, not UI-bound globals: the
// surrounding application translates its sliders and radio buttons into one
// immutable value and hands it to the sorter. An inverted window selects the
// complement, which turns "sort the bright band" into "sort everything but
// the bright band" without touching the range itself.

pub mod threshold {
    use crate::core_modules::color::color::{Fraction, Hsl};
    use crate::core_modules::pixel::pixel::Pixel;

    /// The channel or derived HSL component a sort keys on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SortKey {
        Hue,
        Saturation,
        Lightness,
        Red,
        Green,
        Blue,
    }

    impl SortKey {
        /// The pixel's key value as a fraction in [0.0, 1.0].
        ///
        /// H/S/L keys derive the value from the pixel's color; R/G/B keys
        /// read the raw channel scaled down by 255. The pixel itself is
        /// never modified.
        pub fn fraction(&self, pixel: &Pixel) -> Fraction {
            match self {
                SortKey::Red => pixel.red as Fraction / 255.0,
                SortKey::Green => pixel.green as Fraction / 255.0,
                SortKey::Blue => pixel.blue as Fraction / 255.0,
                SortKey::Hue | SortKey::Saturation | SortKey::Lightness => {
                    let hsl = Hsl::from(pixel);
                    match self {
                        SortKey::Hue => hsl.hue,
                        SortKey::Saturation => hsl.saturation,
                        _ => hsl.lightness,
                    }
                }
            }
        }
    }

    /// A percent range [min, max] over the normalized key value.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ThresholdWindow {
        /// Lower bound in percent (0-100, inclusive).
        pub min: f32,
        /// Upper bound in percent (0-100, inclusive).
        pub max: f32,
        /// When set, pixels outside the range are the sortable ones.
        pub inverted: bool,
    }

    impl ThresholdWindow {
        pub fn new(min: f32, max: f32, inverted: bool) -> Self {
            Self { min, max, inverted }
        }

        /// The window that admits every pixel.
        pub fn full() -> Self {
            Self::new(0.0, 100.0, false)
        }

        /// Whether a pixel with the given key fraction participates in the
        /// sort.
        ///
        /// A window with `min > max` is evaluated literally: it admits
        /// nothing, or everything when inverted. Callers get a deliberate
        /// no-op out of a backwards range rather than an error.
        pub fn admits(&self, fraction: Fraction) -> bool {
            let value = fraction * 100.0;
            (self.min <= value && value <= self.max) != self.inverted
        }
    }

    impl Default for ThresholdWindow {
        fn default() -> Self {
            Self::full()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::threshold::*;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn rgb_keys_read_raw_channels() {
        let pixel = Pixel::new(255, 0, 51, 7);
        assert_eq!(SortKey::Red.fraction(&pixel), 1.0);
        assert_eq!(SortKey::Green.fraction(&pixel), 0.0);
        assert_eq!(SortKey::Blue.fraction(&pixel), 51.0 / 255.0);
    }

    #[test]
    fn hsl_keys_derive_from_color() {
        let pixel = Pixel::new(255, 0, 0, 255);
        assert_eq!(SortKey::Hue.fraction(&pixel), 0.0);
        assert_eq!(SortKey::Saturation.fraction(&pixel), 1.0);
        assert_eq!(SortKey::Lightness.fraction(&pixel), 0.5);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = ThresholdWindow::new(20.0, 80.0, false);
        assert!(window.admits(0.2));
        assert!(window.admits(0.8));
        assert!(window.admits(0.5));
        assert!(!window.admits(0.19));
        assert!(!window.admits(0.81));
    }

    #[test]
    fn degenerate_window_admits_the_exact_value_only() {
        // R = 51 is exactly 20% of 255.
        let window = ThresholdWindow::new(20.0, 20.0, false);
        assert!(window.admits(SortKey::Red.fraction(&Pixel::new(51, 0, 0, 255))));
        assert!(!window.admits(SortKey::Red.fraction(&Pixel::new(50, 0, 0, 255))));
        assert!(!window.admits(SortKey::Red.fraction(&Pixel::new(52, 0, 0, 255))));

        // No channel value hits 50% exactly, so a [50, 50] window is empty:
        // R = 128 is about 50.2% and R = 127 about 49.8%.
        let half = ThresholdWindow::new(50.0, 50.0, false);
        assert!(!half.admits(SortKey::Red.fraction(&Pixel::new(128, 0, 0, 255))));
        assert!(!half.admits(SortKey::Red.fraction(&Pixel::new(127, 0, 0, 255))));
    }

    #[test]
    fn inversion_is_the_exact_complement() {
        let window = ThresholdWindow::new(30.0, 60.0, false);
        let inverted = ThresholdWindow::new(30.0, 60.0, true);
        for channel in 0..=255u8 {
            let fraction = SortKey::Red.fraction(&Pixel::new(channel, 0, 0, 255));
            assert_eq!(window.admits(fraction), !inverted.admits(fraction));
        }
    }

    #[test]
    fn backwards_range_admits_nothing_unless_inverted() {
        let empty = ThresholdWindow::new(80.0, 20.0, false);
        let all = ThresholdWindow::new(80.0, 20.0, true);
        for channel in 0..=255u8 {
            let fraction = SortKey::Red.fraction(&Pixel::new(channel, 0, 0, 255));
            assert!(!empty.admits(fraction));
            assert!(all.admits(fraction));
        }
    }
}
