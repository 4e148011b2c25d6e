// THEORY:
// The `color` module derives the HSL components of a pixel. The sorter keys
// on hue, saturation or lightness without ever storing those values back into
// the frame: a sort permutes the original RGBA records and the derived
// components exist only as transient comparison keys. Because nothing is
// converted back to RGB, there is no round-trip precision loss and no inverse
// conversion in this crate at all.
//
// The conversion is the standard max/min channel algorithm over channels
// normalized to [0, 1]. All three outputs are fractions in [0, 1]; hue is the
// color-wheel angle divided by 360 rather than degrees, which keeps every key
// the sorter can select on in the same unit.

pub mod color {
    use crate::core_modules::pixel::pixel::Pixel;

    pub type Fraction = f32;

    /// The derived H/S/L components of a pixel, each normalized to [0.0, 1.0].
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Hsl {
        /// Hue as a fraction of a full turn around the color wheel.
        pub hue: Fraction,
        /// Saturation relative to the lightness midpoint.
        pub saturation: Fraction,
        /// Lightness, the midpoint of the strongest and weakest channel.
        pub lightness: Fraction,
    }

    impl From<&Pixel> for Hsl {
        fn from(pixel: &Pixel) -> Self {
            let red = pixel.red as Fraction / 255.0;
            let green = pixel.green as Fraction / 255.0;
            let blue = pixel.blue as Fraction / 255.0;

            let max = red.max(green).max(blue);
            let min = red.min(green).min(blue);
            let lightness = (max + min) / 2.0;

            // Achromatic pixels have no meaningful hue or saturation.
            if max == min {
                return Hsl {
                    hue: 0.0,
                    saturation: 0.0,
                    lightness,
                };
            }

            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };

            let mut hue = if max == red {
                // The red sextant can go negative; wrap before normalizing.
                let mut sextant = (green - blue) / delta;
                if green < blue {
                    sextant += 6.0;
                }
                sextant
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            hue /= 6.0;

            Hsl {
                hue,
                saturation,
                lightness,
            }
        }
    }
}
