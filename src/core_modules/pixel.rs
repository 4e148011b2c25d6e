// THEORY:
// The `Pixel` module is the most fundamental unit of the sorter. It is a
// "dumb" data container for a single RGBA pixel, converted from and back to
// the 4-byte slices of the flat frame buffer. A sort never edits a channel
// value; whole `Pixel` records change position within a scanline, so the
// alpha channel always travels with the color it belongs to.
//
// Anything analytical lives in the higher modules (`color` for derived HSL,
// `threshold` for sortability, `scanline` for ordering). This module stays a
// plain record plus its byte-level conversions.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Writes the pixel back into a 4-byte RGBA slot of a frame buffer.
        pub fn write_to(&self, slot: &mut [Byte]) {
            slot[0] = self.red;
            slot[1] = self.green;
            slot[2] = self.blue;
            slot[3] = self.alpha;
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}
