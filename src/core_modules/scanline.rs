// THEORY:
// The `scanline` module is the bridge between the flat RGBA frame buffer and
// the 1D sequences the sorting logic works on. A `ScanlineLayout` turns
// (direction, scanline index, position) into a byte offset, so rows and
// columns come out as identical address-agnostic pixel sequences and the sort
// logic is written once against that shape instead of branching on direction
// at every pixel.
//
// `sort_scanline_pixels` is the per-scanline unit of work: it computes each
// pixel's key fraction once, asks the threshold which pixels participate,
// finds the runs, and sorts each run in place. Scanlines never share data,
// which is what makes the parallel sorter's chunked dispatch safe.

pub mod scanline {
    use std::ops::Range;

    use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
    use crate::core_modules::runs::runs::find_runs;
    use crate::core_modules::threshold::threshold::{SortKey, ThresholdWindow};

    /// Whether scanlines are the rows or the columns of the frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Direction {
        Horizontal,
        Vertical,
    }

    /// Direction of the comparison within each run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SortOrder {
        Ascending,
        Descending,
    }

    /// Address math for one direction over a width x height RGBA frame.
    #[derive(Debug, Clone, Copy)]
    pub struct ScanlineLayout {
        width: usize,
        height: usize,
        direction: Direction,
    }

    impl ScanlineLayout {
        pub fn new(width: u32, height: u32, direction: Direction) -> Self {
            Self {
                width: width as usize,
                height: height as usize,
                direction,
            }
        }

        /// Number of scanlines in the frame (the outer loop bound).
        pub fn count(&self) -> usize {
            match self.direction {
                Direction::Horizontal => self.height,
                Direction::Vertical => self.width,
            }
        }

        /// Number of pixels along one scanline (the inner loop bound).
        pub fn len(&self) -> usize {
            match self.direction {
                Direction::Horizontal => self.width,
                Direction::Vertical => self.height,
            }
        }

        /// Byte offset of pixel `position` along scanline `index`.
        fn byte_offset(&self, index: usize, position: usize) -> usize {
            let pixel_index = match self.direction {
                Direction::Horizontal => index * self.width + position,
                Direction::Vertical => position * self.width + index,
            };
            pixel_index * CHANNELS
        }

        /// Copies scanline `index` out of the frame as an owned sequence.
        pub fn extract(&self, buffer: &[u8], index: usize) -> Vec<Pixel> {
            (0..self.len())
                .map(|position| {
                    let offset = self.byte_offset(index, position);
                    Pixel::from(&buffer[offset..offset + CHANNELS])
                })
                .collect()
        }

        /// Writes a scanline back into the frame at the same coordinates it
        /// was extracted from.
        pub fn write_back(&self, buffer: &mut [u8], index: usize, pixels: &[Pixel]) {
            for (position, pixel) in pixels.iter().enumerate() {
                let offset = self.byte_offset(index, position);
                pixel.write_to(&mut buffer[offset..offset + CHANNELS]);
            }
        }
    }

    /// Sorts each run's pixels by their key fraction, leaving every pixel
    /// outside a run exactly where it was.
    pub fn sort_runs(keyed: &mut [(f32, Pixel)], ranges: &[Range<usize>], order: SortOrder) {
        for range in ranges {
            let run = &mut keyed[range.clone()];
            match order {
                SortOrder::Ascending => run.sort_unstable_by(|a, b| a.0.total_cmp(&b.0)),
                SortOrder::Descending => run.sort_unstable_by(|a, b| b.0.total_cmp(&a.0)),
            }
        }
    }

    /// The per-scanline unit of work: key derivation, run detection, and the
    /// in-place sort of each run.
    pub fn sort_scanline_pixels(
        pixels: &mut [Pixel],
        key: SortKey,
        order: SortOrder,
        threshold: ThresholdWindow,
    ) {
        // Key fractions are computed once per pixel, not once per comparison.
        let mut keyed: Vec<(f32, Pixel)> = pixels
            .iter()
            .map(|pixel| (key.fraction(pixel), *pixel))
            .collect();

        let sortable: Vec<bool> = keyed
            .iter()
            .map(|(fraction, _)| threshold.admits(*fraction))
            .collect();

        let ranges = find_runs(&sortable);
        sort_runs(&mut keyed, &ranges, order);

        for (slot, (_, pixel)) in pixels.iter_mut().zip(keyed) {
            *slot = pixel;
        }
    }
}
