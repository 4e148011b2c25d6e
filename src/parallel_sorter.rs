use futures::future::join_all;
use log::debug;

use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::scanline::scanline::{ScanlineLayout, sort_scanline_pixels};
use crate::sorter::{SorterConfig, SorterError, check_geometry};

/// A full-image sorter that spreads the per-scanline work across a pool of
/// blocking tasks.
///
/// Scanlines never read or write each other's pixels, so the frame splits
/// cleanly: scanline indices are chunked across the workers, every worker
/// sorts its chunk on an owned copy, and a single `join_all` is the only
/// synchronization point. The output is bit-identical to the sequential
/// `PixelSorter` with the same config.
pub struct ParallelPixelSorter {
    config: SorterConfig,
    workers: usize,
}

impl ParallelPixelSorter {
    /// One worker per available core.
    pub fn new(config: SorterConfig) -> Self {
        Self::with_workers(config, num_cpus::get())
    }

    pub fn with_workers(config: SorterConfig, workers: usize) -> Self {
        Self {
            config,
            workers: workers.max(1),
        }
    }

    /// Sorts every scanline of a width x height RGBA frame in place.
    ///
    /// The frame is only written after every worker has finished; callers
    /// that await this future get a fully sorted buffer, never a partial one.
    pub async fn sort_frame(
        &self,
        buffer: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<(), SorterError> {
        check_geometry(buffer.len(), width, height)?;
        if width == 0 || height == 0 {
            return Ok(());
        }

        let layout = ScanlineLayout::new(width, height, self.config.direction);
        let count = layout.count();
        let chunk_size = count.div_ceil(self.workers);
        debug!(
            "dispatching {} scanlines to {} workers in chunks of {}",
            count, self.workers, chunk_size
        );

        // Workers sort owned copies; the shared frame is untouched until the
        // join below.
        let mut pending: Vec<(usize, Vec<Pixel>)> = (0..count)
            .map(|index| (index, layout.extract(buffer, index)))
            .collect();

        let mut tasks = Vec::with_capacity(self.workers);
        while !pending.is_empty() {
            let take = chunk_size.min(pending.len());
            let chunk: Vec<(usize, Vec<Pixel>)> = pending.drain(..take).collect();
            let config = self.config;

            tasks.push(tokio::task::spawn_blocking(move || {
                chunk
                    .into_iter()
                    .map(|(index, mut pixels)| {
                        sort_scanline_pixels(
                            &mut pixels,
                            config.key,
                            config.order,
                            config.threshold,
                        );
                        (index, pixels)
                    })
                    .collect::<Vec<_>>()
            }));
        }

        // Single join point: every scanline lands before any writeback.
        for joined in join_all(tasks).await {
            for (index, pixels) in joined? {
                layout.write_back(buffer, index, &pixels);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::scanline::scanline::Direction;
    use crate::core_modules::threshold::threshold::{SortKey, ThresholdWindow};
    use crate::sorter::PixelSorter;

    fn patterned_frame(width: u32, height: u32) -> Vec<u8> {
        (0..width * height)
            .flat_map(|i| {
                [
                    (i * 37 % 256) as u8,
                    (i * 101 % 256) as u8,
                    (i * 11 % 256) as u8,
                    255,
                ]
            })
            .collect()
    }

    #[tokio::test]
    async fn matches_the_sequential_sorter() {
        let config = SorterConfig {
            key: SortKey::Lightness,
            threshold: ThresholdWindow::new(15.0, 85.0, false),
            ..SorterConfig::default()
        };

        let mut sequential = patterned_frame(33, 21);
        PixelSorter::new(config)
            .sort_frame(&mut sequential, 33, 21)
            .unwrap();

        let mut parallel = patterned_frame(33, 21);
        ParallelPixelSorter::with_workers(config, 4)
            .sort_frame(&mut parallel, 33, 21)
            .await
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn vertical_dispatch_matches_too() {
        let config = SorterConfig {
            direction: Direction::Vertical,
            key: SortKey::Hue,
            ..SorterConfig::default()
        };

        let mut sequential = patterned_frame(16, 40);
        PixelSorter::new(config)
            .sort_frame(&mut sequential, 16, 40)
            .unwrap();

        let mut parallel = patterned_frame(16, 40);
        ParallelPixelSorter::new(config)
            .sort_frame(&mut parallel, 16, 40)
            .await
            .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn more_workers_than_scanlines_is_fine() {
        let config = SorterConfig::default();
        let mut buffer = patterned_frame(9, 2);
        ParallelPixelSorter::with_workers(config, 64)
            .sort_frame(&mut buffer, 9, 2)
            .await
            .unwrap();

        let mut expected = patterned_frame(9, 2);
        PixelSorter::new(config)
            .sort_frame(&mut expected, 9, 2)
            .unwrap();
        assert_eq!(buffer, expected);
    }

    #[tokio::test]
    async fn empty_frame_is_a_no_op() {
        let mut buffer: Vec<u8> = Vec::new();
        ParallelPixelSorter::new(SorterConfig::default())
            .sort_frame(&mut buffer, 0, 0)
            .await
            .unwrap();
        assert!(buffer.is_empty());
    }
}
