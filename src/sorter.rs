// THEORY:
// The `sorter` module is the top-level API for the whole engine. It owns the
// immutable `SorterConfig` and runs the full-image sort: for every scanline
// it extracts the pixel sequence, hands it to the per-scanline worker in
// `core_modules::scanline`, and writes the result back at the same
// coordinates. The frame buffer is caller-owned and mutated in place; the
// only allocations are the transient per-scanline buffers.
//
// Configuration is a value, not ambient state. The original tool kept its
// direction and order in globals written by UI callbacks; here every knob
// arrives in one `SorterConfig` passed at construction, so two sorters with
// different settings can coexist and a config can be parsed, logged, and
// tested on its own.
//
// Error design is deliberately small. Degenerate thresholds and empty frames
// are valid no-ops. The real failure modes are a frame buffer whose length
// does not match its claimed dimensions, and configuration text from the
// outer layer that names no known key, direction, or order. The latter is the
// fail-fast surface: inside the crate the enums make an unsupported key
// unrepresentable, so the check happens where strings become enums.

use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::core_modules::pixel::pixel::CHANNELS;
use crate::core_modules::scanline::scanline::{
    Direction, ScanlineLayout, SortOrder, sort_scanline_pixels,
};
use crate::core_modules::threshold::threshold::{SortKey, ThresholdWindow};

/// Everything that can go wrong constructing a configuration or handing the
/// sorter a frame.
#[derive(Debug, Error)]
pub enum SorterError {
    #[error("unsupported scan key: {0:?}")]
    UnknownKey(String),
    #[error("unsupported scan direction: {0:?}")]
    UnknownDirection(String),
    #[error("unsupported sort order: {0:?}")]
    UnknownOrder(String),
    #[error("buffer holds {actual} bytes but a {width}x{height} RGBA frame needs {expected}")]
    BufferGeometry {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("a scanline worker task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl FromStr for SortKey {
    type Err = SorterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "hue" => Ok(SortKey::Hue),
            "saturation" => Ok(SortKey::Saturation),
            "lightness" => Ok(SortKey::Lightness),
            "red" => Ok(SortKey::Red),
            "green" => Ok(SortKey::Green),
            "blue" => Ok(SortKey::Blue),
            _ => Err(SorterError::UnknownKey(name.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = SorterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            _ => Err(SorterError::UnknownDirection(name.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SorterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "ascending" => Ok(SortOrder::Ascending),
            "descending" => Ok(SortOrder::Descending),
            _ => Err(SorterError::UnknownOrder(name.to_string())),
        }
    }
}

/// The complete, immutable configuration for one sort invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SorterConfig {
    pub direction: Direction,
    pub key: SortKey,
    pub order: SortOrder,
    pub threshold: ThresholdWindow,
}

impl Default for SorterConfig {
    /// Mirrors the original tool's page defaults: horizontal, ascending,
    /// keyed on red, with every pixel sortable.
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            key: SortKey::Red,
            order: SortOrder::Ascending,
            threshold: ThresholdWindow::full(),
        }
    }
}

/// The sequential full-image sorter.
pub struct PixelSorter {
    config: SorterConfig,
}

impl PixelSorter {
    pub fn new(config: SorterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    /// Sorts every scanline of a width x height RGBA frame in place.
    ///
    /// Pixels only ever trade places within their own scanline; channel
    /// values are never altered and unsortable pixels never move. An empty
    /// frame succeeds trivially.
    pub fn sort_frame(
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
        debug!(
            "sorting {} scanlines of {} pixels with {:?}",
            layout.count(),
            layout.len(),
            self.config
        );

        for index in 0..layout.count() {
            let mut pixels = layout.extract(buffer, index);
            sort_scanline_pixels(
                &mut pixels,
                self.config.key,
                self.config.order,
                self.config.threshold,
            );
            layout.write_back(buffer, index, &pixels);
        }

        Ok(())
    }
}

/// Rejects a frame buffer whose length disagrees with its claimed dimensions.
pub(crate) fn check_geometry(actual: usize, width: u32, height: u32) -> Result<(), SorterError> {
    let expected = width as usize * height as usize * CHANNELS;
    if actual != expected {
        return Err(SorterError::BufferGeometry {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}
