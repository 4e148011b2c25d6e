// THEORY:
// This file is the main entry point for the `pixel_sorter` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers (the demo runner, or
// any application that owns a decoded frame).
//
// The primary goal is to export the two sorters and their configuration
// types as the clean, high-level interface for the engine. The internal
// modules (`core_modules`) stay encapsulated: callers hand over a flat RGBA
// buffer plus a `SorterConfig` and get the same buffer back with pixels
// permuted within scanlines, nothing more.

pub mod core_modules;
pub mod parallel_sorter;
pub mod sorter;

// Re-export key data structures for the public API.
pub use crate::core_modules::scanline::scanline::{Direction, SortOrder};
pub use crate::core_modules::threshold::threshold::{SortKey, ThresholdWindow};
pub use crate::parallel_sorter::ParallelPixelSorter;
pub use crate::sorter::{PixelSorter, SorterConfig, SorterError};
