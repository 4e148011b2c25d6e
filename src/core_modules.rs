pub mod color;
pub mod pixel;
pub mod runs;
pub mod scanline;
pub mod threshold;
pub mod utils;
