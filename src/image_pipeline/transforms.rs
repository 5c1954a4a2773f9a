//! Pixel transform module
//!
//! Every transform is an `impl Image` method that validates its arguments
//! first and only then replaces the header and buffer, so a failing call
//! leaves the image exactly as it was.

mod photometric;
mod geometric;
mod scatter;


pub use photometric::{BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};
pub use scatter::{OffsetSource, XorShiftOffsets};
