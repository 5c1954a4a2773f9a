//! Neighborhood scatter ("glass") effect and its offset sources.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;
use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::netpbm::types::PixelBuffer;

/// Source of the random displacements used by [`Image::scatter`].
pub trait OffsetSource {
    /// Returns an integer drawn uniformly from `[-radius, radius]`.
    fn offset(&mut self, radius: u32) -> i64;
}

/// Xorshift64 generator, seedable for reproducible output.
#[derive(Debug, Clone)]
pub struct XorShiftOffsets {
    state: u64,
}

impl XorShiftOffsets {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seeds from the system clock.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        Self::new(nanos)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl OffsetSource for XorShiftOffsets {
    fn offset(&mut self, radius: u32) -> i64 {
        let span = 2 * u64::from(radius) + 1;
        (self.next_u64() % span) as i64 - i64::from(radius)
    }
}

impl Image {
    /// Replaces every pixel with a randomly displaced neighbour.
    ///
    /// For each target `(r, c)` a row offset and a column offset are drawn
    /// independently from `[-radius, radius]`; the source pixel is
    /// `((r + dr) mod rows, (c + dc) mod cols)`, wrapping at the edges. All
    /// three channels are read from that same source pixel.
    ///
    /// # Errors
    ///
    /// * `InvalidOperation` - the image is grayscale
    pub fn scatter(&mut self, radius: u32, offsets: &mut dyn OffsetSource) -> Result<()> {
        if !matches!(self.pixels, PixelBuffer::Color { .. }) {
            return Err(NetpbmError::InvalidOperation(
                "scatter requires a color image".to_string(),
            ));
        }

        let columns = i64::from(self.header.columns);
        let rows = i64::from(self.header.rows);

        let bound = i64::from(radius);

        let mut indices = Vec::with_capacity(self.pixels.len());
        for r in 0..rows {
            for c in 0..columns {
                // Sources outside the contract are pinned to the radius.
                let dr = offsets.offset(radius).clamp(-bound, bound);
                let dc = offsets.offset(radius).clamp(-bound, bound);
                let source_row = (r + dr).rem_euclid(rows);
                let source_col = (c + dc).rem_euclid(columns);
                indices.push((source_row * columns + source_col) as usize);
            }
        }

        debug!(radius, "Scattered {} pixels", indices.len());
        self.pixels = self.pixels.gather(&indices);
        Ok(())
    }
}
