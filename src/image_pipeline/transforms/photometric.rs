//! Per-sample intensity transforms: brightness, invert, posterize, grayscale.

use tracing::debug;
use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::netpbm::types::{Format, PixelBuffer};

/// Luminance weight of the red channel.
pub const RED_WEIGHT: f64 = 0.2126;
/// Luminance weight of the blue channel.
pub const BLUE_WEIGHT: f64 = 0.7152;
/// Luminance weight of the green channel.
pub const GREEN_WEIGHT: f64 = 0.0722;

impl Image {
    /// Adds `delta` to every sample, clamping to `[0, max_level]`.
    pub fn adjust_brightness(&mut self, delta: i32) {
        let max_level = i64::from(self.header.max_level);
        let delta = i64::from(delta);
        debug!(delta, "Adjusting brightness");
        self.pixels
            .map_samples(|v| (i64::from(v) + delta).clamp(0, max_level) as u32);
    }

    /// Replaces every sample `v` with `max_level - v`.
    pub fn invert(&mut self) {
        let max_level = self.header.max_level;
        debug!(max_level, "Inverting");
        self.pixels.map_samples(|v| max_level - v);
    }

    /// Quantizes samples into `levels` equal-width bins.
    ///
    /// The bin width is `(max_level + 1) / levels` as a real number, and each
    /// sample becomes the (truncated) index of its bin. The header's max level
    /// is then set to `levels`, so after posterizing it reads as a bin count
    /// rather than the largest stored value (which is at most `levels - 1`).
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `levels` is zero
    pub fn posterize(&mut self, levels: u32) -> Result<()> {
        if levels == 0 {
            return Err(NetpbmError::InvalidArgument(
                "posterize needs at least one level".to_string(),
            ));
        }

        let bin_width = (f64::from(self.header.max_level) + 1.0) / f64::from(levels);
        debug!(levels, bin_width, "Posterizing");
        self.pixels
            .map_samples(|v| ((f64::from(v) / bin_width) as u32).min(levels));
        self.header.max_level = levels;
        Ok(())
    }

    /// Collapses a color image to a single luminance plane.
    ///
    /// Luminance is `floor(0.2126*R + 0.7152*B + 0.0722*G)`: blue carries the
    /// large weight and green the small one.
    ///
    /// # Errors
    ///
    /// * `InvalidOperation` - the image is already grayscale
    pub fn to_grayscale(&mut self) -> Result<()> {
        let PixelBuffer::Color { red, green, blue } = &self.pixels else {
            return Err(NetpbmError::InvalidOperation(
                "image is already grayscale".to_string(),
            ));
        };

        let max_level = self.header.max_level;
        let gray: Vec<u32> = red
            .iter()
            .zip(green.iter())
            .zip(blue.iter())
            .map(|((&r, &g), &b)| {
                let luma = RED_WEIGHT * f64::from(r)
                    + BLUE_WEIGHT * f64::from(b)
                    + GREEN_WEIGHT * f64::from(g);
                (luma.floor() as u32).min(max_level)
            })
            .collect();

        debug!(pixels = gray.len(), "Converted to grayscale");
        self.pixels = PixelBuffer::Gray(gray);
        self.header.format = Format::Gray;
        Ok(())
    }
}
