//! Index-permuting transforms: rotate, flip, crop.

use tracing::debug;
use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::image::Image;

impl Image {
    /// Rotates a quarter turn, swapping columns and rows.
    pub fn rotate(&mut self, clockwise: bool) {
        let columns = self.header.columns as usize;
        let rows = self.header.rows as usize;

        let mut indices = Vec::with_capacity(columns * rows);
        if clockwise {
            for c in 0..columns {
                for r in (0..rows).rev() {
                    indices.push(r * columns + c);
                }
            }
        } else {
            for c in (0..columns).rev() {
                for r in 0..rows {
                    indices.push(r * columns + c);
                }
            }
        }

        debug!(clockwise, "Rotating {}x{}", columns, rows);
        self.pixels = self.pixels.gather(&indices);
        std::mem::swap(&mut self.header.columns, &mut self.header.rows);
    }

    /// Mirrors the image. `vertical` reverses row order, otherwise each row
    /// is reversed in place.
    pub fn flip(&mut self, vertical: bool) {
        let columns = self.header.columns as usize;
        let rows = self.header.rows as usize;

        let indices: Vec<usize> = if vertical {
            (0..rows)
                .rev()
                .flat_map(|r| (0..columns).map(move |c| r * columns + c))
                .collect()
        } else {
            (0..rows)
                .flat_map(|r| (0..columns).rev().map(move |c| r * columns + c))
                .collect()
        };

        debug!(vertical, "Flipping {}x{}", columns, rows);
        self.pixels = self.pixels.gather(&indices);
    }

    /// Keeps rows `top..bottom` and columns `left..right`.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - the region is empty or extends past the image
    pub fn crop(&mut self, top: u32, left: u32, bottom: u32, right: u32) -> Result<()> {
        let (columns, rows) = (self.header.columns, self.header.rows);
        if top >= bottom || bottom > rows || left >= right || right > columns {
            return Err(NetpbmError::InvalidArgument(format!(
                "crop region rows {}..{}, columns {}..{} is not inside a {}x{} image",
                top, bottom, left, right, columns, rows
            )));
        }

        let stride = columns as usize;
        let indices: Vec<usize> = (top as usize..bottom as usize)
            .flat_map(|r| (left as usize..right as usize).map(move |c| r * stride + c))
            .collect();

        debug!(top, left, bottom, right, "Cropping");
        self.pixels = self.pixels.gather(&indices);
        self.header.columns = right - left;
        self.header.rows = bottom - top;
        Ok(())
    }
}
