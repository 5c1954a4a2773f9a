//! Reader for the plain (ASCII) Netpbm variants.
//!
//! Handles `P2` grayscale and `P3` color files. The header is read line by
//! line, then every remaining token is treated as a sample.

use std::io::BufRead;

use tracing::debug;
use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::netpbm::config::CodecConfig;
use crate::image_pipeline::netpbm::header::parse_header;
use crate::image_pipeline::netpbm::pixels::decode_pixels;
use crate::image_pipeline::netpbm::reader::ImageReader;

/// Decoder for `P2`/`P3` text images.
pub struct PlainTextReader;

impl ImageReader for PlainTextReader {
    /// Decodes a complete image from `source`.
    ///
    /// # Errors
    ///
    /// * `FormatError` - bad magic number, malformed header line, unparseable
    ///   or out-of-range sample, or a sample count that does not match the
    ///   header dimensions
    /// * `InvalidDimensions` - the image exceeds `config.max_dimension`
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use netpbm_plain_rs::image_pipeline::{CodecConfig, ImageReader, PlainTextReader};
    ///
    /// let mut source = Cursor::new("P2\n# tiny\n2 1\n255\n0 255\n");
    /// let image = PlainTextReader.read_image(&mut source, &CodecConfig::default()).unwrap();
    /// assert_eq!(image.columns(), 2);
    /// ```
    fn read_image(&self, source: &mut dyn BufRead, config: &CodecConfig) -> Result<Image> {
        let header = parse_header(source)?;

        if config.validate_dimensions {
            if let Some(limit) = config.max_dimension {
                if header.columns > limit || header.rows > limit {
                    return Err(NetpbmError::InvalidDimensions(header.columns, header.rows));
                }
            }
        }

        let pixels = decode_pixels(source, &header, config)?;

        debug!(
            "Loaded {} image {}x{} ({} pixels)",
            header.format,
            header.columns,
            header.rows,
            pixels.len()
        );

        Image::new(header, pixels)
    }
}
