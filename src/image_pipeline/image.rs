//! In-memory image model.
//!
//! An [`Image`] owns one [`Header`] and one [`PixelBuffer`] and guarantees
//! they agree: the buffer variant matches the header format, every channel
//! holds `columns * rows` samples, and no sample exceeds the max level.
//! Transforms (see the `transforms` module) are the only way to mutate it.

use std::io::{BufRead, Write};

use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::netpbm::{
    CodecConfig, Format, Header, ImageReader, ImageWriter, PixelBuffer, PlainTextReader,
    PlainTextWriter,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub(crate) header: Header,
    pub(crate) pixels: PixelBuffer,
}

impl Image {
    /// Builds an image from parts, rejecting any combination that breaks the
    /// model invariants.
    pub fn new(header: Header, pixels: PixelBuffer) -> Result<Self> {
        if header.columns == 0 || header.rows == 0 {
            return Err(NetpbmError::InvalidDimensions(header.columns, header.rows));
        }
        if header.max_level == 0 {
            return Err(NetpbmError::FormatError("max level must be at least 1".to_string()));
        }
        if pixels.format() != header.format {
            return Err(NetpbmError::FormatError(format!(
                "{} header paired with {} pixels",
                header.format,
                pixels.format()
            )));
        }
        let pixel_count = header.pixel_count().ok_or_else(|| {
            NetpbmError::FormatError(format!(
                "{}x{} image is too large to address",
                header.columns, header.rows
            ))
        })?;
        if !pixels.is_consistent(pixel_count) {
            return Err(NetpbmError::FormatError(format!(
                "pixel buffer does not hold {} samples per channel",
                pixel_count
            )));
        }
        if let Some(sample) = pixels.max_sample().filter(|&s| s > header.max_level) {
            return Err(NetpbmError::FormatError(format!(
                "sample {} exceeds max level {}",
                sample, header.max_level
            )));
        }
        Ok(Self { header, pixels })
    }

    /// Decodes a plain P2/P3 image with the default configuration.
    pub fn load(source: &mut dyn BufRead) -> Result<Self> {
        PlainTextReader.read_image(source, &CodecConfig::default())
    }

    /// Copy of the header.
    pub fn header(&self) -> Header {
        self.header.clone()
    }

    /// Copy of the pixel buffer.
    pub fn pixels(&self) -> PixelBuffer {
        self.pixels.clone()
    }

    pub fn is_grayscale(&self) -> bool {
        self.header.format == Format::Gray
    }

    pub fn format(&self) -> Format {
        self.header.format
    }

    pub fn comment(&self) -> &str {
        &self.header.comment
    }

    pub fn columns(&self) -> u32 {
        self.header.columns
    }

    pub fn rows(&self) -> u32 {
        self.header.rows
    }

    pub fn max_level(&self) -> u32 {
        self.header.max_level
    }

    /// Serializes with the default configuration.
    pub fn write_to(&self, sink: &mut dyn Write) -> Result<()> {
        PlainTextWriter.write_image(self, sink, &CodecConfig::default())
    }

    pub fn to_plain_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| NetpbmError::FormatError(format!("serialized text is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn gray_header(columns: u32, rows: u32) -> Header {
        Header {
            format: Format::Gray,
            comment: String::new(),
            columns,
            rows,
            max_level: 255,
        }
    }

    #[test]
    fn test_new_accepts_consistent_parts() {
        let image = Image::new(gray_header(2, 1), PixelBuffer::Gray(vec![0, 255])).unwrap();
        assert_eq!(image.columns(), 2);
        assert_eq!(image.rows(), 1);
        assert!(image.is_grayscale());
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = Image::new(gray_header(2, 2), PixelBuffer::Gray(vec![1, 2, 3]));
        assert!(matches!(result, Err(NetpbmError::FormatError(_))));
    }

    #[test]
    fn test_new_rejects_variant_mismatch() {
        let pixels = PixelBuffer::Color { red: vec![1], green: vec![2], blue: vec![3] };
        let result = Image::new(gray_header(1, 1), pixels);
        assert!(matches!(result, Err(NetpbmError::FormatError(_))));
    }

    #[test]
    fn test_new_rejects_ragged_color_planes() {
        let mut header = gray_header(2, 1);
        header.format = Format::Color;
        let pixels = PixelBuffer::Color { red: vec![1, 2], green: vec![2], blue: vec![3, 4] };
        assert!(Image::new(header, pixels).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_sample() {
        let result = Image::new(gray_header(1, 1), PixelBuffer::Gray(vec![256]));
        assert!(matches!(result, Err(NetpbmError::FormatError(_))));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let result = Image::new(gray_header(0, 3), PixelBuffer::Gray(vec![]));
        assert!(matches!(result, Err(NetpbmError::InvalidDimensions(0, 3))));
    }

    #[test]
    fn test_accessors_return_independent_copies() {
        let mut source = Cursor::new("P2\n# c\n2 1\n9\n1 2\n");
        let image = Image::load(&mut source).unwrap();

        let mut header = image.header();
        header.columns = 40;
        let mut pixels = image.pixels();
        if let PixelBuffer::Gray(values) = &mut pixels {
            values[0] = 7;
        }

        assert_eq!(image.columns(), 2);
        assert_eq!(image.pixels(), PixelBuffer::Gray(vec![1, 2]));
        assert_eq!(image.comment(), "# c");
        assert_eq!(image.max_level(), 9);
    }

    #[test]
    fn test_to_plain_text() {
        let image = Image::new(gray_header(2, 1), PixelBuffer::Gray(vec![3, 4])).unwrap();
        assert_eq!(image.to_plain_text().unwrap(), "P2\n\n2 1\n255\n3\n4\n");
    }
}
