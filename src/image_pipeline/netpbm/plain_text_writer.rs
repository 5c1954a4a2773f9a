use std::io::Write;

use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::image::Image;
use crate::image_pipeline::netpbm::config::CodecConfig;
use crate::image_pipeline::netpbm::types::PixelBuffer;
use crate::image_pipeline::netpbm::writer::ImageWriter;

/// Encoder for `P2`/`P3` text images.
///
/// Color pixels are written as interleaved `red green blue` triples in
/// row-major order, which is the order [`PlainTextReader`] deals them back
/// into channels.
///
/// [`PlainTextReader`]: crate::image_pipeline::netpbm::PlainTextReader
pub struct PlainTextWriter;

impl ImageWriter for PlainTextWriter {
    fn write_image(&self, image: &Image, output: &mut dyn Write, config: &CodecConfig) -> Result<()> {
        let header = &image.header;
        debug!("Encoding {} image: {}x{}", header.format, header.columns, header.rows);

        let mut buffer = Vec::with_capacity(image.pixels.len() * header.format.channels() * 4 + 32);

        writeln!(buffer, "{}", header.format.magic())?;
        writeln!(buffer, "{}", header.comment)?;
        writeln!(buffer, "{} {}", header.columns, header.rows)?;
        writeln!(buffer, "{}", header.max_level)?;

        let samples: Box<dyn Iterator<Item = u32> + '_> = match &image.pixels {
            PixelBuffer::Gray(values) => Box::new(values.iter().copied()),
            PixelBuffer::Color { red, green, blue } => Box::new(
                red.iter()
                    .zip(green.iter())
                    .zip(blue.iter())
                    .flat_map(|((&r, &g), &b)| [r, g, b]),
            ),
        };

        let per_line = config.values_per_line.max(1);
        let mut on_line = 0;
        for value in samples {
            if on_line > 0 {
                buffer.push(b' ');
            }
            write!(buffer, "{}", value)?;
            on_line += 1;
            if on_line == per_line {
                buffer.push(b'\n');
                on_line = 0;
            }
        }
        if on_line > 0 {
            buffer.push(b'\n');
        }

        output.write_all(&buffer)?;

        debug!("Plain text encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
