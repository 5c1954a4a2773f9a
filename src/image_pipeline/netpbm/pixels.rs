//! Pixel payload decoding.

use std::io::{BufRead, Read};

use tracing::debug;
use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::netpbm::config::CodecConfig;
use crate::image_pipeline::netpbm::header::parse_value;
use crate::image_pipeline::netpbm::types::{Format, Header, PixelBuffer};

/// Reads every remaining whitespace-separated sample after the header.
///
/// Gray samples are stored in encounter order. Color samples are dealt
/// round-robin: sample `i` lands in red, green or blue for `i % 3` equal to
/// 0, 1 or 2.
pub fn decode_pixels(
    source: &mut dyn BufRead,
    header: &Header,
    config: &CodecConfig,
) -> Result<PixelBuffer> {
    let expected = header.sample_count().ok_or_else(|| {
        NetpbmError::FormatError(format!(
            "{}x{} {} image is too large to address",
            header.columns, header.rows, header.format
        ))
    })?;

    let mut payload = String::new();
    source.read_to_string(&mut payload).map_err(NetpbmError::from_read)?;

    // Capacity follows the payload, never the header.
    let mut samples = Vec::new();
    for token in payload.split_whitespace() {
        let value = parse_value(token, "sample")?;
        samples.push(check_level(value, header.max_level, config.clamp_samples)?);
    }

    if samples.len() != expected {
        return Err(NetpbmError::FormatError(format!(
            "expected {} samples for a {}x{} {} image, found {}",
            expected,
            header.columns,
            header.rows,
            header.format,
            samples.len()
        )));
    }

    debug!("Decoded {} samples", samples.len());

    Ok(match header.format {
        Format::Gray => PixelBuffer::Gray(samples),
        Format::Color => deinterleave(&samples),
    })
}

fn check_level(value: u32, max_level: u32, clamp: bool) -> Result<u32> {
    if value <= max_level {
        Ok(value)
    } else if clamp {
        Ok(max_level)
    } else {
        Err(NetpbmError::FormatError(format!(
            "sample {} exceeds max level {}",
            value, max_level
        )))
    }
}

fn deinterleave(samples: &[u32]) -> PixelBuffer {
    let pixels = samples.len() / 3;
    let mut red = Vec::with_capacity(pixels);
    let mut green = Vec::with_capacity(pixels);
    let mut blue = Vec::with_capacity(pixels);
    for triple in samples.chunks_exact(3) {
        red.push(triple[0]);
        green.push(triple[1]);
        blue.push(triple[2]);
    }
    PixelBuffer::Color { red, green, blue }
}
