//! Header line parsing.

use std::io::BufRead;

use tracing::debug;
use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::netpbm::types::{Format, Header};

/// Reads the four header lines: magic number, comment, `columns rows`, max level.
///
/// On success the source is positioned at the first pixel line.
pub fn parse_header(source: &mut dyn BufRead) -> Result<Header> {
    let magic = read_header_line(source, "magic number")?;
    let format = Format::from_magic(&magic).ok_or_else(|| {
        NetpbmError::FormatError(format!("unsupported magic number {:?}", magic))
    })?;

    let comment = read_header_line(source, "comment")?;

    let dimensions = read_header_line(source, "dimensions")?;
    let (columns, rows) = match dimensions.split_whitespace().collect::<Vec<_>>().as_slice() {
        [columns, rows] => (
            parse_value(columns, "column count")?,
            parse_value(rows, "row count")?,
        ),
        _ => {
            return Err(NetpbmError::FormatError(format!(
                "expected \"<columns> <rows>\", found {:?}",
                dimensions
            )));
        }
    };

    let max_line = read_header_line(source, "max level")?;
    let max_level = match max_line.split_whitespace().collect::<Vec<_>>().as_slice() {
        [value] => parse_value(value, "max level")?,
        _ => {
            return Err(NetpbmError::FormatError(format!(
                "expected a single max level, found {:?}",
                max_line
            )));
        }
    };

    if columns == 0 || rows == 0 {
        return Err(NetpbmError::FormatError(format!(
            "image must have at least one pixel, found {}x{}",
            columns, rows
        )));
    }
    if max_level == 0 {
        return Err(NetpbmError::FormatError("max level must be at least 1".to_string()));
    }

    debug!("Parsed {} header: {}x{}, max level {}", format, columns, rows, max_level);

    Ok(Header {
        format,
        comment,
        columns,
        rows,
        max_level,
    })
}

fn read_header_line(source: &mut dyn BufRead, what: &str) -> Result<String> {
    let mut line = String::new();
    let read = source.read_line(&mut line).map_err(NetpbmError::from_read)?;
    if read == 0 {
        return Err(NetpbmError::FormatError(format!(
            "unexpected end of input while reading {}",
            what
        )));
    }
    Ok(line.trim().to_string())
}

/// Parses a plain decimal value. Signs are rejected, including `+`.
pub(crate) fn parse_value(token: &str, what: &str) -> Result<u32> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NetpbmError::FormatError(format!(
            "invalid {} {:?}: expected decimal digits",
            what, token
        )));
    }
    token.parse::<u32>().map_err(|e| {
        NetpbmError::FormatError(format!("invalid {} {:?}: {}", what, token, e))
    })
}
