//! Plain Netpbm codec module
//!
//! This module provides reading and writing of the text-based `P2`
//! (grayscale) and `P3` (color) formats.

mod header;
mod pixels;
mod reader;
mod writer;
mod plain_text_reader;
mod plain_text_writer;
pub mod config;
pub mod types;


pub use header::parse_header;
pub use pixels::decode_pixels;
pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use plain_text_reader::PlainTextReader;
pub use plain_text_writer::PlainTextWriter;
pub use config::{CodecConfig, CodecConfigBuilder};
pub use types::{Format, Header, PixelBuffer, COLOR_MAGIC, GRAY_MAGIC};
