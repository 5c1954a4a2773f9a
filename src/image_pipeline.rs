//! Image processing pipeline module
//!
//! This module provides the plain Netpbm codec, the in-memory image model,
//! the pixel transforms and the orchestration that chains them.

pub mod netpbm;
pub mod image;
pub mod transforms;
pub mod conversions;
pub mod common;

pub use common::{
    NetpbmError,
    Result,
};

pub use netpbm::{
    CodecConfig,
    CodecConfigBuilder,
    Format,
    Header,
    PixelBuffer,
    ImageReader,
    ImageWriter,
    PlainTextReader,
    PlainTextWriter,
};

pub use image::Image;

pub use transforms::{
    OffsetSource,
    XorShiftOffsets,
};

pub use conversions::{
    EditPipeline,
    Operation,
};
