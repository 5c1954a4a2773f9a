//! Decoding, editing and encoding of plain-text Netpbm images (`P2`/`P3`).
//!
//! ```
//! use std::io::Cursor;
//! use netpbm_plain_rs::image_pipeline::Image;
//!
//! let mut source = Cursor::new("P2\n\n2 2\n255\n10 20 30 40\n");
//! let mut image = Image::load(&mut source).unwrap();
//! image.invert();
//! assert_eq!(image.to_plain_text().unwrap(), "P2\n\n2 2\n255\n245\n235\n225\n215\n");
//! ```

pub mod image_pipeline;
pub mod logger;
