//! Plain Netpbm image data types

use std::fmt;

/// Magic number of the plain grayscale format.
pub const GRAY_MAGIC: &str = "P2";
/// Magic number of the plain color format.
pub const COLOR_MAGIC: &str = "P3";

/// Image encoding, dispatched once from the magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain PGM (`P2`): one sample per pixel
    Gray,
    /// Plain PPM (`P3`): red, green and blue samples per pixel
    Color,
}

impl Format {
    pub fn from_magic(magic: &str) -> Option<Self> {
        match magic {
            GRAY_MAGIC => Some(Format::Gray),
            COLOR_MAGIC => Some(Format::Color),
            _ => None,
        }
    }

    pub fn magic(&self) -> &'static str {
        match self {
            Format::Gray => GRAY_MAGIC,
            Format::Color => COLOR_MAGIC,
        }
    }

    /// Samples stored per pixel.
    pub fn channels(&self) -> usize {
        match self {
            Format::Gray => 1,
            Format::Color => 3,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.magic())
    }
}

/// The four header lines of a plain Netpbm file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Gray (`P2`) or color (`P3`)
    pub format: Format,
    /// Free-form second line, trimmed
    pub comment: String,
    /// Width of the image in pixels
    pub columns: u32,
    /// Height of the image in pixels
    pub rows: u32,
    /// Largest sample value allowed in the pixel buffer
    pub max_level: u32,
}

impl Header {
    /// Number of pixels (not samples) the header describes, `None` if it
    /// does not fit in `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        (self.columns as usize).checked_mul(self.rows as usize)
    }

    /// Number of samples a buffer for this header must hold across all
    /// channels, `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        self.pixel_count()?.checked_mul(self.format.channels())
    }
}

/// Decoded samples, stored row-major (`index = row * columns + column`).
///
/// Color channels are kept as three parallel planes rather than interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    Gray(Vec<u32>),
    Color {
        red: Vec<u32>,
        green: Vec<u32>,
        blue: Vec<u32>,
    },
}

impl PixelBuffer {
    pub fn format(&self) -> Format {
        match self {
            PixelBuffer::Gray(_) => Format::Gray,
            PixelBuffer::Color { .. } => Format::Color,
        }
    }

    /// Pixels per channel. For color buffers this is the red plane length;
    /// [`PixelBuffer::is_consistent`] checks the other two against it.
    pub fn len(&self) -> usize {
        match self {
            PixelBuffer::Gray(values) => values.len(),
            PixelBuffer::Color { red, .. } => red.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn is_consistent(&self, pixel_count: usize) -> bool {
        self.channels().iter().all(|plane| plane.len() == pixel_count)
    }

    /// Channel planes in red, green, blue order (a single plane for gray).
    pub fn channels(&self) -> Vec<&[u32]> {
        match self {
            PixelBuffer::Gray(values) => vec![values.as_slice()],
            PixelBuffer::Color { red, green, blue } => {
                vec![red.as_slice(), green.as_slice(), blue.as_slice()]
            }
        }
    }

    /// Largest sample across every channel, if any.
    pub fn max_sample(&self) -> Option<u32> {
        self.channels()
            .into_iter()
            .flat_map(|plane| plane.iter().copied())
            .max()
    }

    /// Applies `f` to every sample of every channel in place.
    pub(crate) fn map_samples<F: FnMut(u32) -> u32>(&mut self, mut f: F) {
        match self {
            PixelBuffer::Gray(values) => values.iter_mut().for_each(|v| *v = f(*v)),
            PixelBuffer::Color { red, green, blue } => {
                for plane in [red, green, blue] {
                    plane.iter_mut().for_each(|v| *v = f(*v));
                }
            }
        }
    }

    /// Builds a new buffer of the same variant whose pixel `i` is old pixel
    /// `indices[i]`, the same permutation being applied to every channel.
    pub(crate) fn gather(&self, indices: &[usize]) -> PixelBuffer {
        fn pick(plane: &[u32], indices: &[usize]) -> Vec<u32> {
            indices.iter().map(|&i| plane[i]).collect()
        }
        match self {
            PixelBuffer::Gray(values) => PixelBuffer::Gray(pick(values, indices)),
            PixelBuffer::Color { red, green, blue } => PixelBuffer::Color {
                red: pick(red, indices),
                green: pick(green, indices),
                blue: pick(blue, indices),
            },
        }
    }
}
