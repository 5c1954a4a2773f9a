//! Transform steps that can be queued on an [`EditPipeline`].
//!
//! [`EditPipeline`]: crate::image_pipeline::conversions::EditPipeline

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{NetpbmError, Result};
use crate::image_pipeline::image::Image;
use crate::image_pipeline::transforms::OffsetSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Brightness(i32),
    Invert,
    Rotate { clockwise: bool },
    Flip { vertical: bool },
    Posterize(u32),
    Crop { top: u32, left: u32, bottom: u32, right: u32 },
    Grayscale,
    /// The "glass" effect, with its radius
    Scatter(u32),
}

impl Operation {
    pub fn apply(&self, image: &mut Image, offsets: &mut dyn OffsetSource) -> Result<()> {
        match *self {
            Operation::Brightness(delta) => image.adjust_brightness(delta),
            Operation::Invert => image.invert(),
            Operation::Rotate { clockwise } => image.rotate(clockwise),
            Operation::Flip { vertical } => image.flip(vertical),
            Operation::Posterize(levels) => image.posterize(levels)?,
            Operation::Crop { top, left, bottom, right } => image.crop(top, left, bottom, right)?,
            Operation::Grayscale => image.to_grayscale()?,
            Operation::Scatter(radius) => image.scatter(radius, offsets)?,
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Brightness(_) => "brightness",
            Operation::Invert => "invert",
            Operation::Rotate { .. } => "rotate",
            Operation::Flip { .. } => "flip",
            Operation::Posterize(_) => "posterize",
            Operation::Crop { .. } => "crop",
            Operation::Grayscale => "grayscale",
            Operation::Scatter(_) => "glass",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Brightness(delta) => write!(f, "brightness={}", delta),
            Operation::Rotate { clockwise } => {
                write!(f, "rotate={}", if *clockwise { "cw" } else { "ccw" })
            }
            Operation::Flip { vertical } => write!(f, "flip={}", if *vertical { "v" } else { "h" }),
            Operation::Posterize(levels) => write!(f, "posterize={}", levels),
            Operation::Crop { top, left, bottom, right } => {
                write!(f, "crop={},{},{},{}", top, left, bottom, right)
            }
            Operation::Scatter(radius) => write!(f, "glass={}", radius),
            Operation::Invert | Operation::Grayscale => f.write_str(self.name()),
        }
    }
}

/// Parses `name` or `name=argument`, e.g. `invert`, `rotate=cw`, `crop=1,1,3,3`.
impl FromStr for Operation {
    type Err = NetpbmError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, argument) = match s.trim().split_once('=') {
            Some((name, argument)) => (name.trim(), Some(argument.trim())),
            None => (s.trim(), None),
        };

        let operation = match (name.to_ascii_lowercase().as_str(), argument) {
            ("brightness", Some(arg)) => Operation::Brightness(parse_number(name, arg)?),
            ("invert", None) => Operation::Invert,
            ("rotate", None) => Operation::Rotate { clockwise: true },
            ("rotate", Some(arg)) => Operation::Rotate {
                clockwise: match arg {
                    "cw" | "right" => true,
                    "ccw" | "left" => false,
                    _ => return Err(bad_argument(name, arg)),
                },
            },
            ("flip", None) => Operation::Flip { vertical: true },
            ("flip", Some(arg)) => Operation::Flip {
                vertical: match arg {
                    "v" | "vertical" => true,
                    "h" | "horizontal" => false,
                    _ => return Err(bad_argument(name, arg)),
                },
            },
            ("posterize", Some(arg)) => Operation::Posterize(parse_number(name, arg)?),
            ("crop", Some(arg)) => {
                let bounds = arg
                    .split(',')
                    .map(|part| parse_number::<u32>(name, part.trim()))
                    .collect::<Result<Vec<_>>>()?;
                match bounds.as_slice() {
                    &[top, left, bottom, right] => Operation::Crop { top, left, bottom, right },
                    _ => return Err(bad_argument(name, arg)),
                }
            }
            ("grayscale", None) => Operation::Grayscale,
            ("glass" | "scatter", Some(arg)) => Operation::Scatter(parse_number(name, arg)?),
            _ => {
                return Err(NetpbmError::InvalidArgument(format!(
                    "unknown operation {:?}",
                    s
                )));
            }
        };
        Ok(operation)
    }
}

fn parse_number<T: FromStr>(name: &str, arg: &str) -> Result<T> {
    arg.parse::<T>().map_err(|_| bad_argument(name, arg))
}

fn bad_argument(name: &str, arg: &str) -> NetpbmError {
    NetpbmError::InvalidArgument(format!("invalid argument {:?} for {}", arg, name))
}
