use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::image::Image;
use crate::image_pipeline::netpbm::config::CodecConfig;

pub trait ImageWriter {
    fn write_image(&self, image: &Image, output: &mut dyn Write, config: &CodecConfig) -> Result<()>;
}
