use std::io::BufRead;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::image::Image;
use crate::image_pipeline::netpbm::config::CodecConfig;

pub trait ImageReader {
    fn read_image(&self, source: &mut dyn BufRead, config: &CodecConfig) -> Result<Image>;
}
