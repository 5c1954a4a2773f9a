use tracing::{info, instrument};
use std::io::{BufReader, Write};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{NetpbmError, Result},
    conversions::operation::Operation,
    image::Image,
    netpbm::{CodecConfig, ImageReader, ImageWriter, PlainTextReader, PlainTextWriter},
    transforms::XorShiftOffsets,
};

pub struct EditPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: CodecConfig,
}

impl EditPipeline<PlainTextReader, PlainTextWriter> {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            reader: PlainTextReader,
            writer: PlainTextWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> EditPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CodecConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes `input`, applies `operations` in order and encodes the result.
    ///
    /// Nothing is written to `output` unless every operation succeeds.
    #[instrument(skip(self, input_data, operations, output), fields(input_size = input_data.len(), steps = operations.len()))]
    pub fn convert(&self, input_data: &[u8], operations: &[Operation], output: &mut dyn Write) -> Result<Image> {
        info!("Starting edit");

        let mut image = {
            let _span = tracing::info_span!("decode").entered();
            let mut source = input_data;
            self.reader.read_image(&mut source, &self.config)?
        };

        let mut offsets = match self.config.scatter_seed {
            Some(seed) => XorShiftOffsets::new(seed),
            None => XorShiftOffsets::from_clock(),
        };

        for operation in operations {
            let _span = tracing::info_span!("apply", operation = %operation).entered();
            operation.apply(&mut image, &mut offsets)?;
        }

        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_image(&image, output, &self.config)?;
        }

        info!(
            format = %image.format(),
            columns = image.columns(),
            rows = image.rows(),
            "Edit complete"
        );
        Ok(image)
    }

    #[instrument(skip(self, input_path, output_path, operations))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        operations: &[Operation],
    ) -> Result<Image> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Editing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                NetpbmError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // A failed edit must leave the target file untouched.
        let mut encoded = Vec::new();
        let image = self.convert(&input_data, operations, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                NetpbmError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(image)
    }

    /// Loads an image from a file without applying any operation.
    pub fn open<P: AsRef<Path>>(&self, input_path: P) -> Result<Image> {
        let input_path = input_path.as_ref();
        let file = std::fs::File::open(input_path).map_err(|e| {
            NetpbmError::InputReadError(format!("{}: {}", input_path.display(), e))
        })?;
        self.reader.read_image(&mut BufReader::new(file), &self.config)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CodecConfig) {
        self.config = config;
    }
}
