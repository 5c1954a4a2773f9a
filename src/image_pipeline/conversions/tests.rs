#[cfg(test)]
mod tests {
    use std::io::{BufRead, Cursor, Write};
    use std::sync::{Arc, Mutex};
    use crate::image_pipeline::common::error::{NetpbmError, Result};
    use crate::image_pipeline::conversions::{EditPipeline, Operation};
    use crate::image_pipeline::image::Image;
    use crate::image_pipeline::netpbm::{
        CodecConfig, Format, Header, ImageReader, ImageWriter, PixelBuffer,
    };

    struct MockReader {
        should_fail: bool,
        mock_image: Option<Image>,
    }

    impl ImageReader for MockReader {
        fn read_image(&self, _source: &mut dyn BufRead, _config: &CodecConfig) -> Result<Image> {
            if self.should_fail {
                return Err(NetpbmError::FormatError("Mock decode error".to_string()));
            }
            Ok(self.mock_image.clone().unwrap_or_else(|| {
                Image::new(
                    Header {
                        format: Format::Gray,
                        comment: "# mock".to_string(),
                        columns: 2,
                        rows: 2,
                        max_level: 255,
                    },
                    PixelBuffer::Gray(vec![10, 20, 30, 40]),
                )
                .unwrap()
            }))
        }
    }

    struct MockWriter {
        should_fail: bool,
        written_data: Arc<Mutex<Vec<Image>>>,
    }

    impl ImageWriter for MockWriter {
        fn write_image(&self, image: &Image, _output: &mut dyn Write, _config: &CodecConfig) -> Result<()> {
            if self.should_fail {
                return Err(NetpbmError::IoError(std::io::Error::other("Mock encode error")));
            }
            self.written_data.lock().unwrap().push(image.clone());
            Ok(())
        }
    }

    fn mock_pipeline(reader_fails: bool, writer_fails: bool) -> (EditPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<Image>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let reader = MockReader { should_fail: reader_fails, mock_image: None };
        let writer = MockWriter { should_fail: writer_fails, written_data: written.clone() };
        (EditPipeline::with_custom(reader, writer, CodecConfig::default()), written)
    }

    #[test]
    fn test_successful_edit() {
        let (pipeline, written) = mock_pipeline(false, false);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake image", &[Operation::Invert], &mut output);

        assert!(result.is_ok());
        let written = written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].pixels(), PixelBuffer::Gray(vec![245, 235, 225, 215]));
    }

    #[test]
    fn test_color_edit_through_mock_reader() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let color = Image::new(
            Header {
                format: Format::Color,
                comment: String::new(),
                columns: 2,
                rows: 1,
                max_level: 100,
            },
            PixelBuffer::Color {
                red: vec![100, 0],
                green: vec![0, 50],
                blue: vec![0, 100],
            },
        )
        .unwrap();
        let reader = MockReader { should_fail: false, mock_image: Some(color) };
        let writer = MockWriter { should_fail: false, written_data: written.clone() };
        let pipeline = EditPipeline::with_custom(reader, writer, CodecConfig::default());

        let mut output = Cursor::new(Vec::new());
        let image = pipeline
            .convert(b"fake image", &[Operation::Flip { vertical: false }, Operation::Grayscale], &mut output)
            .unwrap();

        assert!(image.is_grayscale());
        // flipped: (0,50,100) then (100,0,0); 0.7152*100 + 0.0722*50 = 75.13, 0.2126*100 = 21.26
        assert_eq!(image.pixels(), PixelBuffer::Gray(vec![75, 21]));
        assert_eq!(written.lock().unwrap()[0], image);
    }

    #[test]
    fn test_reader_failure() {
        let (pipeline, written) = mock_pipeline(true, false);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake image", &[], &mut output);

        assert!(matches!(result.unwrap_err(), NetpbmError::FormatError(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_writer_failure() {
        let (pipeline, _) = mock_pipeline(false, true);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake image", &[], &mut output);

        assert!(matches!(result.unwrap_err(), NetpbmError::IoError(_)));
    }

    #[test]
    fn test_failing_operation_skips_writer() {
        let (pipeline, written) = mock_pipeline(false, false);

        let mut output = Cursor::new(Vec::new());
        let result = pipeline.convert(b"fake image", &[Operation::Invert, Operation::Grayscale], &mut output);

        assert!(matches!(result.unwrap_err(), NetpbmError::InvalidOperation(_)));
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_plain_text_edit() {
        let pipeline = EditPipeline::new(CodecConfig::default());
        let input = b"P2\n# in\n3 2\n255\n1 2 3\n4 5 6\n";

        let mut output = Vec::new();
        let image = pipeline
            .convert(input, &[Operation::Rotate { clockwise: true }, Operation::Brightness(1)], &mut output)
            .unwrap();

        assert_eq!((image.columns(), image.rows()), (2, 3));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "P2\n# in\n2 3\n255\n5\n2\n6\n3\n7\n4\n"
        );
    }

    #[test]
    fn test_seeded_scatter_is_reproducible() {
        let config = CodecConfig::builder().scatter_seed(Some(1234)).build();
        let pipeline = EditPipeline::new(config);
        let input = b"P3\n#\n3 2\n255\n1 2 3 4 5 6 7 8 9\n10 11 12 13 14 15 16 17 18\n";

        let mut first = Vec::new();
        let mut second = Vec::new();
        pipeline.convert(input, &[Operation::Scatter(2)], &mut first).unwrap();
        pipeline.convert(input, &[Operation::Scatter(2)], &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("in.ppm");
        let output_path = dir.path().join("out.pgm");
        std::fs::write(&input_path, "P3\n# color\n2 1\n255\n255 0 0 0 0 255\n").unwrap();

        let pipeline = EditPipeline::new(CodecConfig::default());
        pipeline
            .convert_file(&input_path, &output_path, &[Operation::Grayscale])
            .unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(written, "P2\n# color\n2 1\n255\n54\n182\n");

        let reopened = pipeline.open(&output_path).unwrap();
        assert!(reopened.is_grayscale());
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = EditPipeline::new(CodecConfig::default());

        let result = pipeline.convert_file(dir.path().join("missing.pgm"), dir.path().join("out.pgm"), &[]);

        assert!(matches!(result.unwrap_err(), NetpbmError::InputReadError(_)));
        assert!(!dir.path().join("out.pgm").exists());
    }

    #[test]
    fn test_convert_file_failure_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("in.pgm");
        let output_path = dir.path().join("out.pgm");
        std::fs::write(&input_path, "P2\n#\n1 1\n255\n7\n").unwrap();
        std::fs::write(&output_path, "previous").unwrap();

        let pipeline = EditPipeline::new(CodecConfig::default());
        let result = pipeline.convert_file(&input_path, &output_path, &[Operation::Posterize(0)]);

        assert!(matches!(result.unwrap_err(), NetpbmError::InvalidArgument(_)));
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "previous");
    }

    #[test]
    fn test_set_config() {
        let mut pipeline = EditPipeline::new(CodecConfig::default());
        pipeline.set_config(CodecConfig::builder().values_per_line(3).build());
        assert_eq!(pipeline.config().values_per_line, 3);
    }

    #[test]
    fn test_parse_operations() {
        let cases = [
            ("brightness=-20", Operation::Brightness(-20)),
            ("invert", Operation::Invert),
            ("rotate", Operation::Rotate { clockwise: true }),
            ("rotate=ccw", Operation::Rotate { clockwise: false }),
            ("flip=h", Operation::Flip { vertical: false }),
            ("flip=vertical", Operation::Flip { vertical: true }),
            ("posterize=4", Operation::Posterize(4)),
            ("crop=1, 1, 3, 3", Operation::Crop { top: 1, left: 1, bottom: 3, right: 3 }),
            ("Grayscale", Operation::Grayscale),
            ("glass=2", Operation::Scatter(2)),
            ("scatter=5", Operation::Scatter(5)),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<Operation>().unwrap(), expected, "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_bad_operations() {
        for text in ["sharpen", "brightness", "brightness=x", "rotate=up", "crop=1,2,3", "posterize=-1", "invert=1"] {
            let result = text.parse::<Operation>();
            assert!(matches!(result, Err(NetpbmError::InvalidArgument(_))), "{}", text);
        }
    }

    #[test]
    fn test_display_parses_back() {
        let operations = [
            Operation::Brightness(7),
            Operation::Invert,
            Operation::Rotate { clockwise: false },
            Operation::Flip { vertical: true },
            Operation::Posterize(3),
            Operation::Crop { top: 0, left: 1, bottom: 2, right: 3 },
            Operation::Grayscale,
            Operation::Scatter(4),
        ];
        for operation in operations {
            assert_eq!(operation.to_string().parse::<Operation>().unwrap(), operation);
        }
    }
}
