use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetpbmError {
    #[error("Malformed image: {0}")]
    FormatError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Invalid image dimensions: columns={0}, rows={1}")]
    InvalidDimensions(u32, u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NetpbmError {
    /// Maps a read failure to the error kind callers expect.
    ///
    /// Text that is not valid UTF-8 is a malformed image, not a broken stream.
    pub(crate) fn from_read(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            NetpbmError::FormatError(format!("input is not valid text: {}", err))
        } else {
            NetpbmError::IoError(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, NetpbmError>;
