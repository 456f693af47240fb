use thiserror::Error;

/// The error type returned by conversion and read operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Input is too small ({size} bytes). Expected at least {required} bytes for the header.")]
    InputTooSmall { size: usize, required: usize },

    #[error(
        "Conversion resulted in an empty file. The input has no image data after the header."
    )]
    EmptyOutput,

    #[error("Cannot read input: {0}")]
    Read(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error came from reading the input rather than converting it.
    pub fn is_read_err(&self) -> bool {
        matches!(self, Self::Read(_))
    }
}
