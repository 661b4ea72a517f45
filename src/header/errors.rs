use thiserror::Error;

/// Header encoding errors.
#[derive(Error, Debug)]
pub enum HeaderDecodeError {
    /// Failed to read field value.
    #[error("Failed to read field value.")]
    ReadFailure(#[from] std::io::Error),
    /// Unrecognized message method type value.
    #[error("Unrecognized message method type value: {0}.")]
    UnrecognizedMessageMethod(u16),
    /// Unrecognized message class type value.
    #[error("Unrecognized message class type value: {0}.")]
    UnrecognizedMessageClass(u16),
}

/// Header decoding errors.
#[derive(Error, Debug)]
pub enum HeaderEncodeError {
    /// Failed to write field value.
    #[error("Failed to write field value.")]
    WriteFailure(#[from] std::io::Error),
}
