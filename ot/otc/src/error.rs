use std::convert::Infallible;

/// Errors that can occur during an oblivious transfer.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("decryption failed: ciphertext does not authenticate under the derived key")]
    DecryptionFailed,
}

/// The kind of an [`Error`], without its detail message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is of the wrong kind, e.g. a choice that is not an integer.
    InvalidInput,
    /// The input is of the right kind but has an unacceptable value,
    /// e.g. a choice outside of {0, 1} or a message of the wrong length.
    InvalidValue,
    /// A ciphertext failed authentication.
    DecryptionFailed,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::InvalidValue(_) => ErrorKind::InvalidValue,
            Error::DecryptionFailed => ErrorKind::DecryptionFailed,
        }
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
