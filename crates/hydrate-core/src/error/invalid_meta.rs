use super::Error;

/// Error when search response metadata is missing or malformed.
#[derive(Debug)]
pub(super) struct InvalidMeta {
    message: Box<str>,
}

impl std::error::Error for InvalidMeta {}

impl core::fmt::Display for InvalidMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid search metadata: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid metadata error.
    pub fn invalid_meta(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMeta(InvalidMeta {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid metadata error.
    pub fn is_invalid_meta(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMeta(_))
    }
}
