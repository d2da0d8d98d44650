use super::Error;

/// Error when a hit is present but shaped unlike a search hit.
///
/// This occurs when:
/// - The hit itself is not a JSON object
/// - `_source` or `fields` is not an object
/// - `_version` is not an integer
#[derive(Debug)]
pub(super) struct InvalidHit {
    message: Box<str>,
}

impl std::error::Error for InvalidHit {}

impl core::fmt::Display for InvalidHit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid hit: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid hit error.
    pub fn invalid_hit(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidHit(InvalidHit {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid hit error.
    pub fn is_invalid_hit(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidHit(_))
    }
}
