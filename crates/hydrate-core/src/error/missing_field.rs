use super::Error;

/// Error when a hit lacks a field hydration cannot proceed without
/// (`_source`, `_score`).
#[derive(Debug)]
pub(super) struct MissingField {
    field: Box<str>,
}

impl std::error::Error for MissingField {}

impl core::fmt::Display for MissingField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "hit is missing required field `{}`", self.field)
    }
}

impl Error {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingField(MissingField {
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing field error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingField(_))
    }
}
