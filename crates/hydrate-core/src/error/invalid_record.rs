use super::Error;

/// Error when nested relation data cannot be read as a related record.
#[derive(Debug)]
pub(super) struct InvalidRecord {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidRecord {}

impl core::fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid related record for model `{}`: {}",
            self.model, self.message
        )
    }
}

impl Error {
    /// Creates an invalid record error for the given target model.
    pub fn invalid_record(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecord {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecord(_))
    }
}
