use super::Error;

/// Error when a `pivot` attribute shows up on a model that was not reached
/// through a belongs-to-many relation, so there is no join table to build the
/// pivot record for.
#[derive(Debug)]
pub(super) struct InvalidPivot {
    model: Box<str>,
}

impl std::error::Error for InvalidPivot {}

impl core::fmt::Display for InvalidPivot {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` has a `pivot` attribute but was not loaded through a belongs-to-many relation",
            self.model
        )
    }
}

impl Error {
    /// Creates an invalid pivot error.
    pub fn invalid_pivot(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPivot(InvalidPivot {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid pivot error.
    pub fn is_invalid_pivot(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPivot(_))
    }
}
