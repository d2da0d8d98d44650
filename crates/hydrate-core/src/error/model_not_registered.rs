use super::Error;

/// Error when a model is referenced by name but absent from the schema.
#[derive(Debug)]
pub(super) struct ModelNotRegistered {
    model: Box<str>,
    /// `(owner model, relation name)` when the reference comes from a relation.
    relation: Option<(Box<str>, Box<str>)>,
}

impl std::error::Error for ModelNotRegistered {}

impl core::fmt::Display for ModelNotRegistered {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.relation {
            Some((owner, relation)) => write!(
                f,
                "relation `{owner}.{relation}` targets model `{}`, which is not registered",
                self.model
            ),
            None => write!(f, "model `{}` is not registered", self.model),
        }
    }
}

impl Error {
    /// Creates an error for a lookup of an unknown model.
    pub fn model_not_registered(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ModelNotRegistered(ModelNotRegistered {
            model: model.into().into(),
            relation: None,
        }))
    }

    /// Creates an error for a relation whose target model is unknown.
    pub fn relation_target_not_registered(
        owner: impl Into<String>,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::ModelNotRegistered(ModelNotRegistered {
            model: target.into().into(),
            relation: Some((owner.into().into(), relation.into().into())),
        }))
    }

    /// Returns `true` if this error is a model not registered error.
    pub fn is_model_not_registered(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ModelNotRegistered(_))
    }
}
