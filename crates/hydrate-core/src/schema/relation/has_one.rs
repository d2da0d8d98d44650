use super::RelationKind;

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Attribute on the related model pointing back at the owner
    pub foreign_key: String,

    /// Attribute on the owner the foreign key refers to
    pub local_key: String,
}

impl From<HasOne> for RelationKind {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}
