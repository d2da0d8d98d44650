use super::RelationKind;

#[derive(Debug, Clone)]
pub struct HasMany {
    /// Attribute on each related model pointing back at the owner
    pub foreign_key: String,

    /// Attribute on the owner the foreign key refers to
    pub local_key: String,
}

impl From<HasMany> for RelationKind {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}
