use super::RelationKind;

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Attribute on the declaring model holding the owner's key
    pub foreign_key: String,

    /// Attribute on the owner model the foreign key refers to
    pub owner_key: String,
}

impl From<BelongsTo> for RelationKind {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}
