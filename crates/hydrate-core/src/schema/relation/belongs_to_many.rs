use super::RelationKind;

/// Many-to-many association through a join table.
#[derive(Debug, Clone)]
pub struct BelongsToMany {
    /// Join table name, recorded on pivot records
    pub table: String,

    /// Join table column referencing the declaring model
    pub foreign_pivot_key: String,

    /// Join table column referencing the related model
    pub related_pivot_key: String,

    /// Attribute on the declaring model referenced by `foreign_pivot_key`
    pub parent_key: String,

    /// Attribute on the related model referenced by `related_pivot_key`
    pub related_key: String,
}

impl From<BelongsToMany> for RelationKind {
    fn from(value: BelongsToMany) -> Self {
        Self::BelongsToMany(value)
    }
}
