mod belongs_to;
pub use belongs_to::BelongsTo;

mod belongs_to_many;
pub use belongs_to_many::BelongsToMany;

mod has_many;
pub use has_many::HasMany;

mod has_one;
pub use has_one::HasOne;

use super::{Model, ModelId, Schema};

/// A declared association between two models.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Attribute name the relation's data is stored under
    pub name: String,

    /// Model declaring the relation
    pub owner: ModelId,

    /// Associated model
    pub target: ModelId,

    pub kind: RelationKind,
}

#[derive(Debug, Clone)]
pub enum RelationKind {
    HasOne(HasOne),
    HasMany(HasMany),
    BelongsTo(BelongsTo),
    BelongsToMany(BelongsToMany),
}

impl Relation {
    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }

    pub fn owner<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.owner)
    }

    /// Returns true when the relation loads a collection rather than a
    /// single record.
    pub fn is_many(&self) -> bool {
        matches!(
            self.kind,
            RelationKind::HasMany(_) | RelationKind::BelongsToMany(_)
        )
    }

    pub fn as_belongs_to_many(&self) -> Option<&BelongsToMany> {
        match &self.kind {
            RelationKind::BelongsToMany(belongs_to_many) => Some(belongs_to_many),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_belongs_to_many(&self) -> &BelongsToMany {
        self.as_belongs_to_many()
            .unwrap_or_else(|| panic!("expected relation `{}` to be belongs-to-many", self.name))
    }
}
