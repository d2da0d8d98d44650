//! Application schema: the registry of models and their declared relations.
//!
//! Hydration consults this registry to decide whether an attribute holds
//! relation data. It is built once, up front, and never changes afterwards.

mod builder;
pub use builder::{Builder, ModelDef, RelationDef};

mod model;
pub use model::{Model, ModelId};

mod relation;
pub use relation::{BelongsTo, BelongsToMany, HasMany, HasOne, Relation, RelationKind};

use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Schema {
    models: IndexMap<ModelId, Model>,

    /// Model name to id
    names: HashMap<String, ModelId>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Get a model by its registered name
    pub fn model_by_name(&self, name: &str) -> Result<&Model> {
        self.names
            .get(name)
            .map(|id| self.model(*id))
            .ok_or_else(|| Error::model_not_registered(name))
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
