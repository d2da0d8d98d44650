use super::{
    BelongsTo, BelongsToMany, HasMany, HasOne, Model, ModelId, Relation, RelationKind, Schema,
};
use crate::{Error, Result};

use heck::ToSnakeCase;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Collects model definitions and resolves them into a [`Schema`].
///
/// Relations reference their target by model name, so models may be
/// registered in any order. Names are resolved, and key defaults filled in,
/// by [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Model definitions (unresolved)
    models: Vec<ModelDef>,
}

/// Unresolved model definition.
#[derive(Debug, Clone)]
pub struct ModelDef {
    name: String,
    primary_key: Option<String>,
    relations: Vec<RelationDef>,
}

/// Unresolved relation definition. Keys left unset get the conventional
/// defaults when the schema is built.
#[derive(Debug, Clone)]
pub struct RelationDef {
    name: String,
    target: String,
    kind: RelationDefKind,
    foreign_key: Option<String>,
    local_key: Option<String>,
    table: Option<String>,
    related_pivot_key: Option<String>,
    related_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelationDefKind {
    HasOne,
    HasMany,
    BelongsTo,
    BelongsToMany,
}

impl Builder {
    pub fn model(&mut self, model: ModelDef) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut names = HashMap::with_capacity(self.models.len());

        for (index, def) in self.models.iter().enumerate() {
            if names.insert(def.name.clone(), ModelId(index)).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is registered more than once",
                    def.name
                )));
            }
        }

        let mut models = IndexMap::with_capacity(self.models.len());

        for (index, def) in self.models.iter().enumerate() {
            let id = ModelId(index);
            let primary_key = def.key_name();
            let mut relations = IndexMap::with_capacity(def.relations.len());

            for relation_def in &def.relations {
                if relation_def.name == primary_key {
                    return Err(Error::invalid_schema(format!(
                        "relation `{}.{}` shadows the primary key",
                        def.name, relation_def.name
                    )));
                }

                let target = *names.get(&relation_def.target).ok_or_else(|| {
                    Error::relation_target_not_registered(
                        &def.name,
                        &relation_def.name,
                        &relation_def.target,
                    )
                })?;
                let target_def = &self.models[target.0];

                let relation = Relation {
                    name: relation_def.name.clone(),
                    owner: id,
                    target,
                    kind: relation_def.resolve(def, target_def),
                };

                if relations.insert(relation.name.clone(), relation).is_some() {
                    return Err(Error::invalid_schema(format!(
                        "relation `{}.{}` is declared more than once",
                        def.name, relation_def.name
                    )));
                }
            }

            models.insert(
                id,
                Model {
                    id,
                    name: def.name.clone(),
                    primary_key,
                    relations,
                },
            );
        }

        Ok(Schema { models, names })
    }
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: None,
            relations: vec![],
        }
    }

    /// Sets the primary key attribute. Defaults to `id`.
    pub fn primary_key(mut self, key: impl Into<String>) -> Self {
        self.primary_key = Some(key.into());
        self
    }

    pub fn relation(mut self, relation: RelationDef) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn has_one(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(RelationDef::has_one(name, target))
    }

    pub fn has_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(RelationDef::has_many(name, target))
    }

    pub fn belongs_to(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(RelationDef::belongs_to(name, target))
    }

    pub fn belongs_to_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.relation(RelationDef::belongs_to_many(name, target))
    }

    fn key_name(&self) -> String {
        self.primary_key.clone().unwrap_or_else(|| "id".to_string())
    }

    /// `BlogPost` -> `blog_post_id`
    fn default_foreign_key(&self) -> String {
        format!("{}_id", self.name.to_snake_case())
    }
}

impl RelationDef {
    fn new(name: impl Into<String>, target: impl Into<String>, kind: RelationDefKind) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            kind,
            foreign_key: None,
            local_key: None,
            table: None,
            related_pivot_key: None,
            related_key: None,
        }
    }

    pub fn has_one(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, RelationDefKind::HasOne)
    }

    pub fn has_many(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, RelationDefKind::HasMany)
    }

    pub fn belongs_to(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, RelationDefKind::BelongsTo)
    }

    pub fn belongs_to_many(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, target, RelationDefKind::BelongsToMany)
    }

    /// Foreign key attribute. For belongs-to-many this is the join table
    /// column referencing the declaring model.
    pub fn foreign_key(mut self, key: impl Into<String>) -> Self {
        self.foreign_key = Some(key.into());
        self
    }

    /// Key on the declaring model for has-one, has-many and belongs-to-many;
    /// the owner key on the related model for belongs-to.
    pub fn local_key(mut self, key: impl Into<String>) -> Self {
        self.local_key = Some(key.into());
        self
    }

    /// Join table of a belongs-to-many relation.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Join table column referencing the related model.
    pub fn related_pivot_key(mut self, key: impl Into<String>) -> Self {
        self.related_pivot_key = Some(key.into());
        self
    }

    /// Key on the related model referenced by the join table.
    pub fn related_key(mut self, key: impl Into<String>) -> Self {
        self.related_key = Some(key.into());
        self
    }

    fn resolve(&self, owner: &ModelDef, target: &ModelDef) -> RelationKind {
        match self.kind {
            RelationDefKind::HasOne => HasOne {
                foreign_key: self
                    .foreign_key
                    .clone()
                    .unwrap_or_else(|| owner.default_foreign_key()),
                local_key: self.local_key.clone().unwrap_or_else(|| owner.key_name()),
            }
            .into(),
            RelationDefKind::HasMany => HasMany {
                foreign_key: self
                    .foreign_key
                    .clone()
                    .unwrap_or_else(|| owner.default_foreign_key()),
                local_key: self.local_key.clone().unwrap_or_else(|| owner.key_name()),
            }
            .into(),
            RelationDefKind::BelongsTo => BelongsTo {
                foreign_key: self
                    .foreign_key
                    .clone()
                    .unwrap_or_else(|| format!("{}_id", self.name.to_snake_case())),
                owner_key: self
                    .local_key
                    .clone()
                    .unwrap_or_else(|| target.key_name()),
            }
            .into(),
            RelationDefKind::BelongsToMany => BelongsToMany {
                table: self
                    .table
                    .clone()
                    .unwrap_or_else(|| join_table_name(owner, target)),
                foreign_pivot_key: self
                    .foreign_key
                    .clone()
                    .unwrap_or_else(|| owner.default_foreign_key()),
                related_pivot_key: self
                    .related_pivot_key
                    .clone()
                    .unwrap_or_else(|| target.default_foreign_key()),
                parent_key: self.local_key.clone().unwrap_or_else(|| owner.key_name()),
                related_key: self
                    .related_key
                    .clone()
                    .unwrap_or_else(|| target.key_name()),
            }
            .into(),
        }
    }
}

/// `Post` + `Tag` -> `post_tag`
fn join_table_name(owner: &ModelDef, target: &ModelDef) -> String {
    let mut segments = [owner.name.to_snake_case(), target.name.to_snake_case()];
    segments.sort();
    segments.join("_")
}
