mod builder;
pub use builder::Builder;

use crate::relation::{Match, NewPivot};
use crate::schema::{Model, Relation, Schema};
use crate::{
    hit::kind, Attributes, Config, Error, Hit, Instance, Meta, NullRelations, PageContext,
    ResultCollection, Result,
};

use serde_json::Value;
use std::sync::Arc;

/// Turns search hits into model instances, following the relations declared
/// in the schema.
///
/// Cheap to clone; the schema and config are shared.
#[derive(Debug, Clone)]
pub struct Hydrator {
    schema: Arc<Schema>,
    config: Arc<Config>,
}

impl Hydrator {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new(schema: Schema, config: Config) -> Hydrator {
        Hydrator {
            schema: Arc::new(schema),
            config: Arc::new(config),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Hydrates every hit of `items` as an instance of `model` and wraps them,
    /// in hit order, with the response metadata `meta`.
    ///
    /// `meta` is usually the whole response body. When it is `null` or an
    /// empty object the collection is left without metadata.
    pub fn hydrate_elastic_result<I>(
        &self,
        model: &str,
        items: I,
        meta: &Value,
    ) -> Result<ResultCollection>
    where
        I: IntoIterator<Item = Value>,
    {
        let model = self.schema.model_by_name(model)?;

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, hit)| {
                self.hydrate_hit(model, hit)
                    .map_err(|err| err.context(format!("hit {index}")))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(model = %model.name, hits = items.len(), "hydrated search result");

        let mut collection = ResultCollection::new(items).with_page_size(self.config.page_size);

        // `null`, `{}` and `[]` all mean "no metadata".
        let has_meta = match meta {
            Value::Null => false,
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        };

        if has_meta {
            collection.set_meta(Meta::from_value(meta)?);
        }

        Ok(collection)
    }

    /// Hydrates a whole search response body: hits come from `hits.hits` and
    /// the body is the metadata.
    pub fn hydrate_response(&self, model: &str, body: &Value) -> Result<ResultCollection> {
        let hits = match body.pointer("/hits/hits") {
            None | Some(Value::Null) => vec![],
            Some(Value::Array(hits)) => hits.clone(),
            Some(other) => {
                return Err(Error::invalid_meta(format!(
                    "`hits.hits` must be an array, found {}",
                    kind(other)
                )))
            }
        };

        self.hydrate_elastic_result(model, hits, body)
    }

    /// Hydrates one hit as an instance of `model`.
    pub fn new_from_hit(&self, model: &str, hit: Value) -> Result<Instance> {
        let model = self.schema.model_by_name(model)?;
        self.hydrate_hit(model, hit)
    }

    fn hydrate_hit(&self, model: &Model, hit: Value) -> Result<Instance> {
        let mut hit = Hit::from_value(hit)?;
        let attributes = hit.take_attributes(&model.primary_key);

        let mut instance = self.new_from_builder_recursive(model, attributes, None)?;
        instance.score = hit.score;
        instance.is_document = true;
        instance.version = hit.version;
        instance.index = hit.index;

        Ok(instance)
    }

    /// Creates an existing instance of `model` from `attributes`, hydrating
    /// attributes that carry relation data into related instances.
    ///
    /// `parent` is the relation the instance is being loaded through, if any.
    /// Only a belongs-to-many parent can turn a `pivot` attribute into a pivot
    /// record.
    pub fn new_from_builder_recursive(
        &self,
        model: &Model,
        attributes: Attributes,
        parent: Option<&Relation>,
    ) -> Result<Instance> {
        let mut instance = Instance::new_existing(model, attributes);

        self.load_relations_recursive(model, &mut instance)?;
        self.load_pivot(model, &mut instance, parent)?;

        Ok(instance)
    }

    fn load_relations_recursive(&self, model: &Model, instance: &mut Instance) -> Result<()> {
        let relations = instance
            .attributes()
            .keys()
            .filter_map(|name| model.relation(name))
            .collect::<Vec<_>>();

        for relation in relations {
            let value = instance.unset(&relation.name).unwrap_or(Value::Null);

            if value.is_null() {
                match self.config.null_relations {
                    NullRelations::Drop => {
                        tracing::trace!(model = %model.name, relation = %relation.name, "dropped null relation");
                    }
                    NullRelations::MatchEmpty => {
                        relation.match_children(
                            std::slice::from_mut(instance),
                            vec![],
                            &relation.name,
                        );
                    }
                }
                continue;
            }

            // An empty object is an empty record list, not one blank record.
            let records = match value {
                Value::Array(items) if is_multi_level_array(&items) => items,
                Value::Object(map) if map.is_empty() => vec![],
                value => vec![value],
            };

            let children = self.hydrate_recursive(relation, records).map_err(|err| {
                err.context(format!("relation `{}.{}`", model.name, relation.name))
            })?;

            tracing::trace!(
                model = %model.name,
                relation = %relation.name,
                children = children.len(),
                "matched relation"
            );

            relation.match_children(std::slice::from_mut(instance), children, &relation.name);
        }

        Ok(())
    }

    fn load_pivot(
        &self,
        model: &Model,
        instance: &mut Instance,
        parent: Option<&Relation>,
    ) -> Result<()> {
        let Some(value) = instance.unset("pivot") else {
            return Ok(());
        };

        let belongs_to_many = parent
            .and_then(Relation::as_belongs_to_many)
            .ok_or_else(|| Error::invalid_pivot(&model.name))?;

        let attributes = match value {
            Value::Null => Attributes::new(),
            Value::Object(map) => map.into_iter().collect(),
            other => {
                return Err(Error::invalid_record(
                    &model.name,
                    format!("`pivot` must be an object, found {}", kind(&other)),
                ))
            }
        };

        instance.set_pivot(belongs_to_many.new_existing_pivot(attributes));
        Ok(())
    }

    /// Hydrates the related records of `relation`, in order.
    fn hydrate_recursive(&self, relation: &Relation, records: Vec<Value>) -> Result<Vec<Instance>> {
        let target = relation.target(&self.schema);

        records
            .into_iter()
            .map(|record| {
                let attributes = self.record_attributes(target, record)?;
                self.new_from_builder_recursive(target, attributes, Some(relation))
            })
            .collect()
    }

    fn record_attributes(&self, target: &Model, record: Value) -> Result<Attributes> {
        match record {
            Value::Object(map) if self.config.unwrap_nested_hits && map.contains_key("_source") => {
                Ok(Hit::nested(map)?.take_attributes(&target.primary_key))
            }
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(Error::invalid_record(
                &target.name,
                format!("expected an object, found {}", kind(&other)),
            )),
        }
    }

    /// Reads the current page from a request URL, using the configured page
    /// parameter name.
    pub fn page_context(&self, url: &str) -> Result<PageContext> {
        PageContext::from_url_with_name(url, &self.config.page_name)
    }
}

/// Returns `true` if every element is itself an array (a JSON array or
/// object), i.e. `items` holds several records rather than one.
///
/// An empty slice is multi-level.
pub fn is_multi_level_array(items: &[Value]) -> bool {
    items
        .iter()
        .all(|item| matches!(item, Value::Array(_) | Value::Object(_)))
}
