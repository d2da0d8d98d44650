use crate::schema::{Model, ModelId};
use crate::{Attributes, Key, Result};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A hydrated model instance.
///
/// Instances are dynamic: attributes are whatever the search document
/// carried, and relations are whatever the schema declared and the document
/// contained. Use [`Instance::deserialize`] to get a typed struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    model: ModelId,

    /// Attribute holding the primary key
    key_name: String,

    attributes: Attributes,

    relations: IndexMap<String, Loaded>,

    pivot: Option<Pivot>,

    exists: bool,

    /// Relevance score of the hit this instance was hydrated from
    pub score: Option<f64>,

    /// Document version, when the search requested it
    pub version: Option<i64>,

    /// Index the document was found in
    pub index: Option<String>,

    /// Set once the instance is built from a search hit
    pub is_document: bool,
}

/// A loaded relation.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    One(Option<Box<Instance>>),
    Many(Vec<Instance>),
}

/// Join table record of a belongs-to-many relation, attached to the related
/// instance it was loaded with.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    pub table: String,
    pub attributes: Attributes,
    pub exists: bool,
}

impl Instance {
    /// Creates an instance of `model` that represents a stored record, with
    /// `attributes` assigned verbatim.
    pub fn new_existing(model: &Model, attributes: Attributes) -> Instance {
        Instance {
            model: model.id,
            key_name: model.primary_key.clone(),
            attributes,
            relations: IndexMap::new(),
            pivot: None,
            exists: true,
            score: None,
            version: None,
            index: None,
            is_document: false,
        }
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// The primary key, coerced like a hit's `_id`.
    pub fn key(&self) -> Option<Key> {
        self.get(&self.key_name).and_then(Key::coerce)
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Replaces all attributes.
    pub fn set_raw_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Removes an attribute, keeping the order of the others.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    pub fn relation(&self, name: &str) -> Option<&Loaded> {
        self.relations.get(name)
    }

    pub fn relations(&self) -> impl Iterator<Item = (&str, &Loaded)> {
        self.relations.iter().map(|(name, loaded)| (name.as_str(), loaded))
    }

    pub fn relation_loaded(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    pub fn set_relation(&mut self, name: impl Into<String>, loaded: Loaded) {
        self.relations.insert(name.into(), loaded);
    }

    /// The related instance of a loaded single-record relation.
    pub fn one(&self, name: &str) -> Option<&Instance> {
        match self.relations.get(name)? {
            Loaded::One(one) => one.as_deref(),
            Loaded::Many(_) => None,
        }
    }

    /// The related instances of a loaded collection relation; empty when the
    /// relation is not loaded.
    pub fn many(&self, name: &str) -> &[Instance] {
        match self.relations.get(name) {
            Some(Loaded::Many(many)) => many,
            _ => &[],
        }
    }

    pub fn pivot(&self) -> Option<&Pivot> {
        self.pivot.as_ref()
    }

    pub fn set_pivot(&mut self, pivot: Pivot) {
        self.pivot = Some(pivot);
    }

    /// Deserializes the attributes into `T`. Relations and the pivot are not
    /// included.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let map = self
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect::<serde_json::Map<_, _>>();

        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

impl Loaded {
    pub fn is_empty(&self) -> bool {
        match self {
            Loaded::One(one) => one.is_none(),
            Loaded::Many(many) => many.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Loaded::One(one) => usize::from(one.is_some()),
            Loaded::Many(many) => many.len(),
        }
    }
}

impl Pivot {
    pub fn new_existing(table: impl Into<String>, attributes: Attributes) -> Pivot {
        Pivot {
            table: table.into(),
            attributes,
            exists: true,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

// Serialized the way the instance is rendered: attributes, then loaded
// relations, then `pivot`, all as one flat object.
impl Serialize for Instance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = self.attributes.len() + self.relations.len() + usize::from(self.pivot.is_some());
        let mut map = serializer.serialize_map(Some(len))?;

        for (name, value) in &self.attributes {
            map.serialize_entry(name, value)?;
        }

        for (name, loaded) in &self.relations {
            map.serialize_entry(name, loaded)?;
        }

        if let Some(pivot) = &self.pivot {
            map.serialize_entry("pivot", pivot)?;
        }

        map.end()
    }
}

impl Serialize for Loaded {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Loaded::One(one) => one.serialize(serializer),
            Loaded::Many(many) => many.serialize(serializer),
        }
    }
}

impl Serialize for Pivot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}
