use crate::{Attributes, Error, Key, Result};
use serde_json::{Map, Value};

/// One raw record of a search response's `hits.hits` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    /// `_id`, coerced so numeric identifiers compare as integers
    pub id: Option<Key>,

    /// `_index`
    pub index: Option<String>,

    /// `_score`; `null` for sorted queries
    pub score: Option<f64>,

    /// `_version`, only returned when requested
    pub version: Option<i64>,

    /// `_source`
    pub source: Attributes,

    /// `fields`, overlaid on `_source`
    pub fields: Option<Attributes>,
}

impl Hit {
    /// Parses a top-level hit. `_source` and `_score` must be present.
    pub fn from_value(value: Value) -> Result<Hit> {
        Hit::parse(value, true)
    }

    /// Parses a hit-shaped record nested in another document. Only `_source`
    /// is required.
    pub(crate) fn nested(map: Map<String, Value>) -> Result<Hit> {
        Hit::parse_map(map, false)
    }

    fn parse(value: Value, require_score: bool) -> Result<Hit> {
        match value {
            Value::Object(map) => Hit::parse_map(map, require_score),
            other => Err(Error::invalid_hit(format!(
                "expected an object, found {}",
                kind(&other)
            ))),
        }
    }

    fn parse_map(mut map: Map<String, Value>, require_score: bool) -> Result<Hit> {
        let source = match map.remove("_source") {
            Some(Value::Object(source)) => source.into_iter().collect(),
            Some(Value::Null) => Attributes::new(),
            Some(other) => {
                return Err(Error::invalid_hit(format!(
                    "`_source` must be an object, found {}",
                    kind(&other)
                )))
            }
            None => return Err(Error::missing_field("_source")),
        };

        let score = match map.remove("_score") {
            Some(Value::Null) => None,
            Some(Value::Number(score)) => score.as_f64(),
            Some(other) => {
                return Err(Error::invalid_hit(format!(
                    "`_score` must be a number, found {}",
                    kind(&other)
                )))
            }
            None if require_score => return Err(Error::missing_field("_score")),
            None => None,
        };

        let id = match map.remove("_id") {
            None | Some(Value::Null) => None,
            Some(id) => Some(Key::coerce(&id).ok_or_else(|| {
                Error::invalid_hit(format!(
                    "`_id` must be a string or a number, found {}",
                    kind(&id)
                ))
            })?),
        };

        let version = match map.remove("_version") {
            None | Some(Value::Null) => None,
            Some(version) => Some(version.as_i64().ok_or_else(|| {
                Error::invalid_hit(format!(
                    "`_version` must be an integer, found {}",
                    kind(&version)
                ))
            })?),
        };

        let index = match map.remove("_index") {
            Some(Value::String(index)) => Some(index),
            _ => None,
        };

        let fields = match map.remove("fields") {
            None | Some(Value::Null) => None,
            Some(Value::Object(fields)) => Some(fields.into_iter().collect()),
            Some(other) => {
                return Err(Error::invalid_hit(format!(
                    "`fields` must be an object, found {}",
                    kind(&other)
                )))
            }
        };

        Ok(Hit {
            id,
            index,
            score,
            version,
            source,
            fields,
        })
    }

    /// Takes the hit's attribute set: `_source`, overlaid with `fields`, with
    /// the identifier stored under `key_name`.
    ///
    /// The identifier is written last so it always wins over a source or
    /// field value of the same name.
    pub fn take_attributes(&mut self, key_name: &str) -> Attributes {
        let mut attributes = std::mem::take(&mut self.source);

        if let Some(fields) = self.fields.take() {
            attributes.extend(fields);
        }

        if let Some(id) = &self.id {
            attributes.insert(key_name.to_string(), id.to_value());
        }

        attributes
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
