use crate::hit::kind;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Search response metadata carried by a [`ResultCollection`].
///
/// [`ResultCollection`]: crate::ResultCollection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    /// `took`, in milliseconds
    pub took: Option<u64>,

    /// `timed_out`, as returned
    pub timed_out: Option<Value>,

    /// `_shards`
    pub shards: Option<Value>,

    /// The raw `hits` block: `total`, `max_score` and the hit array
    pub hits: Option<Value>,

    /// `aggregations`; empty when the response has none
    pub aggregations: Map<String, Value>,
}

impl Meta {
    /// Reads metadata from a search response body (or any object shaped like
    /// one). `null` entries count as absent.
    pub fn from_value(value: &Value) -> Result<Meta> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Meta::default()),
            other => {
                return Err(Error::invalid_meta(format!(
                    "expected an object, found {}",
                    kind(other)
                )))
            }
        };

        let present = |key: &str| map.get(key).filter(|value| !value.is_null());

        let took = match present("took") {
            None => None,
            Some(took) => Some(took.as_u64().ok_or_else(|| {
                Error::invalid_meta(format!("`took` must be an integer, found {}", kind(took)))
            })?),
        };

        let aggregations = match present("aggregations") {
            None => Map::new(),
            Some(Value::Object(aggregations)) => aggregations.clone(),
            Some(other) => {
                return Err(Error::invalid_meta(format!(
                    "`aggregations` must be an object, found {}",
                    kind(other)
                )))
            }
        };

        Ok(Meta {
            took,
            timed_out: present("timed_out").cloned(),
            shards: present("_shards").cloned(),
            hits: present("hits").cloned(),
            aggregations,
        })
    }

    /// `hits.total`, in either the integer form or the
    /// `{ "value": n, "relation": "eq" }` form.
    pub fn total_hits(&self) -> Result<u64> {
        let hits = self
            .hits
            .as_ref()
            .ok_or_else(|| Error::invalid_meta("`hits` is not set"))?;

        let total = hits
            .get("total")
            .filter(|total| !total.is_null())
            .ok_or_else(|| Error::invalid_meta("`hits.total` is not set"))?;

        total
            .as_u64()
            .or_else(|| total.get("value").and_then(Value::as_u64))
            .ok_or_else(|| {
                Error::invalid_meta(format!(
                    "`hits.total` must be an integer or an object with a `value`, found {}",
                    kind(total)
                ))
            })
    }

    /// `hits.max_score`; `None` when absent or `null`.
    pub fn max_score(&self) -> Option<f64> {
        self.hits.as_ref()?.get("max_score")?.as_f64()
    }

    /// `timed_out`, coerced to a boolean by truthiness.
    pub fn timed_out(&self) -> bool {
        self.timed_out.as_ref().is_some_and(truthy)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
