use crate::Result;
use serde::{Deserialize, Serialize};

/// Hydration settings.
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// let config = elastic_hydrate::Config::from_json(r#"{ "null_relations": "match_empty" }"#).unwrap();
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to do with a relation attribute whose value is `null`.
    pub null_relations: NullRelations,

    /// Read nested records shaped like hits (`{"_source": ..}`) as hits.
    pub unwrap_nested_hits: bool,

    /// Page size used by `ResultCollection::paginate` when none is given.
    pub page_size: usize,

    /// Query parameter carrying the current page.
    pub page_name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullRelations {
    /// Remove the attribute and leave the relation unloaded.
    #[default]
    Drop,

    /// Remove the attribute and match the relation against no children, so
    /// it loads as empty (`None` or an empty list).
    MatchEmpty,
}

impl Config {
    pub const DEFAULT_PAGE_SIZE: usize = 25;

    pub fn from_json(src: &str) -> Result<Config> {
        Ok(serde_json::from_str(src)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            null_relations: NullRelations::default(),
            unwrap_nested_hits: true,
            page_size: Self::DEFAULT_PAGE_SIZE,
            page_name: "page".to_string(),
        }
    }
}
