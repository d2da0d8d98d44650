use crate::{Config, Instance, Meta, Page, PageContext, Result};

use serde_json::{Map, Value};
use std::ops::Deref;

/// Hydrated instances of one search response, in hit order, together with
/// the response metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCollection {
    items: Vec<Instance>,
    meta: Meta,
    page_size: usize,
}

impl ResultCollection {
    pub fn new(items: Vec<Instance>) -> Self {
        Self {
            items,
            meta: Meta::default(),
            page_size: Config::DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size `paginate` falls back to.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Replaces the search metadata.
    pub fn set_meta(&mut self, meta: Meta) -> &mut Self {
        self.meta = meta;
        self
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Total number of documents matching the search, which may exceed the
    /// number of instances held.
    pub fn total_hits(&self) -> Result<u64> {
        self.meta.total_hits()
    }

    pub fn max_score(&self) -> Option<f64> {
        self.meta.max_score()
    }

    pub fn shards(&self) -> Option<&Value> {
        self.meta.shards.as_ref()
    }

    pub fn took(&self) -> Option<u64> {
        self.meta.took
    }

    pub fn timed_out(&self) -> bool {
        self.meta.timed_out()
    }

    /// The raw `hits` block of the response.
    pub fn hits(&self) -> Option<&Value> {
        self.meta.hits.as_ref()
    }

    pub fn aggregations(&self) -> &Map<String, Value> {
        &self.meta.aggregations
    }

    pub fn aggregation(&self, name: &str) -> Option<&Value> {
        self.meta.aggregations.get(name)
    }

    pub fn items(&self) -> &[Instance] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Instance> {
        self.items
    }

    /// Builds a page over the held instances.
    ///
    /// The search already returned one page worth of hits, so every instance
    /// lands on the page; the total comes from `hits.total`. The current page
    /// is read from `context` and defaults to 1.
    pub fn paginate(
        &self,
        page_size: Option<usize>,
        context: Option<&PageContext>,
    ) -> Result<Page<Instance>> {
        self.clone().into_page(page_size, context)
    }

    /// Like [`paginate`](Self::paginate), without cloning the instances.
    pub fn into_page(
        self,
        page_size: Option<usize>,
        context: Option<&PageContext>,
    ) -> Result<Page<Instance>> {
        let total = self.total_hits()?;
        let per_page = page_size.unwrap_or(self.page_size);

        Ok(Page::new(self.items, self.meta.hits, total, per_page, context))
    }
}

impl Deref for ResultCollection {
    type Target = [Instance];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl IntoIterator for ResultCollection {
    type Item = Instance;
    type IntoIter = std::vec::IntoIter<Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a Instance;
    type IntoIter = std::slice::Iter<'a, Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
