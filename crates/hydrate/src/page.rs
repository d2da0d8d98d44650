use crate::{Error, Result};

use serde::Serialize;
use serde_json::Value;
use std::ops::Deref;
use url::{form_urlencoded, Url};

/// A page of search results.
///
/// Holds the instances the search returned for the current page along with
/// the total number of matches, so page counts and neighbour links can be
/// computed without running the search again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<M> {
    /// Items in this page
    pub items: Vec<M>,

    /// Raw `hits` block of the response the page was built from
    #[serde(skip)]
    hits: Option<Value>,

    total: u64,

    per_page: usize,

    current_page: usize,

    /// Base URL for page links
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,

    #[serde(skip)]
    page_name: String,
}

/// Where the current page comes from.
///
/// Built explicitly by the caller, typically from the request URL with
/// [`PageContext::from_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub page: Option<usize>,
    pub path: Option<String>,
    pub page_name: String,
}

impl<M> Page<M> {
    pub fn new(
        items: Vec<M>,
        hits: Option<Value>,
        total: u64,
        per_page: usize,
        context: Option<&PageContext>,
    ) -> Self {
        let context = context.cloned().unwrap_or_default();

        Self {
            items,
            hits,
            total,
            per_page: per_page.max(1),
            current_page: context.current_page(),
            path: context.path,
            page_name: context.page_name,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn hits(&self) -> Option<&Value> {
        self.hits.as_ref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Number of the last page; at least 1, even with no results.
    pub fn last_page(&self) -> usize {
        let pages = self.total.div_ceil(self.per_page as u64);
        usize::try_from(pages).unwrap_or(usize::MAX).max(1)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// 1-based position of the first item on this page across all results.
    ///
    /// `None` when the page is empty or the position does not fit a `usize`,
    /// which only happens for page numbers far past the last page.
    pub fn first_item(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        (self.current_page - 1)
            .checked_mul(self.per_page)?
            .checked_add(1)
    }

    /// 1-based position of the last item on this page across all results.
    pub fn last_item(&self) -> Option<usize> {
        self.first_item()?.checked_add(self.items.len() - 1)
    }

    /// Link to `page`, or `None` when the page has no path.
    pub fn url(&self, page: usize) -> Option<String> {
        let path = self.path.as_deref()?;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.page_name, &page.max(1).to_string())
            .finish();
        let separator = if path.contains('?') { '&' } else { '?' };

        Some(format!("{path}{separator}{query}"))
    }

    pub fn next_page_url(&self) -> Option<String> {
        if !self.has_more_pages() {
            return None;
        }

        self.url(self.current_page + 1)
    }

    pub fn previous_page_url(&self) -> Option<String> {
        if self.on_first_page() {
            return None;
        }

        self.url(self.current_page - 1)
    }
}

// Allow using pages like a regular slice for ergonomics.
impl<M> Deref for Page<M> {
    type Target = [M];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl PageContext {
    pub const DEFAULT_PAGE_NAME: &'static str = "page";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn page_name(mut self, page_name: impl Into<String>) -> Self {
        self.page_name = page_name.into();
        self
    }

    /// Reads the page from the `page` query parameter of a request URL.
    pub fn from_url(url: &str) -> Result<PageContext> {
        Self::from_url_with_name(url, Self::DEFAULT_PAGE_NAME)
    }

    /// Reads the page from the `page_name` query parameter of a request URL.
    ///
    /// The URL may be absolute or a path (`/search?page=2`). Values that are
    /// not integers of at least 1 are ignored. The path is the URL without
    /// its query and fragment.
    pub fn from_url_with_name(url: &str, page_name: &str) -> Result<PageContext> {
        let (parsed, relative) = match Url::parse(url) {
            Ok(parsed) => (parsed, false),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse("http://localhost/").map_err(url_error)?;
                (base.join(url).map_err(url_error)?, true)
            }
            Err(err) => return Err(url_error(err).context(format!("request URL `{url}`"))),
        };

        let page = parsed
            .query_pairs()
            .find(|(name, _)| name == page_name)
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .filter(|page| *page >= 1);

        let path = if relative {
            parsed.path().to_string()
        } else {
            let mut path = parsed.clone();
            path.set_query(None);
            path.set_fragment(None);
            path.to_string()
        };

        Ok(PageContext {
            page,
            path: Some(path),
            page_name: page_name.to_string(),
        })
    }

    fn current_page(&self) -> usize {
        self.page.filter(|page| *page >= 1).unwrap_or(1)
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            page: None,
            path: None,
            page_name: Self::DEFAULT_PAGE_NAME.to_string(),
        }
    }
}

fn url_error(err: url::ParseError) -> Error {
    Error::from(anyhow::Error::new(err))
}
