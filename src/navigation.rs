//! In-memory page location and history stack

use anyhow::{Context, Result};
use std::fmt;
use url::Url;

const BASE: &str = "http://localhost";

/// Path plus ordered query parameters of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    path: String,
    query: Vec<(String, String)>,
}

impl PageUrl {
    /// Parse a site-relative ("/properties?city=x") or absolute URL
    pub fn parse(raw: &str) -> Result<Self> {
        let base = Url::parse(BASE).context("Invalid base URL")?;
        let url = base
            .join(raw)
            .with_context(|| format!("Failed to parse page URL '{}'", raw))?;

        Ok(Self {
            path: url.path().to_string(),
            query: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        })
    }

    pub fn new(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn without_query(&self) -> Self {
        Self::new(self.path.clone(), Vec::new())
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            return write!(f, "{}", self.path);
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        write!(f, "{}?{}", self.path, query)
    }
}

/// Browser-style history stack
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<PageUrl>,
}

impl History {
    pub fn new(initial: PageUrl) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn current(&self) -> &PageUrl {
        // Constructed with one entry and never popped
        &self.entries[self.entries.len() - 1]
    }

    /// Navigate, adding an entry
    pub fn push(&mut self, url: PageUrl) {
        self.entries.push(url);
    }

    /// Rewrite the current entry in place
    pub fn replace(&mut self, url: PageUrl) {
        let last = self.entries.len() - 1;
        self.entries[last] = url;
    }

    /// Number of entries, counting the initial page; always at least 1
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
