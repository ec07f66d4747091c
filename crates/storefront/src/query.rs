//! URL query-string state: the persisted form of [`FilterState`].
//!
//! Encoding: `category=<slug>&goal=<slug>&activity=<slug>`, keys in that order,
//! null fields omitted. Parameters the storefront does not own are carried
//! through filter toggles untouched; a reset drops the whole query string.

use crate::filter::{FilterKey, FilterState};

/// Decoded query string as ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string. A leading `?` is ignored, `+` decodes to a
    /// space and `%XX` escapes are decoded; malformed escapes are kept as-is.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Build the query for a filter state (filter keys only).
    pub fn from_filters(filters: &FilterState) -> Self {
        Self::new().with_filters(filters)
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`, replacing every existing occurrence. The first
    /// occurrence keeps its position; new keys are appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace the filter keys with `filters`, keeping every other parameter.
    pub fn with_filters(mut self, filters: &FilterState) -> Self {
        for key in FilterKey::ALL {
            self.remove(key.as_str());
        }
        for (key, value) in filters.active() {
            self.pairs.push((key.as_str().to_string(), value.to_string()));
        }
        self
    }

    /// Read the filter state. Absent or empty parameters are null.
    pub fn to_filters(&self) -> FilterState {
        let read = |key: FilterKey| {
            self.get(key.as_str())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        FilterState {
            category: read(FilterKey::Category),
            goal: read(FilterKey::Goal),
            activity: read(FilterKey::Activity),
        }
    }

    /// Encoded query string, without the leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Navigation/URL state provider: where the filter state lives between renders.
pub trait UrlStateProvider {
    /// Current decoded query.
    fn query(&self) -> QueryParams;

    /// Write a new query (a navigation to `base_path?query`).
    fn set_query(&mut self, params: QueryParams);

    fn base_path(&self) -> &str;

    fn filters(&self) -> FilterState {
        self.query().to_filters()
    }

    /// Full location: the base path, plus `?query` when there is one.
    fn href(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            self.base_path().to_string()
        } else {
            format!("{}?{}", self.base_path(), query.encode())
        }
    }
}

impl<T> UrlStateProvider for &mut T
where
    T: UrlStateProvider + ?Sized,
{
    fn query(&self) -> QueryParams {
        (**self).query()
    }

    fn set_query(&mut self, params: QueryParams) {
        (**self).set_query(params)
    }

    fn base_path(&self) -> &str {
        (**self).base_path()
    }
}

/// In-memory address bar with a navigation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryUrlState {
    base_path: String,
    current: QueryParams,
    history: Vec<String>,
}

impl InMemoryUrlState {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            current: QueryParams::new(),
            history: Vec::new(),
        }
    }

    /// Start from a location such as `/productos?category=vitaminas`.
    pub fn from_href(href: &str) -> Self {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        Self {
            base_path: path.to_string(),
            current: QueryParams::parse(query),
            history: Vec::new(),
        }
    }

    /// Locations written so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Navigation performed outside the storefront (address bar edit, back
    /// button, a link to the base path).
    pub fn navigate(&mut self, query: &str) {
        self.set_query(QueryParams::parse(query));
    }

    /// The consumer navigates back to the bare base path.
    pub fn reset_external(&mut self) {
        self.set_query(QueryParams::new());
    }
}

impl UrlStateProvider for InMemoryUrlState {
    fn query(&self) -> QueryParams {
        self.current.clone()
    }

    fn set_query(&mut self, params: QueryParams) {
        self.current = params;
        let href = self.href();
        self.history.push(href);
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}
