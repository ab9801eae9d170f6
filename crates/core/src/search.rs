//! Search parameters and paginated search results.
//!
//! `SearchParams` is a normalized, bounded query description: page numbers and page
//! sizes are clamped to at least 1, blank sort fields and filters become absent, and a
//! sort direction is only carried when a sort field is present. `SearchResult` is the
//! paginated answer; every field is derived at construction time.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Page size used when the caller and configuration supply none.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Sort direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Lenient parse: `"desc"` (any case) is descending, anything else ascending.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl core::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// A filter value that may be "empty" (equivalent to no filter at all).
pub trait SearchFilter {
    fn is_empty_filter(&self) -> bool;
}

impl SearchFilter for String {
    fn is_empty_filter(&self) -> bool {
        self.is_empty()
    }
}

/// Normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams<F = String> {
    page: u32,
    per_page: u32,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self::with_default_per_page(DEFAULT_PER_PAGE)
    }
}

impl<F> SearchParams<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty query whose page size defaults to `per_page` (clamped to ≥ 1).
    pub fn with_default_per_page(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sort by `field`. A blank field clears sorting; a missing direction means ascending.
    pub fn with_sort(
        mut self,
        field: impl Into<String>,
        dir: impl Into<Option<SortDirection>>,
    ) -> Self {
        let field = field.into();
        if field.trim().is_empty() {
            self.sort = None;
            self.sort_dir = None;
        } else {
            self.sort = Some(field);
            self.sort_dir = Some(dir.into().unwrap_or_default());
        }
        self
    }

    pub fn with_filter(mut self, filter: F) -> Self
    where
        F: SearchFilter,
    {
        self.filter = if filter.is_empty_filter() {
            None
        } else {
            Some(filter)
        };
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Index of the first item on the requested page (saturating).
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.per_page as usize)
    }
}

/// Loose, deserializable search input (e.g. query-string shaped).
///
/// Converted into [`SearchParams`] with the usual normalization: non-positive numbers
/// clamp to 1, blank strings become absent, unknown directions mean ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchInput {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

impl SearchInput {
    pub fn into_params(self, default_per_page: u32) -> SearchParams<String> {
        let mut params = SearchParams::with_default_per_page(default_per_page);
        if let Some(page) = self.page {
            params = params.with_page(clamp_positive(page));
        }
        if let Some(per_page) = self.per_page {
            params = params.with_per_page(clamp_positive(per_page));
        }
        if let Some(sort) = self.sort {
            let dir = self.sort_dir.as_deref().map(SortDirection::parse_lenient);
            params = params.with_sort(sort, dir);
        }
        if let Some(filter) = self.filter {
            params = params.with_filter(filter);
        }
        params
    }
}

impl From<SearchInput> for SearchParams<String> {
    fn from(value: SearchInput) -> Self {
        value.into_params(DEFAULT_PER_PAGE)
    }
}

fn clamp_positive(n: i64) -> u32 {
    u32::try_from(n.max(1)).unwrap_or(u32::MAX)
}

/// Paginated search answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<T, F = String> {
    items: Vec<T>,
    total: usize,
    current_page: u32,
    per_page: u32,
    last_page: u32,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<T, F> SearchResult<T, F> {
    /// Build the answer for `params`, where `total` counts all filtered items across
    /// pages and `items` is the requested page.
    pub fn new(items: Vec<T>, total: usize, params: SearchParams<F>) -> Self {
        let per_page = params.per_page.max(1);
        let last_page = u32::try_from(total.div_ceil(per_page as usize))
            .unwrap_or(u32::MAX)
            .max(1);

        Self {
            items,
            total,
            current_page: params.page,
            per_page,
            last_page,
            sort: params.sort,
            sort_dir: params.sort_dir,
            filter: params.filter,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Convert every item, keeping pagination metadata.
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> SearchResult<U, F> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        }
    }
}
