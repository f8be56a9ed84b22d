//! URL-driven selection for the directory page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The directory keeps no filter state of its own: the query string is the
//! single source of truth, so reload, back/forward, and shared links all
//! reproduce the same view. [`Selection`] is the parsed form of the six
//! recognized params, and its `with_*` methods produce the selection a
//! control should link to, which [`Selection::href`] turns back into a URL.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use leptos_router::params::ParamsMap;

use crate::util::query_string;

/// Route serving the filterable directory view.
pub const DIRECTORY_PATH: &str = "/modules";

/// Parsed query params recognized by the directory page.
///
/// Absent and empty params both read as `None`, so `?category=` links behave
/// like links without the param at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Exact category filter, `?category=`.
    pub category: Option<String>,
    /// Exact module type filter, `?type=`.
    pub kind: Option<String>,
    /// Compatibility tag filter, `?version=`; only known keys take effect.
    pub version: Option<String>,
    /// Sort key, `?sortBy=`; unknown keys fall back to downloads.
    pub sort_by: Option<String>,
    /// Sort direction, `?orderBy=`; unknown keys fall back to descending.
    pub order_by: Option<String>,
    /// Free-text search needle, `?q=`.
    pub q: Option<String>,
}

/// The param keys the directory recognizes, in serialization order.
const QUERY_KEYS: [&str; 6] = ["category", "type", "version", "sortBy", "orderBy", "q"];

impl Selection {
    /// Read the recognized params out of the current route query.
    pub fn from_query_map(query: &ParamsMap) -> Self {
        let mut selection = Self::default();
        for key in QUERY_KEYS {
            if let Some(value) = query.get(key) {
                selection.set(key, &value);
            }
        }
        selection
    }

    /// Build a selection from decoded `(key, value)` pairs. Unrecognized
    /// keys are dropped.
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut selection = Self::default();
        for (key, value) in pairs {
            selection.set(key, value);
        }
        selection
    }

    fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "category" => &mut self.category,
            "type" => &mut self.kind,
            "version" => &mut self.version,
            "sortBy" => &mut self.sort_by,
            "orderBy" => &mut self.order_by,
            "q" => &mut self.q,
            _ => return,
        };
        *slot = if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        };
    }

    /// Selection after clicking a category facet: selects it, or clears it
    /// when it is already the active one.
    pub fn with_category_toggled(&self, category: &str) -> Self {
        let mut next = self.clone();
        next.category = if self.category.as_deref() == Some(category) {
            None
        } else {
            Some(category.to_owned())
        };
        next
    }

    /// Selection after clicking a type tab. Tabs never toggle off; the
    /// active tab links to itself.
    pub fn with_kind(&self, kind: &str) -> Self {
        let mut next = self.clone();
        next.kind = Some(kind.to_owned());
        next
    }

    /// Selection after clicking a version pill: selects it, or clears it
    /// when it is already the active one.
    pub fn with_version_toggled(&self, version: &str) -> Self {
        let mut next = self.clone();
        next.version = if self.version.as_deref() == Some(version) {
            None
        } else {
            Some(version.to_owned())
        };
        next
    }

    /// Selection with the sort key replaced.
    pub fn with_sort(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.sort_by = Some(key.to_owned());
        next
    }

    /// Selection with the sort direction replaced.
    pub fn with_order(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.order_by = Some(key.to_owned());
        next
    }

    /// Selection with the search needle replaced; blank input clears it.
    pub fn with_search(&self, needle: &str) -> Self {
        let mut next = self.clone();
        next.q = if needle.is_empty() {
            None
        } else {
            Some(needle.to_owned())
        };
        next
    }

    /// The six params in their canonical serialization order.
    pub fn to_query_pairs(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("category", self.category.as_deref()),
            ("type", self.kind.as_deref()),
            ("version", self.version.as_deref()),
            ("sortBy", self.sort_by.as_deref()),
            ("orderBy", self.order_by.as_deref()),
            ("q", self.q.as_deref()),
        ]
    }

    /// Directory URL reproducing this selection.
    pub fn href(&self) -> String {
        query_string::href(DIRECTORY_PATH, &self.to_query_pairs())
    }

    /// The version filter currently in effect, if any. Unset or
    /// unrecognized params leave the full list showing.
    pub fn version_filter(&self) -> Option<&'static VersionFilter> {
        VERSIONS
            .iter()
            .find(|entry| self.version.as_deref() == Some(entry.key))
    }

    /// The sort key in effect; defaults to the first entry (downloads).
    pub fn sort_key(&self) -> &'static SortKey {
        SORTS
            .iter()
            .find(|entry| self.sort_by.as_deref() == Some(entry.key))
            .unwrap_or(&SORTS[0])
    }

    /// The sort direction in effect; defaults to the first entry
    /// (descending).
    pub fn sort_order(&self) -> &'static SortOrder {
        ORDERS
            .iter()
            .find(|entry| self.order_by.as_deref() == Some(entry.key))
            .unwrap_or(&ORDERS[0])
    }
}

/// One selectable compatibility filter.
#[derive(Debug, PartialEq, Eq)]
pub struct VersionFilter {
    /// Query param value; matches a derived compatibility tag.
    pub key: &'static str,
    /// Short label on the pill.
    pub label: &'static str,
}

/// Version pills in display order.
pub static VERSIONS: [VersionFilter; 3] = [
    VersionFilter { key: "3.x", label: "v3" },
    VersionFilter { key: "2.x-bridge", label: "Bridge" },
    VersionFilter { key: "2.x", label: "v2" },
];

/// One selectable sort key.
#[derive(Debug, PartialEq, Eq)]
pub struct SortKey {
    /// Query param value; also names the record field to compare.
    pub key: &'static str,
    pub label: &'static str,
}

/// Sort menu entries in display order; the first is the default.
pub static SORTS: [SortKey; 4] = [
    SortKey { key: "downloads", label: "Downloads" },
    SortKey { key: "stars", label: "Stars" },
    SortKey { key: "publishedAt", label: "Updated" },
    SortKey { key: "createdAt", label: "Created" },
];

/// One selectable sort direction.
#[derive(Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub key: &'static str,
    pub label: &'static str,
    /// Arrow glyph shown next to the active sort key.
    pub icon: &'static str,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        self.key == "desc"
    }
}

/// Sort directions in display order; the first is the default.
pub static ORDERS: [SortOrder; 2] = [
    SortOrder { key: "desc", label: "Desc", icon: "↓" },
    SortOrder { key: "asc", label: "Asc", icon: "↑" },
];
