//! Category and type facets over the version-filtered directory.
//!
//! Facets are computed from the records the active version filter lets
//! through, so switching to `v2` hides categories with no v2 modules.
//! Both facet kinds carry a ready-made `href`; the asymmetry between them
//! is intentional: clicking the active category clears it, clicking the
//! active type tab keeps it.

#[cfg(test)]
#[path = "facets_test.rs"]
mod facets_test;

use std::collections::BTreeSet;

use crate::net::types::Module;
use crate::state::selection::Selection;

/// One clickable facet entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facet {
    /// Raw value matched against the record field and the query param.
    pub key: String,
    /// Display label.
    pub title: String,
    /// Directory URL this facet links to.
    pub href: String,
}

/// Display names for the known type keys, in tab order. Unknown keys keep
/// their raw value as the title and sort ahead of the known ones.
static TYPE_TITLES: [(&str, &str); 3] = [
    ("official", "Official"),
    ("community", "Community"),
    ("3rd-party", "Third Party"),
];

/// Display name for a type key; unknown keys read back verbatim.
pub fn type_title(key: &str) -> String {
    TYPE_TITLES
        .iter()
        .find(|(raw, _)| *raw == key)
        .map_or_else(|| key.to_owned(), |(_, title)| (*title).to_owned())
}

fn type_rank(key: &str) -> i32 {
    TYPE_TITLES
        .iter()
        .position(|(raw, _)| *raw == key)
        .map_or(-1, |index| i32::try_from(index).unwrap_or(i32::MAX))
}

/// Distinct categories of `modules`, sorted by title, each linking to the
/// selection that toggles it.
pub fn category_facets(modules: &[Module], selection: &Selection) -> Vec<Facet> {
    let distinct: BTreeSet<&str> = modules.iter().map(|module| module.category.as_str()).collect();
    distinct
        .into_iter()
        .map(|category| Facet {
            key: category.to_owned(),
            title: category.to_owned(),
            href: selection.with_category_toggled(category).href(),
        })
        .collect()
}

/// Distinct types of `modules` in tab order, each linking to the selection
/// that picks it.
pub fn type_facets(modules: &[Module], selection: &Selection) -> Vec<Facet> {
    let mut distinct: Vec<&str> = Vec::new();
    for module in modules {
        if !distinct.contains(&module.kind.as_str()) {
            distinct.push(module.kind.as_str());
        }
    }
    // Stable sort: unknown keys all rank -1 and keep their first-seen order.
    distinct.sort_by_key(|key| type_rank(key));
    distinct
        .into_iter()
        .map(|kind| Facet {
            key: kind.to_owned(),
            title: type_title(kind),
            href: selection.with_kind(kind).href(),
        })
        .collect()
}

/// The facet matching the active category param, if it is present in the
/// facet list.
pub fn selected_category<'a>(facets: &'a [Facet], selection: &Selection) -> Option<&'a Facet> {
    facets
        .iter()
        .find(|facet| selection.category.as_deref() == Some(facet.key.as_str()))
}

/// The facet matching the active type param, if it is present in the facet
/// list.
pub fn selected_type<'a>(facets: &'a [Facet], selection: &Selection) -> Option<&'a Facet> {
    facets
        .iter()
        .find(|facet| selection.kind.as_deref() == Some(facet.key.as_str()))
}
