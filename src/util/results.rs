//! The visible result list: version filter, facet filters, search, sort.
//!
//! Every function here is pure over the derived module list (wire records
//! with compatibility tags appended), so the whole pipeline is exercised
//! natively without a browser in the loop.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::types::Module;
use crate::state::selection::{Selection, SortKey, SortOrder};

/// Records the active version filter lets through. With no (or an
/// unrecognized) version selected the full list passes.
pub fn by_version(modules: &[Module], selection: &Selection) -> Vec<Module> {
    match selection.version_filter() {
        None => modules.to_vec(),
        Some(filter) => modules
            .iter()
            .filter(|module| module.tags.iter().any(|tag| tag == filter.key))
            .cloned()
            .collect(),
    }
}

/// Case-insensitive substring match over a record's searchable text:
/// name, description, repo, category, and tags.
///
/// `needle_lower` must already be lowercased; callers lowercase once per
/// keystroke instead of once per record.
pub fn matches_search(module: &Module, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    module.name.to_lowercase().contains(needle_lower)
        || module.description.to_lowercase().contains(needle_lower)
        || module.repo.to_lowercase().contains(needle_lower)
        || module.category.to_lowercase().contains(needle_lower)
        || module
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lower))
}

/// The full projection: version, category, and type filters, then search,
/// then sort.
pub fn results(modules: &[Module], selection: &Selection) -> Vec<Module> {
    let mut results: Vec<Module> = by_version(modules, selection)
        .into_iter()
        .filter(|module| {
            selection
                .category
                .as_deref()
                .is_none_or(|category| module.category == category)
        })
        .filter(|module| selection.kind.as_deref().is_none_or(|kind| module.kind == kind))
        .collect();
    if let Some(q) = selection.q.as_deref() {
        let needle = q.to_lowercase();
        results.retain(|module| matches_search(module, &needle));
    }
    sort_results(&mut results, selection.sort_key(), selection.sort_order());
    results
}

/// Sort in place by the chosen key and direction, breaking ties by name so
/// equal counters render in a stable, predictable order.
pub fn sort_results(results: &mut [Module], sort: &SortKey, order: &SortOrder) {
    results.sort_by(|a, b| {
        // "downloads" is the first table entry and doubles as the fallback.
        let by_key = match sort.key {
            "stars" => a.stars.cmp(&b.stars),
            "publishedAt" => a.published_at.cmp(&b.published_at),
            "createdAt" => a.created_at.cmp(&b.created_at),
            _ => a.downloads.cmp(&b.downloads),
        };
        let directed = if order.is_descending() {
            by_key.reverse()
        } else {
            by_key
        };
        directed.then_with(|| a.name.cmp(&b.name))
    });
}
