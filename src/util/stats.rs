//! Aggregate counters for the directory header.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::HashSet;

use crate::net::types::Module;

/// Headline numbers over the full module list. These ignore every filter on
/// purpose: the header describes the ecosystem, not the current view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Sum of per-module download counters.
    pub downloads: u64,
    /// Distinct contributor logins across all modules.
    pub contributors: usize,
    /// Number of modules listed.
    pub modules: usize,
}

/// Compute the header stats for `modules`.
pub fn directory_stats(modules: &[Module]) -> DirectoryStats {
    let downloads = modules
        .iter()
        .fold(0_u64, |sum, module| sum.saturating_add(module.downloads));
    let logins: HashSet<&str> = modules
        .iter()
        .flat_map(|module| module.contributors.iter())
        .map(|contributor| contributor.login.as_str())
        .collect();
    DirectoryStats {
        downloads,
        contributors: logins.len(),
        modules: modules.len(),
    }
}
