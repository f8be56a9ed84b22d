use super::*;
use crate::net::types::Contributor;

fn module(name: &str, downloads: u64, logins: &[&str]) -> Module {
    Module {
        name: name.to_owned(),
        downloads,
        contributors: logins
            .iter()
            .map(|login| Contributor {
                login: (*login).to_owned(),
                contributions: 1,
            })
            .collect(),
        ..Module::default()
    }
}

#[test]
fn stats_sum_downloads_and_count_records() {
    let stats = directory_stats(&[
        module("a", 1_000, &["mira"]),
        module("b", 250, &["jonas"]),
    ]);
    assert_eq!(stats.downloads, 1_250);
    assert_eq!(stats.modules, 2);
}

#[test]
fn contributors_count_distinct_logins_across_modules() {
    let stats = directory_stats(&[
        module("a", 0, &["mira", "jonas"]),
        module("b", 0, &["jonas", "ada"]),
        module("c", 0, &[]),
    ]);
    assert_eq!(stats.contributors, 3);
}

#[test]
fn empty_directory_yields_zeroed_stats() {
    assert_eq!(directory_stats(&[]), DirectoryStats::default());
}

#[test]
fn download_totals_saturate_instead_of_wrapping() {
    let stats = directory_stats(&[module("a", u64::MAX, &[]), module("b", 10, &[])]);
    assert_eq!(stats.downloads, u64::MAX);
}
