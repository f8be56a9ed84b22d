use super::*;

fn module(
    name: &str,
    category: &str,
    kind: &str,
    downloads: u64,
    stars: u64,
    tags: &[&str],
) -> Module {
    Module {
        name: name.to_owned(),
        repo: format!("acme/{name}"),
        category: category.to_owned(),
        kind: kind.to_owned(),
        downloads,
        stars,
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        ..Module::default()
    }
}

fn fixture() -> Vec<Module> {
    let mut alpha = module("alpha", "CMS", "official", 100, 5, &["3.x"]);
    alpha.description = "Content tooling".to_owned();
    alpha.published_at = 300;
    alpha.created_at = 30;

    let mut beta = module("beta", "SEO", "community", 400, 2, &["2.x"]);
    beta.published_at = 100;
    beta.created_at = 10;

    let mut gamma = module("gamma", "CMS", "community", 250, 9, &["3.x", "2.x-bridge"]);
    gamma.description = "Image resizing".to_owned();
    gamma.published_at = 200;
    gamma.created_at = 50;

    let mut delta = module("delta", "Analytics", "3rd-party", 100, 5, &["3.x"]);
    delta.published_at = 400;
    delta.created_at = 20;

    vec![alpha, beta, gamma, delta]
}

fn names(modules: &[Module]) -> Vec<&str> {
    modules.iter().map(|module| module.name.as_str()).collect()
}

fn selection(pairs: &[(&str, &str)]) -> Selection {
    Selection::from_pairs(pairs.iter().copied())
}

#[test]
fn no_version_selected_passes_the_full_list() {
    let modules = fixture();
    assert_eq!(by_version(&modules, &Selection::default()), modules);
}

#[test]
fn unrecognized_version_passes_the_full_list() {
    let modules = fixture();
    assert_eq!(by_version(&modules, &selection(&[("version", "4.x")])), modules);
}

#[test]
fn version_filter_keeps_only_tagged_records() {
    let modules = fixture();
    let bridged = by_version(&modules, &selection(&[("version", "2.x-bridge")]));
    assert_eq!(names(&bridged), ["gamma"]);
}

#[test]
fn search_scans_every_text_field() {
    let modules = fixture();
    assert!(matches_search(&modules[0], "content"));
    assert!(matches_search(&modules[1], "acme/beta"));
    assert!(matches_search(&modules[1], "seo"));
    assert!(matches_search(&modules[2], "bridge"));
    assert!(matches_search(&modules[3], "delta"));
    assert!(!matches_search(&modules[3], "content"));
}

#[test]
fn empty_needle_matches_everything() {
    assert!(matches_search(&fixture()[0], ""));
}

#[test]
fn search_in_results_is_case_insensitive() {
    let found = results(&fixture(), &selection(&[("q", "IMAGE")]));
    assert_eq!(names(&found), ["gamma"]);
}

#[test]
fn default_sort_is_downloads_descending_with_name_ties_ascending() {
    let sorted = results(&fixture(), &Selection::default());
    assert_eq!(names(&sorted), ["beta", "gamma", "alpha", "delta"]);
}

#[test]
fn ascending_order_keeps_name_ties_ascending_too() {
    let sorted = results(&fixture(), &selection(&[("orderBy", "asc")]));
    assert_eq!(names(&sorted), ["alpha", "delta", "gamma", "beta"]);
}

#[test]
fn each_sort_key_orders_by_its_field() {
    let by_stars = results(&fixture(), &selection(&[("sortBy", "stars")]));
    assert_eq!(names(&by_stars), ["gamma", "alpha", "delta", "beta"]);

    let by_published = results(&fixture(), &selection(&[("sortBy", "publishedAt")]));
    assert_eq!(names(&by_published), ["delta", "alpha", "gamma", "beta"]);

    let by_created = results(
        &fixture(),
        &selection(&[("sortBy", "createdAt"), ("orderBy", "asc")]),
    );
    assert_eq!(names(&by_created), ["beta", "delta", "alpha", "gamma"]);
}

#[test]
fn unknown_sort_key_falls_back_to_downloads() {
    let sorted = results(&fixture(), &selection(&[("sortBy", "velocity")]));
    assert_eq!(names(&sorted), ["beta", "gamma", "alpha", "delta"]);
}

#[test]
fn filters_and_search_compose() {
    let found = results(
        &fixture(),
        &selection(&[("version", "3.x"), ("category", "CMS"), ("type", "community")]),
    );
    assert_eq!(names(&found), ["gamma"]);

    let none = results(
        &fixture(),
        &selection(&[("category", "CMS"), ("q", "sitemap")]),
    );
    assert!(none.is_empty());
}

#[test]
fn stars_tie_breaks_by_name() {
    // alpha and delta both have 5 stars.
    let sorted = results(&fixture(), &selection(&[("sortBy", "stars")]));
    let alpha_pos = sorted.iter().position(|m| m.name == "alpha").unwrap();
    let delta_pos = sorted.iter().position(|m| m.name == "delta").unwrap();
    assert!(alpha_pos < delta_pos);
}
