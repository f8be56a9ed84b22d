use super::*;

fn module(name: &str, category: &str, kind: &str) -> Module {
    Module {
        name: name.to_owned(),
        repo: format!("acme/{name}"),
        category: category.to_owned(),
        kind: kind.to_owned(),
        ..Module::default()
    }
}

fn fixture() -> Vec<Module> {
    vec![
        module("gallery", "Images", "community"),
        module("sitemap", "SEO", "official"),
        module("resize", "Images", "3rd-party"),
        module("headless", "CMS", "community"),
    ]
}

#[test]
fn categories_are_distinct_and_sorted_by_title() {
    let facets = category_facets(&fixture(), &Selection::default());
    let titles: Vec<&str> = facets.iter().map(|facet| facet.title.as_str()).collect();
    assert_eq!(titles, ["CMS", "Images", "SEO"]);
}

#[test]
fn category_href_selects_and_preserves_other_params() {
    let selection = Selection {
        q: Some("kit".to_owned()),
        ..Selection::default()
    };
    let facets = category_facets(&fixture(), &selection);
    let images = facets.iter().find(|facet| facet.key == "Images").unwrap();
    assert_eq!(images.href, "/modules?category=Images&q=kit");
}

#[test]
fn active_category_href_toggles_the_filter_off() {
    let selection = Selection {
        category: Some("Images".to_owned()),
        ..Selection::default()
    };
    let facets = category_facets(&fixture(), &selection);
    let images = facets.iter().find(|facet| facet.key == "Images").unwrap();
    assert_eq!(images.href, "/modules");
}

#[test]
fn types_follow_tab_order_with_mapped_titles() {
    let facets = type_facets(&fixture(), &Selection::default());
    let pairs: Vec<(&str, &str)> = facets
        .iter()
        .map(|facet| (facet.key.as_str(), facet.title.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("official", "Official"),
            ("community", "Community"),
            ("3rd-party", "Third Party"),
        ]
    );
}

#[test]
fn unknown_type_keys_sort_first_and_keep_their_raw_title() {
    let mut modules = fixture();
    modules.push(module("odd", "CMS", "experimental"));

    let facets = type_facets(&modules, &Selection::default());
    assert_eq!(facets[0].key, "experimental");
    assert_eq!(facets[0].title, "experimental");
    assert_eq!(facets[1].key, "official");
}

#[test]
fn active_type_href_keeps_the_tab_selected() {
    let selection = Selection {
        kind: Some("official".to_owned()),
        ..Selection::default()
    };
    let facets = type_facets(&fixture(), &selection);
    let official = facets.iter().find(|facet| facet.key == "official").unwrap();
    assert_eq!(official.href, "/modules?type=official");
}

#[test]
fn selected_facet_lookups_require_a_listed_key() {
    let selection = Selection {
        category: Some("Images".to_owned()),
        kind: Some("enterprise".to_owned()),
        ..Selection::default()
    };
    let categories = category_facets(&fixture(), &selection);
    let types = type_facets(&fixture(), &selection);

    assert_eq!(
        selected_category(&categories, &selection).map(|facet| facet.key.as_str()),
        Some("Images")
    );
    assert_eq!(selected_type(&types, &selection), None);
}
