use super::*;
use crate::net::types::CompatibilityRequires;

fn compat(framework: &str, bridge: BridgeSupport) -> Compatibility {
    Compatibility {
        framework: framework.to_owned(),
        requires: CompatibilityRequires { bridge },
    }
}

#[test]
fn v3_range_yields_the_v3_tag() {
    assert_eq!(compatibility_tags(&compat("^3.0.0", BridgeSupport::NotRequired)), [TAG_V3]);
}

#[test]
fn v2_range_splits_on_the_bridge_marker() {
    assert_eq!(compatibility_tags(&compat("^2.0.0", BridgeSupport::NotRequired)), [TAG_V2]);
    assert_eq!(
        compatibility_tags(&compat("^2.0.0", BridgeSupport::Required)),
        [TAG_V2_BRIDGE]
    );
    assert_eq!(
        compatibility_tags(&compat("^2.0.0", BridgeSupport::Optional)),
        [TAG_V2, TAG_V2_BRIDGE]
    );
}

#[test]
fn dual_range_yields_both_lines_in_canonical_order() {
    assert_eq!(
        compatibility_tags(&compat("^2.0.0 || ^3.0.0", BridgeSupport::Optional)),
        [TAG_V2, TAG_V2_BRIDGE, TAG_V3]
    );
}

#[test]
fn unrelated_ranges_yield_no_tags() {
    assert!(compatibility_tags(&compat("", BridgeSupport::NotRequired)).is_empty());
    assert!(compatibility_tags(&compat(">=1.0.0", BridgeSupport::Required)).is_empty());
}

#[test]
fn derivation_appends_after_wire_tags() {
    let module = Module {
        name: "cms-kit".to_owned(),
        tags: vec!["content".to_owned()],
        compatibility: compat("^3.0.0", BridgeSupport::NotRequired),
        ..Module::default()
    };

    let derived = with_compatibility_tags(&module);
    assert_eq!(derived.tags, ["content", TAG_V3]);
    // The source record is untouched.
    assert_eq!(module.tags, ["content"]);
}

#[test]
fn derive_all_keeps_input_order() {
    let modules = vec![
        Module {
            name: "a".to_owned(),
            compatibility: compat("^2.0.0", BridgeSupport::Required),
            ..Module::default()
        },
        Module {
            name: "b".to_owned(),
            compatibility: compat("^3.0.0", BridgeSupport::NotRequired),
            ..Module::default()
        },
    ];

    let derived = derive_all(&modules);
    assert_eq!(derived[0].tags, [TAG_V2_BRIDGE]);
    assert_eq!(derived[1].tags, [TAG_V3]);
}
