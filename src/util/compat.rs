//! Compatibility tag derivation.
//!
//! The registry records a semver range plus a bridge marker; the directory
//! filters on coarse tags instead. Derivation is deliberately a substring
//! check on the canonical ranges the registry writes, not a semver parse:
//! `"^2.0.0 || ^3.0.0"` should light up both major lines without this crate
//! growing a range grammar.

#[cfg(test)]
#[path = "compat_test.rs"]
mod compat_test;

use crate::net::types::{BridgeSupport, Compatibility, Module};

/// Tag for the current major line.
pub const TAG_V3: &str = "3.x";
/// Tag for the legacy line without the bridge shim.
pub const TAG_V2: &str = "2.x";
/// Tag for the legacy line through the bridge shim.
pub const TAG_V2_BRIDGE: &str = "2.x-bridge";

const RANGE_V2: &str = "^2.0.0";
const RANGE_V3: &str = "^3.0.0";

/// Tags implied by a compatibility block, in canonical order: `2.x`,
/// `2.x-bridge`, then `3.x`.
///
/// On the v2 line the bridge marker splits the tags: a hard requirement
/// yields only `2.x-bridge`, no requirement only `2.x`, and an optional
/// bridge yields both.
pub fn compatibility_tags(compatibility: &Compatibility) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if compatibility.framework.contains(RANGE_V2) {
        if compatibility.requires.bridge != BridgeSupport::Required {
            tags.push(TAG_V2);
        }
        if compatibility.requires.bridge != BridgeSupport::NotRequired {
            tags.push(TAG_V2_BRIDGE);
        }
    }
    if compatibility.framework.contains(RANGE_V3) {
        tags.push(TAG_V3);
    }
    tags
}

/// Copy of a module with its compatibility tags appended to `tags`.
///
/// Wire tags stay first so author-chosen labels keep their position in the
/// card chip row.
pub fn with_compatibility_tags(module: &Module) -> Module {
    let mut derived = module.clone();
    derived.tags.extend(
        compatibility_tags(&module.compatibility)
            .into_iter()
            .map(ToOwned::to_owned),
    );
    derived
}

/// Derived copies of a whole fetch result, in input order.
pub fn derive_all(modules: &[Module]) -> Vec<Module> {
    modules.iter().map(with_compatibility_tags).collect()
}
