//! Wire types shared with the module registry REST API.
//!
//! DESIGN
//! ======
//! The registry payload is produced by a separate service and has grown
//! organically, so these types lean tolerant: counters accept integral
//! floats, additive fields default when absent, and unknown fields are
//! ignored. The one genuinely irregular spot is `requires.bridge`, which
//! arrives as `false`, `true`, or the string `"optional"`; [`BridgeSupport`]
//! normalizes that into an enum so the rest of the crate never touches raw
//! JSON values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize, Serializer};

/// Envelope returned by `GET /api/modules`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulesResponse {
    /// Every published module, in registry order.
    pub modules: Vec<Module>,
}

/// One module record as served by the registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique slug; doubles as the identity for detail routes.
    pub name: String,
    /// Short human-readable summary.
    #[serde(default)]
    pub description: String,
    /// Repository reference in `owner/name` form, optionally `#ref` suffixed.
    pub repo: String,
    /// Single category label, e.g. `"Analytics"`.
    pub category: String,
    /// Maintenance tier: `official`, `community`, or `3rd-party`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Lifetime download counter.
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub downloads: u64,
    /// Repository star counter.
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub stars: u64,
    /// People who have landed commits, with their commit counts.
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    /// Framework version ranges this module works against.
    #[serde(default)]
    pub compatibility: Compatibility,
    /// Free-form labels; compatibility tags are appended client-side.
    #[serde(default)]
    pub tags: Vec<String>,
    /// First publish instant, milliseconds since the Unix epoch.
    #[serde(default, rename = "createdAt", deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
    /// Latest release instant, milliseconds since the Unix epoch.
    #[serde(default, rename = "publishedAt", deserialize_with = "deserialize_i64_from_number")]
    pub published_at: i64,
}

/// One contributor entry on a module record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Forge login; distinct logins are what the aggregate stats count.
    pub login: String,
    #[serde(default)]
    pub contributions: u64,
}

/// Compatibility block on a module record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Semver range string against the framework, e.g. `"^3.0.0"` or
    /// `"^2.0.0 || ^3.0.0"`. Matching is substring-based on purpose; the
    /// registry writes canonical ranges.
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub requires: CompatibilityRequires,
}

/// Extra requirements nested under `compatibility.requires`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRequires {
    #[serde(default, deserialize_with = "deserialize_bridge")]
    pub bridge: BridgeSupport,
}

/// Whether running on the v2 line needs the bridge shim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BridgeSupport {
    /// Works on v2 directly (`bridge: false` or absent).
    #[default]
    NotRequired,
    /// Only works on v2 through the bridge (`bridge: true`).
    Required,
    /// Works both with and without the bridge (`bridge: "optional"`).
    Optional,
}

impl Serialize for BridgeSupport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BridgeSupport::NotRequired => serializer.serialize_bool(false),
            BridgeSupport::Required => serializer.serialize_bool(true),
            BridgeSupport::Optional => serializer.serialize_str("optional"),
        }
    }
}

/// Deserialize the `bridge` marker from its mixed wire encodings.
///
/// Registry data carries `false`, `true`, or `"optional"`. Older records
/// omit the field entirely and a few write other non-empty markers; those
/// are read the same way `"optional"` is, since the consumer only cares
/// about the three-way split.
fn deserialize_bridge<'de, D>(deserializer: D) -> Result<BridgeSupport, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(true) => Ok(BridgeSupport::Required),
        serde_json::Value::Bool(false) | serde_json::Value::Null => Ok(BridgeSupport::NotRequired),
        serde_json::Value::String(marker) => {
            if marker.is_empty() {
                Ok(BridgeSupport::NotRequired)
            } else {
                Ok(BridgeSupport::Optional)
            }
        }
        other => Err(D::Error::custom(format!(
            "expected boolean or string for bridge, got {other}"
        ))),
    }
}

/// Deserialize an `i64` from a JSON number that may arrive as a float.
///
/// The registry emits epoch-millisecond timestamps, and some toolchains on
/// its side serialize those as whole-number floats like `1.7e12`. Accept a
/// float when it is integral and exactly representable, reject anything
/// else.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    if let Some(int) = value.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = value.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && (float as i64 as f64 - float).abs() < f64::EPSILON
    {
        return Ok(float as i64);
    }
    Err(D::Error::custom(format!("expected integer, got {value}")))
}

/// Deserialize a `u64` counter with the same float tolerance, rejecting
/// negative values.
fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = deserialize_i64_from_number(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("expected count, got {value}")))
}
