//! Component configuration structures

use serde::Deserialize;
use serde_json::Value;

use crate::error::{LevelGenError, Result};

pub const FIELD_BASE_TIME: &str = "BASE_TIME";
pub const FIELD_MIN_LEVEL: &str = "MIN_LEVEL";
pub const FIELD_MAX_LEVEL: &str = "MAX_LEVEL";

/// Component entry as it appears in the config file.
///
/// Fields are kept as raw JSON so a bad value can be reported by name
/// instead of failing the whole entry. Each must hold a string.
#[derive(Debug, Clone, Deserialize)]
pub struct RawComponent {
    #[serde(rename = "BASE_TIME")]
    pub base_time: Option<Value>,
    #[serde(rename = "MIN_LEVEL")]
    pub min_level: Option<Value>,
    #[serde(rename = "MAX_LEVEL")]
    pub max_level: Option<Value>,
}

/// Parsed, immutable description of one upgradeable component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub name: String,
    /// Time cost at level 0
    pub base_time: i32,
    pub min_level: i32,
    pub max_level: i32,
}

impl ComponentSpec {
    /// Build a spec from a raw config entry.
    ///
    /// Each field must be a string holding a base-10 integer. The first
    /// missing or unparseable field is reported.
    pub fn from_raw(name: &str, raw: &RawComponent) -> Result<Self> {
        check_name(name)?;
        Ok(Self {
            name: name.to_string(),
            base_time: parse_field(name, FIELD_BASE_TIME, raw.base_time.as_ref())?,
            min_level: parse_field(name, FIELD_MIN_LEVEL, raw.min_level.as_ref())?,
            max_level: parse_field(name, FIELD_MAX_LEVEL, raw.max_level.as_ref())?,
        })
    }

    /// Build a spec straight from the JSON value stored under `name`
    pub fn from_value(name: &str, value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LevelGenError::ConfigFieldMalformed {
                component: name.to_string(),
                field: "entry",
                reason: format!("expected an object, found {}", value),
            });
        }

        let raw = RawComponent::deserialize(value).map_err(|e| LevelGenError::ConfigFieldMalformed {
            component: name.to_string(),
            field: "entry",
            reason: e.to_string(),
        })?;

        Self::from_raw(name, &raw)
    }
}

/// The name becomes a file name inside the output directory, so it must
/// not be able to leave it.
fn check_name(name: &str) -> Result<()> {
    if name.contains(['/', '\\', '\0']) {
        return Err(LevelGenError::ConfigFieldMalformed {
            component: name.to_string(),
            field: "name",
            reason: "contains a path separator".to_string(),
        });
    }
    Ok(())
}

fn parse_field(component: &str, field: &'static str, value: Option<&Value>) -> Result<i32> {
    let malformed = |reason: String| LevelGenError::ConfigFieldMalformed {
        component: component.to_string(),
        field,
        reason,
    };

    match value {
        None => Err(malformed("missing".to_string())),
        Some(Value::String(s)) => s
            .parse::<i32>()
            .map_err(|e| malformed(format!("{:?}: {}", s, e))),
        Some(other) => Err(malformed(format!(
            "expected a string-encoded integer, found {}",
            other
        ))),
    }
}
