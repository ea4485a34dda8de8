//! Record models and request DTOs.

pub mod item;
pub mod suggestion;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, mapping `""` (and whitespace) to `None`.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
