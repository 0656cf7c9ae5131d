//! Domain DTOs for the environment variable and hook resources.
//!
//! # Design
//! Fields default when absent and `null` strings decode to `""`, so a
//! response missing a field still decodes. Identity fields are skipped on
//! serialization while unset, which lets a fresh `EnvironmentVariable` be
//! posted as-is and the server assign its id.

use serde::{Deserialize, Deserializer, Serialize};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A settings environment variable of one repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentVariable {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Empty for private variables; the API never returns their value.
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    pub public: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub repository_id: u64,
}

impl EnvironmentVariable {
    pub fn new(name: &str, value: &str, public: bool) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            public,
            ..Self::default()
        }
    }
}

/// Optional parameters for `EnvironmentVariablesService::list`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EnvironmentVariablesListOptions {
    #[serde(skip_serializing_if = "is_zero")]
    pub repository_id: u64,
}

/// A repository hook: whether CI runs on the repository's events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Hook {
    pub id: u64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub owner_name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub active: bool,
    pub private: bool,
    pub admin: bool,
}

/// Optional parameters for `HooksService::list`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct HookListOptions {
    /// Include hooks of repositories the caller cannot administer.
    #[serde(skip_serializing_if = "is_false")]
    pub all: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub order: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub owner_name: String,
}

/// Outcome of `HooksService::update`. The API does not echo the hook.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HookPutResult {
    pub result: bool,
}
