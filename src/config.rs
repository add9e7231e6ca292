//! Instance configuration for the Ship-it worker
//!
//! The orchestrator provisions one YAML file per Ship-it instance:
//!
//! ```yaml
//! username: shipit-worker
//! password: ${SHIPIT_PASSWORD}
//! api_root: https://ship-it.example.com/api
//! timeout_in_seconds: 10
//! ```
//!
//! Values support `${VAR}` and `${VAR:-default}` environment-variable
//! expansion so credentials never have to live in the file itself.
//! `timeout_in_seconds` accepts either a number or a numeric string and is
//! coerced to an integer; it defaults to 60 when omitted.

use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::{env, fs, path::Path};

use crate::constants::DEFAULT_TIMEOUT_SECONDS;

/// Credentials and endpoint for one Ship-it instance
#[derive(Deserialize, Debug, Clone)]
pub struct ShipItInstanceConfig {
    pub username: String,
    pub password: String,
    pub api_root: String,
    #[serde(default, deserialize_with = "de_timeout")]
    pub timeout_in_seconds: Option<u64>,
}

impl ShipItInstanceConfig {
    /// Break the config down into the primitives the API client needs:
    /// a basic-auth pair, the API root, and the request timeout in seconds.
    pub fn auth_primitives(&self) -> ((String, String), String, u64) {
        (
            (self.username.clone(), self.password.clone()),
            self.api_root.clone(),
            self.timeout_in_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }
}

/// Accept `timeout_in_seconds: 10` as well as `timeout_in_seconds: "10"`
fn de_timeout<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub fn load_instance_config(path: &Path) -> anyhow::Result<ShipItInstanceConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading instance config {}", path.display()))?;
    let cfg: ShipItInstanceConfig = serde_yaml::from_str(&expand_env_placeholders(&raw))
        .with_context(|| format!("parsing instance config {}", path.display()))?;
    Ok(cfg)
}

/// Expand `${VAR}` and `${VAR:-default}` placeholders against the process
/// environment. Unset variables without a default expand to the empty string.
pub fn expand_env_placeholders(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap();
    re.replace_all(input, |caps: &regex::Captures| {
        match env::var(&caps[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => caps.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
        }
    })
    .to_string()
}
