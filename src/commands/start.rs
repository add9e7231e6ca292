use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::{fs, path::Path};
use tracing::info;

use crate::config::load_instance_config;
use crate::shipit::ShipItClient;
use crate::verify::check_release_has_values;

/// Two consecutive calls: submit the new release the way the release manager's
/// "Do eeet" button would, then flip the same release to started.
pub async fn run(release_name: &str, data_path: &Path, config_path: &Path) -> Result<()> {
    let cfg = load_instance_config(config_path)?;
    let client = ShipItClient::new(&cfg)?;

    let raw = fs::read_to_string(data_path)
        .with_context(|| format!("reading release data {}", data_path.display()))?;
    let data: IndexMap<String, Value> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing release data {}", data_path.display()))?;

    info!("submitting the release to Ship-it...");
    client.submit(&data).await?;

    info!("marking the release as started...");
    let mut fields: IndexMap<String, Value> = IndexMap::new();
    fields.insert("ready".to_string(), Value::from(true));
    fields.insert("complete".to_string(), Value::from(true));
    fields.insert("status".to_string(), Value::from("Started"));
    client.update(release_name, &fields).await?;
    check_release_has_values(&client, release_name, &fields).await?;

    println!("✅ {release_name} submitted and marked as started");
    Ok(())
}
