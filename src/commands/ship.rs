use anyhow::Result;
use chrono::Utc;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::config::load_instance_config;
use crate::constants::SHIPPED_AT_FORMAT;
use crate::shipit::ShipItClient;
use crate::verify::check_release_has_values;

pub async fn run(release_name: &str, config_path: &Path) -> Result<()> {
    let cfg = load_instance_config(config_path)?;
    let client = ShipItClient::new(&cfg)?;
    let shipped_at = Utc::now().format(SHIPPED_AT_FORMAT).to_string();

    info!("marking the release as shipped with {shipped_at} timestamp...");
    let mut fields: IndexMap<String, Value> = IndexMap::new();
    fields.insert("status".to_string(), Value::from("shipped"));
    fields.insert("shippedAt".to_string(), Value::from(shipped_at));
    client.update(release_name, &fields).await?;
    check_release_has_values(&client, release_name, &fields).await?;

    println!("✅ {release_name} marked as shipped");
    Ok(())
}
