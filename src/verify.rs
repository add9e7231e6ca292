//! Post-update verification of release state
//!
//! After an update call we never trust the 200 alone: the record is fetched
//! again and every field we asked to change is checked against what the API
//! now returns. Ordinary fields use exact equality; `shippedAt` is compared
//! as an absolute instant so `2018-07-02 16:51:04` and
//! `2018-07-02T16:51:04+00:00` agree while a `+01:00` offset does not.

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

use crate::error::VerificationError;
use crate::shipit::{ReleaseInfo, ShipItClient};

/// Fetch the release record once and confirm the fields that were just
/// updated are reflected in what the API returns.
pub async fn check_release_has_values(
    client: &ShipItClient,
    release_name: &str,
    expected: &IndexMap<String, Value>,
) -> Result<()> {
    let release_info = client.get_release(release_name).await?;
    info!("full release details: {release_info:?}");
    release_has_values(&release_info, expected)?;
    info!("all release fields have been correctly updated in Ship-it");
    Ok(())
}

/// Compare each expected field against the fetched record, stopping at the
/// first mismatch in the expected map's iteration order.
///
/// A remote value that is present but falsy (false, null, "", 0, empty
/// collection) counts as missing, the same as an absent field. That means a
/// legitimately-false remote value can never verify; kept deliberately as
/// the conservative reading of "not yet updated" (see DESIGN.md).
pub fn release_has_values(
    release_info: &ReleaseInfo,
    expected: &IndexMap<String, Value>,
) -> Result<(), VerificationError> {
    for (field, expected_value) in expected {
        let remote = release_info.get(field).filter(|v| is_truthy(v));
        let matches = match remote {
            None => false,
            Some(remote_value) if field == "shippedAt" => {
                match (remote_value.as_str(), expected_value.as_str()) {
                    (Some(remote_ts), Some(expected_ts)) => same_timing(remote_ts, expected_ts),
                    _ => false,
                }
            }
            Some(remote_value) => remote_value == expected_value,
        };
        if !matches {
            return Err(VerificationError {
                field: field.clone(),
                expected: expected_value.clone(),
                actual: release_info.get(field).cloned(),
            });
        }
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Instant equality for timestamp strings. Both sides are normalized to UTC
/// and compared as points in time; naive timestamps are read as UTC.
/// Unparseable input on either side compares unequal.
pub fn same_timing(time1: &str, time2: &str) -> bool {
    match (parse_timestamp(time1), parse_timestamp(time2)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}
