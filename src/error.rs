//! Typed failures surfaced to the orchestrator
//!
//! Both errors are fatal for the task; nothing in this crate retries.

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// The release record fetched after an update does not reflect the update.
///
/// `actual` is `None` when the field was absent from the record. A
/// present-but-falsy remote value is also reported this way by the verifier,
/// but the raw value is kept here so the report shows what the API returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("release field `{field}` -> `{expected}` doesn't exist or correspond (remote value: {actual:?})")]
pub struct VerificationError {
    pub field: String,
    pub expected: Value,
    pub actual: Option<Value>,
}

/// One or more expected chain-of-trust files are absent from the work dir.
///
/// Batched so the operator sees every missing file in a single report.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("missing chain-of-trust artifacts: {}", join_paths(.missing))]
pub struct MissingArtifactsError {
    pub missing: Vec<PathBuf>,
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("{} doesn't exist!", p.display()))
        .collect::<Vec<_>>()
        .join(" ")
}
