//! MAR checksum manifest assembly
//!
//! Upstream tasks produce one checksum file per MAR; the chain-of-trust
//! step downloads them into `<work_dir>/cot/<taskId>/` before this code
//! runs. Everything here only reads from that area.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::constants::COT_DIR;
use crate::error::MissingArtifactsError;

/// One checksum file produced by an upstream task
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChecksumArtifact {
    pub task_id: String,
    pub path: String,
}

/// The unsigned manifest handed off for signing: `{"mars": {...}}`
#[derive(Serialize, Debug)]
pub struct MarManifest {
    pub mars: IndexMap<String, String>,
}

/// Resolve each artifact to its on-disk location under the chain-of-trust
/// area and check it exists. Missing paths are accumulated and reported in
/// one batch rather than failing on the first miss. The returned list keeps
/// the input order, duplicates included.
///
/// Downloading here is forbidden: a missing file means the provenance-verified
/// download step upstream failed or was skipped, and fetching it ourselves
/// would bypass that verification.
pub fn build_mar_filelist(
    work_dir: &Path,
    artifacts: &[ChecksumArtifact],
) -> Result<Vec<(String, PathBuf)>, MissingArtifactsError> {
    let mut filelist = Vec::with_capacity(artifacts.len());
    let mut missing = Vec::new();

    for artifact in artifacts {
        let full_path = work_dir
            .join(COT_DIR)
            .join(&artifact.task_id)
            .join(&artifact.path);
        if !full_path.exists() {
            missing.push(full_path.clone());
        }
        filelist.push((artifact.path.clone(), full_path));
    }

    if !missing.is_empty() {
        return Err(MissingArtifactsError { missing });
    }
    Ok(filelist)
}

/// Read each located checksum file, keyed by its relative path with trailing
/// whitespace stripped. A file that vanished since location is a plain I/O
/// error.
pub fn collect_mar_checksums(
    filelist: &[(String, PathBuf)],
) -> Result<IndexMap<String, String>> {
    let mut checksums = IndexMap::new();
    for (name, path) in filelist {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading checksum file {}", path.display()))?;
        checksums.insert(name.clone(), text.trim_end().to_string());
    }
    Ok(checksums)
}

pub fn generate_mar_manifest(checksums: IndexMap<String, String>) -> MarManifest {
    MarManifest { mars: checksums }
}
