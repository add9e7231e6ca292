use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

use crate::manifest::{
    ChecksumArtifact, build_mar_filelist, collect_mar_checksums, generate_mar_manifest,
};

pub fn run(work_dir: &Path, artifacts_path: &Path) -> Result<()> {
    let raw = fs::read_to_string(artifacts_path)
        .with_context(|| format!("reading artifact descriptors {}", artifacts_path.display()))?;
    let artifacts: Vec<ChecksumArtifact> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing artifact descriptors {}", artifacts_path.display()))?;

    let filelist = build_mar_filelist(work_dir, &artifacts)?;
    let checksums = collect_mar_checksums(&filelist)?;
    let manifest = generate_mar_manifest(checksums);

    info!("generated unsigned mar manifest");
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    // TODO: publish the manifest as a task artifact, and reject duplicate
    // filenames up front instead of letting them overwrite each other in
    // the checksum map
    Ok(())
}
