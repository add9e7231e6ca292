//! Shared constants for the Ship-it CLI

/// Default instance configuration file name
pub const SHIPIT_CONFIG: &str = "shipitconfig.yaml";

/// Subdirectory of the work dir populated by the chain-of-trust download step
pub const COT_DIR: &str = "cot";

/// Request timeout applied when the instance config does not supply one
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Wire format Ship-it expects for the `shippedAt` field
pub const SHIPPED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
