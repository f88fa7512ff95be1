//! Type definitions for the mod compatibility analysis engine.
//!
//! These types support both TOML deserialization (for the rule catalog)
//! and JSON serialization (for frontend communication).

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT TYPES (from the file lister)
// =============================================================================

/// One installed mod file as reported by the external file lister.
///
/// `size` and `enabled` are carried through for the caller's display; the
/// detection logic itself only looks at the filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModFileEntry {
    /// Filename on disk, e.g. "create-1.20.1-forge.jar"
    pub name: String,
    /// File size in bytes, when the lister provides it
    #[serde(default)]
    pub size: Option<u64>,
    /// False when the file carries the ".disabled" marker
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ModFileEntry {
    /// Entry with only a filename, enabled, no size. Convenient for callers
    /// that analyze an ad-hoc list rather than a directory listing.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            enabled: true,
        }
    }
}

// =============================================================================
// PARSED RECORDS
// =============================================================================

/// Mod-loading framework a mod or server targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    Forge,
    NeoForge,
    Fabric,
    Quilt,
    Unknown,
}

impl Loader {
    /// Parse a server's configured loader string ("forge", "neoforge", ...).
    /// Total: anything unrecognized maps to `Unknown`.
    pub fn from_str(input: &str) -> Loader {
        match input.trim().to_lowercase().as_str() {
            "forge" => Loader::Forge,
            "neoforge" => Loader::NeoForge,
            "fabric" => Loader::Fabric,
            "quilt" => Loader::Quilt,
            _ => Loader::Unknown,
        }
    }

    /// Lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Loader::Forge => "forge",
            Loader::NeoForge => "neoforge",
            Loader::Fabric => "fabric",
            Loader::Quilt => "quilt",
            Loader::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mod file, parsed from its filename.
///
/// All derived fields come from filename heuristics; none are guaranteed
/// accurate. In particular `mod_id` collisions are expected and meaningful
/// (they drive duplicate detection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    /// Original filename, verbatim
    pub file_name: String,
    /// Filename with the ".jar" extension and ".disabled" marker removed
    pub name: String,
    /// Lowercase token before the first `-` or `_` in the normalized name
    pub mod_id: String,
    /// Declared mod version. Not populated by the filename parser; reserved
    /// for future metadata sources (manifests, remote registries).
    #[serde(default)]
    pub version: Option<String>,
    /// Inferred target game version (e.g. "1.20.1"), when the filename
    /// contains a digit.digit pattern
    #[serde(default)]
    pub game_version: Option<String>,
    /// Inferred loader family
    pub loader: Loader,
}

// =============================================================================
// CONFLICT FINDINGS
// =============================================================================

/// Category of a compatibility finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Incompatibility,
    MissingDependency,
    Duplicate,
    VersionMismatch,
    LoaderIncompatible,
}

/// How badly a finding affects the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocking: the server or the mod will not work
    Error,
    /// Degraded: likely to misbehave
    Warning,
    /// Advisory only
    Info,
}

/// One detected compatibility issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub severity: Severity,
    /// Name of the mod that triggered the finding
    pub primary: String,
    /// Second mod involved (duplicates and incompatibilities)
    #[serde(default)]
    pub secondary: Option<String>,
    /// Deterministic description, rendered from the inputs
    pub message: String,
    /// Default remediation hint attached at detection time
    #[serde(default)]
    pub suggestion: Option<String>,
}

// =============================================================================
// HEALTH REPORT
// =============================================================================

/// Qualitative label derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    /// The only constructor: status is a pure function of the score.
    pub fn from_score(score: u8) -> HealthStatus {
        if score >= 90 {
            HealthStatus::Excellent
        } else if score >= 70 {
            HealthStatus::Good
        } else if score >= 40 {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }
}

/// Aggregate health of a mod set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub total_mods: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    /// 0-100, higher is healthier
    pub score: u8,
    pub status: HealthStatus,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModAnalysis {
    /// Parsed records, one per input file, in input order
    pub mods: Vec<ModRecord>,
    /// Findings in fixed check order (see `AnalysisEngine::detect`)
    pub conflicts: Vec<Conflict>,
    pub report: HealthReport,
}
