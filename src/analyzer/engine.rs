//! Conflict detection and health scoring.

use std::collections::HashMap;

use tracing::debug;

use super::catalog::RuleCatalog;
use super::parser::parse_mod_file_name;
use super::types::*;

/// The compatibility analysis engine.
///
/// Holds the rule catalog (injected at construction, immutable afterwards)
/// and evaluates mod record sets against it. Every method is a pure function
/// of its arguments and the catalog: identical inputs yield identical output,
/// including ordering.
pub struct AnalysisEngine {
    catalog: RuleCatalog,
}

impl AnalysisEngine {
    /// Create an engine with the given catalog (typically from
    /// `default_catalog()` or `load_catalog()`).
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Run the whole pipeline over a file listing: parse every filename,
    /// detect conflicts, aggregate the health report.
    pub fn analyze(
        &self,
        files: &[ModFileEntry],
        server_game_version: &str,
        server_loader: Loader,
    ) -> ModAnalysis {
        let mods: Vec<ModRecord> = files
            .iter()
            .map(|f| parse_mod_file_name(&f.name))
            .collect();
        let conflicts = self.detect(&mods, server_game_version, server_loader);
        let report = health_report(&mods, &conflicts);
        debug!(
            "analyzed {} mods: {} conflicts, score {} ({:?})",
            mods.len(),
            conflicts.len(),
            report.score,
            report.status
        );
        ModAnalysis {
            mods,
            conflicts,
            report,
        }
    }

    /// Evaluate the five compatibility checks over a set of parsed records.
    ///
    /// Checks run in a fixed order (duplicates, known incompatibilities,
    /// missing dependencies, game-version mismatch, loader mismatch) and
    /// within a check findings follow the input order, so the output sequence
    /// is fully deterministic.
    pub fn detect(
        &self,
        mods: &[ModRecord],
        server_game_version: &str,
        server_loader: Loader,
    ) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        // 1. Duplicates: same inferred mod id. Groups are visited in
        // first-seen order; only the first two members are named, additional
        // copies are not individually reported.
        let mut group_order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&str>> = HashMap::new();
        for record in mods {
            let members = groups.entry(record.mod_id.as_str()).or_default();
            if members.is_empty() {
                group_order.push(record.mod_id.as_str());
            }
            members.push(record.name.as_str());
        }
        for mod_id in &group_order {
            let members = &groups[mod_id];
            if members.len() > 1 {
                conflicts.push(Conflict {
                    kind: ConflictKind::Duplicate,
                    severity: Severity::Error,
                    primary: members[0].to_string(),
                    secondary: Some(members[1].to_string()),
                    message: format!("Duplicate mod detected: {mod_id}"),
                    suggestion: Some(format!("Remove one of the copies: {}", members.join(", "))),
                });
            }
        }

        // 2. Known incompatibilities: full ordered cross product against the
        // catalog. Lookups are directional, so a pair listed in both
        // directions is reported once per direction. Kept as-is rather than
        // deduplicated.
        for first in mods {
            let incompatible = self.catalog.incompatible_with(&first.mod_id);
            if incompatible.is_empty() {
                continue;
            }
            for second in mods {
                if incompatible.iter().any(|id| *id == second.mod_id) {
                    conflicts.push(Conflict {
                        kind: ConflictKind::Incompatibility,
                        severity: Severity::Error,
                        primary: first.name.clone(),
                        secondary: Some(second.name.clone()),
                        message: format!(
                            "Known incompatibility between {} and {}",
                            first.name, second.name
                        ),
                        suggestion: Some(
                            "These mods cannot run together. Disable one of the two.".to_string(),
                        ),
                    });
                }
            }
        }

        // 3. Missing dependencies: one finding per required id absent from
        // the record set.
        for record in mods {
            for dep_id in self.catalog.required_dependencies(&record.mod_id) {
                let present = mods.iter().any(|other| other.mod_id == *dep_id);
                if !present {
                    conflicts.push(Conflict {
                        kind: ConflictKind::MissingDependency,
                        severity: Severity::Warning,
                        primary: record.name.clone(),
                        secondary: None,
                        message: format!("Missing dependency: {dep_id}"),
                        suggestion: Some(format!(
                            "Install {} so that {} can load.",
                            dep_id, record.name
                        )),
                    });
                }
            }
        }

        // 4. Game-version mismatch: major.minor comparison only.
        if !server_game_version.is_empty() {
            for record in mods {
                if let Some(game_version) = &record.game_version {
                    if major_minor(game_version) != major_minor(server_game_version) {
                        conflicts.push(Conflict {
                            kind: ConflictKind::VersionMismatch,
                            severity: Severity::Warning,
                            primary: record.name.clone(),
                            secondary: None,
                            message: format!(
                                "{} targets game version {}, server runs {}",
                                record.name, game_version, server_game_version
                            ),
                            suggestion: Some(
                                "Download a build made for the server's game version.".to_string(),
                            ),
                        });
                    }
                }
            }
        }

        // 5. Loader mismatch: only fires when the record's loader is known.
        for record in mods {
            if record.loader != Loader::Unknown && record.loader != server_loader {
                conflicts.push(Conflict {
                    kind: ConflictKind::LoaderIncompatible,
                    severity: Severity::Error,
                    primary: record.name.clone(),
                    secondary: None,
                    message: format!(
                        "{} is built for {}, server uses {}",
                        record.name, record.loader, server_loader
                    ),
                    suggestion: Some(format!("Find a {server_loader} build of this mod.")),
                });
            }
        }

        conflicts
    }
}

/// Aggregate a conflict list into counts, a 0-100 score and a status.
///
/// `score = clamp(100 - errors * 20 - warnings * 5, 0, 100)`; info findings
/// do not affect the score.
pub fn health_report(mods: &[ModRecord], conflicts: &[Conflict]) -> HealthReport {
    let error_count = conflicts
        .iter()
        .filter(|c| c.severity == Severity::Error)
        .count();
    let warning_count = conflicts
        .iter()
        .filter(|c| c.severity == Severity::Warning)
        .count();
    let info_count = conflicts
        .iter()
        .filter(|c| c.severity == Severity::Info)
        .count();

    let score = (100_i64 - error_count as i64 * 20 - warning_count as i64 * 5).clamp(0, 100) as u8;

    HealthReport {
        total_mods: mods.len(),
        error_count,
        warning_count,
        info_count,
        score,
        status: HealthStatus::from_score(score),
    }
}

/// First two dot-separated components, e.g. "1.20" out of "1.20.1".
fn major_minor(version: &str) -> String {
    version.split('.').take(2).collect::<Vec<_>>().join(".")
}
