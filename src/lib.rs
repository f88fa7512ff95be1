pub mod analyzer;

pub use analyzer::{
    default_catalog, health_report, load_catalog, parse_mod_file_name, suggestions_for,
    AnalysisEngine, Conflict, ConflictKind, HealthReport, HealthStatus, Loader, ModAnalysis,
    ModFileEntry, ModRecord, RuleCatalog, Severity,
};
