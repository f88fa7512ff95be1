//! Mod compatibility analysis engine.
//!
//! This module turns the raw filenames of a server's installed mods into a
//! severity-scored health report with remediation hints.
//!
//! # Architecture
//!
//! - **Parsing**: Filenames -> structured mod records (id, game version, loader)
//! - **Catalog**: Known incompatibilities and dependencies, loaded from TOML at
//!   startup (or embedded defaults)
//! - **Detection**: Records + server configuration -> ordered conflict list
//! - **Scoring**: Conflicts -> 0-100 health score and qualitative status
//! - **Suggestions**: Per-conflict remediation hints for display
//!
//! No binary manifests are read: every inference comes from the filename alone,
//! which keeps the engine total and reproducible at the cost of precision.
//!
//! # Example
//!
//! ```ignore
//! use nethermate::analyzer::{default_catalog, AnalysisEngine, Loader, ModFileEntry};
//!
//! let engine = AnalysisEngine::new(default_catalog());
//!
//! let files = vec![
//!     ModFileEntry::named("create-1.20.1-forge.jar"),
//!     ModFileEntry::named("sodium-fabric-1.20.1.jar"),
//! ];
//!
//! let analysis = engine.analyze(&files, "1.20.1", Loader::Forge);
//!
//! println!("health: {}/100 ({:?})", analysis.report.score, analysis.report.status);
//! for conflict in &analysis.conflicts {
//!     println!("[{:?}] {}", conflict.severity, conflict.message);
//! }
//! ```

mod catalog;
mod engine;
mod parser;
mod suggest;
mod types;

pub use catalog::{default_catalog, load_catalog, RuleCatalog};
pub use engine::{health_report, AnalysisEngine};
pub use parser::parse_mod_file_name;
pub use suggest::suggestions_for;
pub use types::*;
