//! Remediation hints for conflict findings.

use super::types::{Conflict, ConflictKind};

/// Generic remediation hints for a finding, selected by its kind.
///
/// When the finding carries a default suggestion from detection time, it is
/// prepended to the generic list. The result is never empty.
pub fn suggestions_for(conflict: &Conflict) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    match conflict.kind {
        ConflictKind::Duplicate => {
            suggestions.push("Keep only the newest version".to_string());
            suggestions.push("Remove the older copies to avoid conflicts".to_string());
        }
        ConflictKind::Incompatibility => {
            match &conflict.secondary {
                Some(other) => suggestions
                    .push(format!("Disable either {} or {}", conflict.primary, other)),
                None => suggestions.push(format!("Disable {}", conflict.primary)),
            }
            suggestions.push("Check both mods' documentation for known workarounds".to_string());
        }
        ConflictKind::MissingDependency => {
            suggestions.push("Install the missing dependency".to_string());
            suggestions.push("Check the mod's page for its required dependencies".to_string());
        }
        ConflictKind::VersionMismatch => {
            suggestions.push("Download a build matching the server's game version".to_string());
            suggestions.push("Or update the server to the mod's game version".to_string());
        }
        ConflictKind::LoaderIncompatible => {
            suggestions.push("Find a build for the server's loader family".to_string());
            suggestions.push("Change the server type if no such build exists".to_string());
        }
    }

    if let Some(default_hint) = &conflict.suggestion {
        suggestions.insert(0, default_hint.clone());
    }

    suggestions
}
