//! Filename parsing for installed mod files.
//!
//! No manifest inside the jar is ever read: everything is inferred from the
//! filename with fixed heuristics, so parsing is total and reproducible.

use super::types::{Loader, ModRecord};

/// Parse one mod filename into a structured record.
///
/// Never fails: unparseable inputs degrade to a record with only
/// `file_name`/`name` populated (and an empty `mod_id`, which still
/// participates in duplicate grouping).
pub fn parse_mod_file_name(file_name: &str) -> ModRecord {
    let name = strip_markers(file_name);
    let normalized = strip_markers(&file_name.to_lowercase());

    ModRecord {
        file_name: file_name.to_string(),
        name,
        mod_id: infer_mod_id(&normalized),
        version: None,
        game_version: first_version_token(&normalized),
        loader: infer_loader(&normalized),
    }
}

/// Remove the first ".jar" extension and ".disabled" marker, keeping case.
fn strip_markers(input: &str) -> String {
    input.replacen(".jar", "", 1).replacen(".disabled", "", 1)
}

/// Loader tokens are tested in a fixed priority order; first match wins.
///
/// "forge" is checked before "neoforge", so filenames containing "neoforge"
/// resolve to `Forge`. The legacy "1.12"/"1.16" tokens were historically
/// bundled with Forge-only releases. Known-precision limitation, kept for
/// reproducibility.
fn infer_loader(normalized: &str) -> Loader {
    if normalized.contains("forge") || normalized.contains("1.12") || normalized.contains("1.16") {
        Loader::Forge
    } else if normalized.contains("neoforge") {
        Loader::NeoForge
    } else if normalized.contains("fabric") {
        Loader::Fabric
    } else if normalized.contains("quilt") {
        Loader::Quilt
    } else {
        Loader::Unknown
    }
}

/// The segment before the first `-` or `_` identifies the mod family.
fn infer_mod_id(normalized: &str) -> String {
    normalized
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_string()
}

/// First `digits.digits` (optionally `.digits`) run in the string,
/// e.g. "1.20.1" out of "create-1.20.1-forge".
fn first_version_token(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // Require ".digits" right after the first run
        if i < bytes.len() && bytes[i] == b'.' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit()
        {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            // Optional third ".digits" component
            if i < bytes.len()
                && bytes[i] == b'.'
                && i + 1 < bytes.len()
                && bytes[i + 1].is_ascii_digit()
            {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            return Some(input[start..i].to_string());
        }
    }
    None
}
