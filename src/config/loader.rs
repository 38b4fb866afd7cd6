//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ScaffoldError, ScaffoldResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// `<config_dir>/scaffolds/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scaffolds").join("config.toml"))
}

fn config_error(path: &Path, message: impl Into<String>) -> ScaffoldError {
    ScaffoldError::Config {
        file: path.to_path_buf(),
        message: message.into(),
    }
}

fn read_table(path: &Path) -> ScaffoldResult<(String, toml::Table)> {
    let content = fs::read_to_string(path).map_err(|e| config_error(path, e.to_string()))?;
    let table = content
        .parse::<toml::Table>()
        .map_err(|e| config_error(path, e.to_string()))?;
    Ok((content, table))
}

/// Type-check one file and collect unknown keys as warnings.
fn check_table(
    path: &Path,
    content: &str,
    table: &toml::Table,
) -> ScaffoldResult<Vec<ConfigWarning>> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let _: Config = serde_ignored::deserialize(toml::Value::Table(table.clone()), |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e.to_string()))?;

    Ok(unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect())
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    let (content, table) = read_table(path)?;
    let warnings = check_table(path, &content, &table)?;
    let config = Config::deserialize(toml::Value::Table(table))
        .map_err(|e| config_error(path, e.to_string()))?;
    Ok((config, warnings))
}

/// Merge defaults, the user file (if present), and the explicit file (required if given).
///
/// Later layers override earlier ones key by key.
pub fn load_layered(
    user: Option<&Path>,
    explicit: Option<&Path>,
) -> ScaffoldResult<(Config, Vec<ConfigWarning>)> {
    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();

    let user = user.filter(|path| path.exists());
    for path in user.into_iter().chain(explicit) {
        debug!(file = %path.display(), "loading config layer");
        let (content, table) = read_table(path)?;
        warnings.extend(check_table(path, &content, &table)?);
        merge_tables(&mut merged, table);
    }

    let config = Config::deserialize(toml::Value::Table(merged)).map_err(|e| {
        config_error(
            explicit.or(user).unwrap_or_else(|| Path::new("<defaults>")),
            e.to_string(),
        )
    })?;
    Ok((config, warnings))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "format", "pretty", "input", "empty"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
