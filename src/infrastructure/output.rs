//! Output encoding and writing
//!
//! The output document is produced in full before anything is written, and
//! file targets are replaced atomically, so a failed run leaves no partial
//! output behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Encode a value as one output document, always newline-terminated
pub fn encode<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    pretty: bool,
) -> ScaffoldResult<String> {
    let mut out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => {
            serde_yaml_ng::to_string(value).map_err(|e| ScaffoldError::Encode(e.to_string()))?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Write content to a file atomically
///
/// Uses tempfile + rename in the destination directory.
pub fn write_atomic(path: &Path, content: &str) -> ScaffoldResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut file = tempfile::NamedTempFile::new_in(parent)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Where the output document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    /// Write the full document in one go
    pub fn emit(&self, content: &str) -> ScaffoldResult<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            Self::File(path) => write_atomic(path, content),
        }
    }
}
