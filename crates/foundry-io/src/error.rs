//! Error types for import and export.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use foundry_grid::GridError;

/// Errors that can occur while reading or writing simulation data.
#[derive(Debug)]
pub enum IoError {
    /// An I/O error, with the file involved when there is one.
    Io {
        /// File being read or written.
        path: Option<PathBuf>,
        /// Underlying error.
        source: io::Error,
    },
    /// A record could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// Imported data does not fit the grid.
    Grid(GridError),
}

impl IoError {
    /// Attach `path` to an I/O error that has none.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::Io { path: None, source } => write!(f, "I/O error: {source}"),
            Self::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for IoError {
    fn from(source: io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

impl From<GridError> for IoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse whitespace-separated numeric tokens of one record.
pub(crate) fn parse_tokens<T: std::str::FromStr>(
    line_no: usize,
    text: &str,
    what: &str,
    allowed: &[usize],
) -> Result<Vec<T>, IoError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if !allowed.contains(&tokens.len()) {
        return Err(IoError::Parse {
            line: line_no,
            reason: format!("expected {what}, found {} fields", tokens.len()),
        });
    }
    tokens
        .iter()
        .map(|t| {
            t.parse::<T>().map_err(|_| IoError::Parse {
                line: line_no,
                reason: format!("invalid number {t:?}"),
            })
        })
        .collect()
}
