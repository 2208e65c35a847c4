use std::fmt;
use std::io;
use std::path::PathBuf;

use mdsite::ConvertError;

/// Failures raised while generating a site.
#[derive(Debug)]
pub enum GenerateError {
    /// Filesystem failure. Aborts the build.
    Io { path: PathBuf, source: io::Error },
    /// One document failed to convert.
    Convert { path: PathBuf, error: ConvertError },
    /// `site.toml` was present but malformed.
    Config { path: PathBuf, message: String },
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            GenerateError::Convert { path, error } => write!(f, "{}: {}", path.display(), error),
            GenerateError::Config { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Io { source, .. } => Some(source),
            GenerateError::Convert { error, .. } => Some(error),
            GenerateError::Config { .. } => None,
        }
    }
}
