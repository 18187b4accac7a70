//! Error taxonomy for the sweep harness.
//!
//! Three failure classes, all fatal to a sweep:
//!
//! - [`Error::Config`]: invalid sweep or engine configuration, raised
//!   before any instance is loaded.
//! - [`Error::Resource`]: an instance or solutions file could not be read.
//! - [`Error::DataIntegrity`]: a file was readable but its contents do not
//!   describe a usable instance (non-square matrix, missing optimal-cost
//!   entry, garbled tokens).

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Invalid configuration, detected before any work starts.
    Config(String),

    /// A file could not be opened or read.
    Resource {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File contents are inconsistent with the expected format.
    DataIntegrity(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn data(message: impl Into<String>) -> Self {
        Error::DataIntegrity(message.into())
    }

    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Resource {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(message) => write!(f, "configuration error: {message}"),
            Error::Resource { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Error::DataIntegrity(message) => write!(f, "data integrity error: {message}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Resource { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = Error::resource(
            "input/data10.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let text = err.to_string();
        assert!(text.contains("data10.txt"), "missing path in: {text}");
    }

    #[test]
    fn test_resource_exposes_source() {
        use std::error::Error as _;
        let err = Error::resource(
            "x.txt",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(err.source().is_some());
        assert!(Error::config("bad selector").source().is_none());
    }
}
