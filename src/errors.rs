//! Errors raised while resolving a commit ID
//!
//! Every failure is terminal for the call that produced it. I/O failures keep
//! the underlying `std::io::Error` as their source so the OS message reaches
//! the caller untouched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// The data directory environment variable is unset or empty
    #[error("{var:?} does not exist or is empty")]
    MissingDataDir { var: String },

    /// A file that had to be read could not be opened
    #[error("open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file was opened but its content could not be read as text
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// HEAD points at a ref that has neither a loose file nor a packed-refs record
    #[error("{0:?} ref not found in packed-refs")]
    RefNotFound(String),

    /// Content was read but does not look like a commit hash
    #[error("{0:?} is not a valid commit ID")]
    InvalidCommitId(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ResolveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ResolveError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ResolveError::Read {
            path: path.into(),
            source,
        }
    }

    /// True when the error stems from a file that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_data_dir_quotes_the_variable_name() {
        let err = ResolveError::MissingDataDir {
            var: "KO_DATA_PATH".to_string(),
        };

        assert_eq!(err.to_string(), r#""KO_DATA_PATH" does not exist or is empty"#);
    }

    #[test]
    fn io_error_keeps_the_os_message() {
        let source = io::Error::new(io::ErrorKind::NotFound, "no such file or directory");
        let err = ResolveError::io("testdata/nonexisting/HEAD", source);

        assert_eq!(
            err.to_string(),
            "open testdata/nonexisting/HEAD: no such file or directory"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn ref_not_found_quotes_the_ref() {
        let err = ResolveError::RefNotFound("refs/heads/non_committed_branch".to_string());

        assert_eq!(
            err.to_string(),
            r#""refs/heads/non_committed_branch" ref not found in packed-refs"#
        );
    }

    #[test]
    fn invalid_commit_id_quotes_the_content() {
        let err = ResolveError::InvalidCommitId("garbage contents".to_string());

        assert_eq!(err.to_string(), r#""garbage contents" is not a valid commit ID"#);
    }
}
