//! Commit identifier
//!
//! A hexadecimal string, either abbreviated (at least 7 characters) or a full
//! SHA-1/SHA-256 hash. Git writes lowercase, but uppercase digits are accepted
//! and kept as written.

use crate::artifacts::{COMMIT_ID_REGEX, SHORT_COMMIT_ID_LENGTH};
use crate::errors::{ResolveError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit ID
    ///
    /// The content is expected to be trimmed already. On failure the error
    /// carries the offending content as-is.
    pub fn try_parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let re = regex::Regex::new(COMMIT_ID_REGEX)?;

        if re.is_match(&id) {
            Ok(Self(id))
        } else {
            Err(ResolveError::InvalidCommitId(id))
        }
    }

    /// First 7 characters of the commit ID (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(SHORT_COMMIT_ID_LENGTH).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
