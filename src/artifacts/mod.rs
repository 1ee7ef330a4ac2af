//! Values read from a data directory
//!
//! - `commit_id`: Validated commit identifiers
//! - `head`: Parsed content of the `HEAD` file
//! - `packed_refs`: The `packed-refs` table
//! - `ref_name`: Targets of symbolic references

pub mod commit_id;
pub mod head;
pub mod packed_refs;
pub mod ref_name;

/// Pattern a commit ID has to match: an abbreviated or full SHA-1, or a full SHA-256
pub const COMMIT_ID_REGEX: &str = r"^(?:[0-9a-fA-F]{7,40}|[0-9a-fA-F]{64})$";

/// Pattern for symbolic references, e.g. `ref: refs/heads/main`
pub const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Number of characters in an abbreviated commit ID
pub const SHORT_COMMIT_ID_LENGTH: usize = 7;
