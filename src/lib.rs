//! Resolve the commit a build was made from
//!
//! Build tooling copies a working copy's `HEAD`, `refs/` and `packed-refs`
//! into a data directory and exposes it through `KO_DATA_PATH`. This crate
//! turns that directory back into a commit ID for version metadata.
//!
//! ```no_run
//! use changeset::areas::data_dir::DataDir;
//! use changeset::areas::refs::CommitResolver;
//!
//! let resolver = CommitResolver::new(DataDir::new("/var/run/ko"));
//! let commit_id = resolver.resolve()?;
//! println!("built from {}", commit_id.to_short_oid());
//! # Ok::<(), changeset::errors::ResolveError>(())
//! ```

use tracing::warn;

pub mod areas;
pub mod artifacts;
pub mod errors;

pub use areas::data_dir::{DATA_DIR_ENV, DataDir};
pub use areas::refs::CommitResolver;
pub use artifacts::commit_id::CommitId;
pub use errors::ResolveError;

/// Reported when no commit ID can be determined
pub const UNKNOWN: &str = "unknown";

/// Resolve the commit ID of the data directory named by `KO_DATA_PATH`
pub fn get() -> errors::Result<CommitId> {
    CommitResolver::new(DataDir::from_env()?).resolve()
}

/// Like [`get`], but falls back to [`UNKNOWN`] when resolution fails
pub fn get_or_unknown() -> String {
    or_unknown(get())
}

/// Render a resolution result, replacing any failure with [`UNKNOWN`]
pub fn or_unknown(resolved: errors::Result<CommitId>) -> String {
    match resolved {
        Ok(commit_id) => commit_id.to_string(),
        Err(e) => {
            warn!(error = %e, "could not resolve commit ID");
            UNKNOWN.to_string()
        }
    }
}
