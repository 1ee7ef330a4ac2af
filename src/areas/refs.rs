//! Commit ID resolution
//!
//! Resolves the commit a data directory's `HEAD` points to. HEAD can be:
//! - Detached: it contains the commit ID itself
//! - Symbolic: `ref: refs/heads/<branch>`, pointing to a loose ref file or,
//!   after `git gc`, to a record in `packed-refs`
//!
//! ## Resolution order
//!
//! A detached HEAD resolves directly. A symbolic ref is looked up in each
//! ref store in a fixed order and the first store holding it wins: the loose
//! ref file, then the packed-refs table. A store that does not hold the ref
//! yields `None` and the next one is tried; an error ends the call.

use crate::areas::data_dir::{DataDir, read_file, read_optional_file};
use crate::artifacts::commit_id::CommitId;
use crate::artifacts::head::HeadContent;
use crate::artifacts::packed_refs::PackedRefs;
use crate::artifacts::ref_name::SymRefName;
use crate::errors::{ResolveError, Result};
use derive_new::new;
use tracing::debug;

/// A place a symbolic ref can be stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefStore {
    /// The ref is stored as its own file
    Loose,
    /// The ref is recorded in `packed-refs`
    Packed,
}

/// Ref stores in priority order
pub const REF_STORES: [RefStore; 2] = [RefStore::Loose, RefStore::Packed];

impl RefStore {
    /// Raw commit ID recorded for `sym_ref_name`, `None` if this store lacks it
    fn lookup(&self, data_dir: &DataDir, sym_ref_name: &SymRefName) -> Result<Option<String>> {
        match self {
            RefStore::Loose => Ok(read_optional_file(&data_dir.ref_path(sym_ref_name))?
                .map(|content| content.trim().to_string())),
            RefStore::Packed => Ok(PackedRefs::read(&data_dir.packed_refs_path())?
                .and_then(|packed_refs| {
                    packed_refs
                        .find(sym_ref_name.as_ref_path())
                        .map(ToString::to_string)
                })),
        }
    }
}

/// Resolves the commit ID of a data directory
///
/// Only reads files: nothing is cached between calls, so repeated calls on
/// an unchanged directory return the same result.
#[derive(Debug, Clone, new)]
pub struct CommitResolver {
    data_dir: DataDir,
}

impl CommitResolver {
    /// Resolve HEAD to a commit ID
    ///
    /// # Errors
    ///
    /// - `Io` if `HEAD` cannot be opened, or a loose ref/`packed-refs` exists
    ///   but cannot be opened
    /// - `Read` if an opened file cannot be read as text
    /// - `RefNotFound` if a symbolic ref has no loose file and no
    ///   `packed-refs` record
    /// - `InvalidCommitId` if the resolved content is not a commit hash
    pub fn resolve(&self) -> Result<CommitId> {
        let content = read_file(&self.data_dir.head_path())?;

        match HeadContent::parse(&content)? {
            HeadContent::Detached(content) => {
                let commit_id = CommitId::try_parse(content)?;
                debug!(%commit_id, "resolved detached HEAD");
                Ok(commit_id)
            }
            HeadContent::SymRef { sym_ref_name } => self.resolve_sym_ref(&sym_ref_name),
        }
    }

    fn resolve_sym_ref(&self, sym_ref_name: &SymRefName) -> Result<CommitId> {
        for store in REF_STORES {
            if let Some(content) = store.lookup(&self.data_dir, sym_ref_name)? {
                let commit_id = CommitId::try_parse(content)?;
                debug!(?store, %sym_ref_name, %commit_id, "resolved symbolic ref");
                return Ok(commit_id);
            }
            debug!(?store, %sym_ref_name, "ref not in store");
        }

        Err(ResolveError::RefNotFound(sym_ref_name.to_string()))
    }
}
