//! The `packed-refs` table
//!
//! Git moves loose refs into a single flat file when it garbage-collects a
//! repository. Each record is `<commit-id> <ref-path>`:
//!
//! ```text
//! # pack-refs with: peeled fully-peeled sorted
//! a2d1bdf7a1b6d4e6f1a4e4f5b0c2d6e8f9a1b2c3 refs/heads/main
//! 0f3c9a1e6b2d4f8a7c5e3b1d9f0a2c4e6b8d0f1a refs/tags/v1.0.0
//! ^5e1c7a3b9d2f4e6a8c0b1d3f5a7c9e2b4d6f8a0c
//! ```
//!
//! Comment lines start with `#`; lines starting with `^` carry the peeled
//! commit of the annotated tag on the previous line.

use crate::areas::data_dir::read_optional_file;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PackedRef {
    pub commit_id: String,
    pub ref_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedRefs {
    entries: Vec<PackedRef>,
}

impl PackedRefs {
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('^'))
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let commit_id = fields.next()?;
                let ref_name = fields.next()?;
                Some(PackedRef::new(commit_id.to_string(), ref_name.to_string()))
            })
            .collect::<Vec<_>>();

        Self { entries }
    }

    /// Read and parse the table at `path`
    ///
    /// Returns `Ok(None)` when the file does not exist; any other read
    /// failure is an error.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        Ok(read_optional_file(path)?.map(|content| Self::parse(&content)))
    }

    /// Commit ID of the first record whose ref path equals `ref_name`
    pub fn find(&self, ref_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.ref_name == ref_name)
            .map(|entry| entry.commit_id.as_str())
    }

    pub fn entries(&self) -> &[PackedRef] {
        &self.entries
    }
}
