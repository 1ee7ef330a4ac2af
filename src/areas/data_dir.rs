//! Data directory configuration
//!
//! The directory holding `HEAD`, `refs/` and `packed-refs` is injected at
//! build time and located through the `KO_DATA_PATH` environment variable.
//! Only this adapter reads the environment; the resolver receives a
//! `DataDir` value.

use crate::artifacts::ref_name::SymRefName;
use crate::errors::{ResolveError, Result};
use std::io::Read;
use std::path::{Component, Path, PathBuf};

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "KO_DATA_PATH";

/// Name of the HEAD reference file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Name of the packed refs table
pub const PACKED_REFS_NAME: &str = "packed-refs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    path: Box<Path>,
}

impl DataDir {
    pub fn new(path: impl AsRef<Path>) -> Self {
        DataDir {
            path: path.as_ref().into(),
        }
    }

    /// Locate the data directory through `KO_DATA_PATH`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Locate the data directory through an arbitrary variable lookup
    ///
    /// Unset and empty variables are both rejected before any file is touched.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(DATA_DIR_ENV) {
            Some(path) if !path.is_empty() => Ok(Self::new(path)),
            _ => Err(ResolveError::MissingDataDir {
                var: DATA_DIR_ENV.to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn packed_refs_path(&self) -> Box<Path> {
        self.path.join(PACKED_REFS_NAME).into_boxed_path()
    }

    /// Path of a loose ref file, always inside the data directory
    ///
    /// Root, prefix, `.` and `..` components of the ref name are dropped, so
    /// `ref: /etc/passwd` maps to `<root>/etc/passwd`.
    pub fn ref_path(&self, sym_ref_name: &SymRefName) -> Box<Path> {
        let relative = Path::new(sym_ref_name.as_ref_path())
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                Component::Prefix(_)
                | Component::RootDir
                | Component::CurDir
                | Component::ParentDir => None,
            })
            .collect::<PathBuf>();

        self.path.join(relative).into_boxed_path()
    }
}

/// Read a file that has to exist
///
/// Open failures become `Io`, failures while reading an opened file
/// (including invalid UTF-8) become `Read`.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path).map_err(|e| ResolveError::io(path, e))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ResolveError::read(path, e))?;

    Ok(content)
}

/// Read a file that may be absent; `None` if it does not exist
pub(crate) fn read_optional_file(path: &Path) -> Result<Option<String>> {
    match read_file(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
