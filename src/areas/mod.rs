//! Filesystem-facing components
//!
//! - `data_dir`: Location of the data directory and the files inside it
//! - `refs`: Resolution of HEAD to a commit ID

pub mod data_dir;
pub mod refs;
