#![allow(dead_code)]

pub mod data_dir;

pub const TEST_COMMIT_ID: &str = "a2d1bdf";
pub const FULL_COMMIT_ID: &str = "a2d1bdf7a1b6d4e6f1a4e4f5b0c2d6e8f9a1b2c3";
pub const NON_COMMITTED_HEAD_REF: &str = "refs/heads/non_committed_branch";
