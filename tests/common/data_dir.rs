use crate::common::{NON_COMMITTED_HEAD_REF, TEST_COMMIT_ID};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::fixture;

pub fn write(dir: &TempDir, path: &str, content: &str) {
    dir.child(path)
        .write_str(content)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path, e));
}

#[fixture]
pub fn data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// HEAD holds the commit ID directly
#[fixture]
pub fn detached_head(data_dir: TempDir) -> TempDir {
    write(&data_dir, "HEAD", &format!("{}\n", TEST_COMMIT_ID));
    data_dir
}

/// HEAD points to a loose ref file
#[fixture]
pub fn with_refs(data_dir: TempDir) -> TempDir {
    write(&data_dir, "HEAD", "ref: refs/heads/main\n");
    write(&data_dir, "refs/heads/main", &format!("{}\n", TEST_COMMIT_ID));
    data_dir
}

/// HEAD points to a ref that only lives in packed-refs
#[fixture]
pub fn with_packed_refs(data_dir: TempDir) -> TempDir {
    write(&data_dir, "HEAD", "ref: refs/heads/main\n");
    write(
        &data_dir,
        "packed-refs",
        &format!(
            "# pack-refs with: peeled fully-peeled sorted \n\
             0f3c9a1e6b2d4f8a7c5e3b1d9f0a2c4e6b8d0f1a refs/heads/develop\n\
             {} refs/heads/main\n\
             0f3c9a1e6b2d4f8a7c5e3b1d9f0a2c4e6b8d0f1a refs/tags/v1.0.0\n",
            TEST_COMMIT_ID
        ),
    );
    data_dir
}

/// HEAD points to a branch that was never committed to
#[fixture]
pub fn non_committed(data_dir: TempDir) -> TempDir {
    write(&data_dir, "HEAD", &format!("ref: {}\n", NON_COMMITTED_HEAD_REF));
    data_dir
}

/// Like `non_committed`, but with a packed-refs table lacking the branch
#[fixture]
pub fn non_committed_packed_refs(data_dir: TempDir) -> TempDir {
    write(&data_dir, "HEAD", &format!("ref: {}\n", NON_COMMITTED_HEAD_REF));
    write(
        &data_dir,
        "packed-refs",
        &format!("# pack-refs with: peeled fully-peeled sorted \n{} refs/heads/main\n", TEST_COMMIT_ID),
    );
    data_dir
}

#[fixture]
pub fn garbage(data_dir: TempDir) -> TempDir {
    write(&data_dir, "HEAD", "garbage contents");
    data_dir
}
