use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tempfile::TempDir;

/// A temporary directory holding snapshot files for a single test
pub struct SnapshotDir {
    dir: TempDir,
}

impl SnapshotDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Writes `value` as pretty JSON, the way chain exports are laid out
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> anyhow::Result<PathBuf> {
        let path = self.join(file_name);
        fs::write(&path, serde_json::to_vec_pretty(value)?)?;
        Ok(path)
    }

    pub fn write_raw(&self, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read(&self, file_name: &str) -> anyhow::Result<String> {
        Ok(fs::read_to_string(self.join(file_name))?)
    }
}
