//! Filesystem capability seam, so rendering and scaffolding logic can be
//! exercised against an in-memory double instead of a real disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub trait FileWriter {
    /// Write `contents` to `path`, creating parent directories as needed.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()>;

    fn create_dir_all(&mut self, path: &Path) -> Result<()>;

    fn set_executable(&mut self, path: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// The real thing.
#[derive(Debug, Default)]
pub struct DiskWriter;

impl FileWriter for DiskWriter {
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {}", parent.display()))?;
        }
        fs::write(path, contents).with_context(|| format!("cannot write {}", path.display()))
    }

    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("cannot create directory {}", path.display()))
    }

    #[cfg(unix)]
    fn set_executable(&mut self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = fs::metadata(path)
            .with_context(|| format!("cannot stat {}", path.display()))?
            .permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(path, permissions)
            .with_context(|| format!("cannot chmod {}", path.display()))
    }

    #[cfg(not(unix))]
    fn set_executable(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
pub use memory::MemoryWriter;
