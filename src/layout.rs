//! Conventional directory layout of a generated project.

use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::fsops::FileWriter;

pub const SOURCE_DIR: &str = "src";
pub const LIB_DIR: &str = "lib";
pub const EXTERNAL_DIR: &str = "external";

#[derive(Error, Debug, PartialEq)]
#[error("Cancelling, no files were written")]
pub struct OverwriteDeclined;

/// A destination already holding a `src/` tree is never clobbered silently:
/// the caller-provided confirmation decides, unless `force` is set.
pub fn guard_overwrite(
    writer: &impl FileWriter,
    destination: &Path,
    force: bool,
    confirm: impl FnOnce() -> Result<bool>,
) -> Result<()> {
    if force || !writer.exists(&destination.join(SOURCE_DIR)) {
        return Ok(());
    }
    if confirm()? {
        Ok(())
    } else {
        Err(OverwriteDeclined.into())
    }
}

/// Create `src/`, `lib/` and `external/`. The `test/` directory is created
/// lazily when the test harness files are written. Idempotent.
pub fn create_project_layout(writer: &mut impl FileWriter, destination: &Path) -> Result<()> {
    for dir in [SOURCE_DIR, LIB_DIR, EXTERNAL_DIR] {
        writer.create_dir_all(&destination.join(dir))?;
    }
    Ok(())
}
