//! Atomic replacement of the output file
//!
//! All writes go to a temporary file in the target's directory. `commit`
//! syncs it and renames it over the target; dropping an uncommitted
//! `AtomicOutput` removes the temporary file, so a failed run never leaves a
//! truncated output behind.
//!
//! On Unix the committed file keeps the mode of the file it replaces. A new
//! file gets `0o666` minus the process umask, like `File::create`.

use crate::types::NormalizeError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Output file staged in a temporary location until committed
#[derive(Debug)]
pub struct AtomicOutput {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicOutput {
    /// Stage a new output for `target`
    ///
    /// The temporary file is created next to the target so the final rename
    /// never crosses filesystems. Fails with `OutputWrite` if the directory
    /// does not exist or is not writable.
    pub fn create(target: &Path) -> Result<Self, NormalizeError> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = fs::metadata(target).ok().map(|metadata| metadata.permissions());

        let mut builder = tempfile::Builder::new();
        builder.prefix(".review-normalizer-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Subject to the umask, as for any newly created file
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let temp = builder
            .tempfile_in(dir)
            .map_err(|e| NormalizeError::output_write(target, e))?;

        if let Some(permissions) = existing {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| NormalizeError::output_write(target, e))?;
        }

        debug!(temp = %temp.path().display(), target = %target.display(), "Staged output");

        Ok(Self {
            target: target.to_path_buf(),
            temp,
        })
    }

    /// Path of the staging file
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Writable handle to the staging file
    pub fn file(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// Open a second handle to the staging file, for async writers
    pub fn reopen(&self) -> Result<File, NormalizeError> {
        self.temp
            .reopen()
            .map_err(|e| NormalizeError::output_write(&self.target, e))
    }

    /// Sync the staging file and rename it over the target
    pub fn commit(self) -> Result<(), NormalizeError> {
        let target = self.target;

        self.temp
            .as_file()
            .sync_all()
            .map_err(|e| NormalizeError::output_write(&target, e))?;

        self.temp
            .persist(&target)
            .map_err(|e| NormalizeError::output_write(&target, e.error))?;

        debug!(target = %target.display(), "Committed output");
        Ok(())
    }
}
