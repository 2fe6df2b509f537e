//! Writing generated files to disk.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Trait for types that render to a generated source file.
///
/// Generated files are always overwritten so that regeneration from the
/// same inputs replaces any stale artifact.
pub trait GeneratedFile {
    /// File name of the artifact, relative to the output directory.
    fn file_name(&self) -> String;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file into `output_dir` and return the artifact path.
    fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(self.file_name());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::write(&path, e))?;
        }
        std::fs::write(&path, self.render()).map_err(|e| Error::write(&path, e))?;
        Ok(path)
    }
}
