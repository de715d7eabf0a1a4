use std::path::PathBuf;

use crate::constants::{ARTIFACT_EXT, GROUPS_DIR};
use crate::error::Result;
use crate::ioutils::write_file;

/// Persists rendered artifacts under the configured theme directory.
pub struct ArtifactWriter {
    theme: PathBuf,
}

impl ArtifactWriter {
    pub fn new<P: Into<PathBuf>>(theme: P) -> Self {
        Self { theme: theme.into() }
    }

    /// Resolves the output path for a group file stem, e.g. `Product`
    /// becomes `<theme>/app/ACFGroups/Product.php`.
    pub fn artifact_path(&self, file_stem: &str) -> PathBuf {
        self.theme.join(GROUPS_DIR).join(format!("{}.{}", file_stem, ARTIFACT_EXT))
    }

    /// Writes the rendered contents, creating intermediate directories and
    /// overwriting an existing artifact without warning. Returns the
    /// written path.
    pub fn write_group(&self, file_stem: &str, contents: &str) -> Result<PathBuf> {
        let path = self.artifact_path(file_stem);
        write_file(contents, &path)?;
        Ok(path)
    }
}
