use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::Io)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
/// An existing file is overwritten without warning.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    std::fs::write(dest_path, content).map_err(Error::Io)
}
