use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `contents` so readers see either the old file or the
/// complete new one. Missing parent directories are created.
pub fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(contents)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
