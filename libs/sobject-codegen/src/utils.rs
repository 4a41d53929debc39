use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory of a Java package below `output_dir` (`com.acme.dto` → `com/acme/dto`).
pub fn package_dir(output_dir: &Path, package_name: &str) -> PathBuf {
    package_name
        .trim()
        .split('.')
        .fold(output_dir.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Create the package directory of the generated sources if it does not exist.
pub fn create_package_dir(output_dir: &Path, package_name: &str) -> Result<PathBuf> {
    let dir = package_dir(output_dir, package_name);
    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
    Ok(dir)
}

/// Write one generated artifact, replacing any previous version.
///
/// The file handle is closed on every return path.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(path, e))
}
