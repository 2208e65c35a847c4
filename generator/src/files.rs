use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::GenerateError;

/// Delete `path` if it exists and recreate it empty.
pub fn reset_dir(path: &Path) -> Result<(), GenerateError> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| GenerateError::io(path, e))?;
    }
    fs::create_dir_all(path).map_err(|e| GenerateError::io(path, e))
}

/// Copy a directory tree depth-first, logging each copied file.
/// Returns the number of files copied.
pub fn copy_dir_recursive(
    source: &Path,
    dest: &Path,
    log: &mut dyn Write,
) -> Result<usize, GenerateError> {
    let mut copied = 0;
    let entries = fs::read_dir(source).map_err(|e| GenerateError::io(source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| GenerateError::io(source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| GenerateError::io(&from, e))?;
        if file_type.is_dir() {
            fs::create_dir_all(&to).map_err(|e| GenerateError::io(&to, e))?;
            copied += copy_dir_recursive(&from, &to, log)?;
        } else {
            fs::copy(&from, &to).map_err(|e| GenerateError::io(&from, e))?;
            let _ = writeln!(log, "copy {} -> {}", from.display(), to.display());
            copied += 1;
        }
    }
    Ok(copied)
}
