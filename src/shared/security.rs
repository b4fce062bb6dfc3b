use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest report file accepted for reading (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Ensures `path` is a regular file that is neither a symlink nor oversized.
///
/// `symlink_metadata()` is used so a link is inspected itself rather than
/// its target.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file (e.g. a directory)
/// - The file is larger than `MAX_FILE_SIZE`
pub fn ensure_readable_report_file(path: &Path) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReportError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input path is a symbolic link".to_string(),
            hint: "Pass the report file itself instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ReportError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    ensure_size_within_limit(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Rejects writing through an existing symbolic link.
///
/// A missing path is fine; the file will be created.
pub fn ensure_not_symlink_target(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Choose an output path that is not a symbolic link".to_string(),
        }
        .into()),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ReportError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        }
        .into()),
    }
}

/// Fails when `file_size` exceeds `max_size`.
pub fn ensure_size_within_limit(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
            hint: "Make sure the path points to a Grant JSON report".to_string(),
        }
        .into());
    }
    Ok(())
}
