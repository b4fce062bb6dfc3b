use crate::ports::outbound::{InputSource, ReportReader};
use crate::shared::error::ReportError;
use crate::shared::security::{
    ensure_readable_report_file, ensure_size_within_limit, MAX_FILE_SIZE,
};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading Grant reports
///
/// This adapter implements the ReportReader port for report files and for
/// reports piped in on stdin.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a report file with security checks:
    /// - Reject symbolic links
    /// - Validate the path is a regular file
    /// - Check the file size limit
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(ReportError::InputNotFound {
                path: path.to_path_buf(),
                suggestion: "Generate one with `grant check <sbom> --output json --output-file <path>`, \
                     or pass `-` to read the report from stdin."
                    .to_string(),
            }
            .into());
        }

        ensure_readable_report_file(path)?;

        fs::read(path).map_err(|e| {
            ReportError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads everything from `reader`, failing past `MAX_FILE_SIZE` bytes.
    fn read_limited<R: Read>(&self, reader: R, label: &Path) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        reader
            .take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| ReportError::FileReadError {
                path: label.to_path_buf(),
                details: e.to_string(),
            })?;
        ensure_size_within_limit(buffer.len() as u64, label, MAX_FILE_SIZE)?;
        Ok(buffer)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, source: &InputSource) -> Result<Vec<u8>> {
        match source {
            InputSource::File(path) => self.read_file(path),
            InputSource::Stdin => self.read_limited(io::stdin().lock(), Path::new("<stdin>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_report_success() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("report.json");
        fs::write(&report_path, br#"{"tool":"grant"}"#).unwrap();

        let reader = FileSystemReader::new();
        let content = reader
            .read_report(&InputSource::File(report_path))
            .unwrap();

        assert_eq!(content, br#"{"tool":"grant"}"#);
    }

    #[test]
    fn test_read_report_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");

        let reader = FileSystemReader::new();
        let result = reader.read_report(&InputSource::File(missing));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Grant report not found"));
        assert!(err_string.contains("grant check"));
    }

    #[test]
    fn test_read_report_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_report(&InputSource::File(temp_dir.path().to_path_buf()));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_read_limited_within_limit() {
        let reader = FileSystemReader::new();
        let content = reader
            .read_limited(Cursor::new(b"{}".to_vec()), &PathBuf::from("<stdin>"))
            .unwrap();
        assert_eq!(content, b"{}");
    }

    #[test]
    fn test_read_limited_empty_input() {
        let reader = FileSystemReader::new();
        let content = reader
            .read_limited(Cursor::new(Vec::new()), &PathBuf::from("<stdin>"))
            .unwrap();
        assert!(content.is_empty());
    }
}
