use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportError;
use crate::shared::security::ensure_not_symlink_target;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing the report to a file
///
/// The report is written to a temporary file in the destination directory
/// and then renamed over the target, so readers never see a half-written
/// report.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Directory the temporary file is created in
    fn parent_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(ReportError::FileWriteError {
                path: self.output_path.clone(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
        Ok(())
    }

    fn write_atomically(&self, content: &str) -> Result<()> {
        let write_error = |details: String| ReportError::FileWriteError {
            path: self.output_path.clone(),
            details,
        };

        let mut temp_file = NamedTempFile::new_in(self.parent_directory())
            .map_err(|e| write_error(format!("Failed to create temporary file: {}", e)))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        temp_file
            .persist(&self.output_path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        ensure_not_symlink_target(&self.output_path)?;

        self.write_atomically(content)?;

        eprintln!(
            "{} Output complete: {}",
            "✅".green(),
            self.output_path.display()
        );
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
