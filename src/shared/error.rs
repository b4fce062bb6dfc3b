use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a policy failure from
/// a broken invocation or an unreadable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report written, no enabled policy check tripped
    Success = 0,
    /// `--fail-on-denied` or `--fail-on-unlicensed` matched at least one package
    PolicyViolation = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, malformed report, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolation => write!(f, "Policy Violation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while turning raw Grant JSON into a rendered report.
///
/// `Parse` and `EmptyTargets` describe bad input. `Render` means the derived
/// data could not be written into the report skeleton, which indicates a bug
/// rather than a data problem, but it still travels through `Result`.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("parse grant report json: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("grant report has no targets")]
    EmptyTargets,

    #[error("execute template: {details}")]
    Render { details: String },
}

impl From<serde_json::Error> for ConvertError {
    fn from(source: serde_json::Error) -> Self {
        ConvertError::Parse { source }
    }
}

impl From<fmt::Error> for ConvertError {
    fn from(err: fmt::Error) -> Self {
        ConvertError::Render {
            details: err.to_string(),
        }
    }
}

/// Application-level errors around the converter: reading reports,
/// writing output and loading configuration.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Grant report not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration and request building
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::PolicyViolation.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::PolicyViolation),
            "Policy Violation (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_parse_error_display_names_phase() {
        let source = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        let error = ConvertError::from(source);
        let display = error.to_string();
        assert!(display.starts_with("parse grant report json: "));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_empty_targets_display() {
        assert_eq!(
            ConvertError::EmptyTargets.to_string(),
            "grant report has no targets"
        );
    }

    #[test]
    fn test_render_error_from_fmt_error() {
        let error = ConvertError::from(fmt::Error);
        assert!(matches!(error, ConvertError::Render { .. }));
        assert!(error.to_string().starts_with("execute template: "));
    }

    #[test]
    fn test_input_not_found_display() {
        let error = ReportError::InputNotFound {
            path: PathBuf::from("/tmp/report.json"),
            suggestion: "Run `grant check -o json` first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Grant report not found"));
        assert!(display.contains("/tmp/report.json"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReportError::FileWriteError {
            path: PathBuf::from("/test/report.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.md"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ReportError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
