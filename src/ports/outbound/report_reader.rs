use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where a Grant JSON report is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A report written by `grant check --output json --output-file <path>`
    File(PathBuf),
    /// A report piped in on standard input
    Stdin,
}

impl InputSource {
    /// Maps the conventional `-` to stdin, anything else to a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// ReportReader port for loading raw report bytes
///
/// This port abstracts where the scanner output comes from so the
/// conversion use case never touches the file system directly.
pub trait ReportReader {
    /// Reads the raw, undecoded report
    ///
    /// # Arguments
    /// * `source` - Location of the report
    ///
    /// # Returns
    /// The report bytes exactly as produced by the scanner
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist or is not a regular file
    /// - The input exceeds the size limit
    /// - Reading fails due to permissions or I/O errors
    fn read_report(&self, source: &InputSource) -> Result<Vec<u8>>;
}
