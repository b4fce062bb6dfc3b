/// ProgressReporter port for user-facing status messages
///
/// Messages go somewhere other than the report itself (stderr in the CLI),
/// so piping the report stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
