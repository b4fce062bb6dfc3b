use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered report is delivered.
pub trait OutputPresenter {
    /// Presents the rendered report
    ///
    /// # Arguments
    /// * `content` - The rendered report
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected by a security check
    fn present(&self, content: &str) -> Result<()>;
}
