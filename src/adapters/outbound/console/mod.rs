/// Console adapters for user-facing status output
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
