//! grant-report - Markdown reports for Grant license-compliance results
//!
//! This library turns the JSON produced by `grant check -o json` into a
//! Markdown document with collapsible sections for the evaluation summary,
//! the licenses of denied packages, the denied packages themselves and the
//! packages without any license. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Report model, classification and aggregation
//! - **Application Layer** (`application`): Use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Formatters, file system and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use grant_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let report_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ConvertReportUseCase::new(report_reader, progress_reporter);
//!
//! // Execute
//! let request = ConvertRequest::new(
//!     InputSource::File(PathBuf::from("grant.json")),
//!     OutputFormat::Markdown,
//! );
//! let response = use_case.execute(request)?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod converter;
pub mod license_report;
pub mod ports;
pub mod shared;

pub use converter::{convert, ReportConverter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        ComplianceSummary, ConvertRequest, ConvertResponse, OutputFormat,
    };
    pub use crate::application::read_models::{LicenseReportView, LicenseReportViewBuilder};
    pub use crate::application::use_cases::ConvertReportUseCase;
    pub use crate::converter::{convert, ReportConverter};
    pub use crate::license_report::domain::{
        AggregatedFindings, Decision, DeniedPackageRow, GrantReport, LicenseAggregate,
        LicenseRef, PackageFinding, UnlicensedPackageRow,
    };
    pub use crate::license_report::services::{FindingClass, FindingClassifier, ReportAggregator};
    pub use crate::ports::inbound::ReportConversionPort;
    pub use crate::ports::outbound::{
        InputSource, OutputPresenter, ProgressReporter, ReportFormatter, ReportReader,
    };
    pub use crate::shared::error::{ConvertError, ExitCode, ReportError};
    pub use crate::shared::Result;
}
