//! Read models for CQRS-lite pattern
//!
//! View structs holding the fully aggregated report, consumed by the
//! formatter adapters.

pub mod license_report_view;
pub mod license_report_view_builder;

pub use license_report_view::{
    LicenseCountsView, LicenseReportView, PackageCountsView, ReportMetadataView,
};
pub use license_report_view_builder::LicenseReportViewBuilder;
