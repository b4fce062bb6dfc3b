//! Builder for constructing LicenseReportView from a decoded Grant report

use super::license_report_view::{
    LicenseCountsView, LicenseReportView, PackageCountsView, ReportMetadataView,
};
use crate::license_report::domain::GrantReport;
use crate::license_report::services::ReportAggregator;
use crate::shared::error::ConvertError;

/// Builds the read model from the first target of a report.
pub struct LicenseReportViewBuilder;

impl LicenseReportViewBuilder {
    /// # Errors
    /// Returns `ConvertError::EmptyTargets` when the report has no targets.
    pub fn build(report: &GrantReport) -> Result<LicenseReportView, ConvertError> {
        let target = report.primary_target().ok_or(ConvertError::EmptyTargets)?;
        let aggregated = ReportAggregator::aggregate(target.findings());

        Ok(LicenseReportView {
            metadata: ReportMetadataView {
                tool: report.tool.clone(),
                version: report.version.clone(),
                status: target.status().to_string(),
                target_ref: target.source_ref().to_string(),
            },
            package_counts: PackageCountsView::from(target.package_summary()),
            license_counts: LicenseCountsView::from(target.license_summary()),
            license_summary: aggregated.license_summary,
            denied_packages: aggregated.denied_packages,
            unlicensed_packages: aggregated.unlicensed_packages,
        })
    }
}
