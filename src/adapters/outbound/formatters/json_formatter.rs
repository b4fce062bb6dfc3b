use crate::application::read_models::{
    LicenseCountsView, LicenseReportView, PackageCountsView, ReportMetadataView,
};
use crate::license_report::domain::{DeniedPackageRow, LicenseAggregate, UnlicensedPackageRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ConvertError;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadataView,
    summary: Summary<'a>,
    licenses: Section<'a, LicenseAggregate>,
    denied_packages: Section<'a, DeniedPackageRow>,
    unlicensed_packages: Section<'a, UnlicensedPackageRow>,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    packages: &'a PackageCountsView,
    licenses: &'a LicenseCountsView,
}

#[derive(Debug, Serialize)]
struct Section<'a, T> {
    count: usize,
    items: &'a [T],
}

impl<'a, T> Section<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// JsonFormatter adapter emitting the aggregated report as pretty JSON
///
/// Same data and ordering as the Markdown report, for tools that would
/// otherwise have to scrape tables.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, view: &LicenseReportView) -> Result<String, ConvertError> {
        let report = JsonReport {
            metadata: &view.metadata,
            summary: Summary {
                packages: &view.package_counts,
                licenses: &view.license_counts,
            },
            licenses: Section::new(&view.license_summary),
            denied_packages: Section::new(&view.denied_packages),
            unlicensed_packages: Section::new(&view.unlicensed_packages),
        };

        serde_json::to_string_pretty(&report).map_err(|e| ConvertError::Render {
            details: format!("serialize json report: {}", e),
        })
    }
}
