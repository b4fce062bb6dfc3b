//! License report read model
//!
//! Everything a formatter needs, already aggregated and sorted. Formatters
//! only lay this data out; they never reorder or filter it.

use crate::license_report::domain::{
    DeniedPackageRow, LicenseAggregate, LicenseSummary, PackageSummary, UnlicensedPackageRow,
};
use serde::Serialize;

/// Render model for a single Grant target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseReportView {
    pub metadata: ReportMetadataView,
    pub package_counts: PackageCountsView,
    pub license_counts: LicenseCountsView,
    /// Licenses seen in denied packages, by id
    pub license_summary: Vec<LicenseAggregate>,
    /// Denied packages, by sorted license ids then name
    pub denied_packages: Vec<DeniedPackageRow>,
    /// Packages without license information, by type then name
    pub unlicensed_packages: Vec<UnlicensedPackageRow>,
}

impl LicenseReportView {
    pub fn license_summary_count(&self) -> usize {
        self.license_summary.len()
    }

    pub fn denied_count(&self) -> usize {
        self.denied_packages.len()
    }

    pub fn unlicensed_count(&self) -> usize {
        self.unlicensed_packages.len()
    }
}

/// Who produced the report and what was scanned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    pub tool: String,
    pub version: String,
    pub status: String,
    pub target_ref: String,
}

/// Grant's package counts, copied verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageCountsView {
    pub total: i64,
    pub allowed: i64,
    pub denied: i64,
    pub ignored: i64,
    pub unlicensed: i64,
}

impl From<&PackageSummary> for PackageCountsView {
    fn from(summary: &PackageSummary) -> Self {
        Self {
            total: summary.total,
            allowed: summary.allowed,
            denied: summary.denied,
            ignored: summary.ignored,
            unlicensed: summary.unlicensed,
        }
    }
}

/// Grant's license counts, copied verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LicenseCountsView {
    pub unique: i64,
    pub allowed: i64,
    pub denied: i64,
    pub non_spdx: i64,
}

impl From<&LicenseSummary> for LicenseCountsView {
    fn from(summary: &LicenseSummary) -> Self {
        Self {
            unique: summary.unique,
            allowed: summary.allowed,
            denied: summary.denied,
            non_spdx: summary.non_spdx,
        }
    }
}
