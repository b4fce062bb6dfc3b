use super::report_rows::{DeniedPackageRow, LicenseAggregate, UnlicensedPackageRow};

/// Rows derived from one target's findings, each list already in render order
///
/// - `license_summary`: by license id
/// - `denied_packages`: by license sort key, then name
/// - `unlicensed_packages`: by package type, then name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedFindings {
    pub license_summary: Vec<LicenseAggregate>,
    pub denied_packages: Vec<DeniedPackageRow>,
    pub unlicensed_packages: Vec<UnlicensedPackageRow>,
}
