pub mod aggregated_findings;
pub mod decision;
pub mod grant_report;
pub mod report_rows;

pub use aggregated_findings::AggregatedFindings;
pub use decision::Decision;
pub use grant_report::{
    GrantReport, LicenseRef, LicenseSummary, PackageFinding, PackageSummary, Target,
};
pub use report_rows::{DeniedPackageRow, LicenseAggregate, UnlicensedPackageRow};
