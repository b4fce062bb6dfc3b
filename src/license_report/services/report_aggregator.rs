use super::finding_classifier::{FindingClass, FindingClassifier};
use crate::license_report::domain::report_rows::risk_or_placeholder;
use crate::license_report::domain::{
    AggregatedFindings, DeniedPackageRow, LicenseAggregate, PackageFinding, UnlicensedPackageRow,
};
use std::collections::HashMap;

/// Accumulator entry for one license id
struct LicenseTally {
    risk_category: String,
    count: usize,
}

/// ReportAggregator turns a target's findings into sorted report rows.
///
/// Findings are visited in input order. Every sequence it returns is sorted
/// explicitly, so the `HashMap` used for license tallies never leaks its
/// iteration order. All sorts are stable.
pub struct ReportAggregator;

impl ReportAggregator {
    pub fn aggregate(findings: &[PackageFinding]) -> AggregatedFindings {
        let mut tallies: HashMap<&str, LicenseTally> = HashMap::new();
        let mut denied_packages = Vec::new();
        let mut unlicensed_packages = Vec::new();

        for finding in findings {
            match FindingClassifier::classify(finding) {
                FindingClass::Unlicensed => {
                    unlicensed_packages.push(UnlicensedPackageRow::from_finding(finding));
                }
                FindingClass::Omitted => {}
                FindingClass::Denied => {
                    Self::tally_licenses(&mut tallies, finding);
                    denied_packages.push(DeniedPackageRow::from_finding(finding));
                }
            }
        }

        let mut license_summary: Vec<LicenseAggregate> = tallies
            .into_iter()
            .map(|(id, tally)| LicenseAggregate {
                id: id.to_string(),
                risk_category: tally.risk_category,
                count: tally.count,
            })
            .collect();
        license_summary.sort_by(|a, b| a.id.cmp(&b.id));

        denied_packages.sort_by(|a, b| {
            a.license_sort_key
                .cmp(&b.license_sort_key)
                .then_with(|| a.name.cmp(&b.name))
        });

        unlicensed_packages.sort_by(|a, b| {
            a.package_type
                .cmp(&b.package_type)
                .then_with(|| a.name.cmp(&b.name))
        });

        AggregatedFindings {
            license_summary,
            denied_packages,
            unlicensed_packages,
        }
    }

    /// Counts every license occurrence, including repeats within one finding.
    fn tally_licenses<'a>(
        tallies: &mut HashMap<&'a str, LicenseTally>,
        finding: &'a PackageFinding,
    ) {
        for license in &finding.licenses {
            tallies
                .entry(license.id.as_str())
                .or_insert_with(|| LicenseTally {
                    risk_category: risk_or_placeholder(license).to_string(),
                    count: 0,
                })
                .count += 1;
        }
    }
}
