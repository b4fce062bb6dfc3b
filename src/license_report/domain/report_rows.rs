use super::grant_report::{LicenseRef, PackageFinding};
use serde::Serialize;

/// Shown in place of an empty risk category or license list
pub const PLACEHOLDER: &str = "-";

/// Risk label for a license reference, `-` when Grant left it empty
pub fn risk_or_placeholder(license: &LicenseRef) -> &str {
    if license.risk_category.is_empty() {
        PLACEHOLDER
    } else {
        &license.risk_category
    }
}

/// Occurrences of one license across all denied packages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseAggregate {
    pub id: String,
    /// Risk seen on the first occurrence; later occurrences never replace it
    pub risk_category: String,
    pub count: usize,
}

/// A denied package that carries at least one license
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeniedPackageRow {
    pub name: String,
    pub version: String,
    pub package_type: String,
    /// `"<id> (<risk>)"` entries in the finding's original license order
    pub license_list: String,
    /// License ids sorted and joined with a single space
    #[serde(skip)]
    pub license_sort_key: String,
}

impl DeniedPackageRow {
    pub fn from_finding(finding: &PackageFinding) -> Self {
        let license_list = finding
            .licenses
            .iter()
            .map(|l| format!("{} ({})", l.id, risk_or_placeholder(l)))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sort_ids: Vec<&str> = finding.licenses.iter().map(|l| l.id.as_str()).collect();
        sort_ids.sort_unstable();
        let license_sort_key = sort_ids.join(" ");

        Self {
            name: finding.name.clone(),
            version: finding.version.clone(),
            package_type: finding.package_type.clone(),
            license_list: if license_list.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                license_list
            },
            license_sort_key: if license_sort_key.is_empty() {
                " ".to_string()
            } else {
                license_sort_key
            },
        }
    }
}

/// A package Grant reported without any license information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlicensedPackageRow {
    pub name: String,
    pub version: String,
    pub package_type: String,
}

impl UnlicensedPackageRow {
    pub fn from_finding(finding: &PackageFinding) -> Self {
        Self {
            name: finding.name.clone(),
            version: finding.version.clone(),
            package_type: finding.package_type.clone(),
        }
    }
}
