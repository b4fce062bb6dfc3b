use crate::license_report::domain::{Decision, PackageFinding};

/// Where a finding ends up in the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingClass {
    /// No license information at all, whatever the decision says
    Unlicensed,
    /// At least one license and a `deny`/`denied` decision
    Denied,
    /// Licensed and not denied; only visible through Grant's own counts
    Omitted,
}

/// FindingClassifier decides which table a package finding belongs to.
///
/// The license check comes first: a finding without licenses is never
/// treated as denied.
pub struct FindingClassifier;

impl FindingClassifier {
    pub fn classify(finding: &PackageFinding) -> FindingClass {
        if finding.licenses.is_empty() {
            return FindingClass::Unlicensed;
        }
        if Decision::parse(&finding.decision).is_deny() {
            FindingClass::Denied
        } else {
            FindingClass::Omitted
        }
    }
}
