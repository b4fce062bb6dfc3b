use crate::application::read_models::LicenseReportView;

/// Policy-relevant facts about a converted report, used for exit codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceSummary {
    /// Grant's evaluation status for the rendered target
    pub status: String,
    /// Rows in the denied packages table
    pub denied_count: usize,
    /// Rows in the unlicensed packages table
    pub unlicensed_count: usize,
}

impl ComplianceSummary {
    pub fn from_view(view: &LicenseReportView) -> Self {
        Self {
            status: view.metadata.status.clone(),
            denied_count: view.denied_count(),
            unlicensed_count: view.unlicensed_count(),
        }
    }

    pub fn has_denied(&self) -> bool {
        self.denied_count > 0
    }

    pub fn has_unlicensed(&self) -> bool {
        self.unlicensed_count > 0
    }
}

/// ConvertResponse - Response DTO from the report conversion use case
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    /// The rendered report
    pub content: String,
    pub compliance: ComplianceSummary,
}

impl ConvertResponse {
    pub fn new(content: String, compliance: ComplianceSummary) -> Self {
        Self {
            content,
            compliance,
        }
    }
}
