//! Input document model for `grant check --output json`.
//!
//! The structs mirror the nesting of the JSON document. Every field is
//! optional on the wire: a missing key or an explicit `null` leaves the
//! zero value in place, and unknown keys are ignored.

use crate::shared::error::ConvertError;
use serde::{Deserialize, Deserializer};

/// Treats `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a Grant JSON report
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrantReport {
    #[serde(deserialize_with = "null_as_default")]
    pub tool: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub run: Run,
}

impl GrantReport {
    /// Decodes raw report bytes.
    ///
    /// # Errors
    /// Returns `ConvertError::Parse` when the bytes are not a JSON document
    /// of the expected shape.
    pub fn from_slice(raw: &[u8]) -> Result<Self, ConvertError> {
        // Going through `Value` keeps the last of a repeated key instead of
        // failing on it.
        let value: serde_json::Value = serde_json::from_slice(raw)?;
        Ok(GrantReport::deserialize(value)?)
    }

    pub fn targets(&self) -> &[Target] {
        &self.run.targets
    }

    /// The target a report is rendered from. Later targets are ignored.
    pub fn primary_target(&self) -> Option<&Target> {
        self.targets().first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Run {
    #[serde(deserialize_with = "null_as_default")]
    pub targets: Vec<Target>,
}

/// One scanned input (an SBOM file, a directory, an image, ...)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Target {
    #[serde(deserialize_with = "null_as_default")]
    pub source: Source,
    #[serde(deserialize_with = "null_as_default")]
    pub evaluation: Evaluation,
}

impl Target {
    pub fn source_ref(&self) -> &str {
        &self.source.reference
    }

    pub fn status(&self) -> &str {
        &self.evaluation.status
    }

    pub fn package_summary(&self) -> &PackageSummary {
        &self.evaluation.summary.packages
    }

    pub fn license_summary(&self) -> &LicenseSummary {
        &self.evaluation.summary.licenses
    }

    pub fn findings(&self) -> &[PackageFinding] {
        &self.evaluation.findings.packages
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub source_type: String,
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Evaluation {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: Summary,
    #[serde(deserialize_with = "null_as_default")]
    pub findings: Findings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Summary {
    #[serde(deserialize_with = "null_as_default")]
    pub packages: PackageSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub licenses: LicenseSummary,
}

/// Package counts as computed by Grant. Passed through to the report as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub denied: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ignored: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub unlicensed: i64,
}

/// License counts as computed by Grant. Passed through to the report as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LicenseSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub unique: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub denied: i64,
    #[serde(rename = "nonSPDX", deserialize_with = "null_as_default")]
    pub non_spdx: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Findings {
    #[serde(deserialize_with = "null_as_default")]
    pub packages: Vec<PackageFinding>,
}

/// A single package and the policy decision Grant made for it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackageFinding {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub package_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub decision: String,
    #[serde(deserialize_with = "null_as_default")]
    pub licenses: Vec<LicenseRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LicenseRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "riskCategory", deserialize_with = "null_as_default")]
    pub risk_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_full_document() {
        let raw = br#"{
            "tool": "grant",
            "version": "0.6.2",
            "run": { "targets": [ {
                "source": { "type": "file", "ref": "sbom.json" },
                "evaluation": {
                    "status": "noncompliant",
                    "summary": {
                        "packages": { "total": 2, "allowed": 0, "denied": 1, "ignored": 0, "unlicensed": 1 },
                        "licenses": { "unique": 1, "allowed": 0, "denied": 1, "nonSPDX": 3 }
                    },
                    "findings": { "packages": [ {
                        "id": "apk:pkg-a@1.0", "name": "pkg-a", "type": "apk", "version": "1.0",
                        "decision": "deny",
                        "licenses": [ { "id": "GPL-2.0-only", "riskCategory": "Strong Copyleft (High Risk)" } ]
                    } ] }
                }
            } ] }
        }"#;

        let report = GrantReport::from_slice(raw).unwrap();
        assert_eq!(report.tool, "grant");
        assert_eq!(report.version, "0.6.2");

        let target = report.primary_target().unwrap();
        assert_eq!(target.source.source_type, "file");
        assert_eq!(target.source_ref(), "sbom.json");
        assert_eq!(target.status(), "noncompliant");
        assert_eq!(target.package_summary().total, 2);
        assert_eq!(target.package_summary().unlicensed, 1);
        assert_eq!(target.license_summary().non_spdx, 3);

        let finding = &target.findings()[0];
        assert_eq!(finding.package_type, "apk");
        assert_eq!(finding.licenses[0].risk_category, "Strong Copyleft (High Risk)");
    }

    #[test]
    fn test_from_slice_missing_fields_default() {
        let report = GrantReport::from_slice(br#"{"run":{"targets":[{}]}}"#).unwrap();
        assert_eq!(report.tool, "");
        let target = report.primary_target().unwrap();
        assert_eq!(target.status(), "");
        assert_eq!(*target.package_summary(), PackageSummary::default());
        assert!(target.findings().is_empty());
    }

    #[test]
    fn test_from_slice_null_values_default() {
        let raw = br#"{"tool":null,"run":{"targets":[{"evaluation":{"findings":{"packages":[{"name":"x","licenses":null}]}}}]}}"#;
        let report = GrantReport::from_slice(raw).unwrap();
        assert_eq!(report.tool, "");
        let finding = &report.primary_target().unwrap().findings()[0];
        assert_eq!(finding.name, "x");
        assert!(finding.licenses.is_empty());
    }

    #[test]
    fn test_from_slice_ignores_unknown_fields() {
        let raw = br#"{"tool":"grant","extra":{"nested":[1,2]},"run":{"targets":[],"config":"x"}}"#;
        let report = GrantReport::from_slice(raw).unwrap();
        assert_eq!(report.tool, "grant");
        assert!(report.targets().is_empty());
        assert!(report.primary_target().is_none());
    }

    #[test]
    fn test_from_slice_repeated_key_keeps_last_value() {
        let raw = br#"{"tool":"a","tool":"grant","run":{"targets":[{"source":{"ref":"old.json","ref":"sbom.json"}}]}}"#;
        let report = GrantReport::from_slice(raw).unwrap();
        assert_eq!(report.tool, "grant");
        assert_eq!(report.primary_target().unwrap().source_ref(), "sbom.json");
    }

    #[test]
    fn test_from_slice_rejects_lone_surrogate_escape() {
        let result = GrantReport::from_slice(br#"{"tool":"gr\ud800ant","run":{"targets":[{}]}}"#);
        assert!(matches!(result, Err(ConvertError::Parse { .. })));
    }

    #[test]
    fn test_from_slice_rejects_malformed_json() {
        let result = GrantReport::from_slice(b"not json");
        assert!(matches!(result, Err(ConvertError::Parse { .. })));
    }

    #[test]
    fn test_from_slice_rejects_wrong_types() {
        let result = GrantReport::from_slice(br#"{"run":{"targets":"nope"}}"#);
        assert!(matches!(result, Err(ConvertError::Parse { .. })));

        let result = GrantReport::from_slice(
            br#"{"run":{"targets":[{"evaluation":{"summary":{"packages":{"total":1.5}}}}]}}"#,
        );
        assert!(matches!(result, Err(ConvertError::Parse { .. })));
    }
}
