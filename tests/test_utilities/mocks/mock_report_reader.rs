use grant_report::prelude::*;
use std::path::Path;

/// Mock ReportReader serving fixed bytes regardless of the input source
pub struct MockReportReader {
    content: Vec<u8>,
}

impl MockReportReader {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Loads a JSON file from `tests/fixtures/`
    pub fn from_fixture(name: &str) -> Self {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        Self::new(std::fs::read(path).unwrap())
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, _source: &InputSource) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}
