mod finding_classifier;
mod report_aggregator;

pub use finding_classifier::{FindingClass, FindingClassifier};
pub use report_aggregator::ReportAggregator;
