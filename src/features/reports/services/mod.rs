mod report_aggregator;
mod report_service;

pub use report_aggregator::ReportAggregator;
pub use report_service::ReportService;
