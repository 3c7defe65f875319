#[cfg(feature = "http")]
mod http;
mod record;
mod risk;
mod source;

#[cfg(feature = "http")]
pub use http::HttpSource;
pub use record::{MetricRecord, NationalSummary, TrendPoint};
pub use risk::RiskLevel;
pub use source::{MemSource, MetricsSource};
