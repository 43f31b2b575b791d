//! Services for data aggregation and reporting

pub mod analyzer;

pub use analyzer::LogAnalyzer;
