//! logtally: access-frequency statistics for web server logs
//!
//! Reads plain-text access logs (one `year month day hour minute` line per
//! access) and aggregates them into hourly, daily, and monthly frequency
//! tables with derived busiest/quietest queries.

pub mod cli;
pub mod parsers;
pub mod services;
pub mod types;
