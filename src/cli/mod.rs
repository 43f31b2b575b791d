//! CLI command handling

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::parsers::{LogfileReader, RecordSource, DEFAULT_LOG_FILE};
use crate::services::LogAnalyzer;
use crate::types::{DailyReport, HourlyReport, MonthlyReport};

/// Access-frequency analyzer for web server logs
#[derive(Parser)]
#[command(name = "logtally")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log file to analyze
    #[arg(short, long, global = true, default_value = DEFAULT_LOG_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show hourly access counts (or JSON with --json)
    Hourly {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show daily access counts (or JSON with --json)
    Daily {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show monthly access counts (or JSON with --json)
    Monthly {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full statistics report (default)
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every parsed log record
    Dump,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let reader = LogfileReader::new(&self.file)?;

        match self.command.unwrap_or(Commands::Stats { json: false }) {
            Commands::Hourly { json } => run_hourly(reader, json),
            Commands::Daily { json } => run_daily(reader, json),
            Commands::Monthly { json } => run_monthly(reader, json),
            Commands::Stats { json } => run_stats(reader, json),
            Commands::Dump => run_dump(reader),
        }
    }
}

fn run_hourly(reader: LogfileReader, json: bool) -> anyhow::Result<()> {
    let mut analyzer = LogAnalyzer::new(reader);
    analyzer.analyze_hourly();
    let report = analyzer.hourly_report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_hourly(&report);
    }
    Ok(())
}

fn run_daily(reader: LogfileReader, json: bool) -> anyhow::Result<()> {
    let mut analyzer = LogAnalyzer::new(reader);
    analyzer.analyze_daily();
    let report = analyzer.daily_report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_daily(&report);
    }
    Ok(())
}

fn run_monthly(reader: LogfileReader, json: bool) -> anyhow::Result<()> {
    let mut analyzer = LogAnalyzer::new(reader);
    analyzer.analyze_monthly();
    let report = analyzer.monthly_report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_monthly(&report);
    }
    Ok(())
}

fn run_stats(reader: LogfileReader, json: bool) -> anyhow::Result<()> {
    let mut analyzer = LogAnalyzer::new(reader);
    analyzer.analyze_hourly();
    analyzer.analyze_daily();
    analyzer.analyze_monthly();
    let report = analyzer.stats_report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_hourly(&report.hourly);
        println!();
        print_daily(&report.daily);
        println!();
        print_monthly(&report.monthly);
    }
    Ok(())
}

/// Print every well-formed record the reader parsed, one per line.
fn run_dump(mut reader: LogfileReader) -> anyhow::Result<()> {
    reader.reset();
    while let Some(record) = reader.next_record() {
        println!("{}", record);
    }
    Ok(())
}

fn print_hourly(report: &HourlyReport) {
    println!("Hr: Count");
    for (hour, count) in report.counts.iter().enumerate() {
        println!("{}: {}", hour, count);
    }
    println!("Total accesses: {}", report.total);
    println!("Busiest hour: {}", report.busiest);
    println!("Quietest hour: {}", report.quietest);
    println!(
        "Busiest two-hour period: {}-{}",
        report.busiest_two_hour,
        report.busiest_two_hour + 1
    );
}

fn print_daily(report: &DailyReport) {
    println!("Day: Count");
    for (day, count) in report.counts.iter().enumerate() {
        println!("{}: {}", day + 1, count);
    }
    println!("Busiest day: {}", report.busiest + 1);
    println!("Quietest day: {}", report.quietest + 1);
}

fn print_monthly(report: &MonthlyReport) {
    println!("Month: Count");
    for (month, count) in report.counts.iter().enumerate() {
        println!("{}: {}", month + 1, count);
    }
    println!("Total accesses: {}", report.total);
    println!("Average accesses per month: {}", report.average);
    println!("Busiest month: {}", report.busiest + 1);
    println!("Quietest month: {}", report.quietest + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["logtally"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_cli_parse_hourly() {
        let cli = Cli::try_parse_from(["logtally", "hourly"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Hourly { json: false })
        ));
    }

    #[test]
    fn test_cli_parse_hourly_json() {
        let cli = Cli::try_parse_from(["logtally", "hourly", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Hourly { json: true })));
    }

    #[test]
    fn test_cli_parse_stats_json() {
        let cli = Cli::try_parse_from(["logtally", "stats", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stats { json: true })));
    }

    #[test]
    fn test_cli_parse_dump() {
        let cli = Cli::try_parse_from(["logtally", "dump"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Dump)));
    }

    #[test]
    fn test_cli_parse_custom_file() {
        let cli = Cli::try_parse_from(["logtally", "--file", "access.log", "daily"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("access.log"));
        assert!(matches!(cli.command, Some(Commands::Daily { json: false })));
    }

    #[test]
    fn test_cli_parse_file_after_subcommand() {
        let cli = Cli::try_parse_from(["logtally", "monthly", "--file", "access.log"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("access.log"));
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        let result = Cli::try_parse_from(["logtally", "weekly"]);
        assert!(result.is_err());
    }
}
