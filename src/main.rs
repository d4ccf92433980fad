mod analyzer;
mod report;
mod rules;

use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// A CLI tool for lightweight traffic and security triage of access logs
#[derive(Parser, Debug)]
#[command(
    name = "logtriage",
    author,
    version,
    about = "Analyzes web server access logs for request counts, hot endpoints, and repeated login failures"
)]
struct Args {
    /// Path to the access log file to analyze
    #[arg(value_name = "LOG_FILE")]
    file: PathBuf,

    /// Failed-login count threshold — IPs exceeding this will be reported
    #[arg(short = 't', long = "threshold", default_value_t = 10, value_name = "COUNT")]
    threshold: usize,

    /// Path of the CSV report to write
    #[arg(
        short = 'o',
        long = "output",
        default_value = "log_analysis_results.csv",
        value_name = "CSV_FILE"
    )]
    output: PathBuf,

    /// Additionally export results as JSON to the specified file path
    #[arg(short = 'j', long = "json-output", value_name = "JSON_FILE")]
    json_output: Option<PathBuf>,

    /// Suppress warnings for unreadable log lines
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    // Missing or unreadable input is fatal — no partial report is produced
    let file = match File::open(&args.file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "error: could not open file '{}': {}",
                args.file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        match line_result {
            Ok(line) => lines.push(line),
            Err(e) => {
                if !args.quiet {
                    eprintln!("warning: could not read line {}: {}", line_num + 1, e);
                }
            }
        }
    }

    // Lines matching no rule are simply uninformative, never errors; an
    // empty log still yields a complete (empty-sectioned) report.
    let summary = analyzer::analyze(&lines, args.threshold);

    report::print_report(&summary, &args.file);

    match report::write_csv(&summary, &args.output) {
        Ok(_) => println!("✓ Results saved to '{}'", args.output.display()),
        Err(e) => {
            eprintln!("error: failed to write CSV report: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(json_path) = &args.json_output {
        match report::export_json(&summary, json_path) {
            Ok(_) => println!("✓ JSON report saved to '{}'", json_path.display()),
            Err(e) => {
                eprintln!("error: failed to write JSON output: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_contract() {
        let args = Args::try_parse_from(["logtriage", "access.log"]).unwrap();
        assert_eq!(args.threshold, 10);
        assert_eq!(args.output, PathBuf::from("log_analysis_results.csv"));
        assert!(args.json_output.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn threshold_and_output_are_overridable() {
        let args = Args::try_parse_from([
            "logtriage",
            "access.log",
            "--threshold",
            "3",
            "--output",
            "custom.csv",
        ])
        .unwrap();
        assert_eq!(args.threshold, 3);
        assert_eq!(args.output, PathBuf::from("custom.csv"));
    }

    #[test]
    fn log_file_is_required() {
        assert!(Args::try_parse_from(["logtriage"]).is_err());
    }
}
