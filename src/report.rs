use crate::analyzer::TrafficSummary;
use chrono::Local;
use colored::Colorize;
use std::fs::File;
use std::path::PathBuf;
use thiserror::Error;

const SEPARATOR: &str =
    "════════════════════════════════════════════════════════════════════";
const THIN_SEP: &str =
    "────────────────────────────────────────────────────────────────────";

/// Errors that can occur while writing a report to disk
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not write report file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print a fully formatted triage report to stdout
pub fn print_report(summary: &TrafficSummary, source_file: &PathBuf) {
    println!("\n{}", SEPARATOR.cyan().bold());
    println!("{}", "  📋  ACCESS LOG TRIAGE REPORT".white().bold());
    println!("{}", SEPARATOR.cyan().bold());
    println!("  Source    : {}", source_file.display().to_string().yellow());
    println!(
        "  Generated : {}",
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
    );
    println!();

    // ── Requests per IP ───────────────────────────────────────────────────────
    section_header("REQUESTS PER IP");
    if summary.requests_per_ip.is_empty() {
        println!("  (no addresses found)");
    } else {
        println!("  {:<17}  {:>8}", "IP Address", "Requests");
        println!("  {}", &THIN_SEP[..54]);
        for (ip, count) in &summary.requests_per_ip {
            println!("  {:<17}  {:>8}", ip.cyan(), count);
        }
    }
    println!();

    // ── Most Accessed Endpoint ────────────────────────────────────────────────
    section_header("MOST ACCESSED ENDPOINT");
    match &summary.top_endpoint {
        Some(top) => println!(
            "  {} (accessed {} times)",
            top.path.cyan().bold(),
            top.count.to_string().green().bold()
        ),
        None => println!("  (no request lines found)"),
    }
    println!();

    // ── Suspicious Activity ───────────────────────────────────────────────────
    section_header(&format!(
        "SUSPICIOUS ACTIVITY — FAILED LOGINS > {}",
        summary.threshold
    ));
    if summary.suspicious_ips.is_empty() {
        println!(
            "  {} No addresses exceeded the failed-login threshold.",
            "✓".green()
        );
    } else {
        println!("  {:<17}  {:>14}", "IP Address", "Failed Logins");
        println!("  {}", &THIN_SEP[..54]);
        for (ip, count) in &summary.suspicious_ips {
            println!(
                "  {:<17}  {:>14}",
                ip.red().bold(),
                count.to_string().red()
            );
        }
    }

    println!("\n{}\n", SEPARATOR.cyan());
}

/// Write the three report sections as CSV, separated by blank rows.
///
/// Section rows have differing widths (title rows are single-field), so the
/// writer runs in flexible mode. A missing top endpoint is written as the
/// sentinel row `("", 0)`.
pub fn write_csv(summary: &TrafficSummary, path: &PathBuf) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);

    writer.write_record(["Requests per IP"])?;
    writer.write_record(["IP Address", "Request Count"])?;
    for (ip, count) in &summary.requests_per_ip {
        writer.write_record([ip.as_str(), &count.to_string()])?;
    }

    writer.write_record(None::<&[u8]>)?;
    writer.write_record(["Most Accessed Endpoint"])?;
    writer.write_record(["Endpoint", "Access Count"])?;
    match &summary.top_endpoint {
        Some(top) => writer.write_record([top.path.as_str(), &top.count.to_string()])?,
        None => writer.write_record(["", "0"])?,
    }

    writer.write_record(None::<&[u8]>)?;
    writer.write_record(["Suspicious Activity"])?;
    writer.write_record(["IP Address", "Failed Login Count"])?;
    for (ip, count) in &summary.suspicious_ips {
        writer.write_record([ip.as_str(), &count.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Export the triage summary as pretty-printed JSON to the given path
pub fn export_json(summary: &TrafficSummary, path: &PathBuf) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn section_header(title: &str) {
    println!("  {} {}", "▶".cyan(), title.white().bold());
    println!("  {}", THIN_SEP);
}
