//! Plain-text report for the terminal

use crate::output::report::CrawlReport;
use std::fmt::Write;

/// Formats a crawl report as aligned plain-text tables
pub fn format_table_report(report: &CrawlReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Word Frequencies ===\n");
    let _ = writeln!(out, "Seed: {} (max depth {})", report.seed, report.max_depth);
    let _ = writeln!(
        out,
        "Visited {} pages, collected {} tokens in {:.2}s",
        report.pages_visited.len(),
        report.token_count,
        report.duration_seconds()
    );

    if report.frequencies.is_empty() {
        let _ = writeln!(out, "\nNo words were collected.");
        return out;
    }

    for (length, counts) in report.frequencies.iter() {
        let _ = writeln!(out, "\n{}-grams:", length);

        let width = counts
            .iter()
            .map(|entry| entry.ngram.chars().count())
            .max()
            .unwrap_or(0);

        for entry in counts {
            let _ = writeln!(
                out,
                "  {:<width$}  {:>6}",
                entry.ngram,
                entry.count,
                width = width
            );
        }
    }

    out
}
