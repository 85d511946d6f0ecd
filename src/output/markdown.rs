//! Markdown report generation

use crate::output::report::CrawlReport;

/// Formats a crawl report as markdown
///
/// # Arguments
///
/// * `report` - The crawl report
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(report: &CrawlReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Word Frequency Report\n\n");

    // Run metadata
    md.push_str("## Crawl Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", report.seed));
    md.push_str(&format!("- **Max Depth**: {}\n", report.max_depth));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Finished**: {}\n",
        report.finished_at.to_rfc3339()
    ));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        report.duration_seconds()
    ));
    md.push_str(&format!(
        "- **Pages Visited**: {}\n",
        report.pages_visited.len()
    ));
    md.push_str(&format!("- **Tokens Collected**: {}\n\n", report.token_count));

    // Visited pages
    md.push_str("## Pages\n\n");
    for url in &report.pages_visited {
        md.push_str(&format!("- {}\n", url));
    }
    md.push('\n');

    // Frequency tables
    if report.frequencies.is_empty() {
        md.push_str("_No words were collected._\n");
        return md;
    }

    for (length, counts) in report.frequencies.iter() {
        md.push_str(&format!(
            "## Top {} {}-grams\n\n",
            report.most_frequent, length
        ));

        if counts.is_empty() {
            md.push_str("_Not enough words for this length._\n\n");
            continue;
        }

        md.push_str("| Rank | N-gram | Count |\n");
        md.push_str("|------|--------|-------|\n");
        for (rank, entry) in counts.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                rank + 1,
                escape_cell(&entry.ngram),
                entry.count
            ));
        }
        md.push('\n');
    }

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
