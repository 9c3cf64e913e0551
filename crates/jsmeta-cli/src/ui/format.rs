//! Formatting for durations and the batch summary.

use std::path::PathBuf;
use std::time::Duration;

use console::Term;
use owo_colors::OwoColorize;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use jsmeta_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the batch summary to stderr: totals, then one line per failure.
pub fn print_batch_summary(
    total: usize,
    analyzed: usize,
    failures: &[(PathBuf, String)],
    elapsed: Duration,
) {
    let width = (Term::stderr().size().1 as usize).min(60);
    let colors = super::colors_enabled();

    eprintln!();
    if colors {
        eprintln!("{}", "Analysis Summary".bold().underline());
    } else {
        eprintln!("Analysis Summary");
    }
    eprintln!("{}", "─".repeat(width));
    eprintln!("  {:<23}{}", "Total files:", total);
    if colors {
        eprintln!("  {:<23}{}", "Successfully analyzed:", analyzed.green());
        eprintln!("  {:<23}{}", "Failed:", failures.len().red());
    } else {
        eprintln!("  {:<23}{}", "Successfully analyzed:", analyzed);
        eprintln!("  {:<23}{}", "Failed:", failures.len());
    }

    for (path, reason) in failures {
        if colors {
            eprintln!("    {} {}: {}", "▸".red(), path.display(), reason.dimmed());
        } else {
            eprintln!("    ▸ {}: {}", path.display(), reason);
        }
    }

    eprintln!("{}", "─".repeat(width));
    eprintln!("  Finished in {}", format_duration(elapsed));
}
