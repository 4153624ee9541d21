//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use std::time::Duration;

use terminal_size::{terminal_size, Width};

use crate::experiment::PowerSortExperiment;
use crate::marker::Marker;
use crate::registry::SorterRegistry;
use crate::utils::stats::{format_duration, TimingSummary};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print lines inside a box, with a separator after the first `head` lines
fn print_box(lines: &[String], head: usize) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == head && i > 0 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Power Sort Experiments ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the experiment info box and the expected marker budget
pub fn print_experiment_box<M: Marker>(experiment: &PowerSortExperiment<M>) {
    let runs = experiment.runs();
    let width = experiment.marker_width();
    let markers = runs.saturating_add(1);
    let marker_time = marker_budget(width, markers)
        .map(format_duration)
        .unwrap_or_else(|| "n/a".to_string());

    let lines = vec![
        format!("Algorithm: {}", experiment.sorter().name()),
        experiment.sorter().description().to_string(),
        format!(
            "Dataset:   {} values, {}",
            experiment.dataset().len(),
            experiment.dataset().mode()
        ),
        format!("Runs:      {} ({} markers)", runs, markers),
        format!(
            "Marker:    {} per phase, {} total",
            format_duration(width),
            marker_time
        ),
    ];
    print_box(&lines, 2);
}

/// Time spent in markers alone, `None` when it does not fit a `Duration`
fn marker_budget(width: Duration, markers: usize) -> Option<Duration> {
    width
        .checked_mul(3)?
        .checked_mul(u32::try_from(markers).ok()?)
}

/// Print the outcome of a finished experiment
pub fn print_summary(elapsed: Duration, summary: Option<&TimingSummary>, verified: Option<bool>) {
    let table_width = 60.min(get_term_width().saturating_sub(2));

    println!("  {}", "─".repeat(table_width));
    println!("  {:<24} {:>14}", "Total elapsed", format_duration(elapsed));

    if let Some(s) = summary {
        println!("  {:<24} {:>14}", "Sort average", format_duration(s.avg));
        println!("  {:<24} {:>14}", "Sort median", format_duration(s.median));
        println!("  {:<24} {:>14}", "Sort min", format_duration(s.min));
        println!("  {:<24} {:>14}", "Sort max", format_duration(s.max));
        println!("  {:<24} {:>13.2}%", "Sort CV", s.cv() * 100.0);
    }

    match verified {
        Some(true) => println!("  {:<24} {:>14}", "Results", "verified"),
        Some(false) => println!("  {:<24} {:>14}", "Results", "INVALID"),
        None => {}
    }
    println!("  {}", "─".repeat(table_width));
    println!();
}

/// Print the list of registered sorters
pub fn print_available_sorters(registry: &SorterRegistry) {
    println!("Available sorters:");
    println!();
    for (name, sorter) in registry.all() {
        println!("  {:<12} - {}", name, sorter.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long line of text", 10), "a long ...");
        assert_eq!(truncate("µµµµµµ", 6), "µµµµµµ");
    }

    #[test]
    fn test_marker_budget() {
        assert_eq!(
            marker_budget(Duration::from_millis(500), 31),
            Some(Duration::from_millis(46_500))
        );
        assert_eq!(marker_budget(Duration::from_millis(u64::MAX), 1_000_001), None);
        assert_eq!(marker_budget(Duration::MAX, 1), None);
    }

    #[test]
    fn test_term_width_in_range() {
        let w = get_term_width();
        assert!((40..=200).contains(&w));
    }
}
