//! Formatting utilities for terminal output

use crate::core::{Cell, Pattern};
use colored::{ColoredString, Colorize};

/// Format a pattern with spaced cells, revealed letters uppercased: `A _ P _ E`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Revealed(letter) => letter.to_uppercase().to_string(),
            Cell::Unknown => "_".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the candidates containing a letter, as a percentage
#[must_use]
pub fn containment_percent(count: usize, candidates: usize) -> f64 {
    if candidates == 0 {
        0.0
    } else {
        count as f64 / candidates as f64 * 100.0
    }
}

/// Green for a hit, red for a miss
#[must_use]
pub fn hit_marker(hit: bool) -> ColoredString {
    if hit { "hit".green() } else { "miss".red() }
}
