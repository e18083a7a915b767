//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Checkmark for completed items, blank otherwise
pub fn format_completed(completed: bool) -> &'static str {
    if completed { "✓" } else { " " }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
