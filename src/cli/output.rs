//! Output formatting and progress spinners for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for long-running searches; hidden when `enabled` is false.
pub fn create_spinner(message: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{}:", key), value);
}

/// Describe a minimax value from the automated player's side.
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "automated player forces a win",
        -1 => "human forces a win",
        _ => "draw under optimal play",
    }
}
