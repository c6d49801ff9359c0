//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a weight in kilograms, dropping a trailing `.0`
pub fn format_weight(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{:.0}kg", kg)
    } else {
        format!("{}kg", kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(22.1), "22.1kg");
        assert_eq!(format_weight(47.5), "47.5kg");
        assert_eq!(format_weight(50.0), "50kg");
    }
}
