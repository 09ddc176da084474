//! Helper utility functions for CLI commands

/// Safely truncate a string to a maximum number of characters (not bytes).
/// This avoids panics when slicing multi-byte UTF-8 characters.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print a title underlined with a double rule of the same width
pub fn print_header(title: &str) {
    println!("{title}");
    println!("{}", "\u{2550}".repeat(title.chars().count()));
}

/// Convert a 1-based list number to an index
pub fn number_to_index(number: usize) -> Option<usize> {
    number.checked_sub(1)
}
