//! Shared string helpers for code generation.

/// Uppercase the first character, leaving the rest untouched (e.g., "blogPost" -> "BlogPost")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Naive English plural used for table names ("user" -> "users")
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    format!("{s}s")
}

/// Line terminator used by `text`: `"\r\n"` when it has any, else `"\n"`.
pub fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("user"), "User");
        assert_eq!(capitalize_first("blogPost"), "BlogPost");
        assert_eq!(capitalize_first("User"), "User");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_line_ending() {
        assert_eq!(line_ending("a\r\nb\r\n"), "\r\n");
        assert_eq!(line_ending("a\nb\n"), "\n");
        assert_eq!(line_ending("single line"), "\n");
    }
}
