//! # Line-Oriented Text Input
//!
//! Shared helpers for the vector list and the configuration file: comment
//! stripping, line numbering, and the number and boolean notations both
//! formats accept.

/// Character that starts a comment running to the end of the line.
pub const COMMENT_CHAR: char = ';';

/// A malformed line in a text input file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{file}:{line}:{column}: {message}")]
pub struct TextError {
    /// File name as given by the caller
    pub file: String,

    /// 1-based line number
    pub line: usize,

    /// 1-based column (field) number
    pub column: usize,

    /// What was wrong
    pub message: String,
}

impl TextError {
    pub fn new(
        file: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// Non-blank lines with comments removed and surrounding whitespace
/// trimmed, paired with their 1-based line numbers.
///
/// # Examples
///
/// ```
/// use disasm816::text::content_lines;
///
/// let text = "; header\n\n  008000 off off  ; reset\n";
/// let lines: Vec<_> = content_lines(text).collect();
/// assert_eq!(lines, vec![(3, "008000 off off")]);
/// ```
pub fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let content = match line.find(COMMENT_CHAR) {
            Some(end) => &line[..end],
            None => line,
        }
        .trim();

        (!content.is_empty()).then_some((index + 1, content))
    })
}

/// Parse an unsigned integer.
///
/// Hexadecimal is written with a `0x`, `$` or `#` prefix or an `h` suffix;
/// anything else is decimal.
///
/// # Examples
///
/// ```
/// use disasm816::text::parse_int;
///
/// assert_eq!(parse_int("0x808000"), Some(0x808000));
/// assert_eq!(parse_int("$8000"), Some(0x8000));
/// assert_eq!(parse_int("#FF"), Some(0xFF));
/// assert_eq!(parse_int("8000h"), Some(0x8000));
/// assert_eq!(parse_int("32768"), Some(32768));
/// assert_eq!(parse_int("zz"), None);
/// ```
pub fn parse_int(text: &str) -> Option<u32> {
    let text = text.trim();

    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
        .or_else(|| text.strip_prefix('#'))
        .or_else(|| text.strip_suffix('h'))
        .or_else(|| text.strip_suffix('H'));

    match hex {
        Some(digits) if !digits.is_empty() && !digits.starts_with('+') => {
            u32::from_str_radix(digits, 16).ok()
        }
        Some(_) => None,
        None if text.starts_with('+') => None,
        None => text.parse().ok(),
    }
}

/// Parse a boolean written as `true/false`, `yes/no`, `on/off` or `1/0`,
/// in any letter case.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lines_numbers_and_comments() {
        let text = "first\n   \n; only a comment\nsecond ; trailing\n";
        let lines: Vec<_> = content_lines(text).collect();
        assert_eq!(lines, vec![(1, "first"), (4, "second")]);
    }

    #[test]
    fn test_content_lines_crlf() {
        let lines: Vec<_> = content_lines("a\r\nb\r\n").collect();
        assert_eq!(lines, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_parse_int_notations() {
        assert_eq!(parse_int("0X1f"), Some(0x1F));
        assert_eq!(parse_int("1FH"), Some(0x1F));
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("0x"), None);
        assert_eq!(parse_int("$"), None);
        assert_eq!(parse_int("-1"), None);
        assert_eq!(parse_int("+1"), None);
        assert_eq!(parse_int("0x+1"), None);
        assert_eq!(parse_int("12abc"), None);
    }

    #[test]
    fn test_parse_bool() {
        for text in ["true", "YES", "On", "1"] {
            assert_eq!(parse_bool(text), Some(true), "{}", text);
        }
        for text in ["false", "No", "OFF", "0"] {
            assert_eq!(parse_bool(text), Some(false), "{}", text);
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_error_display() {
        let err = TextError::new("vectors.txt", 3, 2, "invalid M flag");
        assert_eq!(err.to_string(), "vectors.txt:3:2: invalid M flag");
    }
}
