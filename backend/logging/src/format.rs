use crate::colors::Color;

/// Renders `<color>[<label>]<reset> <message>`.
///
/// Only the bracketed label is colored; the message follows the reset.
pub fn format_message(color: Color, label: &str, message: &str) -> String {
    format!("{color}[{label}]{reset} {message}", reset = Color::Reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::strip_ansi;

    #[test]
    fn wraps_label_in_color_and_reset() {
        let line = format_message(Color::FgBlue, "INFO", "hello");
        assert_eq!(line, "\x1b[34m[INFO]\x1b[0m hello");
    }

    #[test]
    fn color_only_changes_escape_bytes() {
        let blue = format_message(Color::FgBlue, "LOG", "same text");
        let magenta = format_message(Color::FgMagenta, "LOG", "same text");
        assert_ne!(blue, magenta);
        assert_eq!(strip_ansi(&blue), strip_ansi(&magenta));
        assert_eq!(strip_ansi(&blue), "[LOG] same text");
    }

    #[test]
    fn empty_message_keeps_separator() {
        let line = format_message(Color::FgRed, "ERROR", "");
        assert_eq!(strip_ansi(&line), "[ERROR] ");
    }
}
