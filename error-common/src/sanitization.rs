// Sanitization utilities
// Error messages are sanitized before they reach a log line

/// Longest message, in characters, that is written to a log line
pub const MAX_LOGGED_MESSAGE_CHARS: usize = 4096;

/// Strip control characters and clamp the length of a message for logging.
///
/// Newlines and other control characters are replaced with a single space so
/// an upstream error cannot forge extra log records.
pub fn sanitize_for_logging(message: &str) -> String {
    let mut sanitized = String::with_capacity(message.len().min(MAX_LOGGED_MESSAGE_CHARS));
    let mut chars = message.chars();

    for c in chars.by_ref().take(MAX_LOGGED_MESSAGE_CHARS) {
        sanitized.push(if c.is_control() { ' ' } else { c });
    }

    if chars.next().is_some() {
        sanitized.push_str("...");
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters_replaced() {
        assert_eq!(
            sanitize_for_logging("line one\nERROR forged\r\tentry"),
            "line one ERROR forged  entry"
        );
    }

    #[test]
    fn test_long_messages_truncated() {
        let long = "x".repeat(MAX_LOGGED_MESSAGE_CHARS + 10);
        let sanitized = sanitize_for_logging(&long);
        assert_eq!(sanitized.len(), MAX_LOGGED_MESSAGE_CHARS + 3);
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn test_message_at_cap_kept_whole() {
        let exact = "y".repeat(MAX_LOGGED_MESSAGE_CHARS);
        assert_eq!(sanitize_for_logging(&exact), exact);
    }

    #[test]
    fn test_short_messages_untouched() {
        assert_eq!(sanitize_for_logging("state builder down"), "state builder down");
    }
}
