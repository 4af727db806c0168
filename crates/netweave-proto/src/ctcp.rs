//! CTCP action framing.
//!
//! Action ("emote") messages travel inside PRIVMSG bodies wrapped in
//! the `\x01` delimiter: `\x01ACTION waves hello\x01`.

/// The CTCP delimiter character (`\x01`).
pub const CTCP_DELIM: char = '\x01';

/// Extract the action text from a PRIVMSG body, if it is one.
///
/// Returns `None` when the body is not CTCP-framed or the embedded
/// command is not `ACTION`. A missing closing delimiter is tolerated.
pub fn parse_action(body: &str) -> Option<&str> {
    let inner = body.strip_prefix(CTCP_DELIM)?;
    let inner = inner.strip_suffix(CTCP_DELIM).unwrap_or(inner);

    let rest = inner.strip_prefix("ACTION")?;
    match rest.strip_prefix(' ') {
        Some(text) => Some(text),
        None if rest.is_empty() => Some(""),
        None => None,
    }
}

/// Wrap action text in CTCP framing for the wire.
pub fn format_action(text: &str) -> String {
    format!("{CTCP_DELIM}ACTION {text}{CTCP_DELIM}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("\x01ACTION waves hello\x01"), Some("waves hello"));
    }

    #[test]
    fn test_parse_action_missing_close() {
        assert_eq!(parse_action("\x01ACTION waves"), Some("waves"));
    }

    #[test]
    fn test_parse_action_empty() {
        assert_eq!(parse_action("\x01ACTION\x01"), Some(""));
        assert_eq!(parse_action("\x01ACTION \x01"), Some(""));
    }

    #[test]
    fn test_plain_message_is_not_action() {
        assert_eq!(parse_action("hello there"), None);
    }

    #[test]
    fn test_other_ctcp_is_not_action() {
        assert_eq!(parse_action("\x01VERSION\x01"), None);
        assert_eq!(parse_action("\x01ACTIONABLE stuff\x01"), None);
    }

    #[test]
    fn test_format_round_trip() {
        let wire = format_action("dances");
        assert_eq!(wire, "\x01ACTION dances\x01");
        assert_eq!(parse_action(&wire), Some("dances"));
    }
}
