//! Sender prefix decomposition.
//!
//! An IRC prefix identifies the origin of a message: either a server
//! name or a user mask of the form `nick!user@host`. The split happens
//! at the first `!` and the first `@` boundary; components the prefix
//! does not carry come back as `None`.

/// A decomposed message prefix, borrowing from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sender<'a> {
    /// The original prefix string, verbatim.
    pub raw: &'a str,
    /// Everything before the first `!` (or `@`): the nickname, or the
    /// server name for server-originated messages.
    pub nick: &'a str,
    /// The username between `!` and `@`, if present.
    pub user: Option<&'a str>,
    /// The host after `@`, if present.
    pub host: Option<&'a str>,
}

impl<'a> Sender<'a> {
    /// Split a raw prefix at the first `!` and `@` boundaries.
    pub fn parse(raw: &'a str) -> Self {
        let (nick_user, host) = match raw.find('@') {
            Some(at) => (&raw[..at], Some(&raw[at + 1..])),
            None => (raw, None),
        };

        let (nick, user) = match nick_user.find('!') {
            Some(bang) => (&nick_user[..bang], Some(&nick_user[bang + 1..])),
            None => (nick_user, None),
        };

        Sender {
            raw,
            nick,
            user,
            host,
        }
    }

    /// Whether this prefix names a server rather than a user.
    ///
    /// Heuristic: no `!`/`@` components and a dot in the name.
    pub fn is_server(&self) -> bool {
        self.user.is_none() && self.host.is_none() && self.nick.contains('.')
    }
}

/// Extract the nickname portion of a raw prefix.
///
/// Equivalent to `Sender::parse(prefix).nick`; kept as a free function
/// for call sites that need nothing else.
pub fn extract_nick(prefix: &str) -> &str {
    Sender::parse(prefix).nick
}

/// Extract the host portion of a raw prefix, if any.
pub fn extract_host(prefix: &str) -> Option<&str> {
    Sender::parse(prefix).host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_user_mask() {
        let s = Sender::parse("nick!user@host.example.com");
        assert_eq!(s.nick, "nick");
        assert_eq!(s.user, Some("user"));
        assert_eq!(s.host, Some("host.example.com"));
        assert!(!s.is_server());
    }

    #[test]
    fn test_server_prefix() {
        let s = Sender::parse("irc.example.com");
        assert_eq!(s.nick, "irc.example.com");
        assert_eq!(s.user, None);
        assert_eq!(s.host, None);
        assert!(s.is_server());
    }

    #[test]
    fn test_nick_only() {
        let s = Sender::parse("somenick");
        assert_eq!(s.nick, "somenick");
        assert!(!s.is_server());
    }

    #[test]
    fn test_nick_and_host_without_user() {
        let s = Sender::parse("nick@host");
        assert_eq!(s.nick, "nick");
        assert_eq!(s.user, None);
        assert_eq!(s.host, Some("host"));
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(extract_nick("nick!user@host"), "nick");
        assert_eq!(extract_host("nick!user@host"), Some("host"));
        assert_eq!(extract_host("nick"), None);
    }
}
