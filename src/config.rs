//! Client configuration loading and validation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

fn default_port() -> u16 {
    6667
}

fn default_timeout() -> u64 {
    30
}

/// Everything needed to bring an IRC client onto a network.
///
/// Loadable from TOML via [`ClientConfig::load`]:
///
/// ```toml
/// server = "irc.example.com"
/// port = 6667
/// nicknames = ["mybot", "mybot_", "mybot__"]
/// username = "mybot"
/// realname = "My Bot"
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server hostname or address.
    pub server: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Nickname candidates, tried in order on collision.
    pub nicknames: Vec<String>,

    /// Username for the `USER` registration line.
    pub username: String,

    /// Real name; falls back to the username when absent.
    #[serde(default)]
    pub realname: Option<String>,

    /// Server password, sent as `PASS` before registration.
    #[serde(default)]
    pub password: Option<String>,
}

impl ClientConfig {
    /// A minimal configuration with defaults for everything optional.
    pub fn new(server: impl Into<String>, nicknames: Vec<String>, username: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            port: default_port(),
            timeout_secs: default_timeout(),
            nicknames,
            username: username.into(),
            realname: None,
            password: None,
        }
    }

    /// Load and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| NetError::Config(format!("{}: {e}", path.display())))?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| NetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine depends on.
    pub fn validate(&self) -> Result<()> {
        if self.server.is_empty() {
            return Err(NetError::Config("server must not be empty".into()));
        }
        if self.port == 0 {
            return Err(NetError::Config("port must be non-zero".into()));
        }
        if self.nicknames.is_empty() || self.nicknames.iter().any(String::is_empty) {
            return Err(NetError::Config(
                "at least one non-empty nickname is required".into(),
            ));
        }
        if self.username.is_empty() {
            return Err(NetError::Config("username must not be empty".into()));
        }
        Ok(())
    }

    /// The real name to register with.
    pub fn realname(&self) -> &str {
        self.realname.as_deref().unwrap_or(&self.username)
    }

    /// The connect timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valid() -> ClientConfig {
        ClientConfig::new(
            "irc.example.com",
            vec!["alpha".into(), "beta".into()],
            "bot",
        )
    }

    #[test]
    fn test_defaults() {
        let config = valid();
        assert_eq!(config.port, 6667);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.realname(), "bot");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut config = valid();
        config.nicknames.clear();
        assert!(matches!(config.validate(), Err(NetError::Config(_))));

        let mut config = valid();
        config.port = 0;
        assert!(matches!(config.validate(), Err(NetError::Config(_))));

        let mut config = valid();
        config.username.clear();
        assert!(matches!(config.validate(), Err(NetError::Config(_))));
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
server = "irc.example.com"
nicknames = ["one", "two"]
username = "bot"
realname = "A Bot"
password = "hunter2"
"#
        )
        .unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.server, "irc.example.com");
        assert_eq!(config.port, 6667);
        assert_eq!(config.nicknames, vec!["one", "two"]);
        assert_eq!(config.realname(), "A Bot");
        assert_eq!(config.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_load_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "server = \"irc.example.com\"\nnicknames = []\nusername = \"b\"\n").unwrap();
        assert!(matches!(
            ClientConfig::load(file.path()),
            Err(NetError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = valid();
        let raw = toml::to_string(&config).unwrap();
        let back: ClientConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.server, config.server);
        assert_eq!(back.nicknames, config.nicknames);
    }
}
