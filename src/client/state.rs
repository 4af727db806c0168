//! Registration and nickname state for the IRC engine.

use crate::config::ClientConfig;

/// Where the engine is in its connection lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RegistrationPhase {
    /// No connection yet (or the previous one was lost).
    Connecting,
    /// Connected; `NICK`/`USER` sent, awaiting `RPL_WELCOME`.
    Registering,
    /// `RPL_WELCOME` received.
    Registered,
    /// Registration or the connect attempt failed; terminal.
    Failed,
}

/// Mutable engine state shared with [`Session`](crate::client::Session).
pub(crate) struct ClientState {
    pub(crate) config: ClientConfig,
    pub(crate) server: Option<String>,
    pub(crate) current_nick: String,
    /// Index into the candidate list. Only moves forward, and only
    /// while registering.
    pub(crate) nickname_index: usize,
    pub(crate) phase: RegistrationPhase,
    pub(crate) wants_disconnect: bool,
}

impl ClientState {
    pub(crate) fn new(config: ClientConfig) -> Self {
        let current_nick = config.nicknames.first().cloned().unwrap_or_default();
        Self {
            config,
            server: None,
            current_nick,
            nickname_index: 0,
            phase: RegistrationPhase::Connecting,
            wants_disconnect: false,
        }
    }
}
