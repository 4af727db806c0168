//! Error types for the protocol crate.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors produced while parsing IRC wire data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// The line contained nothing to parse.
    #[error("empty line")]
    EmptyLine,

    /// The line did not match the IRC message grammar.
    ///
    /// `position` is the byte offset at which parsing stopped.
    #[error("invalid message at byte {position}: {line:?}")]
    InvalidMessage {
        /// The offending line.
        line: String,
        /// Byte offset where the grammar stopped matching.
        position: usize,
    },

    /// A three-digit command that is not a known numeric reply.
    #[error("unknown numeric reply: {0:03}")]
    UnknownNumeric(u16),
}
