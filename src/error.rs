//! Unified error handling for netweave.

use std::io;
use std::os::fd::RawFd;

use thiserror::Error;

/// Convenience type alias for Results using [`NetError`].
pub type Result<T, E = NetError> = std::result::Result<T, E>;

/// Errors surfaced by the reactor, transports, and connect paths.
///
/// Connect failures additionally surface as the documented failure
/// strings (`"timeout"`, `"bad address"`, `"aborted"`) through the
/// `connecting_failed` callback; see [`crate::net`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NetError {
    /// A connection attempt exceeded its deadline.
    #[error("timeout")]
    Timeout,

    /// The host/port pair did not resolve to a usable address.
    #[error("bad address: {0}")]
    BadAddress(String),

    /// A connection attempt was aborted by the caller.
    #[error("aborted")]
    Aborted,

    /// The descriptor is already registered with the reactor.
    #[error("descriptor {0} already registered")]
    DuplicateDescriptor(RawFd),

    /// Configuration failed to load or validate.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error from the socket layer or the poller.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
