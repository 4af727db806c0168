//! In-flight outbound connection state.
//!
//! A [`Connector`] is the transient placeholder between "connect
//! requested" and "established or given up". It owns the half-open
//! socket and its deadline; the reactor drives the state machine:
//!
//! ```text
//! Pending --writable, SO_ERROR clear--> Succeeded (splice transport, established)
//! Pending --writable, SO_ERROR set----> Failed    (connecting_failed)
//! Pending --deadline-------------------> Failed   (connecting_failed "timeout")
//! Pending --abort----------------------> Aborted  (silent)
//! ```
//!
//! Every terminal transition removes the connector from the reactor's
//! table, which also retires its deadline entry.

use std::net::TcpStream;
use std::os::fd::{AsRawFd, RawFd};
use std::time::Instant;

use socket2::Socket;
use tracing::debug;

use crate::net::tcp::TcpTransport;
use crate::net::ConnRef;

/// Connector lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConnectState {
    Pending,
    Succeeded,
    Failed,
    Aborted,
}

/// Caller-side handle to an in-flight background connect.
///
/// Pass it to [`Reactor::abort_connection`](crate::Reactor::abort_connection)
/// to give up silently. The handle stays valid after the attempt
/// resolves; aborting a resolved attempt is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectorHandle {
    pub(crate) fd: RawFd,
}

/// The reactor-owned half of a background connect.
pub(crate) struct Connector {
    socket: Option<Socket>,
    fd: RawFd,
    target: ConnRef,
    deadline: Instant,
    state: ConnectState,
}

impl Connector {
    pub(crate) fn new(socket: Socket, target: ConnRef, deadline: Instant) -> Self {
        let fd = socket.as_raw_fd();
        Self {
            socket: Some(socket),
            fd,
            target,
            deadline,
            state: ConnectState::Pending,
        }
    }

    pub(crate) fn descriptor(&self) -> RawFd {
        self.fd
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }

    pub(crate) fn target(&self) -> ConnRef {
        self.target.clone()
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.state == ConnectState::Pending
    }

    /// The socket reported writable: resolve the attempt.
    ///
    /// `SO_ERROR` clear means the handshake finished; the socket
    /// becomes a ready transport. Otherwise the OS error description
    /// becomes the failure reason.
    pub(crate) fn resolve(&mut self) -> Result<TcpTransport, String> {
        let Some(socket) = self.socket.take() else {
            return Err("connector already resolved".to_owned());
        };

        match socket.take_error() {
            Ok(None) => {
                let stream: TcpStream = socket.into();
                match TcpTransport::new(stream) {
                    Ok(transport) => {
                        self.state = ConnectState::Succeeded;
                        debug!(fd = self.fd, "background connect succeeded");
                        Ok(transport)
                    }
                    Err(e) => {
                        self.state = ConnectState::Failed;
                        Err(e.to_string())
                    }
                }
            }
            Ok(Some(err)) => {
                self.state = ConnectState::Failed;
                debug!(fd = self.fd, error = %err, "background connect failed");
                Err(err.to_string())
            }
            Err(err) => {
                self.state = ConnectState::Failed;
                Err(err.to_string())
            }
        }
    }

    /// Deadline passed while still pending.
    pub(crate) fn expire(&mut self) {
        self.state = ConnectState::Failed;
        self.socket = None;
        debug!(fd = self.fd, "background connect timed out");
    }

    /// Silent teardown; no callback fires.
    pub(crate) fn abort(&mut self) {
        self.state = ConnectState::Aborted;
        self.socket = None;
        debug!(fd = self.fd, "background connect aborted");
    }
}
