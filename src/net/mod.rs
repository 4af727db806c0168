//! Transport and connection abstractions.
//!
//! A [`Transport`] owns one socket descriptor and its pending-write
//! queue. A [`Connection`] is the application object attached to a
//! transport; the reactor delivers readiness to it as callbacks. A
//! [`Port`] is a bound listening socket that spawns a fresh connection
//! object (via its factory) for every peer that shows up.

use std::cell::RefCell;
use std::io;
use std::net::SocketAddr;
use std::os::fd::RawFd;
use std::rc::Rc;

use crate::reactor::Ctx;

pub mod connector;
pub mod tcp;
pub mod udp;

pub use connector::ConnectorHandle;
pub use tcp::{TcpPort, TcpTransport};
pub use udp::{UdpPort, UdpTransport};

/// Failure string delivered when a connect attempt times out.
pub const ERROR_TIMEOUT: &str = "timeout";
/// Failure string delivered when the address does not resolve.
pub const ERROR_BAD_ADDRESS: &str = "bad address";
/// Failure string delivered when the caller aborts the attempt.
pub const ERROR_ABORTED: &str = "aborted";

/// One live socket: descriptor, pending-write queue, connection state.
///
/// Only the reactor calls [`flush`](Transport::flush) and
/// [`read`](Transport::read); application code queues with
/// [`write`](Transport::write) and the bytes go out on the next pass
/// the socket accepts them.
pub trait Transport {
    /// The underlying descriptor. Stable across `close` so it can keep
    /// serving as a table key.
    fn descriptor(&self) -> RawFd;

    /// Local side of the connection, if still known.
    fn local_addr(&self) -> Option<SocketAddr>;

    /// Remote side of the connection, if known.
    fn remote_addr(&self) -> Option<SocketAddr>;

    /// Append bytes to the pending-write queue. Empty input is a no-op.
    fn write(&mut self, data: &[u8]);

    /// Write as much queued data as the socket accepts without
    /// blocking. Called by the reactor on write readiness.
    fn flush(&mut self) -> io::Result<()>;

    /// Read at most `max` bytes, or everything available when
    /// `max == 0`. For stream transports an empty result signals
    /// peer-initiated close; datagram transports yield one packet per
    /// call.
    fn read(&mut self, max: usize) -> io::Result<Vec<u8>>;

    /// True iff the pending-write queue is empty.
    fn is_done_writing(&self) -> bool;

    /// Release the descriptor. Idempotent.
    fn close(&mut self);

    /// Whether `close` has run (or the peer tore the socket down).
    fn is_closed(&self) -> bool;

    /// Stream transports report `true`; datagram transports override.
    fn is_stream(&self) -> bool {
        true
    }
}

/// An application object driven by the reactor.
///
/// All methods run on the reactor thread, inside a dispatch pass;
/// none of them may block. Disconnecting the object from inside its
/// own callback is safe: teardown is deferred to the end of the pass.
pub trait Connection {
    /// The connection is live; the object takes ownership of its
    /// transport here.
    fn connection_established(&mut self, ctx: &mut Ctx<'_>, transport: Box<dyn Transport>);

    /// Bytes read from the transport, in arrival order.
    fn data_received(&mut self, ctx: &mut Ctx<'_>, data: &[u8]);

    /// The object has been disconnected. No further callbacks follow.
    fn connection_lost(&mut self);

    /// Access to the owned transport, used by the reactor to read and
    /// flush. `None` before establishment or after loss.
    fn transport_mut(&mut self) -> Option<&mut (dyn Transport + 'static)>;

    /// A background connect for this object gave up. `reason` is one of
    /// the documented failure strings or an OS error description.
    fn connecting_failed(&mut self, reason: &str) {
        let _ = reason;
    }

    /// A transient I/O condition on the transport; processing
    /// continues. Default: ignore.
    fn recoverable_error(&mut self, error: &io::Error) {
        let _ = error;
    }
}

/// Shared handle to a connection object.
pub type ConnRef = Rc<RefCell<dyn Connection>>;

/// Factory invoked by a port for each new peer.
pub type ConnectionFactory = Box<dyn Fn() -> ConnRef>;

/// A bound listening socket that spawns connection objects.
pub trait Port {
    /// The listening descriptor.
    fn descriptor(&self) -> RawFd;

    /// The locally bound port number.
    fn bound_port(&self) -> u16;

    /// Accept one pending peer: a fresh transport paired with a fresh
    /// object from the factory. `Ok(None)` when nothing is pending.
    fn accept(&mut self) -> io::Result<Option<(Box<dyn Transport>, ConnRef)>>;

    /// Close the listening descriptor; no further `accept` succeeds.
    fn close(&mut self);

    /// Whether the port has retired (closed, or single-shot and spent).
    fn is_closed(&self) -> bool;
}

/// Resolve `host:port` to a socket address.
///
/// Failures map to [`NetError::BadAddress`](crate::NetError) and the
/// `"bad address"` failure string.
pub(crate) fn resolve(host: &str, port: u16) -> crate::error::Result<SocketAddr> {
    use std::net::ToSocketAddrs;

    (host, port)
        .to_socket_addrs()
        .map_err(|_| crate::NetError::BadAddress(format!("{host}:{port}")))?
        .next()
        .ok_or_else(|| crate::NetError::BadAddress(format!("{host}:{port}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_literal() {
        let addr = resolve("127.0.0.1", 6667).unwrap();
        assert_eq!(addr.port(), 6667);
        assert!(addr.is_ipv4());
    }

    #[test]
    fn test_resolve_failure() {
        let err = resolve("no.such.host.invalid", 6667).unwrap_err();
        assert!(matches!(err, crate::NetError::BadAddress(_)));
    }
}
