//! Stream transport, listening port, and connect entry points.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::os::fd::{AsRawFd, RawFd};
use std::time::{Duration, Instant};

use bytes::{Buf, BytesMut};
use socket2::{Domain, Socket, Type};
use tracing::{debug, info};

use crate::error::{NetError, Result};
use crate::net::connector::{Connector, ConnectorHandle};
use crate::net::{resolve, ConnRef, ConnectionFactory, Port, Transport};
use crate::reactor::Reactor;

/// Read buffer granularity for draining a readable socket.
const READ_BLOCK: usize = 8192;

/// A connected, non-blocking TCP socket with a pending-write queue.
pub struct TcpTransport {
    stream: Option<TcpStream>,
    fd: RawFd,
    queue: BytesMut,
    local: Option<SocketAddr>,
    remote: Option<SocketAddr>,
}

impl TcpTransport {
    /// Wrap an already-connected stream, switching it non-blocking.
    pub fn new(stream: TcpStream) -> io::Result<Self> {
        stream.set_nonblocking(true)?;
        let fd = stream.as_raw_fd();
        let local = stream.local_addr().ok();
        let remote = stream.peer_addr().ok();
        Ok(Self {
            stream: Some(stream),
            fd,
            queue: BytesMut::new(),
            local,
            remote,
        })
    }
}

impl Transport for TcpTransport {
    fn descriptor(&self) -> RawFd {
        self.fd
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.local
    }

    fn remote_addr(&self) -> Option<SocketAddr> {
        self.remote
    }

    fn write(&mut self, data: &[u8]) {
        if !data.is_empty() && self.stream.is_some() {
            self.queue.extend_from_slice(data);
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(());
        };

        while !self.queue.is_empty() {
            match stream.write(&self.queue) {
                Ok(0) => return Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => self.queue.advance(n),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn read(&mut self, max: usize) -> io::Result<Vec<u8>> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(io::ErrorKind::NotConnected.into());
        };

        let mut out = Vec::new();
        let mut block = [0u8; READ_BLOCK];

        loop {
            let want = if max == 0 {
                block.len()
            } else {
                (max - out.len()).min(block.len())
            };
            if want == 0 {
                break;
            }

            match stream.read(&mut block[..want]) {
                // Peer-initiated close: empty result only when nothing
                // was read this call.
                Ok(0) => break,
                Ok(n) => {
                    out.extend_from_slice(&block[..n]);
                    if n < want {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    if out.is_empty() {
                        return Err(e);
                    }
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(out)
    }

    fn is_done_writing(&self) -> bool {
        self.queue.is_empty()
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            debug!(fd = self.fd, "closing stream transport");
            drop(stream);
        }
        self.queue.clear();
    }

    fn is_closed(&self) -> bool {
        self.stream.is_none()
    }
}

/// A listening TCP socket paired with a connection-object factory.
pub struct TcpPort {
    listener: Option<TcpListener>,
    fd: RawFd,
    port: u16,
    factory: ConnectionFactory,
}

impl TcpPort {
    /// Bind to `host:port`; port 0 picks an ephemeral port, readable
    /// back through [`Port::bound_port`].
    pub fn bind(host: &str, port: u16, factory: ConnectionFactory) -> Result<Self> {
        let addr = resolve(host, port)?;
        let listener = TcpListener::bind(addr).map_err(NetError::Io)?;
        listener.set_nonblocking(true).map_err(NetError::Io)?;

        let bound = listener.local_addr().map_err(NetError::Io)?.port();
        let fd = listener.as_raw_fd();
        info!(%addr, port = bound, "listening");

        Ok(Self {
            listener: Some(listener),
            fd,
            port: bound,
            factory,
        })
    }
}

impl Port for TcpPort {
    fn descriptor(&self) -> RawFd {
        self.fd
    }

    fn bound_port(&self) -> u16 {
        self.port
    }

    fn accept(&mut self) -> io::Result<Option<(Box<dyn Transport>, ConnRef)>> {
        let Some(listener) = self.listener.as_ref() else {
            return Ok(None);
        };

        match listener.accept() {
            Ok((stream, peer)) => {
                debug!(%peer, "accepted connection");
                let transport = TcpTransport::new(stream)?;
                Ok(Some((Box::new(transport), (self.factory)())))
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn close(&mut self) {
        if let Some(listener) = self.listener.take() {
            debug!(port = self.port, "closing port");
            drop(listener);
        }
    }

    fn is_closed(&self) -> bool {
        self.listener.is_none()
    }
}

/// Build a non-blocking socket for `addr` and start the OS-level
/// connect. Immediate completion and `EINPROGRESS` both count as
/// started; anything else is a hard failure.
fn start_connect(addr: SocketAddr) -> Result<Socket> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, None).map_err(NetError::Io)?;
    socket.set_nonblocking(true).map_err(NetError::Io)?;

    match socket.connect(&addr.into()) {
        Ok(()) => {}
        Err(e) if e.raw_os_error() == Some(libc::EINPROGRESS) => {}
        Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
        Err(e) => return Err(NetError::Io(e)),
    }

    Ok(socket)
}

/// Connect synchronously, blocking the caller for at most `timeout`.
///
/// On success the transport is attached to `conn` and registered with
/// the reactor; `conn` receives `connection_established` before this
/// returns. Failures come back as [`NetError::Timeout`],
/// [`NetError::BadAddress`], or the underlying I/O error.
pub fn connect_to(
    reactor: &mut Reactor,
    conn: ConnRef,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<()> {
    let addr = resolve(host, port)?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, None).map_err(NetError::Io)?;
    socket
        .connect_timeout(&addr.into(), timeout)
        .map_err(|e| match e.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => NetError::Timeout,
            _ => NetError::Io(e),
        })?;

    let stream: TcpStream = socket.into();
    let transport = TcpTransport::new(stream).map_err(NetError::Io)?;
    info!(%addr, "connected");

    reactor.attach(conn, Box::new(transport))
}

/// Start a background connect with a deadline.
///
/// Returns immediately with a handle that can abort the attempt. The
/// target later receives either `connection_established` (with the
/// spliced-in transport) or `connecting_failed` with one of the
/// documented failure strings; never both, and neither after an abort.
pub fn connect_in_background(
    reactor: &mut Reactor,
    target: ConnRef,
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<ConnectorHandle> {
    let addr = resolve(host, port)?;
    let socket = start_connect(addr)?;
    let deadline = Instant::now() + timeout;

    debug!(%addr, ?timeout, "background connect started");
    reactor.start_connector(Connector::new(socket, target, deadline))
}
