//! Datagram transport and port.
//!
//! Datagram sockets reuse the stream contracts with two differences:
//! each `read` yields exactly one packet, and "connecting" is nothing
//! more than recording a default peer address. A [`UdpPort`] accepts a
//! single conversation: the first datagram hands the bound socket over
//! to a fresh transport and retires the port.

use std::collections::VecDeque;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::os::fd::{AsRawFd, RawFd};

use bytes::Bytes;
use tracing::{debug, info};

use crate::error::{NetError, Result};
use crate::net::{resolve, ConnRef, ConnectionFactory, Port, Transport};
use crate::reactor::Reactor;

/// Largest datagram we will pull off the socket in one read.
const MAX_DATAGRAM: usize = 65535;

/// A bound datagram socket with an optional default peer.
pub struct UdpTransport {
    socket: Option<UdpSocket>,
    fd: RawFd,
    local: Option<SocketAddr>,
    peer: Option<SocketAddr>,
    queue: VecDeque<Bytes>,
}

impl UdpTransport {
    /// Wrap a bound socket, switching it non-blocking. `peer` is the
    /// default destination; when absent, the first sender observed by
    /// `read` becomes the peer.
    pub fn new(socket: UdpSocket, peer: Option<SocketAddr>) -> io::Result<Self> {
        socket.set_nonblocking(true)?;
        let fd = socket.as_raw_fd();
        let local = socket.local_addr().ok();
        Ok(Self {
            socket: Some(socket),
            fd,
            local,
            peer,
            queue: VecDeque::new(),
        })
    }
}

impl Transport for UdpTransport {
    fn descriptor(&self) -> RawFd {
        self.fd
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.local
    }

    fn remote_addr(&self) -> Option<SocketAddr> {
        self.peer
    }

    fn write(&mut self, data: &[u8]) {
        if !data.is_empty() && self.socket.is_some() {
            // One queue entry per packet; datagrams never coalesce.
            self.queue.push_back(Bytes::copy_from_slice(data));
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let Some(socket) = self.socket.as_ref() else {
            return Ok(());
        };
        let Some(peer) = self.peer else {
            // Nowhere to send until a peer is known.
            return Ok(());
        };

        while let Some(front) = self.queue.front() {
            match socket.send_to(front, peer) {
                Ok(_) => {
                    self.queue.pop_front();
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn read(&mut self, _max: usize) -> io::Result<Vec<u8>> {
        let Some(socket) = self.socket.as_ref() else {
            return Err(io::ErrorKind::NotConnected.into());
        };

        let mut buf = vec![0u8; MAX_DATAGRAM];
        let (n, from) = socket.recv_from(&mut buf)?;

        if self.peer.is_none() {
            debug!(%from, "datagram peer recorded");
            self.peer = Some(from);
        }

        buf.truncate(n);
        Ok(buf)
    }

    fn is_done_writing(&self) -> bool {
        self.queue.is_empty()
    }

    fn close(&mut self) {
        if let Some(socket) = self.socket.take() {
            debug!(fd = self.fd, "closing datagram transport");
            drop(socket);
        }
        self.queue.clear();
    }

    fn is_closed(&self) -> bool {
        self.socket.is_none()
    }

    fn is_stream(&self) -> bool {
        false
    }
}

/// A bound datagram socket waiting for its first sender.
pub struct UdpPort {
    socket: Option<UdpSocket>,
    fd: RawFd,
    port: u16,
    factory: ConnectionFactory,
}

impl UdpPort {
    /// Bind to `host:port`; port 0 picks an ephemeral port.
    pub fn bind(host: &str, port: u16, factory: ConnectionFactory) -> Result<Self> {
        let addr = resolve(host, port)?;
        let socket = UdpSocket::bind(addr).map_err(NetError::Io)?;
        socket.set_nonblocking(true).map_err(NetError::Io)?;

        let bound = socket.local_addr().map_err(NetError::Io)?.port();
        let fd = socket.as_raw_fd();
        info!(%addr, port = bound, "datagram port bound");

        Ok(Self {
            socket: Some(socket),
            fd,
            port: bound,
            factory,
        })
    }
}

impl Port for UdpPort {
    fn descriptor(&self) -> RawFd {
        self.fd
    }

    fn bound_port(&self) -> u16 {
        self.port
    }

    /// Hand the bound socket to a fresh transport and retire. The
    /// pending datagram stays queued in the socket buffer; the new
    /// owner reads it on the next pass.
    fn accept(&mut self) -> io::Result<Option<(Box<dyn Transport>, ConnRef)>> {
        let Some(socket) = self.socket.take() else {
            return Ok(None);
        };

        let transport = UdpTransport::new(socket, None)?;
        Ok(Some((Box::new(transport), (self.factory)())))
    }

    fn close(&mut self) {
        if let Some(socket) = self.socket.take() {
            debug!(port = self.port, "closing datagram port");
            drop(socket);
        }
    }

    fn is_closed(&self) -> bool {
        self.socket.is_none()
    }
}

/// "Connect" a datagram object: bind an ephemeral socket, record the
/// default peer, attach and register. Datagram connect cannot block,
/// so there is no background variant; the object receives
/// `connection_established` before this returns.
pub fn connect_to(reactor: &mut Reactor, conn: ConnRef, host: &str, port: u16) -> Result<()> {
    let addr = resolve(host, port)?;

    let bind_addr: SocketAddr = if addr.is_ipv4() {
        "0.0.0.0:0".parse().map_err(|_| NetError::BadAddress("0.0.0.0:0".into()))?
    } else {
        "[::]:0".parse().map_err(|_| NetError::BadAddress("[::]:0".into()))?
    };

    let socket = UdpSocket::bind(bind_addr).map_err(NetError::Io)?;
    let transport = UdpTransport::new(socket, Some(addr)).map_err(NetError::Io)?;
    info!(%addr, "datagram peer set");

    reactor.attach(conn, Box::new(transport))
}
