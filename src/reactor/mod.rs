//! The reactor: one control thread multiplexing every socket.
//!
//! A [`Reactor`] owns the descriptor tables (ports, connections,
//! in-flight connectors), polls them for readiness, and dispatches
//! callbacks. It is an explicit context object, not a process global;
//! tests create as many independent reactors as they need.
//!
//! Dispatch discipline: each pass snapshots the ready set before any
//! callback runs, delivers all reads before all writes, then fires
//! expired connector deadlines, and only then applies removals that
//! accumulated during the pass. An object disconnected mid-pass is
//! skipped for the remainder of the pass and torn down exactly once at
//! the end, so no object ever sees an event after its own disconnect.

use std::collections::{HashMap, HashSet};
use std::os::fd::RawFd;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{NetError, Result};
use crate::net::connector::{Connector, ConnectorHandle};
use crate::net::{ConnRef, Port, Transport, ERROR_TIMEOUT};

mod poller;
mod timer;

use poller::{Event, Interest, Poller};
use timer::TimerQueue;

/// Per-callback context handed to [`Connection`](crate::net::Connection)
/// methods. Wraps the reactor plus the descriptor being dispatched, so
/// an object can disconnect itself or request write readiness without
/// holding a reactor reference of its own.
pub struct Ctx<'a> {
    reactor: &'a mut Reactor,
    fd: RawFd,
}

impl<'a> Ctx<'a> {
    pub(crate) fn new(reactor: &'a mut Reactor, fd: RawFd) -> Self {
        Self { reactor, fd }
    }

    /// The descriptor this callback is being dispatched for.
    pub fn descriptor(&self) -> RawFd {
        self.fd
    }

    /// Disconnect this object. Safe from inside any of its own
    /// callbacks: teardown defers to the end of the current pass.
    pub fn disconnect(&mut self) {
        self.reactor.disconnect(self.fd);
    }

    /// Level write interest for this descriptor; cleared automatically
    /// once the transport reports `is_done_writing()` after a flush.
    pub fn request_write(&mut self) {
        self.reactor.request_write(self.fd);
    }

    /// The reactor itself, for starting new connections or ports from
    /// within a callback.
    pub fn reactor(&mut self) -> &mut Reactor {
        self.reactor
    }
}

/// The event-dispatch loop multiplexing all registered sockets.
pub struct Reactor {
    poller: Poller,
    timers: TimerQueue,
    ports: HashMap<RawFd, Box<dyn Port>>,
    table: HashMap<RawFd, ConnRef>,
    connectors: HashMap<RawFd, Connector>,
    write_requests: HashSet<RawFd>,
    pending_removal: HashSet<RawFd>,
    events: Vec<Event>,
    in_dispatch: bool,
    running: bool,
    shutdown: bool,
    read_chunk: usize,
}

impl Reactor {
    /// A fresh reactor with nothing registered.
    pub fn new() -> Self {
        Self {
            poller: Poller::new(),
            timers: TimerQueue::new(),
            ports: HashMap::new(),
            table: HashMap::new(),
            connectors: HashMap::new(),
            write_requests: HashSet::new(),
            pending_removal: HashSet::new(),
            events: Vec::new(),
            in_dispatch: false,
            running: false,
            shutdown: false,
            read_chunk: 0,
        }
    }

    /// Bound on bytes fetched per read dispatch; 0 means "all
    /// available" (the default).
    pub fn set_read_chunk(&mut self, max: usize) {
        self.read_chunk = max;
    }

    /// Register an object whose transport is already attached.
    ///
    /// Fails with [`NetError::DuplicateDescriptor`] if the descriptor
    /// is already tabled. `interested_in_write` pre-levels write
    /// interest, as if [`request_write`](Self::request_write) had been
    /// called.
    pub fn register(&mut self, conn: ConnRef, interested_in_write: bool) -> Result<()> {
        let fd = {
            let mut guard = conn.borrow_mut();
            match guard.transport_mut() {
                Some(t) => t.descriptor(),
                None => return Err(NetError::Io(std::io::ErrorKind::NotConnected.into())),
            }
        };

        self.check_duplicate(fd)?;
        self.table.insert(fd, conn);
        if interested_in_write {
            self.write_requests.insert(fd);
        }
        debug!(fd, "connection registered");
        Ok(())
    }

    /// Register an object and hand it its transport: the object
    /// receives `connection_established` before this returns.
    pub fn attach(&mut self, conn: ConnRef, transport: Box<dyn Transport>) -> Result<()> {
        let fd = transport.descriptor();
        self.check_duplicate(fd)?;
        self.table.insert(fd, conn.clone());
        debug!(fd, "connection attached");

        let prev = self.begin_dispatch();
        {
            let mut guard = conn.borrow_mut();
            let mut ctx = Ctx::new(self, fd);
            guard.connection_established(&mut ctx, transport);
        }
        self.end_dispatch(prev);
        Ok(())
    }

    /// Start listening on a bound port.
    pub fn add_port(&mut self, port: Box<dyn Port>) -> Result<()> {
        let fd = port.descriptor();
        self.check_duplicate(fd)?;
        info!(fd, port = port.bound_port(), "port registered");
        self.ports.insert(fd, port);
        Ok(())
    }

    /// Level write interest for a descriptor. Cleared automatically
    /// once its transport reports `is_done_writing()` after a flush.
    pub fn request_write(&mut self, fd: RawFd) {
        if self.table.contains_key(&fd) {
            self.write_requests.insert(fd);
        }
    }

    /// Disconnect an object by descriptor. Idempotent. During a
    /// dispatch pass the teardown (connection_lost, table removal,
    /// transport close) defers to the end of the pass; outside a pass
    /// it happens immediately.
    pub fn disconnect(&mut self, fd: RawFd) {
        if !self.table.contains_key(&fd) {
            return;
        }
        if self.in_dispatch {
            debug!(fd, "disconnect deferred to end of pass");
            self.pending_removal.insert(fd);
        } else {
            self.teardown(fd);
        }
    }

    /// Take ownership of an in-flight connector. Its deadline joins
    /// the timer queue; readiness or expiry resolves it.
    pub(crate) fn start_connector(&mut self, connector: Connector) -> Result<ConnectorHandle> {
        let fd = connector.descriptor();
        self.check_duplicate(fd)?;
        self.timers.insert(connector.deadline(), fd);
        self.connectors.insert(fd, connector);
        Ok(ConnectorHandle { fd })
    }

    /// Abort an in-flight background connect. Silent: no callback
    /// fires. A no-op once the attempt has resolved.
    pub fn abort_connection(&mut self, handle: ConnectorHandle) {
        if let Some(mut connector) = self.connectors.remove(&handle.fd) {
            connector.abort();
        }
    }

    /// Disconnect every object, close every port, drop every
    /// connector, and terminate [`run`](Self::run).
    pub fn close_everything(&mut self) {
        info!("closing everything");
        self.shutdown = true;
        self.running = false;

        let fds: Vec<RawFd> = self.table.keys().copied().collect();
        for fd in fds {
            self.disconnect(fd);
        }

        for (_, mut port) in self.ports.drain() {
            port.close();
        }
        for (_, mut connector) in self.connectors.drain() {
            connector.abort();
        }
        self.timers.clear();
    }

    /// Run dispatch passes until [`close_everything`](Self::close_everything).
    pub fn run(&mut self) -> Result<()> {
        self.running = !self.shutdown;
        while self.running {
            self.turn(None)?;
        }
        Ok(())
    }

    /// One dispatch pass: poll every registered descriptor, deliver
    /// reads before writes, fire expired connector deadlines, then
    /// apply deferred removals. Returns whether anything fired.
    ///
    /// `max_wait` caps the blocking wait; `None` waits until the next
    /// readiness event or connector deadline.
    pub fn turn(&mut self, max_wait: Option<Duration>) -> Result<bool> {
        let interests = self.collect_interests();

        let now = Instant::now();
        let timer_wait = self
            .timers
            .next_deadline()
            .map(|at| at.saturating_duration_since(now));
        let timeout = match (max_wait, timer_wait) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };

        let mut events = std::mem::take(&mut self.events);
        if let Err(e) = self.poller.poll(&interests, timeout, &mut events) {
            self.events = events;
            return Err(e.into());
        }

        let mut progressed = !events.is_empty();
        let prev = self.begin_dispatch();

        // Reads first.
        for ev in &events {
            if !ev.readable || self.pending_removal.contains(&ev.fd) {
                continue;
            }
            if self.ports.contains_key(&ev.fd) {
                self.dispatch_accept(ev.fd);
            } else if self.connectors.contains_key(&ev.fd) {
                self.dispatch_connector(ev.fd);
            } else if self.table.contains_key(&ev.fd) {
                self.dispatch_read(ev.fd);
            }
        }

        // Then writes.
        for ev in &events {
            if !ev.writable || self.pending_removal.contains(&ev.fd) {
                continue;
            }
            if self.connectors.contains_key(&ev.fd) {
                self.dispatch_connector(ev.fd);
            } else if self.table.contains_key(&ev.fd) {
                self.dispatch_flush(ev.fd);
            }
        }

        // Connector deadlines.
        let now = Instant::now();
        for fd in self.timers.pop_expired(now) {
            let Some(mut connector) = self.connectors.remove(&fd) else {
                // Deadline of an already-resolved connector; discard.
                continue;
            };
            if connector.is_pending() {
                connector.expire();
                progressed = true;
                warn!(fd, "background connect timed out");
                connector.target().borrow_mut().connecting_failed(ERROR_TIMEOUT);
            }
        }

        self.end_dispatch(prev);

        self.events = events;
        Ok(progressed)
    }

    fn collect_interests(&self) -> Vec<(RawFd, Interest)> {
        let mut interests =
            Vec::with_capacity(self.ports.len() + self.table.len() + self.connectors.len());

        for (&fd, port) in &self.ports {
            if !port.is_closed() {
                interests.push((
                    fd,
                    Interest {
                        read: true,
                        write: false,
                    },
                ));
            }
        }

        for (&fd, conn) in &self.table {
            let mut write = self.write_requests.contains(&fd);
            if let Ok(mut guard) = conn.try_borrow_mut() {
                if let Some(t) = guard.transport_mut() {
                    write |= !t.is_done_writing();
                }
            }
            interests.push((fd, Interest { read: true, write }));
        }

        for &fd in self.connectors.keys() {
            interests.push((
                fd,
                Interest {
                    read: false,
                    write: true,
                },
            ));
        }

        interests
    }

    fn dispatch_accept(&mut self, fd: RawFd) {
        let Some(mut port) = self.ports.remove(&fd) else {
            return;
        };

        loop {
            match port.accept() {
                Ok(Some((transport, conn))) => {
                    let peer_fd = transport.descriptor();
                    if let Err(e) = self.attach(conn, transport) {
                        warn!(fd = peer_fd, error = %e, "failed to attach accepted connection");
                    }
                    if port.is_closed() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(fd, error = %e, "accept failed");
                    break;
                }
            }
        }

        if !self.shutdown && !port.is_closed() {
            self.ports.insert(fd, port);
        } else {
            port.close();
        }
    }

    fn dispatch_connector(&mut self, fd: RawFd) {
        let Some(mut connector) = self.connectors.remove(&fd) else {
            return;
        };
        if !connector.is_pending() {
            return;
        }

        let target = connector.target();
        match connector.resolve() {
            Ok(transport) => {
                if let Err(e) = self.attach(target.clone(), Box::new(transport)) {
                    warn!(fd, error = %e, "established connection could not register");
                    target.borrow_mut().connecting_failed(&e.to_string());
                }
            }
            Err(reason) => {
                target.borrow_mut().connecting_failed(&reason);
            }
        }
    }

    fn dispatch_read(&mut self, fd: RawFd) {
        let Some(conn) = self.table.get(&fd).cloned() else {
            return;
        };
        let mut guard = conn.borrow_mut();
        let Some(t) = guard.transport_mut() else {
            return;
        };
        let is_stream = t.is_stream();

        match t.read(self.read_chunk) {
            Ok(data) if data.is_empty() && is_stream => {
                drop(guard);
                debug!(fd, "peer closed connection");
                self.disconnect(fd);
            }
            Ok(data) if data.is_empty() => {}
            Ok(data) => {
                let mut ctx = Ctx::new(self, fd);
                guard.data_received(&mut ctx, &data);
            }
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::Interrupted
                ) => {}
            Err(e)
                if !is_stream
                    && matches!(
                        e.kind(),
                        std::io::ErrorKind::ConnectionRefused
                            | std::io::ErrorKind::ConnectionReset
                    ) =>
            {
                debug!(fd, error = %e, "recoverable datagram error");
                guard.recoverable_error(&e);
            }
            Err(e) => {
                drop(guard);
                warn!(fd, error = %e, "fatal transport error");
                self.disconnect(fd);
            }
        }
    }

    fn dispatch_flush(&mut self, fd: RawFd) {
        let Some(conn) = self.table.get(&fd).cloned() else {
            return;
        };
        let mut guard = conn.borrow_mut();
        let Some(t) = guard.transport_mut() else {
            return;
        };
        let is_stream = t.is_stream();

        match t.flush() {
            Ok(()) => {
                if t.is_done_writing() {
                    self.write_requests.remove(&fd);
                }
            }
            Err(e)
                if !is_stream
                    && matches!(
                        e.kind(),
                        std::io::ErrorKind::ConnectionRefused
                            | std::io::ErrorKind::ConnectionReset
                    ) =>
            {
                debug!(fd, error = %e, "recoverable datagram error");
                guard.recoverable_error(&e);
            }
            Err(e) => {
                drop(guard);
                warn!(fd, error = %e, "fatal transport error on flush");
                self.disconnect(fd);
            }
        }
    }

    fn check_duplicate(&self, fd: RawFd) -> Result<()> {
        if self.table.contains_key(&fd)
            || self.ports.contains_key(&fd)
            || self.connectors.contains_key(&fd)
        {
            return Err(NetError::DuplicateDescriptor(fd));
        }
        Ok(())
    }

    fn begin_dispatch(&mut self) -> bool {
        let prev = self.in_dispatch;
        self.in_dispatch = true;
        prev
    }

    fn end_dispatch(&mut self, prev: bool) {
        self.in_dispatch = prev;
        if !prev {
            self.apply_removals();
        }
    }

    fn apply_removals(&mut self) {
        if self.pending_removal.is_empty() {
            return;
        }
        let fds: Vec<RawFd> = self.pending_removal.drain().collect();
        for fd in fds {
            self.teardown(fd);
        }
    }

    fn teardown(&mut self, fd: RawFd) {
        let Some(conn) = self.table.remove(&fd) else {
            return;
        };
        self.write_requests.remove(&fd);
        info!(fd, "connection closed");

        let mut guard = conn.borrow_mut();
        guard.connection_lost();
        if let Some(t) = guard.transport_mut() {
            t.close();
        }
    }
}

impl Default for Reactor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{Connection, TcpTransport};
    use std::cell::RefCell;
    use std::net::{TcpListener, TcpStream};
    use std::os::fd::FromRawFd;
    use std::rc::Rc;

    #[derive(Default)]
    struct Probe {
        established: usize,
        lost: usize,
        failed: Vec<String>,
        transport: Option<Box<dyn Transport>>,
    }

    impl Connection for Probe {
        fn connection_established(&mut self, _ctx: &mut Ctx<'_>, transport: Box<dyn Transport>) {
            self.established += 1;
            self.transport = Some(transport);
        }
        fn data_received(&mut self, _ctx: &mut Ctx<'_>, _data: &[u8]) {}
        fn connection_lost(&mut self) {
            self.lost += 1;
        }
        fn transport_mut(&mut self) -> Option<&mut (dyn Transport + 'static)> {
            self.transport.as_deref_mut()
        }
        fn connecting_failed(&mut self, reason: &str) {
            self.failed.push(reason.to_owned());
        }
    }

    fn loopback_probe(reactor: &mut Reactor) -> (Rc<RefCell<Probe>>, RawFd, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).unwrap();
        let (server, _) = listener.accept().unwrap();

        let transport = TcpTransport::new(server).unwrap();
        let fd = transport.descriptor();
        let probe = Rc::new(RefCell::new(Probe::default()));
        reactor
            .attach(probe.clone() as ConnRef, Box::new(transport))
            .unwrap();
        (probe, fd, client)
    }

    #[test]
    fn test_duplicate_descriptor_rejected() {
        let mut reactor = Reactor::new();
        let (probe, _fd, _client) = loopback_probe(&mut reactor);

        let err = reactor.register(probe as ConnRef, false).unwrap_err();
        assert!(matches!(err, NetError::DuplicateDescriptor(_)));
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let mut reactor = Reactor::new();
        let (probe, fd, _client) = loopback_probe(&mut reactor);

        assert_eq!(probe.borrow().established, 1);
        reactor.disconnect(fd);
        assert_eq!(probe.borrow().lost, 1);
        reactor.disconnect(fd);
        assert_eq!(probe.borrow().lost, 1);
    }

    #[test]
    fn test_connector_timeout_fires_once() {
        let mut reactor = Reactor::new();

        // A pipe read end never reports write readiness, so the
        // connector can only resolve through its deadline.
        let mut fds = [0i32; 2];
        let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
        assert_eq!(rc, 0);
        let socket = unsafe { socket2::Socket::from_raw_fd(fds[0]) };
        let _write_end_keepalive = fds[1];

        let probe = Rc::new(RefCell::new(Probe::default()));
        let connector = Connector::new(
            socket,
            probe.clone() as ConnRef,
            Instant::now() + Duration::from_millis(30),
        );
        reactor.start_connector(connector).unwrap();

        for _ in 0..20 {
            reactor.turn(Some(Duration::from_millis(20))).unwrap();
            if !probe.borrow().failed.is_empty() {
                break;
            }
        }

        let probe = probe.borrow();
        assert_eq!(probe.failed, vec![ERROR_TIMEOUT.to_owned()]);
        assert_eq!(probe.established, 0);

        unsafe { libc::close(fds[1]) };
    }

    #[test]
    fn test_abort_is_silent() {
        let mut reactor = Reactor::new();

        let mut fds = [0i32; 2];
        let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
        assert_eq!(rc, 0);
        let socket = unsafe { socket2::Socket::from_raw_fd(fds[0]) };

        let probe = Rc::new(RefCell::new(Probe::default()));
        let connector = Connector::new(
            socket,
            probe.clone() as ConnRef,
            Instant::now() + Duration::from_millis(30),
        );
        let handle = reactor.start_connector(connector).unwrap();
        reactor.abort_connection(handle);

        // Let the stale deadline come and go.
        for _ in 0..5 {
            reactor.turn(Some(Duration::from_millis(20))).unwrap();
        }

        let probe = probe.borrow();
        assert!(probe.failed.is_empty());
        assert_eq!(probe.established, 0);

        unsafe { libc::close(fds[1]) };
    }

    #[test]
    fn test_close_everything_tears_down() {
        let mut reactor = Reactor::new();
        let (probe, _fd, _client) = loopback_probe(&mut reactor);

        reactor.close_everything();
        assert_eq!(probe.borrow().lost, 1);
        assert!(reactor.table.is_empty());
        assert!(reactor.ports.is_empty());
    }
}
