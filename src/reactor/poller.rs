//! `poll(2)`-based readiness source.
//!
//! The reactor rebuilds the pollfd array from its tables on every pass,
//! which makes the poller level-triggered by construction: a descriptor
//! stays in the set exactly as long as its owner stays registered, and
//! write interest disappears the moment the owning transport reports
//! `is_done_writing()`.

use std::io;
use std::os::fd::RawFd;
use std::time::Duration;

/// Readiness interest for one descriptor.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Interest {
    pub(crate) read: bool,
    pub(crate) write: bool,
}

/// A readiness event reported for one registered descriptor.
///
/// Error and hang-up conditions fold into `readable` so the subsequent
/// read surfaces the actual failure to the owning object.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Event {
    pub(crate) fd: RawFd,
    pub(crate) readable: bool,
    pub(crate) writable: bool,
}

/// Level-triggered poller over `poll(2)`.
///
/// Owns a reusable pollfd buffer; otherwise stateless.
pub(crate) struct Poller {
    pollfds: Vec<libc::pollfd>,
}

impl Poller {
    pub(crate) fn new() -> Self {
        Self {
            pollfds: Vec::with_capacity(64),
        }
    }

    /// Block until readiness, the timeout, or a signal.
    ///
    /// `interests` is the full registered set for this pass. Events are
    /// appended to `events` (cleared first). Returns `Ok` with an empty
    /// event list on timeout or `EINTR`.
    pub(crate) fn poll(
        &mut self,
        interests: &[(RawFd, Interest)],
        timeout: Option<Duration>,
        events: &mut Vec<Event>,
    ) -> io::Result<()> {
        events.clear();
        self.pollfds.clear();

        for &(fd, interest) in interests {
            let mut flags: libc::c_short = 0;
            if interest.read {
                flags |= libc::POLLIN;
            }
            if interest.write {
                flags |= libc::POLLOUT;
            }
            self.pollfds.push(libc::pollfd {
                fd,
                events: flags,
                revents: 0,
            });
        }

        let timeout_ms = timeout
            .map(|t| t.as_millis().min(i32::MAX as u128) as libc::c_int)
            .unwrap_or(-1);

        let n = unsafe {
            libc::poll(
                self.pollfds.as_mut_ptr(),
                self.pollfds.len() as libc::nfds_t,
                timeout_ms,
            )
        };

        if n < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(());
            }
            return Err(err);
        }

        if n == 0 {
            return Ok(());
        }

        for pfd in &self.pollfds {
            if pfd.revents == 0 {
                continue;
            }

            let readable = pfd.revents
                & (libc::POLLIN | libc::POLLERR | libc::POLLHUP | libc::POLLNVAL)
                != 0;
            let writable = pfd.revents & (libc::POLLOUT | libc::POLLERR) != 0;

            events.push(Event {
                fd: pfd.fd,
                readable,
                writable,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::{TcpListener, TcpStream};
    use std::os::fd::AsRawFd;

    #[test]
    fn test_timeout_with_no_events() {
        let mut poller = Poller::new();
        let mut events = Vec::new();
        poller
            .poll(&[], Some(Duration::from_millis(10)), &mut events)
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_read_readiness_on_loopback() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let mut client = TcpStream::connect(addr).unwrap();
        let (server, _) = listener.accept().unwrap();
        server.set_nonblocking(true).unwrap();

        client.write_all(b"ping").unwrap();
        client.flush().unwrap();

        let fd = server.as_raw_fd();
        let interests = [(
            fd,
            Interest {
                read: true,
                write: false,
            },
        )];

        let mut poller = Poller::new();
        let mut events = Vec::new();
        poller
            .poll(&interests, Some(Duration::from_secs(5)), &mut events)
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].fd, fd);
        assert!(events[0].readable);
    }

    #[test]
    fn test_write_readiness_on_idle_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = TcpStream::connect(addr).unwrap();
        client.set_nonblocking(true).unwrap();

        let fd = client.as_raw_fd();
        let interests = [(
            fd,
            Interest {
                read: false,
                write: true,
            },
        )];

        let mut poller = Poller::new();
        let mut events = Vec::new();
        poller
            .poll(&interests, Some(Duration::from_secs(5)), &mut events)
            .unwrap();

        assert_eq!(events.len(), 1);
        assert!(events[0].writable);
    }
}
