//! Incremental line reassembly over a byte stream.
//!
//! A [`LineFramer`] sits between a transport and a line-oriented
//! protocol object: bytes go in as they arrive off the socket, complete
//! lines come out with their terminators stripped, and the trailing
//! fragment stays buffered for the next read. Both `\r\n` and bare
//! `\n` terminate a line. No maximum line length is enforced at this
//! layer; a consumer facing pathological input can disconnect.

use bytes::{Bytes, BytesMut};

use crate::net::Transport;

/// Buffered line reassembly plus delegation to the owned transport.
pub struct LineFramer {
    transport: Option<Box<dyn Transport>>,
    pending: BytesMut,
    /// Index of the next unscanned byte, so a long partial line is not
    /// re-scanned on every feed.
    scanned: usize,
}

impl LineFramer {
    /// A framer with no transport attached yet.
    pub fn new() -> Self {
        Self {
            transport: None,
            pending: BytesMut::new(),
            scanned: 0,
        }
    }

    /// Take ownership of the transport once the connection is live.
    pub fn connection_established(&mut self, transport: Box<dyn Transport>) {
        self.transport = Some(transport);
    }

    /// Drop the transport and any partial line.
    pub fn connection_lost(&mut self) {
        self.transport = None;
        self.pending.clear();
        self.scanned = 0;
    }

    /// The owned transport, while the connection is live.
    pub fn transport_mut(&mut self) -> Option<&mut (dyn Transport + 'static)> {
        self.transport.as_deref_mut()
    }

    /// Whether a transport is currently attached.
    pub fn is_attached(&self) -> bool {
        self.transport.is_some()
    }

    /// Append incoming bytes and extract every complete line, in
    /// order, terminators stripped. A single call may yield zero, one,
    /// or many lines; the unterminated tail stays buffered.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Bytes> {
        self.pending.extend_from_slice(data);

        let mut lines = Vec::new();
        loop {
            let Some(offset) = self.pending[self.scanned..]
                .iter()
                .position(|&b| b == b'\n')
            else {
                self.scanned = self.pending.len();
                break;
            };

            let newline = self.scanned + offset;
            let mut line = self.pending.split_to(newline + 1);
            self.scanned = 0;

            line.truncate(line.len() - 1);
            if line.last() == Some(&b'\r') {
                line.truncate(line.len() - 1);
            }
            lines.push(line.freeze());
        }

        lines
    }

    /// Bytes currently buffered without a terminator.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Queue raw bytes on the transport. Dropped silently when no
    /// transport is attached.
    pub fn write(&mut self, data: &[u8]) {
        if let Some(t) = self.transport.as_deref_mut() {
            t.write(data);
        }
    }

    /// Queue a line followed by `\r\n`.
    pub fn write_line(&mut self, line: &str) {
        self.write(line.as_bytes());
        self.write(b"\r\n");
    }
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(lines: Vec<Bytes>) -> Vec<String> {
        lines
            .into_iter()
            .map(|l| String::from_utf8(l.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_single_complete_line() {
        let mut framer = LineFramer::new();
        assert_eq!(strings(framer.feed(b"PING :x\r\n")), vec!["PING :x"]);
        assert!(framer.pending().is_empty());
    }

    #[test]
    fn test_bare_lf_terminates() {
        let mut framer = LineFramer::new();
        assert_eq!(strings(framer.feed(b"one\ntwo\n")), vec!["one", "two"]);
    }

    #[test]
    fn test_partial_then_completion() {
        let mut framer = LineFramer::new();
        assert!(framer.feed(b"PRIV").is_empty());
        assert!(framer.feed(b"MSG #ch :he").is_empty());
        assert_eq!(
            strings(framer.feed(b"llo\r\nNOT")),
            vec!["PRIVMSG #ch :hello"]
        );
        assert_eq!(framer.pending(), b"NOT");
    }

    #[test]
    fn test_many_lines_in_one_feed() {
        let mut framer = LineFramer::new();
        let lines = framer.feed(b"a\r\nb\r\nc\r\npartial");
        assert_eq!(strings(lines), vec!["a", "b", "c"]);
        assert_eq!(framer.pending(), b"partial");
    }

    #[test]
    fn test_byte_at_a_time() {
        let mut framer = LineFramer::new();
        let mut out = Vec::new();
        for &b in b"NICK one\r\nNICK two\n" {
            out.extend(framer.feed(&[b]));
        }
        assert_eq!(strings(out), vec!["NICK one", "NICK two"]);
    }

    #[test]
    fn test_empty_lines_survive() {
        let mut framer = LineFramer::new();
        assert_eq!(strings(framer.feed(b"\r\n\n")), vec!["", ""]);
    }

    #[test]
    fn test_cr_without_lf_stays_pending() {
        let mut framer = LineFramer::new();
        assert!(framer.feed(b"half\r").is_empty());
        assert_eq!(strings(framer.feed(b"\n")), vec!["half"]);
    }

    #[test]
    fn test_lost_connection_clears_buffer() {
        let mut framer = LineFramer::new();
        framer.feed(b"partial");
        framer.connection_lost();
        assert!(framer.pending().is_empty());
        assert_eq!(strings(framer.feed(b"whole\n")), vec!["whole"]);
    }
}
