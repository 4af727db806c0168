//! # netweave
//!
//! An event-driven networking toolkit: a single-threaded [`Reactor`]
//! multiplexing many sockets, stream and datagram transports with
//! asynchronous timeout-bounded connects, a [`LineFramer`] for text
//! protocols, and an [`IrcClient`](client::IrcClient) protocol engine
//! built on top.
//!
//! One control thread drives all I/O: no descriptor is touched outside
//! a dispatch pass, so no locking exists anywhere. Callbacks must not
//! block, or every connection stalls.
//!
//! ## Quick start
//!
//! ```no_run
//! use netweave::client::{EventHandler, IrcClient, IrcEvent, Session};
//! use netweave::{ClientConfig, Reactor};
//!
//! struct Greeter;
//!
//! impl EventHandler for Greeter {
//!     fn on_event(&mut self, session: &mut Session<'_>, event: IrcEvent) {
//!         if let IrcEvent::Registered = event {
//!             session.join_channel("#netweave", None);
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), netweave::NetError> {
//!     let mut reactor = Reactor::new();
//!     let config = ClientConfig::new(
//!         "irc.example.com",
//!         vec!["weaver".into(), "weaver_".into()],
//!         "weaver",
//!     );
//!     let (_client, _handle) = IrcClient::connect(&mut reactor, config, Greeter)?;
//!     reactor.run()
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod framing;
pub mod net;
pub mod reactor;

/// Wire-level protocol support, re-exported for convenience.
pub use netweave_proto as proto;

pub use self::client::IrcClient;
pub use self::config::ClientConfig;
pub use self::error::{NetError, Result};
pub use self::framing::LineFramer;
pub use self::net::{Connection, ConnectorHandle, Port, Transport};
pub use self::reactor::{Ctx, Reactor};
