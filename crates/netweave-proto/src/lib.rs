//! # netweave-proto
//!
//! Wire-level IRC protocol support for the netweave toolkit: the line
//! grammar, sender-prefix decomposition, the numeric reply table, and
//! CTCP action framing. This crate performs no I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use netweave_proto::{ParsedLine, Response, Sender};
//!
//! let line = ParsedLine::parse(":nick!user@host PRIVMSG #chan :Hello!").unwrap();
//! assert_eq!(line.command, "PRIVMSG");
//!
//! let sender = Sender::parse(line.prefix.unwrap());
//! assert_eq!(sender.nick, "nick");
//!
//! assert_eq!(Response::from_code(433), Some(Response::ERR_NICKNAMEINUSE));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod ctcp;
pub mod error;
pub mod parser;
pub mod response;
pub mod sender;

pub use self::ctcp::{format_action, parse_action, CTCP_DELIM};
pub use self::error::{ProtocolError, Result};
pub use self::parser::ParsedLine;
pub use self::response::Response;
pub use self::sender::{extract_host, extract_nick, Sender};
