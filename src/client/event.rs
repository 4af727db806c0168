//! The tagged event type delivered by the IRC engine.
//!
//! Instead of a wide interface of overridable callbacks, the engine
//! hands every protocol happening to one handler as a variant of
//! [`IrcEvent`], in the order the underlying lines arrived.

use netweave_proto::Response;

/// One protocol happening, delivered in wire order.
///
/// `who` fields carry the sender's nickname (the portion of the prefix
/// before the first `!`/`@`); for server-originated events that is the
/// server name.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum IrcEvent {
    /// Registration completed (`RPL_WELCOME` received).
    Registered,

    /// Every nickname candidate was rejected; registration is over and
    /// will not be retried.
    CouldNotRegister {
        /// Server-supplied explanation, or the rejecting numeric's name.
        reason: String,
    },

    /// The background connect gave up before a connection existed.
    ConnectingFailed {
        /// One of the documented failure strings, or an OS error text.
        reason: String,
    },

    /// Server keepalive probe. A `PONG` has already been sent.
    Ping {
        /// The token to echo, when the server supplied one.
        token: Option<String>,
    },

    /// A `PRIVMSG` addressed to us or to a channel we are on.
    Message {
        /// Sender nickname.
        who: String,
        /// Target nickname or channel.
        to: String,
        /// Message body.
        text: String,
    },

    /// A `NOTICE`.
    Notice {
        /// Sender nickname.
        who: String,
        /// Target nickname or channel.
        to: String,
        /// Notice body.
        text: String,
    },

    /// A CTCP `ACTION` ("emote") extracted from a `PRIVMSG` body.
    Action {
        /// Acting nickname.
        who: String,
        /// Target nickname or channel.
        to: String,
        /// The action text, unwrapped.
        text: String,
    },

    /// Someone joined a channel.
    Joined {
        /// The channel.
        channel: String,
        /// Joining nickname.
        who: String,
    },

    /// Someone left a channel.
    Parted {
        /// The channel.
        channel: String,
        /// Optional parting message.
        message: Option<String>,
        /// Parting nickname.
        who: String,
    },

    /// Someone quit the network.
    Quit {
        /// Optional quit message.
        message: Option<String>,
        /// Quitting nickname.
        who: String,
    },

    /// Someone changed nickname. When it was ours, the engine's
    /// current nick has already been updated.
    NickChanged {
        /// The new nickname.
        new_nick: String,
        /// The old nickname.
        who: String,
    },

    /// Someone was kicked from a channel.
    Kicked {
        /// The channel.
        channel: String,
        /// The nickname that was kicked.
        victim: String,
        /// Optional kick reason.
        reason: Option<String>,
        /// Kicking nickname.
        who: String,
    },

    /// We were invited to a channel.
    Invited {
        /// The channel.
        channel: String,
        /// Inviting nickname.
        who: String,
    },

    /// A channel topic changed.
    TopicChanged {
        /// The channel.
        channel: String,
        /// The new topic.
        topic: String,
        /// Nickname that set it.
        who: String,
    },

    /// A mode change on a channel, user, or ourselves.
    ModeChanged {
        /// The affected target.
        target: String,
        /// The mode string (e.g. `+o`).
        mode: String,
        /// Mode parameters, if any.
        params: Vec<String>,
        /// Nickname that set it.
        who: String,
    },

    /// An operator broadcast.
    Wallops {
        /// The broadcast text.
        message: String,
        /// Sending nickname.
        who: String,
    },

    /// Any numeric reply not consumed by the registration machine.
    Numeric {
        /// The three-digit code.
        code: u16,
        /// The symbolic name, when the code is in the table.
        response: Option<Response>,
        /// Reply parameters, in order.
        params: Vec<String>,
        /// Raw sender prefix (usually the server name).
        from: Option<String>,
    },

    /// The connection is gone; no further events follow.
    Disconnected,
}
