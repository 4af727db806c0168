//! The outbound command surface of the IRC engine.
//!
//! A [`Session`] is handed to the event handler alongside every event.
//! Its command methods are thin formatters over the line framer: they
//! validate nothing beyond argument presence and rely on the server
//! for semantic errors, which come back later as numeric events.
//! Queued lines go out on the next reactor pass.

use tracing::trace;

use crate::client::state::{ClientState, RegistrationPhase};
use crate::framing::LineFramer;

/// Live view over a client's connection and state, scoped to one
/// event delivery.
pub struct Session<'a> {
    pub(crate) conn: &'a mut LineFramer,
    pub(crate) state: &'a mut ClientState,
}

impl Session<'_> {
    /// Our current nickname.
    pub fn nick(&self) -> &str {
        &self.state.current_nick
    }

    /// The server name learned at registration, if registered.
    pub fn server(&self) -> Option<&str> {
        self.state.server.as_deref()
    }

    /// Whether `RPL_WELCOME` has been received.
    pub fn is_registered(&self) -> bool {
        self.state.phase == RegistrationPhase::Registered
    }

    /// Queue one raw protocol line (terminator appended).
    pub fn send_line(&mut self, line: &str) {
        trace!(line, "send");
        self.conn.write_line(line);
    }

    /// Disconnect this client. Deferred through the reactor's
    /// end-of-pass discipline, so it is safe mid-event.
    pub fn disconnect(&mut self) {
        self.state.wants_disconnect = true;
    }

    // Connection registration and presence

    /// `NICK` — request a nickname change.
    pub fn change_nick(&mut self, nick: &str) {
        self.send_line(&format!("NICK {nick}"));
    }

    /// `QUIT` — leave the network, optionally with a message.
    pub fn quit(&mut self, message: Option<&str>) {
        match message {
            Some(m) => self.send_line(&format!("QUIT :{m}")),
            None => self.send_line("QUIT"),
        }
    }

    /// `OPER` — claim operator status.
    pub fn become_operator(&mut self, name: &str, password: &str) {
        self.send_line(&format!("OPER {name} {password}"));
    }

    /// `AWAY` — set or clear (with `None`) the away message.
    pub fn set_away(&mut self, message: Option<&str>) {
        match message {
            Some(m) => self.send_line(&format!("AWAY :{m}")),
            None => self.send_line("AWAY"),
        }
    }

    // Channel membership

    /// `JOIN` — enter a channel, with an optional key.
    pub fn join_channel(&mut self, channel: &str, key: Option<&str>) {
        match key {
            Some(k) => self.send_line(&format!("JOIN {channel} {k}")),
            None => self.send_line(&format!("JOIN {channel}")),
        }
    }

    /// `PART` — leave a channel, optionally with a message.
    pub fn part_channel(&mut self, channel: &str, message: Option<&str>) {
        match message {
            Some(m) => self.send_line(&format!("PART {channel} :{m}")),
            None => self.send_line(&format!("PART {channel}")),
        }
    }

    /// `INVITE` — invite someone to a channel.
    pub fn invite(&mut self, nick: &str, channel: &str) {
        self.send_line(&format!("INVITE {nick} {channel}"));
    }

    /// `KICK` — eject someone from a channel.
    pub fn kick(&mut self, nick: &str, channel: &str, reason: Option<&str>) {
        match reason {
            Some(r) => self.send_line(&format!("KICK {channel} {nick} :{r}")),
            None => self.send_line(&format!("KICK {channel} {nick}")),
        }
    }

    /// `TOPIC` — set a channel topic.
    pub fn set_topic(&mut self, channel: &str, topic: &str) {
        self.send_line(&format!("TOPIC {channel} :{topic}"));
    }

    /// `MODE` — change modes on a channel, user, or ourselves.
    pub fn set_mode(&mut self, target: &str, mode: &str, params: &[&str]) {
        if params.is_empty() {
            self.send_line(&format!("MODE {target} {mode}"));
        } else {
            self.send_line(&format!("MODE {target} {mode} {}", params.join(" ")));
        }
    }

    // Messaging

    /// `PRIVMSG` — send a message to a nickname or channel.
    pub fn send_message(&mut self, to: &str, text: &str) {
        self.send_line(&format!("PRIVMSG {to} :{text}"));
    }

    /// `NOTICE` — send a notice.
    pub fn send_notice(&mut self, to: &str, text: &str) {
        self.send_line(&format!("NOTICE {to} :{text}"));
    }

    /// CTCP `ACTION` — send an emote, framed on the wire as
    /// `PRIVMSG <to> :\x01ACTION <text>\x01`.
    pub fn send_action(&mut self, to: &str, text: &str) {
        let body = netweave_proto::format_action(text);
        self.send_line(&format!("PRIVMSG {to} :{body}"));
    }

    /// `WALLOPS` — broadcast to operators.
    pub fn send_wallops(&mut self, message: &str) {
        self.send_line(&format!("WALLOPS :{message}"));
    }

    /// `SQUERY` — message a network service.
    pub fn query_service(&mut self, service: &str, message: &str) {
        self.send_line(&format!("SQUERY {service} :{message}"));
    }

    // Queries

    /// `NAMES` — list members, optionally scoped to a channel/server.
    pub fn request_names(&mut self, channel: Option<&str>, server: Option<&str>) {
        match (channel, server) {
            (Some(c), Some(s)) => self.send_line(&format!("NAMES {c} {s}")),
            (Some(c), None) => self.send_line(&format!("NAMES {c}")),
            _ => self.send_line("NAMES"),
        }
    }

    /// `LIST` — list channels, optionally scoped.
    pub fn list_channel(&mut self, channel: Option<&str>, server: Option<&str>) {
        match (channel, server) {
            (Some(c), Some(s)) => self.send_line(&format!("LIST {c} {s}")),
            (Some(c), None) => self.send_line(&format!("LIST {c}")),
            _ => self.send_line("LIST"),
        }
    }

    /// `WHO` — list users matching a mask; `operators_only` appends
    /// the `o` flag.
    pub fn list_who(&mut self, mask: Option<&str>, operators_only: bool) {
        match (mask, operators_only) {
            (Some(m), true) => self.send_line(&format!("WHO {m} o")),
            (Some(m), false) => self.send_line(&format!("WHO {m}")),
            (None, _) => self.send_line("WHO"),
        }
    }

    /// `WHOIS` — query a user, optionally through a specific server.
    pub fn whois(&mut self, nick: &str, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("WHOIS {s} {nick}")),
            None => self.send_line(&format!("WHOIS {nick}")),
        }
    }

    /// `WHOWAS` — query a departed user.
    pub fn whowas(&mut self, nick: &str, count: Option<&str>, server: Option<&str>) {
        match (count, server) {
            (Some(c), Some(s)) => self.send_line(&format!("WHOWAS {nick} {c} {s}")),
            (Some(c), None) => self.send_line(&format!("WHOWAS {nick} {c}")),
            _ => self.send_line(&format!("WHOWAS {nick}")),
        }
    }

    /// `ISON` — ask which of the given nicknames are online.
    pub fn are_users_on(&mut self, nicks: &str) {
        self.send_line(&format!("ISON {nicks}"));
    }

    // Server queries and administration

    /// `MOTD` — request the message of the day.
    pub fn request_motd(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("MOTD {s}")),
            None => self.send_line("MOTD"),
        }
    }

    /// `LUSERS` — request network size information, optionally
    /// forwarded through another server.
    pub fn request_size_information(&mut self, mask: Option<&str>, server: Option<&str>) {
        match (mask, server) {
            (Some(m), Some(s)) => self.send_line(&format!("LUSERS {m} {s}")),
            (Some(m), None) => self.send_line(&format!("LUSERS {m}")),
            _ => self.send_line("LUSERS"),
        }
    }

    /// `VERSION` — request a server's version.
    pub fn request_version(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("VERSION {s}")),
            None => self.send_line("VERSION"),
        }
    }

    /// `STATS` — request server statistics for a query letter.
    pub fn request_server_stats(&mut self, query: Option<&str>, server: Option<&str>) {
        match (query, server) {
            (Some(q), Some(s)) => self.send_line(&format!("STATS {q} {s}")),
            (Some(q), None) => self.send_line(&format!("STATS {q}")),
            _ => self.send_line("STATS"),
        }
    }

    /// `LINKS` — request the server links matching a mask.
    pub fn request_server_link(&mut self, mask: Option<&str>, server: Option<&str>) {
        match (server, mask) {
            (Some(s), Some(m)) => self.send_line(&format!("LINKS {s} {m}")),
            (None, Some(m)) => self.send_line(&format!("LINKS {m}")),
            _ => self.send_line("LINKS"),
        }
    }

    /// `TIME` — request a server's local time.
    pub fn request_time(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("TIME {s}")),
            None => self.send_line("TIME"),
        }
    }

    /// `CONNECT` — ask a server to connect to another.
    pub fn request_server_to_connect(&mut self, target: &str, port: &str, remote: Option<&str>) {
        match remote {
            Some(r) => self.send_line(&format!("CONNECT {target} {port} {r}")),
            None => self.send_line(&format!("CONNECT {target} {port}")),
        }
    }

    /// `TRACE` — request the route to a server.
    pub fn request_trace(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("TRACE {s}")),
            None => self.send_line("TRACE"),
        }
    }

    /// `ADMIN` — request a server's administrator info.
    pub fn request_administrator(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("ADMIN {s}")),
            None => self.send_line("ADMIN"),
        }
    }

    /// `INFO` — request a server's info text.
    pub fn request_info(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("INFO {s}")),
            None => self.send_line("INFO"),
        }
    }

    /// `SERVLIST` — list network services by mask and type.
    pub fn request_service_list(&mut self, mask: Option<&str>, kind: Option<&str>) {
        match (mask, kind) {
            (Some(m), Some(t)) => self.send_line(&format!("SERVLIST {m} {t}")),
            (Some(m), None) => self.send_line(&format!("SERVLIST {m}")),
            _ => self.send_line("SERVLIST"),
        }
    }

    /// `USERS` — request logged-in user info.
    pub fn request_user_info(&mut self, server: Option<&str>) {
        match server {
            Some(s) => self.send_line(&format!("USERS {s}")),
            None => self.send_line("USERS"),
        }
    }

    /// `REHASH` — ask the server to reload its configuration.
    pub fn request_server_rehash(&mut self) {
        self.send_line("REHASH");
    }

    /// `DIE` — ask the server to shut down.
    pub fn request_server_shutdown(&mut self) {
        self.send_line("DIE");
    }

    /// `RESTART` — ask the server to restart.
    pub fn request_server_restart(&mut self) {
        self.send_line("RESTART");
    }

    /// `KILL` — forcibly remove a user from the network.
    pub fn kill(&mut self, nick: &str, comment: &str) {
        self.send_line(&format!("KILL {nick} :{comment}"));
    }
}
