//! The IRC client protocol engine.
//!
//! An [`IrcClient`] is a [`Connection`] built on a [`LineFramer`]: the
//! reactor feeds it raw bytes, the framer reassembles lines, and the
//! engine parses each one, keeps the registration and nickname state
//! machines current, and delivers an [`IrcEvent`] per happening to the
//! supplied [`EventHandler`]. Outbound traffic goes through the
//! [`Session`] handed to the handler (or [`IrcClient::session`]).
//!
//! Malformed lines are logged and dropped; they never take the
//! connection down. Server `PING`s are answered automatically.

use std::cell::RefCell;
use std::rc::Rc;

use netweave_proto::{parse_action, ParsedLine, Response, Sender};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::framing::LineFramer;
use crate::net::{tcp, ConnRef, Connection, ConnectorHandle, Transport};
use crate::reactor::{Ctx, Reactor};

pub mod event;
mod session;
mod state;

pub use event::IrcEvent;
pub use session::Session;

use state::{ClientState, RegistrationPhase};

/// Receives every protocol event, in wire order.
pub trait EventHandler {
    /// Handle one event. The session exposes the outbound command
    /// surface; nothing here may block.
    fn on_event(&mut self, session: &mut Session<'_>, event: IrcEvent);
}

/// An IRC client connection: framing, registration, dispatch.
pub struct IrcClient<H: EventHandler> {
    conn: LineFramer,
    state: ClientState,
    handler: H,
}

impl<H: EventHandler> IrcClient<H> {
    /// Build an engine from a validated configuration.
    pub fn new(config: ClientConfig, handler: H) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            conn: LineFramer::new(),
            state: ClientState::new(config),
            handler,
        })
    }

    /// Our current nickname (the pending candidate until registered).
    pub fn nick(&self) -> &str {
        &self.state.current_nick
    }

    /// The server name learned from `RPL_WELCOME`, once registered.
    pub fn server(&self) -> Option<&str> {
        self.state.server.as_deref()
    }

    /// Whether `RPL_WELCOME` has been received.
    pub fn is_registered(&self) -> bool {
        self.state.phase == RegistrationPhase::Registered
    }

    /// The outbound command surface, for use outside event delivery.
    pub fn session(&mut self) -> Session<'_> {
        Session {
            conn: &mut self.conn,
            state: &mut self.state,
        }
    }

    fn emit(&mut self, event: IrcEvent) {
        let mut session = Session {
            conn: &mut self.conn,
            state: &mut self.state,
        };
        self.handler.on_event(&mut session, event);
    }

    fn handle_line(&mut self, line: &str) {
        let parsed = match ParsedLine::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, line, "dropping unparseable line");
                return;
            }
        };

        if let Some(code) = parsed.numeric() {
            self.handle_numeric(code, &parsed);
            return;
        }

        let who = parsed
            .prefix
            .map(|p| Sender::parse(p).nick.to_owned())
            .unwrap_or_default();
        let command = parsed.command.to_ascii_uppercase();

        match command.as_str() {
            "PING" => {
                let token = parsed.param(0).map(str::to_owned);
                match token.as_deref() {
                    Some(t) => self.conn.write_line(&format!("PONG :{t}")),
                    None => self.conn.write_line("PONG"),
                }
                self.emit(IrcEvent::Ping { token });
            }
            "PRIVMSG" => {
                let to = parsed.param(0).unwrap_or_default().to_owned();
                let body = parsed.param(1).unwrap_or_default();
                match parse_action(body) {
                    Some(action) => self.emit(IrcEvent::Action {
                        who,
                        to,
                        text: action.to_owned(),
                    }),
                    None => self.emit(IrcEvent::Message {
                        who,
                        to,
                        text: body.to_owned(),
                    }),
                }
            }
            "NOTICE" => {
                let to = parsed.param(0).unwrap_or_default().to_owned();
                let text = parsed.param(1).unwrap_or_default().to_owned();
                self.emit(IrcEvent::Notice { who, to, text });
            }
            "JOIN" => {
                let channel = parsed.param(0).unwrap_or_default().to_owned();
                self.emit(IrcEvent::Joined { channel, who });
            }
            "PART" => {
                let channel = parsed.param(0).unwrap_or_default().to_owned();
                let message = parsed.param(1).map(str::to_owned);
                self.emit(IrcEvent::Parted {
                    channel,
                    message,
                    who,
                });
            }
            "QUIT" => {
                let message = parsed.param(0).map(str::to_owned);
                self.emit(IrcEvent::Quit { message, who });
            }
            "NICK" => {
                let new_nick = parsed.param(0).unwrap_or_default().to_owned();
                if !new_nick.is_empty() && who == self.state.current_nick {
                    debug!(old = %who, new = %new_nick, "own nickname changed");
                    self.state.current_nick = new_nick.clone();
                }
                self.emit(IrcEvent::NickChanged { new_nick, who });
            }
            "KICK" => {
                let channel = parsed.param(0).unwrap_or_default().to_owned();
                let victim = parsed.param(1).unwrap_or_default().to_owned();
                let reason = parsed.param(2).map(str::to_owned);
                self.emit(IrcEvent::Kicked {
                    channel,
                    victim,
                    reason,
                    who,
                });
            }
            "INVITE" => {
                let channel = parsed.param(1).unwrap_or_default().to_owned();
                self.emit(IrcEvent::Invited { channel, who });
            }
            "TOPIC" => {
                let channel = parsed.param(0).unwrap_or_default().to_owned();
                let topic = parsed.param(1).unwrap_or_default().to_owned();
                self.emit(IrcEvent::TopicChanged {
                    channel,
                    topic,
                    who,
                });
            }
            "MODE" => {
                let target = parsed.param(0).unwrap_or_default().to_owned();
                let mode = parsed.param(1).unwrap_or_default().to_owned();
                let params = parsed.params.iter().skip(2).map(|s| s.to_string()).collect();
                self.emit(IrcEvent::ModeChanged {
                    target,
                    mode,
                    params,
                    who,
                });
            }
            "WALLOPS" => {
                let message = parsed.param(0).unwrap_or_default().to_owned();
                self.emit(IrcEvent::Wallops { message, who });
            }
            _ => {
                debug!(command = %command, "ignoring unhandled command");
            }
        }
    }

    fn handle_numeric(&mut self, code: u16, parsed: &ParsedLine<'_>) {
        let response = Response::from_code(code);

        if self.state.phase == RegistrationPhase::Registering {
            match response {
                Some(Response::ERR_NICKNAMEINUSE) | Some(Response::ERR_ERRONEUSNICKNAME) => {
                    self.state.nickname_index += 1;
                    match self
                        .state
                        .config
                        .nicknames
                        .get(self.state.nickname_index)
                        .cloned()
                    {
                        Some(candidate) => {
                            info!(nick = %candidate, "nickname rejected, trying next candidate");
                            self.state.current_nick = candidate.clone();
                            self.conn.write_line(&format!("NICK {candidate}"));
                        }
                        None => {
                            self.state.phase = RegistrationPhase::Failed;
                            let reason = parsed
                                .params
                                .last()
                                .map(|s| s.to_string())
                                .or_else(|| response.map(|r| r.name().to_owned()))
                                .unwrap_or_else(|| code.to_string());
                            warn!(reason = %reason, "nickname candidates exhausted");
                            self.emit(IrcEvent::CouldNotRegister { reason });
                        }
                    }
                    return;
                }
                Some(Response::RPL_WELCOME) => {
                    self.state.phase = RegistrationPhase::Registered;
                    if let Some(nick) = parsed.param(0) {
                        self.state.current_nick = nick.to_owned();
                    }
                    self.state.server = parsed.prefix.map(str::to_owned);
                    info!(
                        nick = %self.state.current_nick,
                        server = self.state.server.as_deref().unwrap_or(""),
                        "registered with server"
                    );
                    self.emit(IrcEvent::Registered);
                    return;
                }
                _ => {}
            }
        }

        let params = parsed.params.iter().map(|s| s.to_string()).collect();
        let from = parsed.prefix.map(str::to_owned);
        self.emit(IrcEvent::Numeric {
            code,
            response,
            params,
            from,
        });
    }
}

impl<H: EventHandler + 'static> IrcClient<H> {
    /// Start a background connect and return the shared client plus a
    /// handle that can abort the attempt.
    ///
    /// On establishment the engine sends `PASS` (when configured),
    /// `NICK` with the first candidate, and `USER`, then waits for the
    /// registration numerics. Connect failures surface through the
    /// handler as [`IrcEvent::ConnectingFailed`].
    pub fn connect(
        reactor: &mut Reactor,
        config: ClientConfig,
        handler: H,
    ) -> Result<(Rc<RefCell<Self>>, ConnectorHandle)> {
        let timeout = config.timeout();
        let host = config.server.clone();
        let port = config.port;

        let client = Rc::new(RefCell::new(Self::new(config, handler)?));
        let handle = tcp::connect_in_background(
            reactor,
            client.clone() as ConnRef,
            &host,
            port,
            timeout,
        )?;
        Ok((client, handle))
    }
}

impl<H: EventHandler> Connection for IrcClient<H> {
    fn connection_established(&mut self, _ctx: &mut Ctx<'_>, transport: Box<dyn Transport>) {
        info!(nick = %self.state.current_nick, "connected, starting registration");
        self.conn.connection_established(transport);
        self.state.phase = RegistrationPhase::Registering;

        if let Some(password) = self.state.config.password.clone() {
            self.conn.write_line(&format!("PASS {password}"));
        }
        let nick = self.state.current_nick.clone();
        self.conn.write_line(&format!("NICK {nick}"));

        let username = self.state.config.username.clone();
        let realname = self.state.config.realname().to_owned();
        self.conn.write_line(&format!("USER {username} 0 * :{realname}"));
    }

    fn data_received(&mut self, ctx: &mut Ctx<'_>, data: &[u8]) {
        let lines = self.conn.feed(data);
        for line in lines {
            match std::str::from_utf8(&line) {
                Ok(text) => self.handle_line(text),
                Err(e) => debug!(error = %e, "dropping non-UTF-8 line"),
            }
            if self.state.wants_disconnect {
                break;
            }
        }

        if self.state.wants_disconnect {
            self.state.wants_disconnect = false;
            ctx.disconnect();
        }
    }

    fn connection_lost(&mut self) {
        info!("connection lost");
        self.conn.connection_lost();
        if self.state.phase != RegistrationPhase::Failed {
            self.state.phase = RegistrationPhase::Connecting;
        }
        self.emit(IrcEvent::Disconnected);
    }

    fn transport_mut(&mut self) -> Option<&mut (dyn Transport + 'static)> {
        self.conn.transport_mut()
    }

    fn connecting_failed(&mut self, reason: &str) {
        warn!(reason, "connect failed");
        self.state.phase = RegistrationPhase::Failed;
        self.emit(IrcEvent::ConnectingFailed {
            reason: reason.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::net::SocketAddr;
    use std::os::fd::RawFd;

    /// Captures everything the engine writes; never readable.
    struct MockTransport {
        written: Rc<RefCell<Vec<u8>>>,
        closed: bool,
    }

    impl Transport for MockTransport {
        fn descriptor(&self) -> RawFd {
            9999
        }
        fn local_addr(&self) -> Option<SocketAddr> {
            None
        }
        fn remote_addr(&self) -> Option<SocketAddr> {
            None
        }
        fn write(&mut self, data: &[u8]) {
            self.written.borrow_mut().extend_from_slice(data);
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
        fn read(&mut self, _max: usize) -> io::Result<Vec<u8>> {
            Err(io::ErrorKind::WouldBlock.into())
        }
        fn is_done_writing(&self) -> bool {
            true
        }
        fn close(&mut self) {
            self.closed = true;
        }
        fn is_closed(&self) -> bool {
            self.closed
        }
    }

    struct Collect {
        events: Rc<RefCell<Vec<IrcEvent>>>,
    }

    impl EventHandler for Collect {
        fn on_event(&mut self, _session: &mut Session<'_>, event: IrcEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    struct Fixture {
        reactor: Reactor,
        client: IrcClient<Collect>,
        written: Rc<RefCell<Vec<u8>>>,
        events: Rc<RefCell<Vec<IrcEvent>>>,
    }

    impl Fixture {
        fn new(nicknames: &[&str], password: Option<&str>) -> Self {
            let mut config = ClientConfig::new(
                "irc.test",
                nicknames.iter().map(|s| s.to_string()).collect(),
                "guest",
            );
            config.realname = Some("Test User".into());
            config.password = password.map(str::to_owned);

            let events = Rc::new(RefCell::new(Vec::new()));
            let written = Rc::new(RefCell::new(Vec::new()));
            let mut fixture = Fixture {
                reactor: Reactor::new(),
                client: IrcClient::new(
                    config,
                    Collect {
                        events: events.clone(),
                    },
                )
                .unwrap(),
                written,
                events,
            };

            let transport = MockTransport {
                written: fixture.written.clone(),
                closed: false,
            };
            let mut ctx = Ctx::new(&mut fixture.reactor, 9999);
            fixture
                .client
                .connection_established(&mut ctx, Box::new(transport));
            fixture
        }

        fn feed(&mut self, data: &[u8]) {
            let mut ctx = Ctx::new(&mut self.reactor, 9999);
            self.client.data_received(&mut ctx, data);
        }

        fn sent_lines(&self) -> Vec<String> {
            let raw = String::from_utf8(self.written.borrow().clone()).unwrap();
            raw.split("\r\n")
                .filter(|l| !l.is_empty())
                .map(str::to_owned)
                .collect()
        }

        fn events(&self) -> Vec<IrcEvent> {
            self.events.borrow().clone()
        }
    }

    #[test]
    fn test_registration_handshake() {
        let fixture = Fixture::new(&["alpha", "beta"], None);
        assert_eq!(
            fixture.sent_lines(),
            vec!["NICK alpha", "USER guest 0 * :Test User"]
        );
    }

    #[test]
    fn test_registration_sends_pass_first() {
        let fixture = Fixture::new(&["alpha"], Some("secret"));
        assert_eq!(
            fixture.sent_lines(),
            vec!["PASS secret", "NICK alpha", "USER guest 0 * :Test User"]
        );
    }

    #[test]
    fn test_nick_retry_then_welcome() {
        let mut fixture = Fixture::new(&["alpha", "beta", "gamma"], None);

        fixture.feed(b":irc.test 433 * alpha :Nickname is already in use\r\n");
        assert_eq!(fixture.client.nick(), "beta");
        assert!(fixture.sent_lines().contains(&"NICK beta".to_owned()));
        assert_eq!(fixture.client.state.nickname_index, 1);

        fixture.feed(b":irc.test 001 beta :Welcome to the network\r\n");
        assert!(fixture.client.is_registered());
        assert_eq!(fixture.client.nick(), "beta");
        assert_eq!(fixture.client.server(), Some("irc.test"));
        assert_eq!(fixture.events(), vec![IrcEvent::Registered]);
        assert_eq!(fixture.client.state.nickname_index, 1);
    }

    #[test]
    fn test_erroneous_nickname_also_advances() {
        let mut fixture = Fixture::new(&["bad!", "good"], None);
        fixture.feed(b":irc.test 432 * bad! :Erroneous nickname\r\n");
        assert_eq!(fixture.client.nick(), "good");
        assert!(fixture.sent_lines().contains(&"NICK good".to_owned()));
    }

    #[test]
    fn test_candidate_exhaustion_fires_once() {
        let mut fixture = Fixture::new(&["alpha", "beta"], None);

        fixture.feed(b":irc.test 433 * alpha :Nickname is already in use\r\n");
        fixture.feed(b":irc.test 433 * beta :Nickname is already in use\r\n");

        let nick_sends: Vec<_> = fixture
            .sent_lines()
            .into_iter()
            .filter(|l| l.starts_with("NICK "))
            .collect();
        assert_eq!(nick_sends, vec!["NICK alpha", "NICK beta"]);
        assert_eq!(
            fixture.events(),
            vec![IrcEvent::CouldNotRegister {
                reason: "Nickname is already in use".to_owned()
            }]
        );
        assert!(!fixture.client.is_registered());

        // Terminal: a further collision is an ordinary numeric, and no
        // NICK goes out.
        fixture.feed(b":irc.test 433 * beta :Nickname is already in use\r\n");
        let nick_sends: Vec<_> = fixture
            .sent_lines()
            .into_iter()
            .filter(|l| l.starts_with("NICK "))
            .collect();
        assert_eq!(nick_sends.len(), 2);
        let events = fixture.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            IrcEvent::Numeric {
                code: 433,
                response: Some(Response::ERR_NICKNAMEINUSE),
                ..
            }
        ));
    }

    #[test]
    fn test_action_is_not_a_message() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b":irc.test 001 alpha :Welcome\r\n");
        fixture.feed(b":nick!user@host PRIVMSG #chan :\x01ACTION waves\x01\r\n");

        let events = fixture.events();
        assert_eq!(
            events[1],
            IrcEvent::Action {
                who: "nick".to_owned(),
                to: "#chan".to_owned(),
                text: "waves".to_owned(),
            }
        );
        assert!(!events
            .iter()
            .any(|e| matches!(e, IrcEvent::Message { .. })));
    }

    #[test]
    fn test_plain_privmsg() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b":someone!u@h PRIVMSG alpha :hello there\r\n");
        assert_eq!(
            fixture.events(),
            vec![IrcEvent::Message {
                who: "someone".to_owned(),
                to: "alpha".to_owned(),
                text: "hello there".to_owned(),
            }]
        );
    }

    #[test]
    fn test_ping_answered_automatically() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b"PING :token123\r\n");
        assert!(fixture.sent_lines().contains(&"PONG :token123".to_owned()));
        assert_eq!(
            fixture.events(),
            vec![IrcEvent::Ping {
                token: Some("token123".to_owned())
            }]
        );
    }

    #[test]
    fn test_chunked_lines_reassemble() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b":someone!u@h PRIV");
        assert!(fixture.events().is_empty());
        fixture.feed(b"MSG alpha :split");
        fixture.feed(b" message\r\n:x!u@h JOIN #chan\r\n");

        assert_eq!(
            fixture.events(),
            vec![
                IrcEvent::Message {
                    who: "someone".to_owned(),
                    to: "alpha".to_owned(),
                    text: "split message".to_owned(),
                },
                IrcEvent::Joined {
                    channel: "#chan".to_owned(),
                    who: "x".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_own_nick_change_tracked() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b":irc.test 001 alpha :Welcome\r\n");
        fixture.feed(b":alpha!guest@host NICK :omega\r\n");
        assert_eq!(fixture.client.nick(), "omega");

        // Someone else's change does not touch ours.
        fixture.feed(b":stranger!u@h NICK :renamed\r\n");
        assert_eq!(fixture.client.nick(), "omega");
    }

    #[test]
    fn test_channel_lifecycle_events() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b":a!u@h JOIN #room\r\n");
        fixture.feed(b":a!u@h TOPIC #room :new topic\r\n");
        fixture.feed(b":op!u@h MODE #room +o alpha\r\n");
        fixture.feed(b":op!u@h KICK #room a :flooding\r\n");
        fixture.feed(b":a!u@h PART #room :bye\r\n");
        fixture.feed(b":a!u@h QUIT :gone\r\n");
        fixture.feed(b":op!u@h INVITE alpha #room\r\n");
        fixture.feed(b":oper!u@h WALLOPS :maintenance soon\r\n");

        assert_eq!(
            fixture.events(),
            vec![
                IrcEvent::Joined {
                    channel: "#room".into(),
                    who: "a".into()
                },
                IrcEvent::TopicChanged {
                    channel: "#room".into(),
                    topic: "new topic".into(),
                    who: "a".into()
                },
                IrcEvent::ModeChanged {
                    target: "#room".into(),
                    mode: "+o".into(),
                    params: vec!["alpha".into()],
                    who: "op".into()
                },
                IrcEvent::Kicked {
                    channel: "#room".into(),
                    victim: "a".into(),
                    reason: Some("flooding".into()),
                    who: "op".into()
                },
                IrcEvent::Parted {
                    channel: "#room".into(),
                    message: Some("bye".into()),
                    who: "a".into()
                },
                IrcEvent::Quit {
                    message: Some("gone".into()),
                    who: "a".into()
                },
                IrcEvent::Invited {
                    channel: "#room".into(),
                    who: "op".into()
                },
                IrcEvent::Wallops {
                    message: "maintenance soon".into(),
                    who: "oper".into()
                },
            ]
        );
    }

    #[test]
    fn test_unknown_numeric_is_generic_event() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b":irc.test 372 alpha :- some motd line\r\n");
        assert_eq!(
            fixture.events(),
            vec![IrcEvent::Numeric {
                code: 372,
                response: Some(Response::RPL_MOTD),
                params: vec!["alpha".into(), "- some motd line".into()],
                from: Some("irc.test".into()),
            }]
        );
    }

    #[test]
    fn test_malformed_line_is_dropped() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.feed(b"12 not-a-command\r\n");
        fixture.feed(b":only-a-prefix\r\n");
        assert!(fixture.events().is_empty());

        // The connection keeps working afterwards.
        fixture.feed(b"PING :still-alive\r\n");
        assert_eq!(fixture.events().len(), 1);
    }

    #[test]
    fn test_outbound_command_formatting() {
        let mut fixture = Fixture::new(&["alpha"], None);
        fixture.written.borrow_mut().clear();

        let mut session = fixture.client.session();
        session.send_message("#chan", "hi");
        session.send_notice("bob", "psst");
        session.send_action("#chan", "waves");
        session.kick("troll", "#chan", Some("enough"));
        session.join_channel("#secret", Some("hunter2"));
        session.part_channel("#chan", None);
        session.set_topic("#chan", "fresh topic");
        session.set_mode("#chan", "+o", &["bob"]);
        session.invite("bob", "#chan");
        session.whois("bob", None);
        session.quit(Some("bye"));

        assert_eq!(
            fixture.sent_lines(),
            vec![
                "PRIVMSG #chan :hi",
                "NOTICE bob :psst",
                "PRIVMSG #chan :\x01ACTION waves\x01",
                "KICK #chan troll :enough",
                "JOIN #secret hunter2",
                "PART #chan",
                "TOPIC #chan :fresh topic",
                "MODE #chan +o bob",
                "INVITE bob #chan",
                "WHOIS bob",
                "QUIT :bye",
            ]
        );
    }

    #[test]
    fn test_connecting_failed_surfaces_event() {
        let config = ClientConfig::new("irc.test", vec!["alpha".into()], "guest");
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut client = IrcClient::new(
            config,
            Collect {
                events: events.clone(),
            },
        )
        .unwrap();

        client.connecting_failed(crate::net::ERROR_TIMEOUT);
        assert_eq!(
            events.borrow().as_slice(),
            &[IrcEvent::ConnectingFailed {
                reason: "timeout".to_owned()
            }]
        );
    }

    #[test]
    fn test_disconnect_from_handler_defers() {
        struct QuitOnMessage;
        impl EventHandler for QuitOnMessage {
            fn on_event(&mut self, session: &mut Session<'_>, event: IrcEvent) {
                if matches!(event, IrcEvent::Message { .. }) {
                    session.disconnect();
                }
            }
        }

        let config = ClientConfig::new("irc.test", vec!["alpha".into()], "guest");
        let mut reactor = Reactor::new();
        let mut client = IrcClient::new(config, QuitOnMessage).unwrap();

        let written = Rc::new(RefCell::new(Vec::new()));
        let transport = MockTransport {
            written,
            closed: false,
        };
        let mut ctx = Ctx::new(&mut reactor, 9999);
        client.connection_established(&mut ctx, Box::new(transport));

        // Two messages in one read: the second line is not delivered
        // once the handler asked to disconnect.
        let mut ctx = Ctx::new(&mut reactor, 9999);
        client.data_received(
            &mut ctx,
            b":a!u@h PRIVMSG alpha :bye\r\n:b!u@h PRIVMSG alpha :late\r\n",
        );
        assert!(!client.state.wants_disconnect);
    }
}
