// ============================================================================
// CONNECTION MANAGER - Owner of the (at most one) live realtime connection
// ============================================================================
// Lives in the application context and is handed to whoever needs realtime
// access. `open` reuses a connection that is still connecting, so concurrent
// callers during the handshake never create a second socket.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use super::browser::BrowserConnector;
use super::connection::RealtimeConnection;
use super::transport::Connector;
use crate::config::CONFIG;

#[derive(Clone)]
pub struct ConnectionManager {
    base_url: String,
    connector: Rc<dyn Connector>,
    current: Rc<RefCell<Option<Rc<RealtimeConnection>>>>,
}

impl ConnectionManager {
    pub fn new(base_url: impl Into<String>, connector: Rc<dyn Connector>) -> Self {
        Self {
            base_url: base_url.into(),
            connector,
            current: Rc::new(RefCell::new(None)),
        }
    }

    /// Manager for the configured realtime server, using browser transports
    pub fn from_config() -> Self {
        Self::new(CONFIG.socket_url.clone(), Rc::new(BrowserConnector))
    }

    /// Returns the live connection, or opens a new one authenticated with `token`.
    ///
    /// A live connection is returned as-is even when `token` differs from the
    /// one it was opened with; call [`close`](Self::close) first to re-key.
    pub fn open(&self, token: &str) -> Rc<RealtimeConnection> {
        if let Some(existing) = self.live() {
            if existing.token() != token {
                log::warn!("⚠️ Realtime: token changed, keeping the existing connection until close()");
            }
            return existing;
        }

        let connection = RealtimeConnection::open(&self.base_url, token, self.connector.clone());
        *self.current.borrow_mut() = Some(connection.clone());
        connection
    }

    /// Closes and forgets the current connection; no-op when there is none
    pub fn close(&self) {
        let connection = self.current.borrow_mut().take();
        if let Some(connection) = connection {
            connection.close();
        }
    }

    /// Current connection, live or not
    pub fn current(&self) -> Option<Rc<RealtimeConnection>> {
        self.current.borrow().clone()
    }

    fn live(&self) -> Option<Rc<RealtimeConnection>> {
        self.current
            .borrow()
            .as_ref()
            .filter(|c| c.state().is_live())
            .cloned()
    }
}

impl PartialEq for ConnectionManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::realtime::connection::ConnectionState;
    use crate::services::realtime::transport::{
        RealtimeError, Transport, TransportEvent, TransportKind,
    };
    use serde_json::{json, Value};
    use std::cell::Cell;
    use yew::Callback;

    #[derive(Default)]
    struct Wire {
        sent: RefCell<Vec<String>>,
        closed: Cell<bool>,
    }

    struct FakeTransport {
        kind: TransportKind,
        wire: Rc<Wire>,
    }

    impl Transport for FakeTransport {
        fn kind(&self) -> TransportKind {
            self.kind
        }

        fn send(&self, frame: String) -> Result<(), RealtimeError> {
            self.wire.sent.borrow_mut().push(frame);
            Ok(())
        }

        fn close(&self) {
            self.wire.closed.set(true);
        }
    }

    struct Attempt {
        kind: TransportKind,
        url: String,
        events: Callback<TransportEvent>,
        wire: Rc<Wire>,
    }

    #[derive(Default)]
    struct FakeConnector {
        attempts: RefCell<Vec<Attempt>>,
        refuse_websocket: Cell<bool>,
    }

    impl FakeConnector {
        fn last(&self) -> (Callback<TransportEvent>, Rc<Wire>) {
            let attempts = self.attempts.borrow();
            let attempt = attempts.last().expect("no connection attempt");
            (attempt.events.clone(), attempt.wire.clone())
        }

        fn count(&self) -> usize {
            self.attempts.borrow().len()
        }
    }

    impl Connector for FakeConnector {
        fn connect(
            &self,
            kind: TransportKind,
            url: &str,
            events: Callback<TransportEvent>,
        ) -> Result<Box<dyn Transport>, RealtimeError> {
            if kind == TransportKind::WebSocket && self.refuse_websocket.get() {
                return Err(RealtimeError::Transport("WebSocket unsupported".into()));
            }
            let wire = Rc::new(Wire::default());
            self.attempts.borrow_mut().push(Attempt {
                kind,
                url: url.to_string(),
                events,
                wire: wire.clone(),
            });
            Ok(Box::new(FakeTransport { kind, wire }))
        }
    }

    fn manager() -> (ConnectionManager, Rc<FakeConnector>) {
        let connector = Rc::new(FakeConnector::default());
        let manager = ConnectionManager::new("http://localhost:5000", connector.clone());
        (manager, connector)
    }

    fn handshake(events: &Callback<TransportEvent>) {
        events.emit(TransportEvent::Open);
        events.emit(TransportEvent::Frame(
            r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#.into(),
        ));
        events.emit(TransportEvent::Frame(r#"40{"sid":"xyz"}"#.into()));
    }

    #[test]
    fn second_open_reuses_connected_instance() {
        let (manager, connector) = manager();
        let first = manager.open("tok");
        let (events, _) = connector.last();
        handshake(&events);
        assert!(first.is_connected());

        let second = manager.open("tok");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(connector.count(), 1);
    }

    #[test]
    fn open_while_connecting_does_not_duplicate() {
        let (manager, connector) = manager();
        let first = manager.open("tok");
        let second = manager.open("tok");
        assert_eq!(first.state(), ConnectionState::Connecting);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(connector.count(), 1);
    }

    #[test]
    fn handshake_authenticates_with_token() {
        let (manager, connector) = manager();
        let connection = manager.open("secret");
        let (events, wire) = connector.last();
        {
            let attempts = connector.attempts.borrow();
            assert_eq!(attempts[0].kind, TransportKind::WebSocket);
            assert_eq!(
                attempts[0].url,
                "ws://localhost:5000/socket.io/?EIO=4&transport=websocket"
            );
        }

        let seen = Rc::new(RefCell::new(Vec::<ConnectionState>::new()));
        {
            let seen = seen.clone();
            connection.on_state_change(Callback::from(move |s: ConnectionState| seen.borrow_mut().push(s)));
        }

        handshake(&events);
        assert_eq!(wire.sent.borrow()[0], r#"40{"token":"secret"}"#);
        assert_eq!(*seen.borrow(), vec![ConnectionState::Connected]);
    }

    #[test]
    fn answers_ping_and_dispatches_events() {
        let (manager, connector) = manager();
        let connection = manager.open("tok");
        let (events, wire) = connector.last();
        handshake(&events);

        let received = Rc::new(RefCell::new(Vec::<Value>::new()));
        {
            let received = received.clone();
            connection.on(
                "notification",
                Callback::from(move |v: Value| received.borrow_mut().push(v)),
            );
        }

        events.emit(TransportEvent::Frame("2".into()));
        events.emit(TransportEvent::Frame(
            r#"42["notification",{"title":"Quiz graded"}]"#.into(),
        ));
        events.emit(TransportEvent::Frame(r#"42["other",1]"#.into()));

        assert_eq!(wire.sent.borrow().last().map(String::as_str), Some("3"));
        assert_eq!(*received.borrow(), vec![json!({"title": "Quiz graded"})]);
    }

    #[test]
    fn emits_are_queued_until_connected() {
        let (manager, connector) = manager();
        let connection = manager.open("tok");
        connection.emit("join", json!({"room": "cs101"}));
        let (events, wire) = connector.last();
        assert!(wire.sent.borrow().is_empty());

        handshake(&events);
        assert_eq!(
            *wire.sent.borrow(),
            vec![
                r#"40{"token":"tok"}"#.to_string(),
                r#"42["join",{"room":"cs101"}]"#.to_string(),
            ]
        );
    }

    #[test]
    fn websocket_error_before_handshake_falls_back_to_polling() {
        let (manager, connector) = manager();
        let connection = manager.open("tok");
        let (ws_events, ws_wire) = connector.last();
        ws_events.emit(TransportEvent::Error("refused".into()));

        assert!(ws_wire.closed.get());
        assert_eq!(connector.count(), 2);
        assert_eq!(connector.attempts.borrow()[1].kind, TransportKind::Polling);
        assert_eq!(connection.state(), ConnectionState::Connecting);

        // the dead socket's late close must not disturb the polling session
        ws_events.emit(TransportEvent::Close("1006".into()));
        assert_eq!(connector.count(), 2);

        let (events, _) = connector.last();
        handshake(&events);
        assert!(connection.is_connected());
        assert_eq!(connection.transport_kind(), Some(TransportKind::Polling));
    }

    #[test]
    fn unsupported_websocket_goes_straight_to_polling() {
        let (manager, connector) = manager();
        connector.refuse_websocket.set(true);
        let connection = manager.open("tok");
        assert_eq!(connection.transport_kind(), Some(TransportKind::Polling));
        assert_eq!(connector.count(), 1);
    }

    #[test]
    fn polling_failure_is_observable_not_raised() {
        let (manager, connector) = manager();
        let connection = manager.open("tok");
        let (ws_events, _) = connector.last();
        ws_events.emit(TransportEvent::Error("refused".into()));
        let (poll_events, _) = connector.last();
        poll_events.emit(TransportEvent::Error("HTTP 502".into()));

        assert_eq!(connection.state(), ConnectionState::Failed("HTTP 502".into()));

        // a failed connection is not reused
        let fresh = manager.open("tok");
        assert!(!Rc::ptr_eq(&connection, &fresh));
    }

    #[test]
    fn connect_error_marks_connection_failed() {
        let (manager, connector) = manager();
        let connection = manager.open("expired");
        let (events, wire) = connector.last();
        events.emit(TransportEvent::Frame(r#"0{"sid":"abc"}"#.into()));
        events.emit(TransportEvent::Frame(r#"44{"message":"Authentication error"}"#.into()));

        assert_eq!(
            connection.state(),
            ConnectionState::Failed("Authentication error".into())
        );
        assert!(wire.closed.get());
    }

    #[test]
    fn close_tears_down_and_allows_reopen() {
        let (manager, connector) = manager();
        let first = manager.open("tok");
        let (events, wire) = connector.last();
        handshake(&events);

        manager.close();
        assert!(wire.closed.get());
        assert_eq!(wire.sent.borrow().last().map(String::as_str), Some("41"));
        assert_eq!(first.state(), ConnectionState::Disconnected);
        assert!(manager.current().is_none());

        // closing again is a no-op
        manager.close();

        let second = manager.open("tok");
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(connector.count(), 2);
    }

    #[test]
    fn different_token_keeps_live_connection() {
        let (manager, _connector) = manager();
        let first = manager.open("old");
        let second = manager.open("new");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.token(), "old");
    }
}
