// ============================================================================
// REALTIME CONNECTION - One Socket.IO session over a negotiated transport
// ============================================================================
// WebSocket first; if it fails before the engine handshake, the connection
// retries once over HTTP long-polling. Nothing here returns an error to the
// caller: failures are logged and show up in `state()`.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use serde_json::Value;
use yew::Callback;

use super::packet::{EnginePacket, SocketPacket};
use super::transport::{endpoint_url, Connector, Transport, TransportEvent, TransportKind};

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
    Failed(String),
}

impl ConnectionState {
    /// Connecting or connected: the connection may still be reused
    pub fn is_live(&self) -> bool {
        matches!(self, ConnectionState::Connecting | ConnectionState::Connected)
    }
}

pub struct RealtimeConnection {
    base_url: String,
    token: String,
    connector: Rc<dyn Connector>,
    this: Weak<RealtimeConnection>,
    transport: RefCell<Option<Box<dyn Transport>>>,
    // bumped on every (re)start so late events from a dropped transport are ignored
    generation: Cell<u32>,
    engine_open: Cell<bool>,
    state: RefCell<ConnectionState>,
    listeners: RefCell<HashMap<String, Vec<Callback<Value>>>>,
    state_listeners: RefCell<Vec<Callback<ConnectionState>>>,
    outbox: RefCell<Vec<String>>,
}

impl RealtimeConnection {
    /// Creates the connection and starts the WebSocket attempt
    pub fn open(base_url: &str, token: &str, connector: Rc<dyn Connector>) -> Rc<Self> {
        let connection = Rc::new_cyclic(|this| RealtimeConnection {
            base_url: base_url.to_string(),
            token: token.to_string(),
            connector,
            this: this.clone(),
            transport: RefCell::new(None),
            generation: Cell::new(0),
            engine_open: Cell::new(false),
            state: RefCell::new(ConnectionState::Connecting),
            listeners: RefCell::new(HashMap::new()),
            state_listeners: RefCell::new(Vec::new()),
            outbox: RefCell::new(Vec::new()),
        });
        log::info!("🔌 Realtime connecting to {}", base_url);
        connection.start(TransportKind::WebSocket);
        connection
    }

    pub fn state(&self) -> ConnectionState {
        self.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        *self.state.borrow() == ConnectionState::Connected
    }

    /// Token the connection authenticated with
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn transport_kind(&self) -> Option<TransportKind> {
        self.transport.borrow().as_ref().map(|t| t.kind())
    }

    /// Subscribes to a server event
    pub fn on(&self, event: &str, callback: Callback<Value>) {
        self.listeners
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(callback);
    }

    pub fn off(&self, event: &str) {
        self.listeners.borrow_mut().remove(event);
    }

    pub fn on_state_change(&self, callback: Callback<ConnectionState>) {
        self.state_listeners.borrow_mut().push(callback);
    }

    /// Sends an event; queued until the namespace connect is acknowledged
    pub fn emit(&self, event: &str, data: Value) {
        let frame = SocketPacket::Event {
            name: event.to_string(),
            data,
        }
        .to_frame();

        if self.is_connected() {
            self.send(frame);
        } else if self.state.borrow().is_live() {
            self.outbox.borrow_mut().push(frame);
        } else {
            log::warn!("⚠️ Realtime: dropping '{}' on a closed connection", event);
        }
    }

    /// Tears the connection down. Idempotent.
    pub fn close(&self) {
        if !self.state.borrow().is_live() && self.transport.borrow().is_none() {
            return;
        }
        if self.is_connected() {
            self.send(SocketPacket::Disconnect.to_frame());
        }
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(transport) = self.transport.borrow_mut().take() {
            transport.close();
        }
        self.outbox.borrow_mut().clear();
        self.set_state(ConnectionState::Disconnected);
        log::info!("🔌 Realtime disconnected");
    }

    fn start(&self, kind: TransportKind) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.engine_open.set(false);

        let events = {
            let this = self.this.clone();
            Callback::from(move |event: TransportEvent| {
                if let Some(connection) = this.upgrade() {
                    if connection.generation.get() == generation {
                        connection.handle(event);
                    }
                }
            })
        };

        let url = endpoint_url(&self.base_url, kind);
        match self.connector.connect(kind, &url, events) {
            Ok(transport) => {
                *self.transport.borrow_mut() = Some(transport);
            }
            Err(e) => {
                log::warn!("⚠️ Realtime {} transport unavailable: {}", kind.as_str(), e);
                self.fail_or_fall_back(kind, e.to_string());
            }
        }
    }

    fn fail_or_fall_back(&self, kind: TransportKind, reason: String) {
        if kind == TransportKind::WebSocket {
            log::info!("🔁 Realtime falling back to polling");
            if let Some(old) = self.transport.borrow_mut().take() {
                old.close();
            }
            self.start(TransportKind::Polling);
        } else {
            log::error!("❌ Realtime connection failed: {}", reason);
            if let Some(old) = self.transport.borrow_mut().take() {
                old.close();
            }
            self.set_state(ConnectionState::Failed(reason));
        }
    }

    fn handle(&self, event: TransportEvent) {
        match event {
            TransportEvent::Open => {
                log::debug!("Realtime transport open ({:?})", self.transport_kind());
            }
            TransportEvent::Frame(frame) => self.handle_frame(&frame),
            TransportEvent::Error(reason) | TransportEvent::Close(reason) => {
                let kind = self.transport_kind().unwrap_or(TransportKind::Polling);
                let before_handshake = !self.engine_open.get();
                if *self.state.borrow() == ConnectionState::Connecting && before_handshake {
                    self.fail_or_fall_back(kind, reason);
                } else if self.state.borrow().is_live() {
                    log::warn!("⚠️ Realtime connection lost: {}", reason);
                    if let Some(old) = self.transport.borrow_mut().take() {
                        old.close();
                    }
                    self.set_state(ConnectionState::Disconnected);
                }
            }
        }
    }

    fn handle_frame(&self, frame: &str) {
        let packet = match EnginePacket::decode(frame) {
            Ok(packet) => packet,
            Err(e) => {
                log::warn!("⚠️ Realtime: ignoring frame '{}': {}", frame, e);
                return;
            }
        };

        match packet {
            EnginePacket::Open(handshake) => {
                log::debug!("Realtime engine open, sid {}", handshake.sid);
                self.engine_open.set(true);
                self.send(SocketPacket::connect_with_token(&self.token).to_frame());
            }
            EnginePacket::Ping => self.send(EnginePacket::Pong.encode()),
            EnginePacket::Close => {
                self.handle(TransportEvent::Close("server closed the session".to_string()))
            }
            EnginePacket::Message(body) => match SocketPacket::decode(&body) {
                Ok(packet) => self.handle_socket_packet(packet),
                Err(e) => log::warn!("⚠️ Realtime: bad socket packet '{}': {}", body, e),
            },
            EnginePacket::Pong | EnginePacket::Upgrade | EnginePacket::Noop => {}
        }
    }

    fn handle_socket_packet(&self, packet: SocketPacket) {
        match packet {
            SocketPacket::Connect(_) => {
                log::info!("🟢 Realtime connected");
                self.set_state(ConnectionState::Connected);
                let queued: Vec<String> = self.outbox.borrow_mut().drain(..).collect();
                for frame in queued {
                    self.send(frame);
                }
            }
            SocketPacket::ConnectError(message) => {
                log::error!("❌ Realtime rejected: {}", message);
                if let Some(old) = self.transport.borrow_mut().take() {
                    old.close();
                }
                self.set_state(ConnectionState::Failed(message));
            }
            SocketPacket::Disconnect => {
                log::info!("🔌 Realtime disconnected by server");
                if let Some(old) = self.transport.borrow_mut().take() {
                    old.close();
                }
                self.set_state(ConnectionState::Disconnected);
            }
            SocketPacket::Event { name, data } => {
                let callbacks = self
                    .listeners
                    .borrow()
                    .get(&name)
                    .cloned()
                    .unwrap_or_default();
                if callbacks.is_empty() {
                    log::debug!("Realtime event '{}' has no listeners", name);
                }
                for callback in callbacks {
                    callback.emit(data.clone());
                }
            }
        }
    }

    fn send(&self, frame: String) {
        let result = match self.transport.borrow().as_ref() {
            Some(transport) => transport.send(frame),
            None => return,
        };
        if let Err(e) = result {
            log::error!("❌ Realtime send failed: {}", e);
        }
    }

    fn set_state(&self, state: ConnectionState) {
        if *self.state.borrow() == state {
            return;
        }
        *self.state.borrow_mut() = state.clone();
        let listeners = self.state_listeners.borrow().clone();
        for listener in listeners {
            listener.emit(state.clone());
        }
    }
}

impl Drop for RealtimeConnection {
    fn drop(&mut self) {
        if let Some(transport) = self.transport.get_mut().take() {
            transport.close();
        }
    }
}
