use thiserror::Error;
use yew::Callback;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RealtimeError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("protocol error: {0}")]
    Protocol(#[from] super::packet::ProtocolError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Preferred, low latency
    WebSocket,
    /// HTTP long-polling fallback
    Polling,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::WebSocket => "websocket",
            TransportKind::Polling => "polling",
        }
    }
}

/// What a transport reports back to its connection
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    Open,
    /// One engine packet, still encoded
    Frame(String),
    Close(String),
    Error(String),
}

pub trait Transport {
    fn kind(&self) -> TransportKind;
    /// Sends one encoded engine packet
    fn send(&self, frame: String) -> Result<(), RealtimeError>;
    /// Stops delivering events and releases the underlying socket
    fn close(&self);
}

/// Opens transports. The browser implementation lives in `browser.rs`;
/// tests plug in a recording fake.
pub trait Connector {
    fn connect(
        &self,
        kind: TransportKind,
        url: &str,
        events: Callback<TransportEvent>,
    ) -> Result<Box<dyn Transport>, RealtimeError>;
}

/// `{base}/socket.io/?EIO=4&transport=...`, with ws(s) for WebSocket
pub fn endpoint_url(base: &str, kind: TransportKind) -> String {
    let base = base.trim_end_matches('/');
    let base = match kind {
        TransportKind::WebSocket => {
            if let Some(rest) = base.strip_prefix("https://") {
                format!("wss://{}", rest)
            } else if let Some(rest) = base.strip_prefix("http://") {
                format!("ws://{}", rest)
            } else {
                base.to_string()
            }
        }
        TransportKind::Polling => {
            if let Some(rest) = base.strip_prefix("wss://") {
                format!("https://{}", rest)
            } else if let Some(rest) = base.strip_prefix("ws://") {
                format!("http://{}", rest)
            } else {
                base.to_string()
            }
        }
    };
    format!("{}/socket.io/?EIO=4&transport={}", base, kind.as_str())
}
