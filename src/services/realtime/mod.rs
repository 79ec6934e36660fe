//! Realtime client: Socket.IO over WebSocket with a long-polling fallback.

pub mod browser;
pub mod connection;
pub mod manager;
pub mod packet;
pub mod transport;

pub use connection::{ConnectionState, RealtimeConnection};
pub use manager::ConnectionManager;
pub use transport::{Connector, RealtimeError, Transport, TransportEvent, TransportKind};
