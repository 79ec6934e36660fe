//! Engine.IO v4 / Socket.IO v5 framing, the subset the client speaks.
//!
//! An engine packet is one type digit followed by its payload. Socket
//! packets travel inside engine `message` packets, hence frames like
//! `42["event",{...}]`.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Separates packets inside one HTTP long-polling payload
pub const RECORD_SEPARATOR: char = '\u{1e}';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("empty packet")]
    Empty,
    #[error("unknown packet type '{0}'")]
    UnknownType(char),
    #[error("bad payload: {0}")]
    BadPayload(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    #[serde(default)]
    pub ping_interval: u32,
    #[serde(default)]
    pub ping_timeout: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    Ping,
    Pong,
    Message(String),
    Upgrade,
    Noop,
}

impl EnginePacket {
    pub fn decode(frame: &str) -> Result<Self, ProtocolError> {
        let mut chars = frame.chars();
        let kind = chars.next().ok_or(ProtocolError::Empty)?;
        let payload = chars.as_str();
        match kind {
            '0' => serde_json::from_str(payload)
                .map(EnginePacket::Open)
                .map_err(|e| ProtocolError::BadPayload(e.to_string())),
            '1' => Ok(EnginePacket::Close),
            '2' => Ok(EnginePacket::Ping),
            '3' => Ok(EnginePacket::Pong),
            '4' => Ok(EnginePacket::Message(payload.to_string())),
            '5' => Ok(EnginePacket::Upgrade),
            '6' => Ok(EnginePacket::Noop),
            other => Err(ProtocolError::UnknownType(other)),
        }
    }

    /// Client-originated packets only; the client never sends `open`.
    pub fn encode(&self) -> String {
        match self {
            EnginePacket::Open(_) => "0".to_string(),
            EnginePacket::Close => "1".to_string(),
            EnginePacket::Ping => "2".to_string(),
            EnginePacket::Pong => "3".to_string(),
            EnginePacket::Message(body) => format!("4{}", body),
            EnginePacket::Upgrade => "5".to_string(),
            EnginePacket::Noop => "6".to_string(),
        }
    }
}

/// Splits a polling payload into its raw packets
pub fn split_payload(body: &str) -> impl Iterator<Item = &str> {
    body.split(RECORD_SEPARATOR).filter(|p| !p.is_empty())
}

pub fn decode_payload(body: &str) -> Result<Vec<EnginePacket>, ProtocolError> {
    split_payload(body).map(EnginePacket::decode).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SocketPacket {
    /// Client: auth payload. Server: `{ "sid": ... }`.
    Connect(Option<Value>),
    Disconnect,
    Event { name: String, data: Value },
    ConnectError(String),
}

impl SocketPacket {
    /// Connect to the default namespace with `{ "token": ... }` as auth
    pub fn connect_with_token(token: &str) -> Self {
        SocketPacket::Connect(Some(json!({ "token": token })))
    }

    pub fn decode(body: &str) -> Result<Self, ProtocolError> {
        let mut chars = body.chars();
        let kind = chars.next().ok_or(ProtocolError::Empty)?;
        let rest = skip_ack_id(skip_namespace(chars.as_str()));

        match kind {
            '0' => Ok(SocketPacket::Connect(parse_optional(rest)?)),
            '1' => Ok(SocketPacket::Disconnect),
            '2' => {
                let args: Vec<Value> = serde_json::from_str(rest)
                    .map_err(|e| ProtocolError::BadPayload(e.to_string()))?;
                let mut args = args.into_iter();
                let name = match args.next() {
                    Some(Value::String(name)) => name,
                    _ => return Err(ProtocolError::BadPayload("event without a name".into())),
                };
                let mut rest: Vec<Value> = args.collect();
                let data = match rest.len() {
                    0 => Value::Null,
                    1 => rest.remove(0),
                    _ => Value::Array(rest),
                };
                Ok(SocketPacket::Event { name, data })
            }
            '4' => {
                let message = match parse_optional(rest)? {
                    Some(Value::String(s)) => s,
                    Some(v) => v
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("connection refused")
                        .to_string(),
                    None => "connection refused".to_string(),
                };
                Ok(SocketPacket::ConnectError(message))
            }
            other => Err(ProtocolError::UnknownType(other)),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            SocketPacket::Connect(Some(auth)) => format!("0{}", auth),
            SocketPacket::Connect(None) => "0".to_string(),
            SocketPacket::Disconnect => "1".to_string(),
            SocketPacket::Event { name, data } => {
                let args = if data.is_null() {
                    json!([name])
                } else {
                    json!([name, data])
                };
                format!("2{}", args)
            }
            SocketPacket::ConnectError(message) => format!("4{}", json!({ "message": message })),
        }
    }

    /// Ready-to-send engine frame carrying this packet
    pub fn to_frame(&self) -> String {
        EnginePacket::Message(self.encode()).encode()
    }
}

fn parse_optional(rest: &str) -> Result<Option<Value>, ProtocolError> {
    if rest.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(rest)
        .map(Some)
        .map_err(|e| ProtocolError::BadPayload(e.to_string()))
}

// "/admin,..." -> "..."
fn skip_namespace(rest: &str) -> &str {
    if rest.starts_with('/') {
        match rest.find(',') {
            Some(idx) => &rest[idx + 1..],
            None => "",
        }
    } else {
        rest
    }
}

fn skip_ack_id(rest: &str) -> &str {
    rest.trim_start_matches(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_open_handshake() {
        let frame = r#"0{"sid":"lv_VI97HAXpY6yYWAAAC","upgrades":["websocket"],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#;
        match EnginePacket::decode(frame).unwrap() {
            EnginePacket::Open(h) => {
                assert_eq!(h.sid, "lv_VI97HAXpY6yYWAAAC");
                assert_eq!(h.upgrades, vec!["websocket".to_string()]);
                assert_eq!(h.ping_interval, 25000);
            }
            other => panic!("expected open, got {:?}", other),
        }
    }

    #[test]
    fn ping_and_unknown_types() {
        assert_eq!(EnginePacket::decode("2").unwrap(), EnginePacket::Ping);
        assert_eq!(EnginePacket::Pong.encode(), "3");
        assert_eq!(EnginePacket::decode(""), Err(ProtocolError::Empty));
        assert_eq!(EnginePacket::decode("9"), Err(ProtocolError::UnknownType('9')));
    }

    #[test]
    fn polling_payload_is_split_on_record_separator() {
        let body = "2\u{1e}42[\"tick\",1]\u{1e}6";
        let packets = decode_payload(body).unwrap();
        assert_eq!(
            packets,
            vec![
                EnginePacket::Ping,
                EnginePacket::Message("2[\"tick\",1]".to_string()),
                EnginePacket::Noop,
            ]
        );
    }

    #[test]
    fn connect_carries_token_auth() {
        assert_eq!(
            SocketPacket::connect_with_token("abc").to_frame(),
            r#"40{"token":"abc"}"#
        );
    }

    #[test]
    fn decodes_events_with_namespace_and_ack() {
        let packet = SocketPacket::decode(r#"2/chat,17["message",{"text":"hi"}]"#).unwrap();
        assert_eq!(
            packet,
            SocketPacket::Event {
                name: "message".to_string(),
                data: json!({"text": "hi"}),
            }
        );

        let multi = SocketPacket::decode(r#"2["scores",1,2]"#).unwrap();
        assert_eq!(
            multi,
            SocketPacket::Event { name: "scores".to_string(), data: json!([1, 2]) }
        );
    }

    #[test]
    fn encodes_events() {
        let packet = SocketPacket::Event {
            name: "join".to_string(),
            data: json!({"room": "cs101"}),
        };
        assert_eq!(packet.to_frame(), r#"42["join",{"room":"cs101"}]"#);
    }

    #[test]
    fn decodes_connect_error_message() {
        assert_eq!(
            SocketPacket::decode(r#"4{"message":"Authentication error"}"#).unwrap(),
            SocketPacket::ConnectError("Authentication error".to_string())
        );
        assert_eq!(
            SocketPacket::decode(r#"0{"sid":"abc"}"#).unwrap(),
            SocketPacket::Connect(Some(json!({"sid": "abc"})))
        );
    }

    #[test]
    fn event_without_name_is_rejected() {
        assert!(matches!(
            SocketPacket::decode("2[42]"),
            Err(ProtocolError::BadPayload(_))
        ));
    }
}
