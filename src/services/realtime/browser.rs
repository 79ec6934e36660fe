// ============================================================================
// BROWSER TRANSPORTS - web_sys::WebSocket and HTTP long-polling
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};
use yew::Callback;

use super::packet::{split_payload, EnginePacket, RECORD_SEPARATOR};
use super::transport::{Connector, RealtimeError, Transport, TransportEvent, TransportKind};

/// Pause before re-polling after an empty answer
const POLL_IDLE_DELAY_MS: u32 = 50;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConnector;

impl Connector for BrowserConnector {
    fn connect(
        &self,
        kind: TransportKind,
        url: &str,
        events: Callback<TransportEvent>,
    ) -> Result<Box<dyn Transport>, RealtimeError> {
        match kind {
            TransportKind::WebSocket => Ok(Box::new(WebSocketTransport::connect(url, events)?)),
            TransportKind::Polling => Ok(Box::new(PollingTransport::connect(url, events))),
        }
    }
}

pub struct WebSocketTransport {
    socket: WebSocket,
    // Kept alive for as long as the socket can fire them
    _onopen: Closure<dyn FnMut(Event)>,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(Event)>,
    _onclose: Closure<dyn FnMut(CloseEvent)>,
}

impl WebSocketTransport {
    pub fn connect(url: &str, events: Callback<TransportEvent>) -> Result<Self, RealtimeError> {
        let socket = WebSocket::new(url)
            .map_err(|e| RealtimeError::Transport(format!("could not create WebSocket: {:?}", e)))?;

        let onopen = {
            let events = events.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                events.emit(TransportEvent::Open);
            }) as Box<dyn FnMut(Event)>)
        };

        let onmessage = {
            let events = events.clone();
            Closure::wrap(Box::new(move |e: MessageEvent| {
                if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
                    events.emit(TransportEvent::Frame(String::from(text)));
                }
            }) as Box<dyn FnMut(MessageEvent)>)
        };

        let onerror = {
            let events = events.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                events.emit(TransportEvent::Error("websocket error".to_string()));
            }) as Box<dyn FnMut(Event)>)
        };

        let onclose = Closure::wrap(Box::new(move |e: CloseEvent| {
            let reason = if e.reason().is_empty() {
                format!("closed with code {}", e.code())
            } else {
                e.reason()
            };
            events.emit(TransportEvent::Close(reason));
        }) as Box<dyn FnMut(CloseEvent)>);

        socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _onopen: onopen,
            _onmessage: onmessage,
            _onerror: onerror,
            _onclose: onclose,
        })
    }
}

impl Transport for WebSocketTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::WebSocket
    }

    fn send(&self, frame: String) -> Result<(), RealtimeError> {
        self.socket
            .send_with_str(&frame)
            .map_err(|e| RealtimeError::Transport(format!("send failed: {:?}", e)))
    }

    fn close(&self) {
        // Detach first: the closures are freed with `self`
        self.socket.set_onopen(None);
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        self.socket.set_onclose(None);
        let _ = self.socket.close();
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.close();
    }
}

/// Outgoing frames of a polling session. Engine.IO allows one POST in
/// flight per session, so frames sent meanwhile wait and go out together
/// as the next batch.
#[derive(Debug, Default)]
struct WriteQueue {
    pending: Vec<String>,
    in_flight: bool,
}

impl WriteQueue {
    fn push(&mut self, frame: String) {
        self.pending.push(frame);
    }

    /// Payload for the next POST, if none is in flight
    fn next_batch(&mut self) -> Option<String> {
        if self.in_flight || self.pending.is_empty() {
            return None;
        }
        self.in_flight = true;
        let frames: Vec<String> = self.pending.drain(..).collect();
        Some(frames.join(&RECORD_SEPARATOR.to_string()))
    }

    fn complete(&mut self) {
        self.in_flight = false;
    }
}

struct PollState {
    url: String,
    sid: RefCell<Option<String>>,
    closed: Cell<bool>,
    writes: RefCell<WriteQueue>,
    events: Callback<TransportEvent>,
}

impl PollState {
    fn session_url(&self) -> String {
        match self.sid.borrow().as_ref() {
            Some(sid) => format!("{}&sid={}", self.url, sid),
            None => self.url.clone(),
        }
    }
}

/// Engine.IO long-polling: at most one GET and one POST in flight
pub struct PollingTransport {
    state: Rc<PollState>,
}

impl PollingTransport {
    pub fn connect(url: &str, events: Callback<TransportEvent>) -> Self {
        let state = Rc::new(PollState {
            url: url.to_string(),
            sid: RefCell::new(None),
            closed: Cell::new(false),
            writes: RefCell::new(WriteQueue::default()),
            events,
        });
        wasm_bindgen_futures::spawn_local(poll_loop(state.clone()));
        Self { state }
    }
}

async fn poll_loop(state: Rc<PollState>) {
    let mut opened = false;
    while !state.closed.get() {
        let body = match Request::get(&state.session_url()).send().await {
            Ok(response) if response.ok() => match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    report(&state, TransportEvent::Error(format!("poll read failed: {}", e)));
                    return;
                }
            },
            Ok(response) => {
                report(&state, TransportEvent::Error(format!("poll HTTP {}", response.status())));
                return;
            }
            Err(e) => {
                report(&state, TransportEvent::Error(format!("poll failed: {}", e)));
                return;
            }
        };

        if state.closed.get() {
            return;
        }

        if body.is_empty() {
            TimeoutFuture::new(POLL_IDLE_DELAY_MS).await;
            continue;
        }

        for raw in split_payload(&body) {
            if let Ok(EnginePacket::Open(handshake)) = EnginePacket::decode(raw) {
                *state.sid.borrow_mut() = Some(handshake.sid);
                if !opened {
                    opened = true;
                    report(&state, TransportEvent::Open);
                }
            }
            let closing = raw == "1";
            report(&state, TransportEvent::Frame(raw.to_string()));
            if closing {
                state.closed.set(true);
                return;
            }
        }
    }
}

fn report(state: &PollState, event: TransportEvent) {
    if !state.closed.get() {
        state.events.emit(event);
    }
}

fn enqueue(state: &Rc<PollState>, frame: String) {
    state.writes.borrow_mut().push(frame);
    flush(state.clone());
}

/// Sends the queued frames unless a POST is already running; the running
/// one flushes again when it completes.
fn flush(state: Rc<PollState>) {
    let Some(payload) = state.writes.borrow_mut().next_batch() else {
        return;
    };
    let url = state.session_url();
    wasm_bindgen_futures::spawn_local(async move {
        let result = match Request::post(&url)
            .header("Content-Type", "text/plain;charset=UTF-8")
            .body(payload)
        {
            Ok(request) => request.send().await.map_err(|e| format!("post failed: {}", e)),
            Err(e) => Err(format!("post build failed: {}", e)),
        };
        match result {
            Ok(response) if response.ok() => {}
            Ok(response) => report(&state, TransportEvent::Error(format!("post HTTP {}", response.status()))),
            Err(reason) => report(&state, TransportEvent::Error(reason)),
        }
        state.writes.borrow_mut().complete();
        flush(state);
    });
}

impl Transport for PollingTransport {
    fn kind(&self) -> TransportKind {
        TransportKind::Polling
    }

    fn send(&self, frame: String) -> Result<(), RealtimeError> {
        if self.state.closed.get() {
            return Err(RealtimeError::Transport("polling transport closed".to_string()));
        }
        if self.state.sid.borrow().is_none() {
            return Err(RealtimeError::Transport("polling session not open yet".to_string()));
        }
        enqueue(&self.state, frame);
        Ok(())
    }

    fn close(&self) {
        if self.state.closed.replace(true) {
            return;
        }
        if self.state.sid.borrow().is_some() {
            // best effort: tell the server we are going away
            enqueue(&self.state, EnginePacket::Close.encode());
        }
    }
}
