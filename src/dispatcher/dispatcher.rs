use std::collections::HashMap;
use crate::codec::enums::message_id::MessageId;
use crate::dispatcher::enums::dispatch_error::DispatchError;
use crate::dispatcher::structs::dispatcher::{Dispatcher, Handler};
use crate::handshake::enums::handshake_input::HandshakeInput;
use crate::handshake::enums::protocol_error::ProtocolError;
use crate::handshake::structs::time_sync_data::TimeSyncData;

/// Handlers for every message the server sends to a client.
pub fn default_handlers() -> HashMap<MessageId, Handler> {
    let mut handlers: HashMap<MessageId, Handler> = HashMap::new();
    handlers.insert(MessageId::HandshakeBack, handle_handshake_back);
    handlers.insert(MessageId::HandshakeDone, handle_handshake_done);
    handlers.insert(MessageId::TimeSync, handle_time_sync);
    handlers.insert(MessageId::ModuleGraph, handle_module_graph);
    handlers.insert(MessageId::ViewConnect, handle_view_connect);
    handlers.insert(MessageId::ParamUpdate, handle_param_update);
    handlers.insert(MessageId::CameraUpdate, handle_camera_update);
    handlers
}

pub fn handle_handshake_back(dispatcher: &mut Dispatcher, _body: &[u8]) -> Result<(), DispatchError> {
    dispatcher.advance(HandshakeInput::HandshakeBack)
}

pub fn handle_handshake_done(dispatcher: &mut Dispatcher, _body: &[u8]) -> Result<(), DispatchError> {
    dispatcher.advance(HandshakeInput::HandshakeDone)
}

pub fn handle_time_sync(dispatcher: &mut Dispatcher, body: &[u8]) -> Result<(), DispatchError> {
    let data = TimeSyncData::parse(body)?;
    dispatcher.advance(HandshakeInput::TimeSync(data))
}

pub fn handle_module_graph(dispatcher: &mut Dispatcher, body: &[u8]) -> Result<(), DispatchError> {
    dispatcher.advance(HandshakeInput::ModuleGraph(body.to_vec()))
}

pub fn handle_view_connect(dispatcher: &mut Dispatcher, body: &[u8]) -> Result<(), DispatchError> {
    dispatcher.advance(HandshakeInput::ViewConnect(decode_view_name(body)))
}

pub fn handle_param_update(dispatcher: &mut Dispatcher, body: &[u8]) -> Result<(), DispatchError> {
    let (name, value) = parse_param_update(body)?;
    dispatcher.advance(HandshakeInput::ParamUpdate { name, value })
}

pub fn handle_camera_update(dispatcher: &mut Dispatcher, body: &[u8]) -> Result<(), DispatchError> {
    dispatcher.advance(HandshakeInput::CameraUpdate(body.to_vec()))
}

fn trim_nul(body: &[u8]) -> &[u8] {
    let end = body.iter().rposition(|b| *b != 0).map_or(0, |last| last + 1);
    &body[..end]
}

/// Name of the endpoint carried by `VIEWCONNECT`.
pub fn decode_view_name(body: &[u8]) -> String {
    String::from_utf8_lossy(trim_nul(body)).to_string()
}

/// Splits a `PARAMUPDATE` body `"<name>=<value>"` on the first `=`. The value
/// may itself contain `=`.
pub fn parse_param_update(body: &[u8]) -> Result<(String, String), ProtocolError> {
    let body = trim_nul(body);
    let malformed = |reason: &str| ProtocolError::MalformedBody {
        message: MessageId::ParamUpdate,
        reason: reason.to_string(),
    };

    let split = body.iter().position(|b| *b == b'=').ok_or_else(|| malformed("missing '='"))?;
    let name = std::str::from_utf8(&body[..split]).map_err(|_| malformed("parameter name is not valid UTF-8"))?;
    let value = std::str::from_utf8(&body[split + 1..]).map_err(|_| malformed("parameter value is not valid UTF-8"))?;
    if name.is_empty() {
        return Err(malformed("empty parameter name"));
    }

    Ok((name.to_string(), value.to_string()))
}
