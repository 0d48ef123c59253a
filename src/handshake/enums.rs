pub mod handshake_action;
pub mod handshake_input;
pub mod handshake_state;
pub mod protocol_error;
