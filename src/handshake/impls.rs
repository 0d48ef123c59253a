pub mod handshake_input;
pub mod handshake_state;
pub mod time_sync_data;
