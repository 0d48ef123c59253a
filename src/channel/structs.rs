pub mod channel_control;
pub mod channel_exit;
pub mod channel_sender;
pub mod control_channel;
