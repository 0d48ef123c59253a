use log::debug;
use tokio::sync::mpsc::UnboundedSender;
use crate::channel::enums::transport_error::TransportError;
use crate::channel::structs::channel_sender::ChannelSender;
use crate::codec::enums::message_id::MessageId;
use crate::codec::structs::frame::Frame;

impl ChannelSender {
    pub fn new(server: String, queue: UnboundedSender<Vec<u8>>) -> ChannelSender {
        ChannelSender { server, queue }
    }

    /// Queues an encoded frame. Fails only once the writer task is gone.
    pub fn send_frame(&self, frame: &Frame) -> Result<(), TransportError> {
        let bytes = frame.to_bytes()?;
        debug!("[CHANNEL] Queue message {} ({} bytes) for {}", frame.message_id, frame.body.len(), self.server);
        self.queue.send(bytes).map_err(|_| TransportError::Closed)
    }

    pub fn send(&self, message_id: MessageId, body: Vec<u8>) -> Result<(), TransportError> {
        self.send_frame(&Frame::new(message_id, body))
    }

    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }
}
