use crate::codec::enums::framing_error::FramingError;
use crate::codec::structs::frame::Frame;

/// Consumer of the frames read by a control channel. All calls happen on the
/// channel's receive task, in order.
pub trait FrameSink: Send + 'static {
    /// The connection is up and the writer task is running.
    fn on_open(&mut self);

    /// A framing error closes the channel; anything else must be handled by
    /// the sink itself.
    fn on_frame(&mut self, frame: Frame) -> Result<(), FramingError>;

    /// The receive loop has ended, for whatever reason.
    fn on_close(&mut self);
}
