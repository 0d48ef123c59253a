use parking_lot::Mutex;
use tokio::sync::watch;
use crate::channel::enums::transport_error::TransportError;
use crate::channel::structs::channel_control::ChannelControl;

impl ChannelControl {
    pub fn new() -> ChannelControl {
        let (shutdown, _) = watch::channel(false);
        ChannelControl {
            shutdown,
            failure: Mutex::new(None),
        }
    }

    /// Receiver to hand to a task. Subscribe before spawning so an early stop
    /// is not missed.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shutdown.subscribe()
    }

    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }

    /// Records `error` unless an earlier failure is already recorded, then
    /// stops the channel.
    pub fn fail(&self, error: TransportError) {
        self.failure.lock().get_or_insert(error);
        self.stop();
    }

    pub fn take_failure(&self) -> Option<TransportError> {
        self.failure.lock().take()
    }

    pub fn is_stopped(&self) -> bool {
        *self.shutdown.borrow()
    }
}

impl Default for ChannelControl {
    fn default() -> Self {
        Self::new()
    }
}
