use crate::channel::structs::channel_exit::ChannelExit;

impl ChannelExit {
    /// The channel ended because its owner closed it.
    pub fn requested(&self) -> bool {
        self.error.is_none()
    }
}
