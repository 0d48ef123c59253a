use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use crate::channel::structs::channel_sender::ChannelSender;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::codec::enums::message_id::MessageId;
use crate::dispatcher::enums::dispatch_error::DispatchError;
use crate::dispatcher::structs::session::Session;
use crate::host::traits::cluster_host::ClusterHost;

/// Handles the body of one message.
pub type Handler = fn(&mut Dispatcher, &[u8]) -> Result<(), DispatchError>;

pub struct Dispatcher {
    pub session: Session,
    pub handlers: HashMap<MessageId, Handler>,
    pub host: Arc<dyn ClusterHost>,
    pub sender: ChannelSender,
    pub events: UnboundedSender<ClusterEvent>,
}
