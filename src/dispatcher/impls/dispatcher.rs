use std::sync::Arc;
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use crate::channel::structs::channel_sender::ChannelSender;
use crate::channel::traits::frame_sink::FrameSink;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::codec::enums::framing_error::FramingError;
use crate::codec::enums::message_id::MessageId;
use crate::codec::structs::frame::Frame;
use crate::dispatcher::dispatcher::default_handlers;
use crate::dispatcher::enums::dispatch_error::DispatchError;
use crate::dispatcher::structs::dispatcher::{Dispatcher, Handler};
use crate::dispatcher::structs::session::Session;
use crate::handshake::enums::handshake_action::HandshakeAction;
use crate::handshake::enums::handshake_input::HandshakeInput;
use crate::handshake::enums::protocol_error::ProtocolError;
use crate::handshake::handshake::{estimate_offset, handshake_init_body};
use crate::handshake::structs::time_sync_data::TimeSyncData;
use crate::host::traits::cluster_host::ClusterHost;

impl Dispatcher {
    pub fn new(session: Session, host: Arc<dyn ClusterHost>, sender: ChannelSender, events: UnboundedSender<ClusterEvent>) -> Dispatcher {
        Dispatcher {
            session,
            handlers: default_handlers(),
            host,
            sender,
            events,
        }
    }

    /// Replaces the handler for `message_id`.
    pub fn register(&mut self, message_id: MessageId, handler: Handler) {
        self.handlers.insert(message_id, handler);
    }

    /// Dispatches one frame. Compound frames are split and their blocks
    /// dispatched in wire order.
    #[tracing::instrument(level = "debug", skip(self, frame), fields(message_id = frame.message_id))]
    pub fn on_frame(&mut self, frame: Frame) -> Result<(), FramingError> {
        if frame.is_compound() {
            let blocks = frame.split_compound()?;
            debug!("[DISPATCH] Compound message with {} blocks", blocks.len());
            for block in blocks {
                self.dispatch(block.block_id, &block.body);
            }
        } else {
            self.dispatch(frame.message_id, &frame.body);
        }
        Ok(())
    }

    /// Runs the handler for one message and logs its failure.
    pub fn dispatch(&mut self, message_id: u32, body: &[u8]) {
        let result = match MessageId::from_u32(message_id) {
            None => Err(DispatchError::Protocol(ProtocolError::UnknownMessage(message_id))),
            Some(id) => match self.handlers.get(&id).copied() {
                Some(handler) => handler(self, body),
                None => Err(DispatchError::Protocol(ProtocolError::Unexpected {
                    state: self.session.state,
                    message: id.to_string(),
                })),
            },
        };

        if let Err(error) = result {
            warn!("[DISPATCH] {} from {}: {}", message_id, self.session.server(), error);
        }
    }

    /// Feeds `input` to the state machine and performs the resulting action.
    pub fn advance(&mut self, input: HandshakeInput) -> Result<(), DispatchError> {
        let (next, action) = self.session.state.transition(input)?;
        if next != self.session.state {
            debug!("[DISPATCH] {} -> {}", self.session.state, next);
            self.session.state = next;
            self.emit(ClusterEvent::StateChanged {
                server: self.session.server(),
                state: next,
            });
        }
        self.perform(action)
    }

    pub fn on_connected(&mut self) {
        for input in [HandshakeInput::Dialing, HandshakeInput::Connected] {
            if let Err(error) = self.advance(input) {
                warn!("[DISPATCH] Unable to start handshake with {}: {}", self.session.server(), error);
            }
        }
    }

    pub fn on_disconnected(&mut self) {
        if let Err(error) = self.advance(HandshakeInput::Disconnected) {
            warn!("[DISPATCH] {}", error);
        }
    }

    fn emit(&self, event: ClusterEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }

    fn perform(&mut self, action: HandshakeAction) -> Result<(), DispatchError> {
        match action {
            HandshakeAction::None | HandshakeAction::Close => {}
            HandshakeAction::SendHandshakeInit => {
                self.sender.send(MessageId::HandshakeInit, handshake_init_body(&self.session.node_name))?;
            }
            HandshakeAction::SendHandshakeForth => {
                self.sender.send(MessageId::HandshakeForth, Vec::new())?;
            }
            HandshakeAction::StartTimeSync => {
                info!("[DISPATCH] Handshake with {} complete", self.session.server());
                self.sender.send(MessageId::TimeSync, TimeSyncData::initial().to_bytes())?;
            }
            HandshakeAction::EchoTimeSync(data) => {
                self.sender.send(MessageId::TimeSync, data.to_bytes())?;
            }
            HandshakeAction::CompleteTimeSync(data) => self.complete_time_sync(&data)?,
            HandshakeAction::SetupViews(body) => match self.session.first_view() {
                Some(view) => view.set_setup_message(&body),
                None => debug!("[DISPATCH] Module graph setup received without a view"),
            },
            HandshakeAction::ConnectViews(name) => {
                info!("[DISPATCH] Views to connect to {}", name);
                let views = self.session.views();
                for view in views.iter() {
                    view.connect_view(&name);
                }
                if let Some(view) = views.first() {
                    view.request_camera_bootstrap();
                }
            }
            HandshakeAction::ApplyParameter { name, value } => {
                self.host.set_parameter(&name, &value).map_err(ProtocolError::from)?;
                debug!("[DISPATCH] Parameter {} updated", name);
            }
            HandshakeAction::ForwardCamera(body) => {
                if let Some(view) = self.session.first_view() {
                    view.deserialise_camera(&body);
                }
            }
        }
        Ok(())
    }

    fn complete_time_sync(&mut self, data: &TimeSyncData) -> Result<(), DispatchError> {
        let local_time = self.host.instance_time();
        let estimate = estimate_offset(data.samples(), local_time).ok_or_else(|| ProtocolError::MalformedBody {
            message: MessageId::TimeSync,
            reason: "no samples".to_string(),
        })?;

        self.host.offset_instance_time(estimate.offset);
        self.session.clock_offset += estimate.offset;
        info!(
            "[DISPATCH] Instance time offset from {:.3} to {:.3} based on remote time {:.3}",
            local_time,
            self.host.instance_time(),
            estimate.remote_time
        );

        info!("[DISPATCH] Cleaning up module graph");
        for view in self.session.views() {
            view.disconnect_view();
        }
        self.host.cleanup_module_graph();
        self.sender.send(MessageId::ModuleGraph, Vec::new())?;

        self.emit(ClusterEvent::TimeSynchronized {
            server: self.session.server(),
            estimate,
        });
        Ok(())
    }
}

impl FrameSink for Dispatcher {
    fn on_open(&mut self) {
        Dispatcher::on_connected(self);
    }

    fn on_frame(&mut self, frame: Frame) -> Result<(), FramingError> {
        Dispatcher::on_frame(self, frame)
    }

    fn on_close(&mut self) {
        Dispatcher::on_disconnected(self);
    }
}
