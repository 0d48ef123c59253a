#[cfg(test)]
mod dispatcher_tests {
    use std::sync::Arc;
    use parking_lot::{Mutex, RwLock};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
    use crate::channel::structs::channel_sender::ChannelSender;
    use crate::client::enums::cluster_event::ClusterEvent;
    use crate::codec::enums::framing_error::FramingError;
    use crate::codec::enums::message_id::MessageId;
    use crate::codec::structs::block::Block;
    use crate::codec::structs::frame::Frame;
    use crate::dispatcher::dispatcher::{decode_view_name, parse_param_update};
    use crate::dispatcher::enums::dispatch_error::DispatchError;
    use crate::dispatcher::structs::dispatcher::Dispatcher;
    use crate::dispatcher::structs::session::Session;
    use crate::handshake::enums::handshake_state::HandshakeState;
    use crate::handshake::enums::protocol_error::ProtocolError;
    use crate::handshake::structs::time_sync_data::TimeSyncData;
    use crate::host::enums::parameter_error::ParameterError;
    use crate::host::traits::cluster_host::ClusterHost;
    use crate::host::traits::cluster_view::ClusterView;

    #[derive(Default)]
    struct RecordingHost {
        time: RwLock<f64>,
        offsets: Mutex<Vec<f64>>,
        cleanups: Mutex<u32>,
        parameters: Mutex<Vec<(String, String)>>,
    }

    impl ClusterHost for RecordingHost {
        fn instance_time(&self) -> f64 {
            *self.time.read()
        }

        fn offset_instance_time(&self, offset: f64) {
            *self.time.write() += offset;
            self.offsets.lock().push(offset);
        }

        fn cleanup_module_graph(&self) {
            *self.cleanups.lock() += 1;
        }

        fn set_parameter(&self, name: &str, value: &str) -> Result<(), ParameterError> {
            if name.starts_with("unknown") {
                return Err(ParameterError::NotFound(name.to_string()));
            }
            self.parameters.lock().push((name.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingView {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingView {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    impl ClusterView for RecordingView {
        fn name(&self) -> String {
            "recording".to_string()
        }

        fn connect_view(&self, to_name: &str) {
            self.calls.lock().push(format!("connect:{}", to_name));
        }

        fn disconnect_view(&self) {
            self.calls.lock().push("disconnect".to_string());
        }

        fn set_setup_message(&self, body: &[u8]) {
            self.calls.lock().push(format!("setup:{}", String::from_utf8_lossy(body)));
        }

        fn request_camera_bootstrap(&self) {
            self.calls.lock().push("bootstrap".to_string());
        }

        fn deserialise_camera(&self, body: &[u8]) {
            self.calls.lock().push(format!("camera:{}", body.len()));
        }
    }

    struct Fixture {
        dispatcher: Dispatcher,
        host: Arc<RecordingHost>,
        views: Vec<Arc<RecordingView>>,
        outgoing: UnboundedReceiver<Vec<u8>>,
        events: UnboundedReceiver<ClusterEvent>,
    }

    impl Fixture {
        fn new(view_count: usize) -> Fixture {
            let host = Arc::new(RecordingHost::default());
            let views: Vec<Arc<RecordingView>> = (0..view_count).map(|_| Arc::new(RecordingView::default())).collect();
            let registered: Vec<Arc<dyn ClusterView>> = views.iter().map(|view| view.clone() as Arc<dyn ClusterView>).collect();
            let session = Session::new("render-master", "node-a", Arc::new(RwLock::new(registered)));
            let (queue, outgoing) = unbounded_channel();
            let (events_tx, events) = unbounded_channel();
            let dispatcher = Dispatcher::new(session, host.clone(), ChannelSender::new("render-master".to_string(), queue), events_tx);
            Fixture { dispatcher, host, views, outgoing, events }
        }

        fn sent(&mut self) -> Vec<Frame> {
            let mut frames = Vec::new();
            while let Ok(bytes) = self.outgoing.try_recv() {
                frames.push(Frame::from_bytes(&bytes).unwrap());
            }
            frames
        }

        fn events(&mut self) -> Vec<ClusterEvent> {
            let mut events = Vec::new();
            while let Ok(event) = self.events.try_recv() {
                events.push(event);
            }
            events
        }

        fn receive(&mut self, message_id: MessageId, body: &[u8]) {
            self.dispatcher.on_frame(Frame::new(message_id, body.to_vec())).unwrap();
        }

        /// Drives the session to `AwaitingGraphAck` with a completed sync.
        fn synchronise(&mut self) {
            self.dispatcher.on_connected();
            self.receive(MessageId::HandshakeBack, &[]);
            self.receive(MessageId::HandshakeDone, &[]);
            self.receive(MessageId::TimeSync, &complete_sync(&[100.0, 150.0, 220.0]).to_bytes());
            assert_eq!(self.dispatcher.session.state, HandshakeState::AwaitingGraphAck);
        }
    }

    fn complete_sync(samples: &[f64]) -> TimeSyncData {
        let mut data = TimeSyncData::initial();
        data.count = 10;
        let last = samples.last().copied().unwrap_or_default();
        for (index, slot) in data.time.iter_mut().enumerate() {
            *slot = samples.get(index).copied().unwrap_or(last);
        }
        data
    }

    mod body_tests {
        use super::*;

        #[test]
        fn test_param_update_splits_on_first_equals() {
            assert_eq!(parse_param_update(b"a::b=1=2\0").unwrap(), ("a::b".to_string(), "1=2".to_string()));
            assert_eq!(parse_param_update(b"flag=").unwrap(), ("flag".to_string(), String::new()));
        }

        #[test]
        fn test_param_update_rejects_malformed_bodies() {
            for body in [&b"no-separator"[..], b"=value", b"\xff=1"] {
                assert!(matches!(
                    parse_param_update(body),
                    Err(ProtocolError::MalformedBody { message: MessageId::ParamUpdate, .. })
                ));
            }
        }

        #[test]
        fn test_view_name_trims_nul() {
            assert_eq!(decode_view_name(b"view0\0\0"), "view0");
            assert_eq!(decode_view_name(b""), "");
        }
    }

    mod flow_tests {
        use super::*;

        #[test]
        fn test_connect_sends_handshake_init() {
            let mut fixture = Fixture::new(1);
            fixture.dispatcher.on_connected();

            let sent = fixture.sent();
            assert_eq!(sent, vec![Frame::new(MessageId::HandshakeInit, b"node-a\0".to_vec())]);
            assert_eq!(fixture.dispatcher.session.state, HandshakeState::AwaitingHandshakeBack);

            let states: Vec<HandshakeState> = fixture
                .events()
                .into_iter()
                .filter_map(|event| match event {
                    ClusterEvent::StateChanged { state, .. } => Some(state),
                    _ => None,
                })
                .collect();
            assert_eq!(states, vec![HandshakeState::Connecting, HandshakeState::AwaitingHandshakeBack]);
        }

        #[test]
        fn test_handshake_and_time_sync() {
            let mut fixture = Fixture::new(2);
            *fixture.host.time.write() = 500.0;
            fixture.dispatcher.on_connected();
            fixture.receive(MessageId::HandshakeBack, &[]);
            fixture.receive(MessageId::HandshakeDone, &[]);

            let partial = TimeSyncData { count: 3, ..complete_sync(&[1.0, 2.0, 3.0]) };
            fixture.receive(MessageId::TimeSync, &partial.to_bytes());
            fixture.receive(MessageId::TimeSync, &complete_sync(&[100.0, 150.0, 220.0]).to_bytes());

            let sent = fixture.sent();
            let ids: Vec<u32> = sent.iter().map(|frame| frame.message_id).collect();
            assert_eq!(
                ids,
                vec![
                    MessageId::HandshakeInit.as_u32(),
                    MessageId::HandshakeForth.as_u32(),
                    MessageId::TimeSync.as_u32(),
                    MessageId::TimeSync.as_u32(),
                    MessageId::ModuleGraph.as_u32(),
                ]
            );
            assert_eq!(sent[2].body, TimeSyncData::initial().to_bytes());
            assert_eq!(sent[3].body, partial.to_bytes());
            assert!(sent[4].body.is_empty());

            // Padding repeats the last sample, adding zero-delta pairs.
            let offsets = fixture.host.offsets.lock().clone();
            assert_eq!(offsets.len(), 1);
            let latency = (25.0 + 35.0) / 9.0;
            assert!((offsets[0] - (220.0 + latency - 500.0)).abs() < 1e-9);
            assert_eq!(fixture.dispatcher.session.clock_offset, offsets[0]);
            assert_eq!(*fixture.host.cleanups.lock(), 1);
            for view in &fixture.views {
                assert_eq!(view.calls(), vec!["disconnect".to_string()]);
            }

            let synchronised = fixture.events().into_iter().find_map(|event| match event {
                ClusterEvent::TimeSynchronized { server, estimate } => Some((server, estimate)),
                _ => None,
            });
            let (server, estimate) = synchronised.unwrap();
            assert_eq!(server, "render-master");
            assert_eq!(estimate.local_time, 500.0);
            assert_eq!(estimate.offset, offsets[0]);
        }

        #[test]
        fn test_compound_graph_and_view_connect() {
            let mut fixture = Fixture::new(2);
            fixture.synchronise();
            fixture.sent();

            let compound = Frame::join_compound(&[
                Block { block_id: MessageId::ModuleGraph.as_u32(), body: b"graph".to_vec() },
                Block { block_id: MessageId::ViewConnect.as_u32(), body: b"view0\0".to_vec() },
            ])
            .unwrap();
            fixture.dispatcher.on_frame(compound).unwrap();

            assert_eq!(fixture.dispatcher.session.state, HandshakeState::Steady);
            assert_eq!(
                fixture.views[0].calls(),
                vec!["disconnect", "setup:graph", "connect:view0", "bootstrap"]
            );
            assert_eq!(fixture.views[1].calls(), vec!["disconnect", "connect:view0"]);
            assert!(fixture.sent().is_empty());
        }

        #[test]
        fn test_steady_state_updates() {
            let mut fixture = Fixture::new(1);
            fixture.synchronise();
            fixture.receive(MessageId::ModuleGraph, b"graph");
            fixture.receive(MessageId::ViewConnect, b"view0");

            fixture.receive(MessageId::ParamUpdate, b"view::fov=30\0");
            fixture.receive(MessageId::ParamUpdate, b"unknown::x=1");
            fixture.receive(MessageId::ParamUpdate, b"broken");
            fixture.receive(MessageId::CameraUpdate, &[0u8; 24]);

            assert_eq!(
                fixture.host.parameters.lock().clone(),
                vec![("view::fov".to_string(), "30".to_string())]
            );
            assert_eq!(fixture.views[0].calls().last().map(String::as_str), Some("camera:24"));
            assert_eq!(fixture.dispatcher.session.state, HandshakeState::Steady);
        }

        #[test]
        fn test_disconnect_closes_session() {
            let mut fixture = Fixture::new(0);
            fixture.dispatcher.on_connected();
            fixture.dispatcher.on_disconnected();
            assert_eq!(fixture.dispatcher.session.state, HandshakeState::Closed);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_out_of_order_message_is_ignored() {
            let mut fixture = Fixture::new(1);
            fixture.dispatcher.on_connected();
            fixture.sent();

            fixture.receive(MessageId::HandshakeDone, &[]);
            fixture.receive(MessageId::CameraUpdate, &[1, 2, 3]);

            assert_eq!(fixture.dispatcher.session.state, HandshakeState::AwaitingHandshakeBack);
            assert!(fixture.sent().is_empty());
            assert!(fixture.views[0].calls().is_empty());
        }

        #[test]
        fn test_unknown_message_does_not_fail() {
            let mut fixture = Fixture::new(0);
            fixture.dispatcher.on_connected();
            assert!(fixture.dispatcher.on_frame(Frame::new(99u32, vec![1, 2])).is_ok());
            assert_eq!(fixture.dispatcher.session.state, HandshakeState::AwaitingHandshakeBack);
        }

        #[test]
        fn test_malformed_time_sync_keeps_state() {
            let mut fixture = Fixture::new(0);
            fixture.dispatcher.on_connected();
            fixture.receive(MessageId::HandshakeBack, &[]);
            fixture.receive(MessageId::HandshakeDone, &[]);
            fixture.sent();

            fixture.receive(MessageId::TimeSync, &[0u8; 10]);
            assert_eq!(fixture.dispatcher.session.state, HandshakeState::TimeSyncing);
            assert!(fixture.sent().is_empty());
        }

        #[test]
        fn test_bad_compound_is_a_framing_error() {
            let mut fixture = Fixture::new(0);
            let mut body = Vec::new();
            body.extend_from_slice(&MessageId::ViewConnect.as_u32().to_le_bytes());
            body.extend_from_slice(&50u32.to_le_bytes());
            body.extend_from_slice(b"short");

            let result = fixture.dispatcher.on_frame(Frame::new(MessageId::Multiple, body));
            assert!(matches!(result, Err(FramingError::Truncated { .. })));
        }

        #[test]
        fn test_registered_handler_replaces_default() {
            fn reject(_dispatcher: &mut Dispatcher, _body: &[u8]) -> Result<(), DispatchError> {
                Err(ProtocolError::UnknownParameter("rejected".to_string()).into())
            }

            let mut fixture = Fixture::new(1);
            fixture.synchronise();
            fixture.receive(MessageId::ModuleGraph, b"graph");
            fixture.dispatcher.register(MessageId::CameraUpdate, reject);
            fixture.receive(MessageId::CameraUpdate, &[0u8; 4]);
            assert!(!fixture.views[0].calls().iter().any(|call| call.starts_with("camera")));
        }

        #[test]
        fn test_send_after_writer_gone_reports_closed() {
            let mut fixture = Fixture::new(0);
            fixture.outgoing.close();
            assert!(fixture.dispatcher.sender.is_closed());
            fixture.dispatcher.on_connected();
            assert_eq!(fixture.dispatcher.session.state, HandshakeState::AwaitingHandshakeBack);
        }
    }
}
