#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::UnboundedReceiver;
use cluster_sync::channel::channel::read_frame;
use cluster_sync::client::enums::cluster_event::ClusterEvent;
use cluster_sync::client::structs::cluster_client::ClusterClient;
use cluster_sync::codec::enums::message_id::MessageId;
use cluster_sync::codec::structs::frame::Frame;
use cluster_sync::config::structs::cluster_config::ClusterConfig;
use cluster_sync::handshake::structs::time_sync_data::TimeSyncData;
use cluster_sync::host::structs::headless_host::HeadlessHost;
use cluster_sync::host::traits::cluster_view::ClusterView;

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_config() -> ClusterConfig {
    ClusterConfig {
        name: "test-cluster".to_string(),
        node_name: "node-test".to_string(),
        connect_jitter_min_ms: 0,
        connect_jitter_max_ms: 0,
        connect_timeout_ms: 2000,
        discovery_enabled: false,
        ..ClusterConfig::default()
    }
}

pub async fn create_test_client(config: ClusterConfig) -> (ClusterClient, UnboundedReceiver<ClusterEvent>, Arc<HeadlessHost>) {
    let host = Arc::new(HeadlessHost::new());
    let (client, events) = ClusterClient::start(config, host.clone()).await.unwrap();
    (client, events, host)
}

/// Waits for the first event matching `wanted`, skipping the rest.
pub async fn wait_for(events: &mut UnboundedReceiver<ClusterEvent>, wanted: impl Fn(&ClusterEvent) -> bool) -> ClusterEvent {
    tokio::time::timeout(TIMEOUT, async {
        loop {
            let event = events.recv().await.expect("event stream ended");
            if wanted(&event) {
                return event;
            }
        }
    })
    .await
    .expect("timed out waiting for event")
}

/// Drains what is queued without waiting.
pub fn drain(events: &mut UnboundedReceiver<ClusterEvent>) -> Vec<ClusterEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

/// Polls `check` until it holds or the timeout passes.
pub async fn eventually(check: impl Fn() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + TIMEOUT;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

/// A server that answers the client by hand, one frame at a time.
pub struct ScriptedServer {
    pub listener: TcpListener,
    pub address: String,
}

impl ScriptedServer {
    pub async fn bind() -> ScriptedServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        ScriptedServer { listener, address }
    }

    pub async fn accept(&self) -> ScriptedConnection {
        let (stream, _) = tokio::time::timeout(TIMEOUT, self.listener.accept()).await.unwrap().unwrap();
        ScriptedConnection { stream }
    }
}

pub struct ScriptedConnection {
    pub stream: TcpStream,
}

impl ScriptedConnection {
    pub async fn expect(&mut self, message_id: MessageId) -> Frame {
        let frame = tokio::time::timeout(TIMEOUT, read_frame(&mut self.stream)).await.unwrap().unwrap();
        assert_eq!(frame.id(), Some(message_id), "unexpected frame {:?}", frame);
        frame
    }

    pub async fn send(&mut self, frame: Frame) {
        self.stream.write_all(&frame.to_bytes().unwrap()).await.unwrap();
    }

    pub async fn send_message(&mut self, message_id: MessageId, body: &[u8]) {
        self.send(Frame::new(message_id, body.to_vec())).await;
    }

    /// Reads until the client closes its side. True on a clean EOF.
    pub async fn closed_by_client(&mut self) -> bool {
        match tokio::time::timeout(TIMEOUT, read_frame(&mut self.stream)).await {
            Ok(Err(_)) => true,
            Ok(Ok(_)) => false,
            Err(_) => false,
        }
    }

    /// Runs the handshake up to the final time sync sample.
    pub async fn handshake(&mut self, samples: &[f64]) {
        self.expect(MessageId::HandshakeInit).await;
        self.send_message(MessageId::HandshakeBack, &[]).await;
        self.expect(MessageId::HandshakeForth).await;
        self.send_message(MessageId::HandshakeDone, &[]).await;

        let opening = self.expect(MessageId::TimeSync).await;
        let mut data = TimeSyncData::parse(&opening.body).unwrap();
        assert_eq!(data.count, 0);
        for round in 0..data.time.len() {
            data.time[round] = samples.get(round).copied().or_else(|| samples.last().copied()).unwrap_or_default();
            data.count += 1;
            self.send_message(MessageId::TimeSync, &data.to_bytes()).await;
            if !data.is_complete() {
                let echoed = TimeSyncData::parse(&self.expect(MessageId::TimeSync).await.body).unwrap();
                assert_eq!(echoed, data);
            }
        }
        self.expect(MessageId::ModuleGraph).await;
    }
}

/// Records every call a view receives.
#[derive(Default)]
pub struct RecordingView {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn has(&self, call: &str) -> bool {
        self.calls.lock().iter().any(|known| known == call)
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
