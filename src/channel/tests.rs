#[cfg(test)]
mod channel_tests {
    use std::io;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::task::{Context, Poll};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
    use crate::channel::channel::{read_frame, split_server_address, write_loop};
    use crate::channel::enums::transport_error::TransportError;
    use crate::channel::structs::channel_control::ChannelControl;
    use crate::channel::structs::channel_exit::ChannelExit;
    use crate::channel::structs::channel_sender::ChannelSender;
    use crate::channel::structs::control_channel::ControlChannel;
    use crate::channel::traits::frame_sink::FrameSink;
    use crate::codec::codec::HEADER_SIZE;
    use crate::codec::enums::framing_error::FramingError;
    use crate::codec::enums::message_id::MessageId;
    use crate::codec::structs::frame::Frame;

    /// A socket whose peer is gone: every write fails.
    struct BrokenWriter;

    impl AsyncWrite for BrokenWriter {
        fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, _buf: &[u8]) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    /// Records frames and answers each one with an empty `HANDSHAKE_FORTH`.
    struct EchoSink {
        sender: ChannelSender,
        frames: UnboundedSender<Frame>,
    }

    impl FrameSink for EchoSink {
        fn on_open(&mut self) {
            let _ = self.sender.send(MessageId::HandshakeInit, b"test\0".to_vec());
        }

        fn on_frame(&mut self, frame: Frame) -> Result<(), FramingError> {
            let _ = self.sender.send(MessageId::HandshakeForth, Vec::new());
            let _ = self.frames.send(frame);
            Ok(())
        }

        fn on_close(&mut self) {}
    }

    async fn open_pair() -> (ControlChannel, tokio::net::TcpStream, UnboundedReceiver<Frame>, UnboundedReceiver<ChannelExit>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        let stream = ControlChannel::connect(&address, 1, Some(Duration::from_secs(5))).await.unwrap();
        let (server_side, _) = listener.accept().await.unwrap();
        let (frames_tx, frames_rx) = unbounded_channel();
        let (exits_tx, exits_rx) = unbounded_channel();
        let channel = ControlChannel::start(address, 7, stream, exits_tx, |sender| EchoSink { sender, frames: frames_tx }).unwrap();
        (channel, server_side, frames_rx, exits_rx)
    }

    async fn read_server_frame(stream: &mut tokio::net::TcpStream) -> Frame {
        tokio::time::timeout(Duration::from_secs(5), read_frame(stream)).await.unwrap().unwrap()
    }

    mod address_tests {
        use super::*;

        #[test]
        fn test_split_server_address() {
            assert_eq!(split_server_address("render-master", 30201), ("render-master".to_string(), 30201));
            assert_eq!(split_server_address("render-master:4000", 30201), ("render-master".to_string(), 4000));
            assert_eq!(split_server_address("10.0.0.5:4000", 1), ("10.0.0.5".to_string(), 4000));
            assert_eq!(split_server_address("::1", 30201), ("::1".to_string(), 30201));
            assert_eq!(split_server_address("[::1]:9", 30201), ("::1".to_string(), 9));
            assert_eq!(split_server_address("host\0", 5), ("host".to_string(), 5));
        }

        #[tokio::test]
        async fn test_resolve_empty_host_fails() {
            let result = ControlChannel::connect("", 30201, None).await;
            assert!(matches!(result, Err(TransportError::Resolve { .. })));
        }
    }

    mod read_tests {
        use super::*;

        #[tokio::test]
        async fn test_read_frame_from_bytes() {
            let bytes = Frame::new(MessageId::ViewConnect, b"view".to_vec()).to_bytes().unwrap();
            let mut reader = bytes.as_slice();
            let frame = read_frame(&mut reader).await.unwrap();
            assert_eq!(frame.id(), Some(MessageId::ViewConnect));
            assert!(matches!(read_frame(&mut reader).await, Err(TransportError::PeerClosed)));
        }

        #[tokio::test]
        async fn test_read_frame_bad_magic() {
            let mut bytes = Frame::empty(MessageId::HandshakeBack).to_bytes().unwrap();
            bytes[1] = 0;
            let mut reader = bytes.as_slice();
            assert!(matches!(
                read_frame(&mut reader).await,
                Err(TransportError::Framing(FramingError::BadMagic { .. }))
            ));
        }

        #[tokio::test]
        async fn test_read_frame_cut_body() {
            let bytes = Frame::new(MessageId::CameraUpdate, vec![1; 32]).to_bytes().unwrap();
            let mut reader = &bytes[..HEADER_SIZE + 8];
            assert!(matches!(read_frame(&mut reader).await, Err(TransportError::Io(_))));
        }
    }

    mod connection_tests {
        use super::*;

        #[tokio::test]
        async fn test_frames_flow_both_ways() {
            let (mut channel, mut server, mut frames, _exits) = open_pair().await;

            let init = read_server_frame(&mut server).await;
            assert_eq!(init.id(), Some(MessageId::HandshakeInit));
            assert_eq!(init.body, b"test\0".to_vec());

            server.write_all(&Frame::empty(MessageId::HandshakeBack).to_bytes().unwrap()).await.unwrap();
            let received = tokio::time::timeout(Duration::from_secs(5), frames.recv()).await.unwrap().unwrap();
            assert_eq!(received.id(), Some(MessageId::HandshakeBack));

            let answer = read_server_frame(&mut server).await;
            assert_eq!(answer.id(), Some(MessageId::HandshakeForth));

            channel.close().await;
            assert!(!channel.is_alive());
        }

        #[tokio::test]
        async fn test_close_reports_requested_exit() {
            let (mut channel, _server, _frames, mut exits) = open_pair().await;
            channel.close().await;
            let exit = exits.recv().await.unwrap();
            assert_eq!(exit.generation, 7);
            assert!(exit.requested());
            assert!(matches!(channel.sender.send(MessageId::HandshakeForth, Vec::new()), Err(TransportError::Closed)));
        }

        #[tokio::test]
        async fn test_peer_close_is_reported() {
            let (mut channel, server, _frames, mut exits) = open_pair().await;
            drop(server);
            let exit = tokio::time::timeout(Duration::from_secs(5), exits.recv()).await.unwrap().unwrap();
            assert!(matches!(exit.error, Some(TransportError::PeerClosed) | Some(TransportError::Io(_))));
            channel.close().await;
        }

        #[tokio::test]
        async fn test_bad_magic_closes_channel() {
            let (mut channel, mut server, _frames, mut exits) = open_pair().await;
            server.write_all(&[0u8; HEADER_SIZE]).await.unwrap();
            let exit = tokio::time::timeout(Duration::from_secs(5), exits.recv()).await.unwrap().unwrap();
            assert!(matches!(exit.error, Some(TransportError::Framing(FramingError::BadMagic { .. }))));

            // The writer follows the receiver down and the socket closes.
            let mut rest = Vec::new();
            let _ = tokio::time::timeout(Duration::from_secs(5), server.read_to_end(&mut rest)).await.unwrap();
            channel.close().await;
        }

        #[tokio::test]
        async fn test_connect_refused() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let address = listener.local_addr().unwrap().to_string();
            drop(listener);
            let result = ControlChannel::connect(&address, 1, None).await;
            assert!(matches!(result, Err(TransportError::Connect { .. })));
        }
    }

    mod write_failure_tests {
        use super::*;

        #[tokio::test]
        async fn test_failed_write_stops_channel() {
            let control = Arc::new(ChannelControl::new());
            let (queue_tx, queue_rx) = unbounded_channel();
            let sender = ChannelSender::new("render-master".to_string(), queue_tx);
            sender.send(MessageId::HandshakeInit, b"node\0".to_vec()).unwrap();

            write_loop(BrokenWriter, queue_rx, control.clone(), control.subscribe(), "render-master".to_string()).await;

            assert!(control.is_stopped());
            assert!(matches!(control.take_failure(), Some(TransportError::Send(_))));
            assert!(matches!(sender.send(MessageId::HandshakeForth, Vec::new()), Err(TransportError::Closed)));
        }

        #[tokio::test]
        async fn test_failed_write_is_reported_as_exit() {
            // The peer end stays open, so only the writer can end the channel.
            let (reader, _peer) = tokio::io::duplex(1024);
            let (frames_tx, _frames_rx) = unbounded_channel();
            let (exits_tx, mut exits) = unbounded_channel();
            let mut channel = ControlChannel::spawn(
                "render-master".to_string(),
                3,
                "127.0.0.1:30201".parse().unwrap(),
                reader,
                BrokenWriter,
                exits_tx,
                |sender| EchoSink { sender, frames: frames_tx },
            );

            let exit = tokio::time::timeout(Duration::from_secs(5), exits.recv()).await.unwrap().unwrap();
            assert_eq!(exit.generation, 3);
            assert!(!exit.requested());
            assert!(matches!(exit.error, Some(TransportError::Send(_))));
            assert!(!channel.is_alive());

            channel.close().await;
            assert!(matches!(channel.sender.send(MessageId::HandshakeForth, Vec::new()), Err(TransportError::Closed)));
        }

        #[test]
        fn test_first_failure_wins() {
            let control = ChannelControl::new();
            control.fail(TransportError::PeerClosed);
            control.fail(TransportError::Closed);
            assert!(control.is_stopped());
            assert!(matches!(control.take_failure(), Some(TransportError::PeerClosed)));
            assert!(control.take_failure().is_none());
        }
    }
}
