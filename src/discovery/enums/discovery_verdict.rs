/// What a received datagram means for this node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryVerdict {
    Connect { server: String },
    Shutdown,
    OtherCluster { cluster: String },
    Unhandled(u16),
}
