/// Everything the tracker sent back, exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerReply {
    pub raw: Vec<u8>,
}
