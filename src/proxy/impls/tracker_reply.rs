use crate::bencode::bencode::decode_at;
use crate::bencode::enums::decode_error::DecodeError;
use crate::bencode::enums::decoded_value::DecodedValue;
use crate::proxy::structs::tracker_reply::TrackerReply;

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

impl TrackerReply {
    pub fn new(raw: Vec<u8>) -> TrackerReply
    {
        TrackerReply { raw }
    }

    pub fn as_bytes(&self) -> &[u8]
    {
        &self.raw
    }

    pub fn len(&self) -> usize
    {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.raw.is_empty()
    }

    /// Where the bencoded payload starts.
    ///
    /// A reply that opens with an HTTP status line has its payload after the
    /// header block; anything else is taken to be a bare payload.
    pub fn payload_offset(&self) -> usize
    {
        if !self.raw.starts_with(b"HTTP/") {
            return 0;
        }
        self.raw.windows(HEADER_TERMINATOR.len())
            .position(|window| window == HEADER_TERMINATOR)
            .map(|position| position + HEADER_TERMINATOR.len())
            .unwrap_or(self.raw.len())
    }

    /// Decodes the first value of the payload. Trailing bytes are ignored.
    pub fn decode(&self) -> Result<DecodedValue, DecodeError>
    {
        decode_at(&self.raw, self.payload_offset()).map(|(value, _)| value)
    }
}
