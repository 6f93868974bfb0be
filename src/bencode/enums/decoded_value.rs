use std::collections::BTreeMap;

/// A value read from a bencoded buffer.
///
/// Dictionary keys are kept as raw bytes. The order in which keys appeared on
/// the wire is not preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Integer(i64),
    ByteString(Vec<u8>),
    List(Vec<DecodedValue>),
    Map(BTreeMap<Vec<u8>, DecodedValue>),
}
