/// The `info_hash` value of an announce, exactly as it appeared in the query
/// string. It is never percent-decoded and only ever used as a map key.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct SwarmId(pub String);
