use crate::proxy::enums::forward_error::ForwardError;
use crate::proxy::enums::intercept_error::InterceptError;
use crate::proxy::structs::upstream::Upstream;

/// How a connection ended when no unexpected error interrupted it.
#[derive(Debug)]
pub enum HandleOutcome {
    /// The client closed before sending anything.
    Empty,
    /// Not a tracker announce; closed without forwarding.
    Ignored(InterceptError),
    /// Looked like an announce but no tracker address could be derived.
    Unresolved(InterceptError),
    /// The tracker could not be reached; the client gets nothing.
    ForwardFailed { upstream: Upstream, error: ForwardError },
    /// The tracker reply was relayed to the client.
    Relayed { upstream: Upstream, bytes: usize, swarm_updated: bool },
}
