use crate::proxy::structs::announce_params::AnnounceParams;
use crate::proxy::structs::query_string::QueryString;
use crate::proxy::structs::upstream::Upstream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub upstream: Upstream,
    pub path: String,
    pub query: QueryString,
    pub version: String,
    /// Header lines after the request line, up to the blank line.
    pub headers: Vec<String>,
    pub params: AnnounceParams,
}
