/// A parsed announce request in absolute-URI form.
pub mod announce_request;

/// Known announce fields pulled from the query string.
pub mod announce_params;

/// Order preserving, non-decoding query string.
pub mod query_string;

/// A single `key[=value]` item of a query string.
pub mod query_pair;

/// Tracker host and port resolved from the request URI.
pub mod upstream;

/// A rewritten announce ready to be forwarded.
pub mod intercepted_announce;

/// Raw tracker reply bytes.
pub mod tracker_reply;

/// Fields read from a decoded tracker reply.
pub mod reply_summary;

/// Shared state handed to every connection handler.
pub mod proxy_state;

/// The TCP listener.
pub mod proxy_server;

/// Forwarder that opens a fresh TCP connection per announce.
pub mod tcp_forwarder;
