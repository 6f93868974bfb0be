pub mod announce_params;
pub mod announce_request;
pub mod forward_error;
pub mod intercept_error;
pub mod proxy_server;
pub mod proxy_state;
pub mod query_string;
pub mod reply_summary;
pub mod tcp_forwarder;
pub mod tracker_reply;
pub mod upstream;
