use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("connecting to {upstream} failed: {source}")]
    Connect { upstream: String, source: std::io::Error },

    #[error("connecting to {0} timed out")]
    ConnectTimeout(String),

    #[error("sending request to {upstream} failed: {source}")]
    Write { upstream: String, source: std::io::Error },

    #[error("reading reply from {upstream} failed: {source}")]
    Read { upstream: String, source: std::io::Error },

    #[error("{0} did not answer in time")]
    ReplyTimeout(String),

    #[error("{0} closed the connection without replying")]
    EmptyReply(String),
}
