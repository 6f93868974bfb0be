use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterceptError {
    #[error("request line is not an absolute-URI GET")]
    NotAbsoluteGet,

    #[error("cannot resolve a tracker from URI \"{0}\"")]
    UnresolvableUri(String),

    #[error("query string has no info_hash field")]
    MissingSwarmId,
}
