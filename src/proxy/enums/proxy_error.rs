use thiserror::Error;

/// Failures on the client side of a connection.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("reading request from client failed: {0}")]
    ClientRead(#[source] std::io::Error),

    #[error("writing reply to client failed: {0}")]
    ClientWrite(#[source] std::io::Error),
}
