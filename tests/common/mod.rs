#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use ratio_ghost::config::structs::configuration::Configuration;
use ratio_ghost::config::structs::policy_config::PolicyConfig;
use ratio_ghost::proxy::proxy::proxy_service;
use ratio_ghost::proxy::structs::proxy_state::ProxyState;

pub type TestState = Arc<ProxyState>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config(policy: PolicyConfig) -> TestConfig {
    let mut config = Configuration::init();
    config.proxy_config.bind_address = String::from("127.0.0.1:0");
    config.proxy_config.upstream_connect_timeout = 2;
    config.proxy_config.upstream_read_timeout = 2;
    config.policy_config = policy;
    Arc::new(config)
}

pub struct TestProxy {
    pub address: SocketAddr,
    pub state: TestState,
    pub shutdown: watch::Sender<bool>,
    pub handle: JoinHandle<()>,
}

pub async fn start_proxy(config: TestConfig) -> TestProxy {
    let state = Arc::new(ProxyState::new(config));
    let (shutdown, rx) = watch::channel(false);
    let (address, handle) = proxy_service(state.clone(), rx).await.unwrap();
    TestProxy { address, state, shutdown, handle }
}

/// A tracker stand-in that answers every request with the same bytes and
/// remembers what it was sent.
pub struct FakeTracker {
    pub address: SocketAddr,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub handle: JoinHandle<()>,
}

pub async fn start_fake_tracker(reply: Vec<u8>) -> FakeTracker {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();
    let handle = tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else { return };
            let request = read_request_head(&mut stream).await;
            seen.lock().push(request);
            let _ = stream.write_all(&reply).await;
            let _ = stream.shutdown().await;
        }
    });
    FakeTracker { address, requests, handle }
}

async fn read_request_head(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(read) => {
                data.extend_from_slice(&chunk[..read]);
                if data.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

/// Sends `request` through the proxy and returns everything it answers
/// before closing.
pub async fn send_raw(proxy: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(proxy).await.unwrap();
    stream.write_all(request).await.unwrap();
    let mut reply = Vec::new();
    tokio::time::timeout(Duration::from_secs(10), stream.read_to_end(&mut reply))
        .await
        .expect("proxy did not close the connection")
        .unwrap();
    reply
}

pub fn announce(tracker: SocketAddr, query: &str) -> String {
    format!(
        "GET http://{tracker}/announce?{query} HTTP/1.1\r\nHost: {tracker}\r\nUser-Agent: test-client/1.0\r\n\r\n"
    )
}
