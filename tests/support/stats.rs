//! Local TCP listeners standing in for the stats control plane.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server that accepts one connection and never answers.
pub async fn silent_server() -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let task = tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.expect("accept");
        std::future::pending::<()>().await;
    });
    (addr, task)
}

/// A server that reads the full command, replies with `response`, and closes.
///
/// The received command is sent back through the returned receiver.
pub async fn replying_server(
    response: &'static [u8],
) -> (SocketAddr, oneshot::Receiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut command = Vec::new();
        stream.read_to_end(&mut command).await.expect("read command");
        let _ = stream.write_all(response).await;
        let _ = stream.shutdown().await;
        let _ = tx.send(command);
    });
    (addr, rx)
}

/// A server that accepts one connection and resets it without reading.
///
/// `SO_LINGER` of zero makes the close send RST instead of FIN.
pub async fn resetting_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        #[allow(deprecated)]
        stream.set_linger(Some(Duration::ZERO)).expect("set linger");
        drop(stream);
    });
    addr
}

/// An address with nothing listening on it.
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}
