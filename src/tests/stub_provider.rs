// @file: market_data/src/tests/stub_provider.rs
// @description: Minimal HTTP/1.1 stub standing in for the market chart provider.
// @author: LAS.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};


//
// STUB SERVER
//

pub struct StubProvider {
    pub base_url: String,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl StubProvider {
    /// Answers every connection with the same status and body.
    pub async fn start(status: u16, body: &str) -> StubProvider {
        Self::start_sequence(status, vec![body.to_string()]).await
    }

    /// Answers the n-th connection with `bodies[n % bodies.len()]`.
    pub async fn start_sequence(status: u16, bodies: Vec<String>) -> StubProvider {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let request_lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let log = request_lines.clone();

        tokio::spawn(async move {
            let mut served: usize = 0;
            while let Ok((stream, _)) = listener.accept().await {
                let body: &str = &bodies[served % bodies.len()];
                serve_one(stream, status, body, &log).await;
                served += 1;
            }
        });

        StubProvider { base_url: format!("http://{}", addr), request_lines }
    }

    /// Accepts connections and reads requests but never answers.
    pub async fn start_silent() -> StubProvider {
        let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let request_lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let log = request_lines.clone();

        tokio::spawn(async move {
            let mut held: Vec<TcpStream> = Vec::new();
            while let Ok((mut stream, _)) = listener.accept().await {
                if let Some(line) = read_request_line(&mut stream).await {
                    log.lock().unwrap().push(line);
                }
                held.push(stream);
            }
        });

        StubProvider { base_url: format!("http://{}", addr), request_lines }
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}


//
// INTERNAL HELPERS
//

async fn serve_one(mut stream: TcpStream, status: u16, body: &str, log: &Mutex<Vec<String>>) {
    if let Some(line) = read_request_line(&mut stream).await {
        log.lock().unwrap().push(line);
    }

    let response: String = format!(
        "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

// Reads up to the end of the request headers (GET carries no body).
async fn read_request_line(stream: &mut TcpStream) -> Option<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    String::from_utf8_lossy(&buf).lines().next().map(|l| l.to_string())
}
