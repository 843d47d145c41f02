//! Loopback JSON-RPC responder for exercising the contract provider

use alloy_primitives::{hex, Address};
use alloy_sol_types::SolValue;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One canned reply, served in order (the last one repeats)
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this JSON-RPC body
    Json(String),
    /// Bare HTTP status with an empty body
    Status(u16),
    /// Never answer
    Hang,
}

pub struct RpcServer {
    pub url: String,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    handle: JoinHandle<()>,
}

impl RpcServer {
    pub async fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            let mut served = 0;
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let reply = replies
                    .get(served)
                    .or_else(|| replies.last())
                    .cloned()
                    .unwrap_or(Reply::Status(500));
                served += 1;
                let seen = Arc::clone(&seen);
                tokio::spawn(async move { serve(stream, reply, seen).await });
            }
        });

        Self {
            url,
            requests,
            handle,
        }
    }

    /// JSON bodies received so far
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for RpcServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(mut stream: TcpStream, reply: Reply, seen: Arc<Mutex<Vec<serde_json::Value>>>) {
    let Some(body) = read_request_body(&mut stream).await else {
        return;
    };
    if let Ok(json) = serde_json::from_slice(&body) {
        seen.lock().unwrap().push(json);
    }

    let response = match reply {
        Reply::Json(body) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
        Reply::Status(code) => format!(
            "HTTP/1.1 {} Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            code
        ),
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return;
        }
    };
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request_body(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(position) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break position + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    Some(buffer[header_end..].to_vec())
}

/// Builds `(string,address)[]` return data as a `0x` hex string
pub fn encode_records(records: &[(&str, &str)]) -> String {
    let pairs: Vec<(String, Address)> = records
        .iter()
        .map(|(name, address)| (name.to_string(), Address::from_str(address).unwrap()))
        .collect();
    hex::encode_prefixed(pairs.abi_encode())
}

/// JSON-RPC success body carrying `result`
pub fn result_body(result: &str) -> String {
    serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
}

/// JSON-RPC error body
pub fn error_body(code: i64, message: &str) -> String {
    serde_json::json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}})
        .to_string()
}
