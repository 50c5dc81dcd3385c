#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use trading_journal::models::{parse_timestamp, Bias, Rule, TradeDirection, TradeRecord};

pub fn trade(
    entry: f64,
    exit: f64,
    quantity: f64,
    direction: TradeDirection,
    created_at: &str,
) -> TradeRecord {
    TradeRecord::new(
        entry,
        exit,
        quantity,
        direction,
        parse_timestamp(created_at).unwrap(),
    )
}

pub fn rule(id: &str, created_at: &str) -> Rule {
    Rule {
        id: id.to_string(),
        title: format!("rule {}", id),
        expression: String::new(),
        created_at: parse_timestamp(created_at).unwrap(),
    }
}

pub fn bias(id: &str, created_at: &str) -> Bias {
    Bias {
        id: id.to_string(),
        title: format!("bias {}", id),
        currency_pair: "GBPUSD".to_string(),
        description: None,
        before_image_url: None,
        after_image_url: None,
        created_at: parse_timestamp(created_at).unwrap(),
    }
}

/// Serve exactly one HTTP request with a canned response. Returns the base
/// URL and a receiver for the raw request head.
pub async fn serve_once(status: u16, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                // Drain any request body so closing doesn't reset the connection
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        let head = String::from_utf8_lossy(&buf).to_string();

        let reason = if status < 400 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(head);
    });

    (format!("http://{}", addr), rx)
}
