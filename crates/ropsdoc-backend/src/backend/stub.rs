//! Minimal HTTP/1.1 server answering scripted responses, one per connection.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A raw response written back to the client.
pub struct StubResponse(String);

impl StubResponse {
    pub fn new(status: u16, headers: &[(&str, &str)], body: &str) -> Self {
        let mut head = format!(
            "HTTP/1.1 {} Stub\r\nContent-Length: {}\r\nConnection: close\r\n",
            status,
            body.len()
        );
        for (name, value) in headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        Self(format!("{}\r\n{}", head, body))
    }

    pub fn json(status: u16, body: &str) -> Self {
        Self::new(status, &[("Content-Type", "application/json")], body)
    }

    /// Announces a longer body than it sends, then closes the connection.
    pub fn truncated(status: u16) -> Self {
        Self(format!(
            "HTTP/1.1 {} Stub\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
            status
        ))
    }
}

pub struct StubServer {
    listener: TcpListener,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn bind() -> Self {
        Self {
            listener: TcpListener::bind("127.0.0.1:0").await.unwrap(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.listener.local_addr().unwrap())
    }

    /// Serve `responses` in order and return a handle to the recorded
    /// request heads (lowercased).
    pub fn serve(self, responses: Vec<StubResponse>) -> Arc<Mutex<Vec<String>>> {
        let requests = self.requests.clone();
        tokio::spawn(async move {
            for response in responses {
                let Ok((mut stream, _)) = self.listener.accept().await else {
                    return;
                };
                let head = read_request(&mut stream).await;
                self.requests.lock().unwrap().push(head);
                let _ = stream.write_all(response.0.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        requests
    }
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return String::from_utf8_lossy(&buf).to_lowercase(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    head
}
