//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses keyed by request path. Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// `200 OK` with the full body.
    Ok(Vec<u8>),
    /// Any status line, e.g. `"500 Internal Server Error"`, with a short body.
    Status(&'static str),
    /// Advertises `Content-Length` for the whole body but sends only `sent` bytes, then hangs up.
    Truncated { body: Vec<u8>, sent: usize },
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: HashMap<String, Reply>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL nothing listens on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Reply>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let reply = routes
        .get(&path)
        .cloned()
        .unwrap_or(Reply::Status("404 Not Found"));
    match reply {
        Reply::Ok(body) => respond(&mut stream, "200 OK", body.len(), &body),
        Reply::Status(status) => {
            let body = status.as_bytes();
            respond(&mut stream, status, body.len(), body)
        }
        Reply::Truncated { body, sent } => {
            respond(&mut stream, "200 OK", body.len(), &body[..sent.min(body.len())])
        }
    }
    let _ = stream.flush();
}

fn respond(stream: &mut TcpStream, status: &str, content_length: usize, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/zip\r\nConnection: close\r\n\r\n",
        status, content_length
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
