//! Mock users/items API server for testing
//!
//! Serves the same response shape as the real API:
//! - GET /api/users/ returns a JSON array of user objects
//! - GET /api/items/ returns a JSON array of item objects

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Mock API server on a random local port
pub struct MockApiServer {
    port: u16,
    running: Arc<AtomicBool>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Canned responses for the mock server
#[derive(Debug, Clone, Default)]
pub struct MockApiConfig {
    /// Raw body for /api/users/ (default: three users in two cities)
    pub users_body: Option<String>,
    /// Raw body for /api/items/ (default: two items, one without a price)
    pub items_body: Option<String>,
    /// Answer every request with this status
    pub fail_status: Option<u16>,
}

pub const DEFAULT_USERS_BODY: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz",
     "street": "Kulas Light", "suite": "Apt. 556", "city": "NYC", "zipcode": "92998-3874"},
    {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv",
     "street": null, "city": "NYC", "zipcode": "90566-7771"},
    {"id": 3, "name": "Clementine Bauch", "username": "Samantha", "email": "Nathan@yesenia.net",
     "street": "Douglas Extension", "suite": "Suite 847", "city": "LA", "zipcode": "59590-4157"}
]"#;

pub const DEFAULT_ITEMS_BODY: &str = r#"[
    {"id": 1, "name": "Desk Lamp", "description": "LED, adjustable arm", "price": "24.50"},
    {"id": 2, "name": "Notebook", "description": null, "price": null}
]"#;

impl MockApiServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockApiConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        // Non-blocking so the accept loop notices shutdown
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        thread::spawn(move || handle_connection(stream, &cfg));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockApiServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockApiConfig) {
    // Accepted sockets can inherit non-blocking mode on some platforms
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);

    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_response(&mut stream, 400, "Bad Request", r#"{"error": "Invalid request"}"#);
        return;
    }

    if let Some(status) = config.fail_status {
        send_response(&mut stream, status, "Error", r#"{"error": "Simulated failure"}"#);
        return;
    }

    let (method, path) = (parts[0], parts[1]);
    let path_without_query = path.split('?').next().unwrap_or(path);

    match (method, path_without_query) {
        ("GET", "/api/users/") => {
            let body = config.users_body.as_deref().unwrap_or(DEFAULT_USERS_BODY);
            send_response(&mut stream, 200, "OK", body);
        }
        ("GET", "/api/items/") => {
            let body = config.items_body.as_deref().unwrap_or(DEFAULT_ITEMS_BODY);
            send_response(&mut stream, 200, "OK", body);
        }
        ("GET", _) => {
            send_response(&mut stream, 404, "Not Found", r#"{"error": "Endpoint not found"}"#);
        }
        _ => {
            send_response(
                &mut stream,
                405,
                "Method Not Allowed",
                r#"{"error": "Method not allowed"}"#,
            );
        }
    }
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_server_starts() {
        let server = MockApiServer::start(MockApiConfig::default()).unwrap();
        assert!(server.port() > 0);
        assert!(server.base_url().starts_with("http://127.0.0.1:"));
    }

    #[test]
    fn test_default_bodies_are_valid_json_arrays() {
        let users: Vec<serde_json::Value> = serde_json::from_str(DEFAULT_USERS_BODY).unwrap();
        let items: Vec<serde_json::Value> = serde_json::from_str(DEFAULT_ITEMS_BODY).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(items.len(), 2);
    }
}
