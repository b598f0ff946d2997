// src/server.rs
//! Minimal HTTP front end
//!
//! One listener, three routes: the fix API, the map page and a 404. Each
//! connection gets its own task and its own serial read session, so
//! concurrent clients never share parser state.

use crate::{
    config::BridgeConfig,
    error::{BridgeError, Result},
    gps::data::Fix,
    reader::{log_line, FixReader},
};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
};

/// Front-end map page, embedded so the binary is self-contained.
const INDEX_PAGE: &str = include_str!("../static/index.html");

/// Accept connections and serve fixes until the process is stopped.
pub async fn run(config: BridgeConfig) -> Result<()> {
    let listener = TcpListener::bind(&config.bind_address).await.map_err(|e| {
        BridgeError::Connection(format!("failed to bind {}: {}", config.bind_address, e))
    })?;

    println!("Serving fixes on http://{}", config.bind_address);

    loop {
        let (stream, peer) = listener.accept().await?;
        let reader = FixReader::new(config.reader_config());

        tokio::spawn(async move {
            if let Err(e) = handle_client(stream, reader).await {
                log_line(&format!("client {} failed: {}", peer, e));
            }
        });
    }
}

/// Serve a single request and close the connection.
async fn handle_client(stream: TcpStream, reader: FixReader) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half);

    let mut request_line = String::new();
    lines.read_line(&mut request_line).await?;

    let path = match request_path(&request_line) {
        Some(path) => path,
        None => {
            let response = text_response("400 Bad Request", "malformed request\n");
            write_half.write_all(response.as_bytes()).await?;
            return Ok(());
        }
    };

    // Drain the request headers; nothing in them matters here.
    let mut header = String::new();
    loop {
        header.clear();
        let n = lines.read_line(&mut header).await?;
        if n == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    let response = match path.as_str() {
        "/api/gnss_data" => {
            let fix = reader.read_fix().await;
            json_response(&fix)?
        }
        "/" => html_response(INDEX_PAGE),
        _ => text_response("404 Not Found", "not found\n"),
    };

    write_half.write_all(response.as_bytes()).await?;
    write_half.shutdown().await?;
    Ok(())
}

/// Extract the path from an HTTP request line, e.g. `GET / HTTP/1.1`.
/// Only GET is served.
fn request_path(request_line: &str) -> Option<String> {
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;

    if method != "GET" {
        return None;
    }

    Some(path.to_string())
}

/// Fix serialized as the API's JSON body. Always 200; "no fix yet" is a
/// body full of nulls, not an error status.
fn json_response(fix: &Fix) -> Result<String> {
    let body = serde_json::to_string(fix)?;
    Ok(http_response("200 OK", "application/json", &body))
}

fn html_response(body: &str) -> String {
    http_response("200 OK", "text/html; charset=utf-8", body)
}

fn text_response(status: &str, body: &str) -> String {
    http_response(status, "text/plain; charset=utf-8", body)
}

fn http_response(status: &str, content_type: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nAccess-Control-Allow-Origin: *\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path_parses_get() {
        assert_eq!(request_path("GET / HTTP/1.1\r\n"), Some("/".to_string()));
        assert_eq!(
            request_path("GET /api/gnss_data HTTP/1.1\r\n"),
            Some("/api/gnss_data".to_string())
        );
    }

    #[test]
    fn test_request_path_rejects_non_get() {
        assert_eq!(request_path("POST /api/gnss_data HTTP/1.1\r\n"), None);
        assert_eq!(request_path("garbage\r\n"), None);
        assert_eq!(request_path(""), None);
    }

    #[test]
    fn test_empty_fix_response_body() {
        let response = json_response(&Fix::empty()).unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("Content-Type: application/json\r\n"));
        assert!(response.ends_with(r#"{"latitude":null,"longitude":null,"clas_bytes":0}"#));
    }

    #[test]
    fn test_resolved_fix_response_body() {
        let response = json_response(&Fix::resolved(48.5, -11.25, 66)).unwrap();
        assert!(response.ends_with(r#"{"latitude":48.5,"longitude":-11.25,"clas_bytes":66}"#));
    }

    #[test]
    fn test_content_length_matches_body() {
        let response = http_response("200 OK", "text/plain", "hello");
        assert!(response.contains("Content-Length: 5\r\n"));
        assert!(response.ends_with("\r\n\r\nhello"));
    }
}
