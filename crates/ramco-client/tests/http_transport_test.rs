//! Tests for the reqwest transport against local sockets.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::time::Duration;

use ramco_client::{HttpTransport, HttpTransportConfig, RamcoClient, ResponseHandler, Transport};
use ramco_core::{ErrorReply, Outcome};

fn config(url: String) -> HttpTransportConfig {
    HttpTransportConfig {
        url,
        timeout: Duration::from_secs(5),
        gzip: false,
    }
}

/// Accept one connection, capture the request, answer with `body`.
fn serve_once(body: &'static str) -> (String, std::thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/v2/", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_millis(500)))
            .unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    if request_complete(&request) {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(split) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..split]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + length
}

#[test]
fn test_posts_form_encoded_body() {
    let (url, server) = serve_once(r#"{"ResponseCode": 200, "Data": ["Contact"]}"#);
    let transport = HttpTransport::new(config(url)).unwrap();

    let fields = vec![
        ("key".to_string(), "abc".to_string()),
        ("Operation".to_string(), "GetEntityTypes".to_string()),
    ];
    let raw = transport.post_form(&fields).unwrap();
    assert_eq!(raw.status, 200);
    assert!(raw.body.contains("Contact"));

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /api/v2/ "));
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: application/x-www-form-urlencoded"));
    assert!(request.ends_with("key=abc&Operation=GetEntityTypes"));
}

#[test]
fn test_client_over_http_end_to_end() {
    let (url, server) = serve_once(r#"{"ResponseCode": 200, "Data": [{"Name": "Contact"}]}"#);
    let transport = HttpTransport::new(config(url)).unwrap();
    let client = RamcoClient::with_transport(transport, "abc", ResponseHandler::default());

    let outcome = client.get_entity_types();
    assert_eq!(
        outcome.to_json(),
        serde_json::json!([{"ResponseCode": 200, "Data": [{"Name": "Contact"}]}])
    );
    server.join().unwrap();
}

#[test]
fn test_connection_refused_becomes_unknown_sentinel() {
    // Bind then drop to get a port with nothing listening.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let transport = HttpTransport::new(config(format!("http://127.0.0.1:{port}/"))).unwrap();
    let client = RamcoClient::with_transport(transport, "abc", ResponseHandler::default());

    assert_eq!(client.clear_cache(), Outcome::Failed(ErrorReply::unknown()));
}
