//! Minimal HTTP/1.1 server answering HEAD requests with fixed redirects.
//!
//! Routes:
//! - `/old` redirects (301) to `/new`
//! - `/moved` redirects (302) to `/old`, so it takes two hops to `/new`
//! - `/r3` to `/r2` to `/r1` to `/new`, one hop more than the default limit
//! - `/new` and `/page` answer 200
//! - everything else answers 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts the server in a background thread and returns its base URL without
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn route(path: &str) -> (&'static str, Option<&'static str>) {
    match path {
        "/old" => ("301 Moved Permanently", Some("/new")),
        "/moved" => ("302 Found", Some("/old")),
        "/r3" => ("301 Moved Permanently", Some("/r2")),
        "/r2" => ("301 Moved Permanently", Some("/r1")),
        "/r1" => ("301 Moved Permanently", Some("/new")),
        "/new" | "/page" => ("200 OK", None),
        _ => ("404 Not Found", None),
    }
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");

    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let (status, location) = route(path);
    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
        status, location
    );
    let _ = stream.write_all(response.as_bytes());
}
