//! Loopback HTTP server for tests that need a real fetch.

#![allow(dead_code)]
#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn html(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "text/html; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: "404 Not Found",
            content_type: "text/html",
            body: b"<h1>Not Found</h1>".to_vec(),
        }
    }
}

fn read_request(stream: &mut TcpStream) {
    let mut request = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&chunk[..n]),
        }
    }
}

fn answer(mut stream: TcpStream, reply: &Reply) {
    read_request(&mut stream);
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reply.content_type,
        reply.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
}

/// Serve `reply` to every request until the test process exits.
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub fn serve(reply: Reply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            answer(stream, &reply);
        }
    });
    format!("http://{addr}")
}

/// Accept connections but never answer.
pub fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
            thread::sleep(Duration::from_millis(10));
        }
    });
    format!("http://{addr}")
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/")
}

/// German article page: navigation, one heading, two content paragraphs, a footer.
pub const ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="de">
<head><meta charset="utf-8"><title>Radwege</title></head>
<body>
  <ul class="nav">
    <li><a href="/">Startseite</a></li>
    <li><a href="/politik">Politik</a></li>
    <li><a href="/sport">Sport</a></li>
  </ul>
  <h1>Neue Radwege in der Innenstadt</h1>
  <p>Die Stadt hat in den vergangenen Jahren viel Geld in den Ausbau der Radwege gesteckt, und die meisten Bürger sind mit dem Ergebnis zufrieden. Trotzdem gibt es noch immer Stellen, an denen sich Radfahrer und Autofahrer in die Quere kommen.</p>
  <p>Der Verkehrsausschuss will sich deshalb im nächsten Monat mit den Vorschlägen der Anwohner beschäftigen, die sich schon seit langer Zeit für eine bessere Lösung an der Kreuzung vor dem Bahnhof einsetzen und dafür viele Unterschriften gesammelt haben.</p>
  <div class="footer">© 2024 Stadtanzeiger</div>
</body>
</html>"#;

pub const ARTICLE_TEXT: &str = "Neue Radwege in der Innenstadt\n\
Die Stadt hat in den vergangenen Jahren viel Geld in den Ausbau der Radwege gesteckt, und die meisten Bürger sind mit dem Ergebnis zufrieden. Trotzdem gibt es noch immer Stellen, an denen sich Radfahrer und Autofahrer in die Quere kommen.\n\
Der Verkehrsausschuss will sich deshalb im nächsten Monat mit den Vorschlägen der Anwohner beschäftigen, die sich schon seit langer Zeit für eine bessere Lösung an der Kreuzung vor dem Bahnhof einsetzen und dafür viele Unterschriften gesammelt haben.";

/// Single short English paragraph; the classifier keeps nothing.
pub const SHORT_PAGE: &str = "<html><body><p>Hello world, this is a long enough paragraph to not be boilerplate.</p></body></html>";

pub const SHORT_PAGE_TEXT: &str = "Hello world, this is a long enough paragraph to not be boilerplate.";
