//! Fetch-and-extract against a loopback HTTP server.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

mod common;

use std::time::Duration;

use common::{refused_url, serve, serve_silence, Reply, ARTICLE, ARTICLE_TEXT, SHORT_PAGE, SHORT_PAGE_TEXT};
use webpage2text::{
    extract_text_from_url, fetch_and_extract, Error, FetchError, Fetcher, Method, Options,
    FETCH_ERROR_PREFIX,
};

#[test]
fn article_is_reduced_to_its_content() {
    let url = serve(Reply::html(ARTICLE));

    match fetch_and_extract(&url, &Options::default()) {
        Ok(extraction) => {
            assert_eq!(extraction.method, Method::Boilerplate);
            assert_eq!(extraction.text, ARTICLE_TEXT);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn page_without_content_blocks_falls_back_to_full_text() {
    let url = serve(Reply::html(SHORT_PAGE));

    match fetch_and_extract(&url, &Options::default()) {
        Ok(extraction) => {
            assert_eq!(extraction.method, Method::Fallback);
            assert_eq!(extraction.text, SHORT_PAGE_TEXT);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn blank_page_gives_empty_text_not_an_error() {
    let url = serve(Reply::html("<html><body></body></html>"));
    assert_eq!(extract_text_from_url(&url, &Options::default()), "");
}

#[test]
fn http_error_status_becomes_error_text() {
    let base = serve(Reply::not_found());
    let url = format!("{base}/fehlt");

    let text = extract_text_from_url(&url, &Options::default());

    assert_eq!(
        text,
        format!("Ein Fehler ist aufgetreten: 404 Client Error: Not Found for url: {url}")
    );
}

#[test]
fn http_error_status_is_typed() {
    let url = serve(Reply::not_found());

    match fetch_and_extract(&url, &Options::default()) {
        Err(Error::Fetch(FetchError::Status { code, reason, .. })) => {
            assert_eq!(code, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn server_error_status_becomes_error_text() {
    let url = serve(Reply {
        status: "503 Service Unavailable",
        content_type: "text/plain",
        body: b"down".to_vec(),
    });

    let text = extract_text_from_url(&url, &Options::default());

    assert!(text.starts_with("Ein Fehler ist aufgetreten: 503 Server Error: Service Unavailable"));
}

#[test]
fn refused_connection_becomes_error_text() {
    let text = extract_text_from_url(&refused_url(), &Options::default());
    assert!(text.starts_with(FETCH_ERROR_PREFIX), "got {text:?}");
    assert!(text.len() > FETCH_ERROR_PREFIX.len());
}

#[test]
fn unresolvable_host_becomes_error_text() {
    let text = extract_text_from_url("http://host.invalid/", &Options::default());
    assert!(text.starts_with(FETCH_ERROR_PREFIX), "got {text:?}");
}

#[test]
fn silent_server_times_out() {
    let url = serve_silence();
    let options = Options {
        timeout: Duration::from_millis(300),
        ..Options::default()
    };

    match fetch_and_extract(&url, &options) {
        Err(Error::Fetch(FetchError::Request(err))) => assert!(err.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[test]
fn header_charset_is_used_for_decoding() {
    let url = serve(Reply {
        status: "200 OK",
        content_type: "text/html; charset=ISO-8859-1",
        body: b"<html><body><p>Gr\xFC\xDFe aus M\xFCnchen</p></body></html>".to_vec(),
    });

    let text = extract_text_from_url(&url, &Options::default());

    assert_eq!(text, "Grüße aus München");
}

#[test]
fn fetcher_reports_status_and_charset() {
    let url = serve(Reply {
        status: "200 OK",
        content_type: "text/html; charset=windows-1252",
        body: b"<p>x</p>".to_vec(),
    });
    let fetcher = Fetcher::new(&Options::default()).expect("client");

    let page = fetcher.fetch(&url).expect("page");

    assert_eq!(page.status, 200);
    assert_eq!(page.charset.as_deref(), Some("windows-1252"));
    assert_eq!(page.content, b"<p>x</p>");
}

#[test]
fn repeated_runs_give_identical_text() {
    let url = serve(Reply::html(ARTICLE));
    let first = extract_text_from_url(&url, &Options::default());
    let second = extract_text_from_url(&url, &Options::default());
    assert_eq!(first, second);
}
