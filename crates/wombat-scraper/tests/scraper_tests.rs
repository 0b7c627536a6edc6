//! Tests for document loading from strings, files and a loopback server.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use wombat_dom::NodeId;
use wombat_html::ParseIssueKind;
use wombat_scraper::net::FetchError;
use wombat_scraper::{LoadError, Scraper, is_url, load_document, parse_html_string};

/// Serve one canned HTML response and hand back the raw request head.
fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let url = format!("http://{}/", listener.local_addr().expect("local addr"));
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            let read = reader.read_line(&mut line).expect("read request");
            if read == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }
        stream.write_all(response.as_bytes()).expect("write response");
        head
    });

    (url, handle)
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wombat-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn test_parse_html_string() {
    let doc = parse_html_string("<ul><li>one<li>two</ul><p>unclosed");
    assert_eq!(doc.html_source, "<ul><li>one<li>two</ul><p>unclosed");
    assert!(doc.source_path.is_empty());
    assert_eq!(doc.dom.find_by_tag(NodeId::ROOT, "li").len(), 2);
    assert!(
        doc.parse_issues
            .iter()
            .any(|issue| issue.kind == ParseIssueKind::UnclosedAtEndOfInput)
    );
}

#[test]
fn test_load_local_file() {
    let path = temp_file("page.html", "<div id=\"main\">Hello &amp; welcome</div>");
    let path_str = path.to_str().unwrap();

    let doc = load_document(path_str).unwrap();
    assert_eq!(doc.source_path, path_str);
    let main = doc.dom.find_by_id(NodeId::ROOT, "main").unwrap();
    assert_eq!(doc.dom.text_content(main), "Hello & welcome");
    assert!(doc.parse_issues.is_empty());

    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file_is_a_file_error() {
    let path = std::env::temp_dir().join("wombat-definitely-missing.html");
    let err = load_document(path.to_str().unwrap()).unwrap_err();
    match &err {
        LoadError::File { path: failed, .. } => assert_eq!(failed, &path),
        LoadError::Network(other) => panic!("expected file error, got {other}"),
    }
    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn test_scrape_sends_headers_and_parses() {
    let (url, server) = serve_once(
        "200 OK",
        "text/html; charset=utf-8",
        "<html><body><a class=\"x\" href=\"/a\">A</a><a class=\"x\" href=\"/b\">B</a></body></html>",
    );
    let scraper = Scraper::new([("User-Agent", "Go-HTML-Parser"), ("Accept-Language", "en")])
        .timeout(Duration::from_secs(5));
    let doc = scraper.scrape(&url).unwrap();

    assert_eq!(doc.source_path, url);
    assert_eq!(doc.dom.find_by_class(NodeId::ROOT, "x").len(), 2);

    let head = server.join().unwrap().to_ascii_lowercase();
    assert!(head.contains("user-agent: go-html-parser"));
    assert!(head.contains("accept-language: en"));
    assert!(!head.contains("wombat/"));
}

#[test]
fn test_load_document_fetches_urls() {
    let (url, server) = serve_once("200 OK", "text/html", "<p>remote</p>");
    let doc = Scraper::default().load_document(&url).unwrap();
    let p = doc.dom.find_by_tag(NodeId::ROOT, "p")[0];
    assert_eq!(doc.dom.text_content(p), "remote");
    let _ = server.join().unwrap();
}

#[test]
fn test_scrape_rejects_non_html() {
    let (url, server) = serve_once("200 OK", "application/json", "{}");
    let err = Scraper::default().scrape(&url).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Network(FetchError::ContentType(ref ct)) if ct == "application/json"
    ));
    let _ = server.join().unwrap();
}

#[test]
fn test_scrape_reports_status() {
    let (url, server) = serve_once("404 Not Found", "text/html", "missing");
    let err = Scraper::default().scrape(&url).unwrap_err();
    assert!(matches!(err, LoadError::Network(FetchError::Status(404))));
    let _ = server.join().unwrap();
}

#[test]
fn test_is_url() {
    assert!(is_url("http://example.com"));
    assert!(is_url("https://example.com/page"));
    assert!(!is_url("page.html"));
    assert!(!is_url("/tmp/http://weird"));
    assert!(!is_url("ftp://example.com"));
}
