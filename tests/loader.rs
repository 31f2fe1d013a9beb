// tests/loader.rs
//
// Loader against a throwaway local HTTP server. One connection per fixture.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use provider_dir::config::options::SourceOptions;
use provider_dir::core::net::LoadError;
use provider_dir::fetch::{self, LoadOutcome};
use provider_dir::schedule::{LoadTicket, LoadTrigger};

/// Serve exactly one request with `status` and `body`; returns the URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else { return };
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        // drain request head
        while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
            if line == "\r\n" || line == "\n" {
                break;
            }
            line.clear();
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(resp.as_bytes());
        let _ = stream.flush();
    });

    format!("http://{addr}/providers.json")
}

fn source(url: String) -> SourceOptions {
    SourceOptions { url, timeout: Some(Duration::from_secs(5)) }
}

#[test]
fn loads_and_normalizes_array() {
    let url = serve_once(
        "200 OK",
        r#"[{"Company":" Acme Roofing ","Rating":"9","number":"555.123.4567"},{"Category":"Home Services"}]"#,
    );
    let providers = fetch::collect_providers(&source(url)).unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].company, "Acme Roofing");
    assert_eq!(providers[0].rating, 5);
    assert_eq!(providers[0].phone, "(555) 123-4567");
    assert_eq!(providers[1].company, "Unnamed Provider");
}

#[test]
fn object_document_is_empty_collection() {
    let url = serve_once("200 OK", r#"{"error":"not a list"}"#);
    let providers = fetch::collect_providers(&source(url)).unwrap();
    assert!(providers.is_empty());
}

#[test]
fn server_error_is_response_error() {
    let url = serve_once("500 Internal Server Error", "oops");
    let err = fetch::collect_providers(&source(url)).unwrap_err();
    assert!(matches!(err, LoadError::Response { status: 500, .. }));
}

#[test]
fn malformed_json_is_decode_error() {
    let url = serve_once("200 OK", "[{\"Company\": ");
    let err = fetch::collect_providers(&source(url)).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
}

#[test]
fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port nobody is listening on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let err = fetch::collect_providers(&source(format!("http://127.0.0.1:{port}/"))).unwrap_err();
    assert!(matches!(err, LoadError::Transport { .. }));
}

#[test]
fn worker_reports_over_channel_and_wakes() {
    let url = serve_once("200 OK", r#"[{"Company":"Solo"}]"#);
    let (tx, rx) = mpsc::channel::<LoadOutcome>();
    let (wake_tx, wake_rx) = mpsc::channel::<()>();
    let ticket = LoadTicket { id: 7, trigger: LoadTrigger::Manual };

    let handle = fetch::spawn_load(ticket, source(url), tx, move || {
        let _ = wake_tx.send(());
    })
    .unwrap();

    let outcome = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert_eq!(outcome.ticket, ticket);
    assert_eq!(outcome.result.unwrap()[0].company, "Solo");
    wake_rx.recv_timeout(Duration::from_secs(10)).unwrap();
    handle.join().unwrap();
}
