use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use dict_download::{get_download_iterator, DownloadConfig, DownloadError, RecordBatches, Result, WordRecord};
use url::Url;

const HEADER: &str = r#"{"type":"header","version":{"major":1,"minor":0,"patch":0,"dateOfCreation":"2024-01-01"},"records":1,"format":"full"}"#;
const RECORD: &str = r#"{"id":1,"r":["あ"],"s":[{"g":["a"]}]}"#;

fn file_source(content: &str) -> (tempfile::TempDir, Url) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words-en-1.0.0-full.jsonl");
    std::fs::write(&path, content).unwrap();
    let url = Url::from_file_path(&path).unwrap();
    (dir, url)
}

fn collect(url: &Url, config: &DownloadConfig) -> Result<Vec<WordRecord>> {
    get_download_iterator(url, config, None)?.collect()
}

fn loopback_config() -> DownloadConfig {
    DownloadConfig { use_system_proxy: false, ..DownloadConfig::default() }
}

fn read_request(stream: &mut TcpStream) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }
}

/// Serves one HTTP request with the given status line and body, pausing
/// for `stall` before closing when the body is incomplete.
fn serve_once(status: &str, body: &str, content_length: usize, stall: Duration) -> (Url, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = Url::parse(&format!("http://{}/words.jsonl", listener.local_addr().unwrap())).unwrap();
    let status = status.to_string();
    let body = body.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        read_request(&mut stream);
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/x-ndjson\r\nContent-Length: {content_length}\r\nConnection: close\r\n\r\n"
        );
        let _ = stream.write_all(head.as_bytes());
        let _ = stream.write_all(body.as_bytes());
        let _ = stream.flush();
        thread::sleep(stall);
    });
    (url, handle)
}

#[test]
fn test_end_to_end_example() {
    let (_dir, url) = file_source(&format!("{HEADER}\n{RECORD}"));
    let records = collect(&url, &DownloadConfig::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].readings, vec!["あ".to_string()]);
    assert_eq!(records[0].senses[0].glosses, vec!["a".to_string()]);
}

#[test]
fn test_chunk_size_does_not_change_records() {
    let content = format!("{HEADER}\r\n\r\n{RECORD}\r\n\n");
    let (_dir, url) = file_source(&content);
    let expected = collect(&url, &DownloadConfig::default()).unwrap();
    for chunk_size in [1, 2, 5, 17] {
        let config = DownloadConfig { chunk_size, ..DownloadConfig::default() };
        assert_eq!(collect(&url, &config).unwrap(), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn test_header_is_exposed() {
    let (_dir, url) = file_source(&format!("{HEADER}\n{RECORD}\n"));
    let mut records = get_download_iterator(&url, &DownloadConfig::default(), None).unwrap();
    assert!(records.next().unwrap().is_ok());
    let header = records.header().unwrap();
    assert_eq!(header.records, 1);
    assert_eq!(header.version.to_string(), "1.0.0");
}

#[test]
fn test_missing_header_yields_no_records() {
    let (_dir, url) = file_source(&format!("{RECORD}\n{HEADER}\n"));
    let mut records = get_download_iterator(&url, &DownloadConfig::default(), None).unwrap();
    assert!(matches!(records.next(), Some(Err(DownloadError::MissingHeader { .. }))));
    assert!(records.next().is_none());
}

#[test]
fn test_batches_over_file_source() {
    let mut content = HEADER.replace("\"records\":1", "\"records\":7");
    for id in 1..=7 {
        content.push('\n');
        content.push_str(&RECORD.replace("\"id\":1", &format!("\"id\":{id}")));
    }
    let (_dir, url) = file_source(&content);
    let records = get_download_iterator(&url, &DownloadConfig::default(), None).unwrap();
    let sizes: Vec<usize> = RecordBatches::new(records, 3)
        .unwrap()
        .map(|batch| batch.map(|b| b.len()))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(sizes, vec![3, 3, 1]);
}

#[test]
fn test_http_source() {
    let body = format!("{HEADER}\n{RECORD}\n");
    let (url, server) = serve_once("200 OK", &body, body.len(), Duration::ZERO);
    let records = collect(&url, &loopback_config()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    server.join().unwrap();
}

#[test]
fn test_http_error_status() {
    let (url, server) = serve_once("404 Not Found", "", 0, Duration::ZERO);
    match get_download_iterator(&url, &loopback_config(), None) {
        Err(DownloadError::HttpStatus { status, .. }) => assert_eq!(status, 404),
        Err(e) => panic!("expected a status error, got {e}"),
        Ok(_) => panic!("expected a status error"),
    }
    server.join().unwrap();
}

#[test]
fn test_http_stall_times_out() {
    let body = format!("{HEADER}\n{RECORD}\n");
    let (url, server) = serve_once("200 OK", &body, body.len() + 100, Duration::from_millis(1500));
    let config = DownloadConfig { read_timeout_ms: 200, ..loopback_config() };
    let mut records = get_download_iterator(&url, &config, None).unwrap();
    assert_eq!(records.next().unwrap().unwrap().id, 1);
    let err = records.next().unwrap().unwrap_err();
    assert!(err.is_timeout(), "expected a timeout, got {err}");
    assert!(records.next().is_none());
    drop(records);
    server.join().unwrap();
}
