#![allow(dead_code)]

use std::io::Read;

use chrono::{FixedOffset, TimeZone};
use flate2::read::ZlibDecoder;
use kiln::{DocumentConfig, StreamFilters};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Config with fixed metadata so rendered documents are reproducible.
pub fn config() -> DocumentConfig {
    let date = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2023, 1, 2, 3, 4, 5)
        .unwrap();
    DocumentConfig::default()
        .with_title("t")
        .with_author("a")
        .with_producer("p")
        .with_creation_date(date)
}

pub fn plain_config() -> DocumentConfig {
    config().with_xref_stream_filters(StreamFilters::NONE)
}

pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Offset given after the last `startxref`.
pub fn start_xref(pdf: &[u8]) -> usize {
    let marker = b"startxref\n";
    let pos = pdf.windows(marker.len()).rposition(|w| w == marker).unwrap() + marker.len();
    let end = pos + pdf[pos..].iter().position(|b| *b == b'\n').unwrap();
    std::str::from_utf8(&pdf[pos..end]).unwrap().parse().unwrap()
}

/// Stream content and dictionary text of the object starting at `offset`.
pub fn stream_at(pdf: &[u8], offset: usize) -> (String, Vec<u8>) {
    let body = &pdf[offset..];
    let start = find(body, b"stream\n").unwrap();
    let end = find(body, b"\nendstream").unwrap();
    let header = String::from_utf8(body[..start].to_vec()).unwrap();
    (header, body[start + b"stream\n".len()..end].to_vec())
}

pub fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

/// Reverses the hex filter: lowercase digits terminated by `>`.
pub fn unhex(data: &[u8]) -> Vec<u8> {
    let digits = data.strip_suffix(b">").unwrap();
    hex::decode(digits).unwrap()
}
