use axum::http::{HeaderMap, HeaderValue};
use std::net::SocketAddr;

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Resolve the client address for a request.
///
/// An `X-Forwarded-For` header wins and is returned verbatim, proxy chain and
/// all. Repeated header lines are joined with `,` in the order received.
/// Without the header the IP of the TCP peer is used.
pub fn resolve(headers: &HeaderMap, peer: SocketAddr) -> String {
    forwarded_for(headers).unwrap_or_else(|| peer.ip().to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(X_FORWARDED_FOR)
        .iter()
        .map(decode_latin1)
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// Header bytes are ISO-8859-1, so every byte maps to exactly one char.
fn decode_latin1(value: &HeaderValue) -> String {
    value.as_bytes().iter().map(|&b| char::from(b)).collect()
}
