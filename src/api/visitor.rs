use axum::{
    extract::ConnectInfo,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::net::SocketAddr;

use super::{client_ip, time_srv};

/// Response body of `GET /`.
#[derive(Debug, Serialize)]
pub struct VisitorInfo {
    pub timestamp: String,
    pub ip: String,
}

pub async fn time_and_ip(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let info = VisitorInfo {
        timestamp: time_srv::timestamp(),
        ip: client_ip::resolve(&headers, peer),
    };

    (StatusCode::OK, Json(info))
}
