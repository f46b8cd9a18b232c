//! In-process harness: the production router behind a fixed peer address.

use axum::{
    body::{Body, Bytes},
    extract::connect_info::MockConnectInfo,
    http::{header::CONTENT_TYPE, HeaderMap, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::net::SocketAddr;
use tower::ServiceExt;

use timeip_ws::app::App;

/// Peer address every in-process request appears to come from
pub const MOCK_PEER: ([u8; 4], u16) = ([10, 1, 2, 3], 40000);

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: App::router().layer(MockConnectInfo(SocketAddr::from(MOCK_PEER))),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.get_with_headers(path, &[]).await
    }

    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let request = headers
            .iter()
            .fold(Request::get(path), |builder, (name, value)| {
                builder.header(*name, *value)
            })
            .body(Body::empty())
            .unwrap();

        self.request(request).await
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        TestResponse::read(response).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully buffered router response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    async fn read(response: Response<Body>) -> Self {
        let (parts, body) = response.into_parts();
        let body = body.collect().await.unwrap().to_bytes();

        Self {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("body should be JSON")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}
