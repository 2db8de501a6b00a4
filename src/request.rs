use crate::error::{ApiError, ApiResult};
use proyectalia_shared::protocol::HttpMethod;
use std::collections::HashMap;

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP 客户端特性 (Trait)
///
/// `?Send` because the browser implementation holds JS values.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    /// Sends the request. Only transport failures are errors; any status
    /// code comes back as a response.
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// 实现层: reqwest 客户端 (native targets)
// =========================================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);

        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

/// A request as seen by [`MockHttpClient`].
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

#[cfg(test)]
#[derive(Default)]
pub struct MockHttpClient {
    // ("METHOD url", (Status, Response Body)); None simulates a transport failure
    responses: RefCell<HashMap<String, Option<(u16, String)>>>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(Self::key(method, url), Some((status, body.to_string())));
    }

    pub fn mock_raw(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert(Self::key(method, url), Some((status, body.to_string())));
    }

    pub fn mock_offline(&self, method: HttpMethod, url: &str) {
        self.responses.borrow_mut().insert(Self::key(method, url), None);
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: req.url.clone(),
            method: req.method,
            headers: req.headers.clone(),
            body: req.body.clone(),
        });

        match self.responses.borrow().get(&Self::key(req.method, &req.url)) {
            Some(Some((status, body))) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Some(None) => Err(ApiError::transport("connection refused")),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn reqwest_client_sends_headers_and_reads_status() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let raw = String::from_utf8_lossy(&buf[..n]).to_string();

            let body = r#"{"message":"Proyecto no encontrado"}"#;
            let response = format!(
                "HTTP/1.1 404 Not Found\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            raw
        });

        let client = ReqwestHttpClient::new();
        let req = HttpRequest::new(&format!("http://{addr}/api/projects/9"), HttpMethod::Get)
            .with_header("Authorization", "Bearer abc");
        let resp = client.send(req).await.unwrap();

        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        assert!(resp.body.contains("Proyecto no encontrado"));

        let raw = server.await.unwrap().to_lowercase();
        assert!(raw.starts_with("get /api/projects/9 http/1.1"));
        assert!(raw.contains("authorization: bearer abc"));
    }

    #[tokio::test]
    async fn reqwest_client_reports_refused_connections_as_transport_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ReqwestHttpClient::new()
            .send(HttpRequest::new(&format!("http://{addr}/api"), HttpMethod::Get))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
