use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

/// Status and body of an API call.
///
/// 4xx and 5xx responses are returned here, not as errors, so callers can
/// inspect validation messages.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct MenuClient {
    client: Client,
    base_url: String,
}

impl MenuClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (timeouts, pooling, proxies).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(builder: RequestBuilder) -> Result<ApiResponse, reqwest::Error> {
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;

        // Plain-text bodies (the liveness route) come back as JSON strings.
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(ApiResponse { status, body })
    }

    /// `GET /`
    pub async fn health(&self) -> Result<ApiResponse, reqwest::Error> {
        Self::send(self.request(Method::GET, "/")).await
    }

    /// `GET /api/menu`
    pub async fn list(&self) -> Result<ApiResponse, reqwest::Error> {
        Self::send(self.request(Method::GET, "/api/menu")).await
    }

    /// `GET /api/menu/{id}`
    pub async fn get(&self, id: &str) -> Result<ApiResponse, reqwest::Error> {
        Self::send(self.request(Method::GET, &format!("/api/menu/{}", id))).await
    }

    /// `POST /api/menu`
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        item: &T,
    ) -> Result<ApiResponse, reqwest::Error> {
        Self::send(self.request(Method::POST, "/api/menu").json(item)).await
    }

    /// `PUT /api/menu/{id}`
    pub async fn update<T: Serialize + ?Sized>(
        &self,
        id: &str,
        patch: &T,
    ) -> Result<ApiResponse, reqwest::Error> {
        Self::send(
            self.request(Method::PUT, &format!("/api/menu/{}", id))
                .json(patch),
        )
        .await
    }

    /// `DELETE /api/menu/{id}`
    pub async fn delete(&self, id: &str) -> Result<ApiResponse, reqwest::Error> {
        Self::send(self.request(Method::DELETE, &format!("/api/menu/{}", id))).await
    }
}
