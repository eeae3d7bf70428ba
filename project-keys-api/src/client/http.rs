//! HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;

use super::HttpKeyApi;

impl HttpKeyApi {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let request = self.authorize(self.client.get(&url));

        let (status, text) = HttpUtils::execute_request(request, "GET", &url).await?;
        let text = HttpUtils::ensure_success(status, text)?;
        HttpUtils::parse_json(&text)
    }

    /// 执行 PUT 请求
    ///
    /// An empty success body parses as `T::default()`.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize,
    {
        let url = self.url(path);
        let body_json =
            serde_json::to_string(body).map_err(|e| ApiError::SerializationError {
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .authorize(self.client.put(&url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_json);

        let (status, text) = HttpUtils::execute_request(request, "PUT", &url).await?;
        let text = HttpUtils::ensure_success(status, text)?;

        if text.trim().is_empty() {
            return Ok(T::default());
        }
        HttpUtils::parse_json(&text)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let request = self.authorize(self.client.delete(&url));

        let (status, text) = HttpUtils::execute_request(request, "DELETE", &url).await?;
        HttpUtils::ensure_success(status, text)?;
        Ok(())
    }
}
