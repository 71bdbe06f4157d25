use async_trait::async_trait;
use url::Url;

use crate::application::ports::HttpGateway;
use crate::domain::entities::{HttpMethod, HttpRequest, HttpResponse};
use crate::shared::error::{AppError, Result};

/// reqwest-backed gateway. The API-strategy timeout is owned by the router,
/// so the client itself imposes none.
pub struct ReqwestGateway {
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigurationError(e.to_string()))?;
        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
        HttpMethod::Options => reqwest::Method::OPTIONS,
    }
}

async fn capture(response: reqwest::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect();
    let body = response.bytes().await?;

    Ok(HttpResponse::new(status, headers, body))
}

#[async_trait]
impl HttpGateway for ReqwestGateway {
    async fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let response = self
            .client
            .request(to_reqwest_method(request.method), request.url.clone())
            .send()
            .await?;

        capture(response).await
    }

    async fn post_json(&self, url: &Url, body: &serde_json::Value) -> Result<HttpResponse> {
        let response = self.client.post(url.clone()).json(body).send().await?;
        capture(response).await
    }
}
