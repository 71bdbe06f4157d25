use bytes::Bytes;
use url::Url;

use crate::shared::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

/// Mirrors the browser's `Request.destination` hint for an intercepted fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestDestination {
    Document,
    Image,
    Font,
    Style,
    Script,
    Other,
}

/// An intercepted outgoing request, as seen by the cache router.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub destination: RequestDestination,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: &str, destination: RequestDestination) -> Result<Self> {
        Ok(Self {
            method,
            url: Url::parse(url)?,
            destination,
        })
    }

    pub fn get(url: &str) -> Result<Self> {
        Self::new(HttpMethod::Get, url, RequestDestination::Other)
    }

    /// Identity of the request inside a cache bucket.
    pub fn cache_key(&self) -> String {
        self.url.to_string()
    }

    pub fn path_extension(&self) -> Option<&str> {
        let path = self.url.path();
        let file = path.rsplit('/').next()?;
        match file.rsplit_once('.') {
            Some((name, ext)) if !name.is_empty() => Some(ext),
            _ => None,
        }
    }
}

/// A captured response: status, headers and body, cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Bytes::from(value.to_string()),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Synthetic body returned when API traffic fails with no cached copy,
    /// so the UI can tell "offline fallback" from a genuine fault.
    pub fn offline_fallback() -> Self {
        Self::json(
            503,
            &serde_json::json!({
                "error": "offline",
                "message": "Request failed while offline"
            }),
        )
    }
}
