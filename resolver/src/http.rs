use crate::errors::Result;

use async_trait::async_trait;
use log::info;
use reqwest::header::CONTENT_TYPE;
use std::env;
use std::time::Instant;
use url::Url;

const USER_AGENT_VAR: &str = "RESOLVER_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    Bytes(Vec<u8>),
    Text(String),
}

impl HttpBody {
    pub fn len(&self) -> usize {
        match self {
            HttpBody::Bytes(inner) => inner.len(),
            HttpBody::Text(inner) => inner.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            HttpBody::Bytes(inner) => inner,
            HttpBody::Text(inner) => inner.into_bytes(),
        }
    }
}

#[async_trait]
pub trait HttpGet: Send + Sync {
    /// Fetches `url`, failing on transport errors and non success statuses
    async fn get(&self, url: &Url) -> Result<HttpBody>;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<HttpClient> {
        Ok(HttpClient {
            client: reqwest::Client::builder().user_agent(user_agent).build()?,
        })
    }

    /// Builds a client using `RESOLVER_USER_AGENT` as the user agent if it is set
    pub fn from_env() -> Result<HttpClient> {
        let user_agent = env::var(USER_AGENT_VAR)
            .unwrap_or_else(|_| format!("resolver/{}", env!("CARGO_PKG_VERSION")));
        HttpClient::new(&user_agent)
    }
}

fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/")
        || mime == "application/json"
        || mime == "application/xml"
        || mime == "application/x-www-form-urlencoded"
}

#[async_trait]
impl HttpGet for HttpClient {
    async fn get(&self, url: &Url) -> Result<HttpBody> {
        let download_time = Instant::now();
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        let textual = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, is_textual);
        let body = if textual {
            HttpBody::Text(resp.text().await?)
        } else {
            HttpBody::Bytes(resp.bytes().await?.to_vec())
        };

        info!(
            "downloaded {} bytes from {url} in {:.2?}",
            body.len(),
            download_time.elapsed()
        );
        Ok(body)
    }
}
