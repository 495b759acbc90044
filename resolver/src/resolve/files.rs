use super::Resolver;
use crate::client::ClientState;
use crate::errors::{Error, Result};
use crate::http::{HttpBody, HttpGet};
use crate::structs::FileSource;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use url::Url;

const DATA_URI_PREFIX: &str = "data:image/jpg;base64,";

lazy_static! {
    static ref HTTP_URL: Regex = Regex::new(r"^https?://").unwrap();
}

impl<C: ClientState, H: HttpGet> Resolver<C, H> {
    /// Raw data becomes a jpg data uri, text is assumed to already be one
    pub fn resolve_to_base64(&self, source: FileSource) -> String {
        match source {
            FileSource::Bytes(bytes) => format!("{DATA_URI_PREFIX}{}", STANDARD.encode(bytes)),
            FileSource::Text(text) => text,
        }
    }

    /// Downloads http(s) urls. Any other text, including paths, and raw data
    /// are returned unchanged.
    pub async fn resolve_file(&self, source: FileSource) -> Result<FileSource> {
        match source {
            FileSource::Text(text) if HTTP_URL.is_match(&text) => {
                let body = self
                    .download(&text)
                    .await
                    .map_err(|why| Error::Fetch(text.clone(), Box::new(why)))?;
                if body.is_empty() {
                    info!("received url {text} with 0 bytes");
                }
                Ok(FileSource::Bytes(body.into_bytes()))
            }
            other => Ok(other),
        }
    }

    async fn download(&self, url: &str) -> Result<HttpBody> {
        let url = Url::parse(url)?;
        self.http.get(&url).await
    }
}
