use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, instrument};

use crate::model::Member;

pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

const USER_AGENT: &str = concat!("memberdesk/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy: {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed member payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub timeout_seconds: u64,
    pub proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            proxy: None,
        }
    }
}

pub fn build_client(options: &ClientOptions) -> Result<reqwest::Client, LoadError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(options.timeout_seconds));
    if let Some(proxy) = options.proxy.as_deref().filter(|p| !p.trim().is_empty()) {
        let proxy_cfg = reqwest::Proxy::all(proxy).map_err(|source| LoadError::ProxySetup {
            proxy: proxy.to_string(),
            source,
        })?;
        builder = builder.proxy(proxy_cfg);
    }
    builder
        .build()
        .map_err(|source| LoadError::HttpClientBuild { source })
}

/// Parses the endpoint body: a JSON array of member objects.
pub fn decode_members(url: &str, body: &[u8]) -> Result<Vec<Member>, LoadError> {
    serde_json::from_slice::<Vec<Member>>(body).map_err(|source| LoadError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Single GET of the whole collection. No retry.
#[instrument(skip(client))]
pub async fn fetch_members(client: &reqwest::Client, url: &str) -> Result<Vec<Member>, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| LoadError::Request {
            url: url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await.map_err(|source| LoadError::Request {
        url: url.to_string(),
        source,
    })?;
    decode_members(url, &body)
}

/// Fetches the collection, logging and swallowing any failure.
///
/// A failed load yields an empty collection.
pub async fn load_members(client: &reqwest::Client, url: &str) -> Vec<Member> {
    match fetch_members(client, url).await {
        Ok(members) => {
            info!(count = members.len(), "loaded members");
            members
        }
        Err(err) => {
            error!(error = %err, "error fetching members");
            Vec::new()
        }
    }
}
