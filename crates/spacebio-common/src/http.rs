use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::{Result, SpacebioError};

/// An HTTP client that only talks to the hosts of the configured backend endpoints.
/// Every outbound request from the dashboard goes through this type.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl EndpointClient {
    /// Builds a client whose allowlist is the set of hosts named by `base_urls`.
    pub fn new(base_urls: &[&str], timeout: Duration) -> Result<Self> {
        let mut allowlist = HashSet::new();
        for base in base_urls {
            let parsed = Url::parse(base)
                .map_err(|e| SpacebioError::InvalidUrl(format!("{}: {}", base, e)))?;
            let host = parsed
                .host_str()
                .ok_or_else(|| SpacebioError::InvalidUrl(format!("{}: missing host", base)))?;
            allowlist.insert(host.to_string());
        }

        let client = ClientBuilder::new().timeout(timeout).build()?;

        Ok(Self { client, allowlist })
    }

    /// Validates that a URL points at one of the configured hosts.
    pub fn is_allowed(&self, url: &str) -> bool {
        Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(|h| self.allowlist.contains(h)))
            .unwrap_or(false)
    }

    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        self.check(url)?;
        Ok(self.client.get(url))
    }

    pub fn post(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        self.check(url)?;
        Ok(self.client.post(url))
    }

    fn check(&self, url: &str) -> Result<()> {
        if self.is_allowed(url) {
            Ok(())
        } else {
            Err(SpacebioError::EndpointNotAllowed(url.to_string()))
        }
    }
}

/// Joins an endpoint base (`http://host/api`) with a route (`articles`).
pub fn join_endpoint(base: &str, route: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), route.trim_start_matches('/'))
}
