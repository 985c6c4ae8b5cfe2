//! HTTP client for the BridgeDB webservice (plus the PubChem CID lookup
//! that backs compound-by-name queries).

use bridgechat_domain::{DataSource, Species, Xref, parse_xref_lines};
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Public BridgeDB webservice.
pub const DEFAULT_BASE_URL: &str = "https://webservice.bridgedb.org";

/// PubChem PUG REST service, used to resolve compound names to CIDs.
pub const DEFAULT_PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov";

/// Errors from the BridgeDB / PubChem HTTP calls.
#[derive(Error, Debug)]
pub enum BridgeDbError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("No PubChem CID found for {0:?}")]
    CompoundNotFound(String),
}

impl From<reqwest::Error> for BridgeDbError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BridgeDbError::Timeout
        } else {
            BridgeDbError::Request(e.to_string())
        }
    }
}

/// Client for the xrefs endpoint.
///
/// One instance is shared for the lifetime of the process; every lookup is a
/// single GET with the client-wide timeout applied.
#[derive(Debug, Clone)]
pub struct BridgeDbClient {
    http: reqwest::Client,
    base_url: String,
    pubchem_base_url: String,
}

impl BridgeDbClient {
    /// Create a client against the given BridgeDB base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            pubchem_base_url: DEFAULT_PUBCHEM_BASE_URL.to_string(),
        }
    }

    /// Override the PubChem base URL (used by the compound lookup).
    pub fn with_pubchem_base_url(mut self, url: impl Into<String>) -> Self {
        self.pubchem_base_url = url.into();
        self
    }

    /// Build the xrefs endpoint URL:
    /// `{base}/{species}/xrefs/{source code}/{identifier}`.
    ///
    /// `Url::parse` percent-encodes path characters like the space in
    /// "Homo sapiens".
    pub fn xrefs_url(
        &self,
        species: &Species,
        source: &DataSource,
        identifier: &str,
    ) -> Result<Url, BridgeDbError> {
        let raw = format!(
            "{}/{}/xrefs/{}/{}",
            self.base_url.trim_end_matches('/'),
            species.as_str(),
            source.code(),
            identifier.trim()
        );
        Url::parse(&raw).map_err(|e| BridgeDbError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// Look up all cross-references for one identifier. Exactly one GET.
    pub async fn xrefs(
        &self,
        species: &Species,
        source: &DataSource,
        identifier: &str,
    ) -> Result<Vec<Xref>, BridgeDbError> {
        let url = self.xrefs_url(species, source, identifier)?;
        debug!("BridgeDB lookup: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BridgeDbError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        parse_xref_lines(&body).map_err(|e| BridgeDbError::MalformedBody(e.to_string()))
    }

    /// Resolve a compound name to its first PubChem CID.
    pub async fn pubchem_cid(&self, name: &str) -> Result<String, BridgeDbError> {
        let raw = format!(
            "{}/rest/pug/compound/name/{}/cids/TXT",
            self.pubchem_base_url.trim_end_matches('/'),
            name.trim()
        );
        let url = Url::parse(&raw).map_err(|e| BridgeDbError::InvalidUrl(format!("{}: {}", raw, e)))?;
        debug!("PubChem CID lookup: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(BridgeDbError::CompoundNotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(BridgeDbError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        match body.lines().next().map(str::trim) {
            Some(cid) if !cid.is_empty() => Ok(cid.to_string()),
            _ => Err(BridgeDbError::CompoundNotFound(name.to_string())),
        }
    }
}

impl Default for BridgeDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(30))
    }
}
