use bloodbank_core::{Donor, DonorDraft, InventoryItem, SearchCriteria};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: StatusCode },
    /// The backend answered, but not with the expected JSON.
    #[error("unexpected payload from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl BackendError {
    fn http(path: &str, source: reqwest::Error) -> Self {
        BackendError::Http {
            path: path.to_string(),
            source,
        }
    }
}

/// JSON client for the donor/inventory REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: bloodbank_config::trim_base_url(&base_url.into()),
        }
    }

    pub fn from_config(client: Client, cfg: &bloodbank_config::ClientConfig) -> Self {
        Self::new(client, cfg.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        debug!("GET {}{}", self.base_url, path);
        let resp = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| BackendError::http(path, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                path: path.to_string(),
                status,
            });
        }

        resp.json().await.map_err(|e| {
            if e.is_decode() {
                BackendError::Decode {
                    path: path.to_string(),
                    source: e,
                }
            } else {
                BackendError::http(path, e)
            }
        })
    }

    /// `GET /donors`
    pub async fn list_donors(&self) -> Result<Vec<Donor>, BackendError> {
        self.get_json("/donors", &[]).await
    }

    /// `GET /inventory`
    pub async fn list_inventory(&self) -> Result<Vec<InventoryItem>, BackendError> {
        self.get_json("/inventory", &[]).await
    }

    /// `POST /donors`. The response body is ignored; callers re-fetch the list.
    pub async fn create_donor(&self, draft: &DonorDraft) -> Result<(), BackendError> {
        let path = "/donors";
        debug!("POST {}{}", self.base_url, path);
        let resp = self
            .client
            .post(self.url(path))
            .json(draft)
            .send()
            .await
            .map_err(|e| BackendError::http(path, e))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::Status {
                path: path.to_string(),
                status,
            })
        }
    }

    /// `GET /donors/search?state=..&city=..`. Matching rules are the backend's.
    pub async fn search_donors(&self, criteria: &SearchCriteria) -> Result<Vec<Donor>, BackendError> {
        self.get_json(
            "/donors/search",
            &[("state", criteria.state.as_str()), ("city", criteria.city.as_str())],
        )
        .await
    }
}
