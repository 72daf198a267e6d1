//! HTTP implementation of [`CatalogApi`] over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shiori_model::{ApiEnvelope, Category, Chapter, Entry, FilterCriteria};

use super::CatalogApi;
use crate::error::{ApiError, ApiResult};

/// Catalog client for the collection backend.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Create a new client for `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        log::info!("[HttpCatalogApi] base URL: {}", base_url);

        Self { client, base_url }
    }

    /// Build a full URL for a given path.
    pub fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Execute a GET, unwrap the `{ data }` envelope, and handle common
    /// errors.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.build_url(path);
        log::debug!("[HttpCatalogApi] GET {} params={:?}", url, params);

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let envelope: ApiEnvelope<T> =
            serde_json::from_slice(&bytes).map_err(ApiError::Decode)?;
        Ok(envelope.data)
    }
}


#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_collection(
        &self,
        criteria: &FilterCriteria,
    ) -> ApiResult<Vec<Entry>> {
        self.get_envelope("/collection", &criteria.request_params())
            .await
    }

    async fn fetch_entry(&self, slug: &str) -> ApiResult<Entry> {
        let path = format!("/collection/{}", urlencoding::encode(slug));
        self.get_envelope(&path, &[]).await
    }

    async fn fetch_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_envelope("/categories", &[]).await
    }

    async fn fetch_chapter(
        &self,
        slug: &str,
        number: u32,
    ) -> ApiResult<Chapter> {
        let path =
            format!("/collection/{}/{}", urlencoding::encode(slug), number);
        self.get_envelope(&path, &[]).await
    }
}
