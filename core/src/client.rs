//! Request builder, response parser and single-shot fetch for the
//! nearest-places endpoint.
//!
//! # Design
//! `PlacesClient` holds only a `base_url`. `build_fetch_nearest` produces an
//! `HttpRequest`, `parse_fetch_nearest` consumes an `HttpResponse`, and
//! `fetch_nearest` glues the two around exactly one `Transport::execute`.

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::NearestQuery;

const NEAREST_PATH: &str = "/api/places/nearest";

/// Stateless client for the nearest-places service.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    base_url: String,
}

impl PlacesClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `GET {base}/api/places/nearest?lat=..&lng=..&category=..&limit=..`.
    pub fn build_fetch_nearest(&self, query: &NearestQuery) -> Result<HttpRequest, ApiError> {
        let params = [
            ("lat", query.lat.to_string()),
            ("lng", query.lng.to_string()),
            ("category", query.category.clone()),
            ("limit", query.limit.to_string()),
        ];
        let url = Url::parse_with_params(&format!("{}{NEAREST_PATH}", self.base_url), &params)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        Ok(HttpRequest {
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Interpret the response: any non-2xx status is `RequestFailed`,
    /// otherwise the body must be JSON.
    pub fn parse_fetch_nearest(&self, response: HttpResponse) -> Result<Value, ApiError> {
        if !response.is_success() {
            warn!(status = response.status, "nearest places request failed");
            return Err(ApiError::RequestFailed);
        }
        serde_json::from_str(&response.body).map_err(|e| {
            debug!(error = %e, "nearest places response is not valid JSON");
            ApiError::DecodeFailed(e.to_string())
        })
    }

    /// Perform one nearest-places lookup through `transport`. No retries.
    pub async fn fetch_nearest<T: Transport>(
        &self,
        transport: &T,
        query: &NearestQuery,
    ) -> Result<Value, ApiError> {
        let request = self.build_fetch_nearest(query)?;
        debug!(url = %request.url, "fetching nearest places");
        let response = transport.execute(request).await?;
        self.parse_fetch_nearest(response)
    }
}
