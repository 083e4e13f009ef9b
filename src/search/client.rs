//! Pixabay search client

use super::params::{ImageSearch, VideoSearch};
use crate::config::{Settings, DEFAULT_BASE_URL};
use crate::error::PixabayError;
use crate::network::{ApiResponse, HttpClient, QueryParams};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Client for the Pixabay image and video search endpoints
///
/// Holds no mutable state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: HttpClient,
    api_key: String,
    base_url: Url,
    validate: bool,
}

impl PixabayClient {
    /// Create a client for the public API with the given key
    pub fn new(api_key: impl Into<String>) -> Result<Self, PixabayError> {
        Ok(Self {
            http: HttpClient::new()?,
            api_key: api_key.into(),
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            validate: false,
        })
    }

    /// Create a client from loaded settings
    pub fn with_settings(settings: &Settings) -> Result<Self, PixabayError> {
        let api_key = settings
            .pixabay
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(PixabayError::MissingApiKey)?;

        Ok(Self {
            http: HttpClient::with_settings(&settings.outgoing)?,
            api_key,
            base_url: parse_base_url(&settings.pixabay.base_url)?,
            validate: settings.pixabay.validate_locally,
        })
    }

    /// Point the client at another endpoint
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, PixabayError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Check filters locally before each request
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint for image searches
    pub fn images_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Endpoint for video searches
    pub fn videos_url(&self) -> Result<Url, PixabayError> {
        Ok(self.base_url.join("videos/")?)
    }

    /// Query parameters an image search would send
    pub fn image_params(&self, search: &ImageSearch) -> QueryParams {
        search.to_params(&self.api_key)
    }

    /// Query parameters a video search would send
    pub fn video_params(&self, search: &VideoSearch) -> QueryParams {
        search.to_params(&self.api_key)
    }

    /// Search images
    ///
    /// Returns the decoded JSON body on HTTP 200. Any other status becomes
    /// [`PixabayError::Api`] carrying the raw body.
    pub async fn search_images(&self, search: &ImageSearch) -> Result<Value, PixabayError> {
        if self.validate {
            search.validate()?;
        }

        debug!(
            q = %search.query,
            page = search.page,
            per_page = search.per_page,
            "Searching images"
        );

        let url = self.images_url();
        self.fetch(&url, &self.image_params(search)).await
    }

    /// Search videos
    ///
    /// Same contract as [`search_images`](Self::search_images), against the
    /// `videos/` endpoint.
    pub async fn search_videos(&self, search: &VideoSearch) -> Result<Value, PixabayError> {
        if self.validate {
            search.validate()?;
        }

        debug!(
            q = %search.query,
            page = search.page,
            per_page = search.per_page,
            "Searching videos"
        );

        let url = self.videos_url()?;
        self.fetch(&url, &self.video_params(search)).await
    }

    async fn fetch(&self, url: &Url, params: &[(String, String)]) -> Result<Value, PixabayError> {
        debug!(endpoint = %url, "Sending request");
        let response = self.http.get_with_params(url.as_str(), params).await?;
        Self::handle_response(response)
    }

    fn handle_response(response: ApiResponse) -> Result<Value, PixabayError> {
        if !response.is_ok() {
            warn!(status = response.status, body = %response.text, "Pixabay API error");
            return Err(PixabayError::Api {
                status: response.status,
                message: response.text,
            });
        }

        Ok(response.json()?)
    }
}

/// Parse an endpoint root. Query and fragment are dropped so the image and
/// video endpoints are built the same way.
fn parse_base_url(raw: &str) -> Result<Url, PixabayError> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    url.set_query(None);
    url.set_fragment(None);

    // Without the trailing slash `join("videos/")` would replace the last segment
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
