//! HTTP client for the ILAB Sweat & Toil API.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{header::ACCEPT, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::{
    query::{build_endpoint, QueryFilters, DEFAULT_BASE_URL},
    types::{
        AdvancementLevel, Country, CountryData, CountryGood, CountryProfile, CountryStat, Good,
        Region, Resource, Sector, SuggestedAction, SuggestedActionArea,
    },
    Error,
};

/// Request header carrying the API secret key.
pub const SECRET_KEY_HEADER: &str = "X-API-KEY";

const USER_AGENT: &str = concat!("laborstats_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Sweat & Toil API.
///
/// Holds the secret key, the debug flag, and the filters applied to every
/// resource query. Each query builds a fresh `reqwest::Client`; no state is
/// shared between requests and nothing is cached or retried.
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://data.dol.gov`.
    base_api_url: String,
    secret_key: String,
    /// Logs the endpoint, request headers, and raw response body when set.
    debug: bool,
    /// Caller supplied request deadline. No timeout is applied when `None`.
    timeout: Option<Duration>,
    filters: QueryFilters,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("secret_key", &"<redacted>")
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("filters", &self.filters)
            .finish()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(secret_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, secret_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, secret_key: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            secret_key: secret_key.to_string(),
            debug: false,
            timeout: None,
            filters: QueryFilters::default(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Applies a total request deadline to every query.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces all filters.
    pub fn with_filters(mut self, filters: QueryFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn filters(&self) -> &QueryFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut QueryFilters {
        &mut self.filters
    }

    /// Adds a filter applied to every subsequent query.
    ///
    /// Accepted names are `limit`, `start_date`, `end_date`, `order`, and
    /// `date_column`. Anything else fails with [`Error::InvalidFilter`] and
    /// leaves the current filters untouched.
    pub fn add_filter(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.filters.add_filter(name, value)
    }

    /// Returns the URL a query for `R` would request with the current filters.
    pub fn endpoint<R: Resource>(&self) -> Result<Url, Error> {
        self.get_url(R::URI)
    }

    fn get_url(&self, resource_path: &str) -> Result<Url, Error> {
        let base = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::InvalidBaseUrl(e)
        })?;
        if base.cannot_be_a_base() {
            tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
            return Err(Error::CannotBeABase(self.base_api_url.clone()));
        }
        Ok(build_endpoint(&base, resource_path, &self.filters))
    }

    /// Sends a GET to `endpoint` and returns the raw body.
    ///
    /// An error payload in the body takes precedence over the status code: a
    /// non-200 response that carries `{"status": false, "error": ...}` is
    /// reported as [`Error::Api`], not [`Error::HttpStatus`].
    async fn send_request(&self, endpoint: Url) -> Result<Vec<u8>, Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;

        let mut request = client
            .get(endpoint)
            .header(SECRET_KEY_HEADER, self.secret_key.as_str())
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build request: {}", e);
                Error::Transport(e)
            })?;
        if let Some(key) = request.headers_mut().get_mut(SECRET_KEY_HEADER) {
            key.set_sensitive(true);
        }

        if self.debug {
            tracing::info!("API endpoint URL: {}", request.url());
            tracing::info!("HTTP request headers: {:?}", request.headers());
        } else {
            tracing::debug!("GET {}", request.url());
        }

        let resp = client.execute(request).await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if self.debug {
            tracing::info!("Response body: {}", String::from_utf8_lossy(&body));
        }

        if let Some(err) = detect_api_error(&body) {
            return Err(err);
        }

        if status != StatusCode::OK {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body.to_vec())
    }

    /// Fetches every record of `R` matching the current filters.
    pub async fn query<R: Resource>(&self) -> Result<Vec<R>, Error> {
        let mut request = ResourceRequest::<R>::new(self);
        request.send().await?;
        request.decode()
    }

    /// Fetches the raw body for `R` after the error and status checks.
    pub async fn fetch_raw<R: Resource>(&self) -> Result<Vec<u8>, Error> {
        let mut request = ResourceRequest::<R>::new(self);
        request.send().await?;
        Ok(request.into_raw())
    }

    /// Fetches the advancement level lookup table.
    pub async fn query_advancement_levels(&self) -> Result<Vec<AdvancementLevel>, Error> {
        self.query::<AdvancementLevel>().await
    }

    pub async fn query_countries(&self) -> Result<Vec<Country>, Error> {
        self.query::<Country>().await
    }

    /// Fetches ratification and minimum age data per country profile.
    pub async fn query_country_data(&self) -> Result<Vec<CountryData>, Error> {
        self.query::<CountryData>().await
    }

    /// Fetches the goods produced with child or forced labor per country profile.
    pub async fn query_country_goods(&self) -> Result<Vec<CountryGood>, Error> {
        self.query::<CountryGood>().await
    }

    pub async fn query_country_profiles(&self) -> Result<Vec<CountryProfile>, Error> {
        self.query::<CountryProfile>().await
    }

    /// Fetches working children and education statistics per country profile.
    pub async fn query_country_stats(&self) -> Result<Vec<CountryStat>, Error> {
        self.query::<CountryStat>().await
    }

    pub async fn query_goods(&self) -> Result<Vec<Good>, Error> {
        self.query::<Good>().await
    }

    pub async fn query_regions(&self) -> Result<Vec<Region>, Error> {
        self.query::<Region>().await
    }

    pub async fn query_sectors(&self) -> Result<Vec<Sector>, Error> {
        self.query::<Sector>().await
    }

    pub async fn query_suggested_action_areas(&self) -> Result<Vec<SuggestedActionArea>, Error> {
        self.query::<SuggestedActionArea>().await
    }

    pub async fn query_suggested_actions(&self) -> Result<Vec<SuggestedAction>, Error> {
        self.query::<SuggestedAction>().await
    }
}

/// One query against a single resource. Lives for the duration of a call.
struct ResourceRequest<'a, R> {
    client: &'a Client,
    raw_response: Option<Vec<u8>>,
    resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> ResourceRequest<'a, R> {
    fn new(client: &'a Client) -> Self {
        Self {
            client,
            raw_response: None,
            resource: PhantomData,
        }
    }

    async fn send(&mut self) -> Result<(), Error> {
        let endpoint = self.client.endpoint::<R>()?;
        self.raw_response = Some(self.client.send_request(endpoint).await?);
        Ok(())
    }

    fn decode(&self) -> Result<Vec<R>, Error> {
        match &self.raw_response {
            Some(raw) => R::decode(raw),
            None => Ok(Vec::new()),
        }
    }

    fn into_raw(self) -> Vec<u8> {
        self.raw_response.unwrap_or_default()
    }
}

/// Error payload the API returns in place of a record array.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    status: serde_json::Value,
    error: String,
}

/// Returns [`Error::Api`] if `body` is an error payload.
///
/// Only a JSON object with a non-empty string `error` member qualifies; record
/// arrays and other shapes are left for the status and decode steps.
fn detect_api_error(body: &[u8]) -> Option<Error> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    if !value.is_object() {
        return None;
    }
    let payload = serde_json::from_value::<ApiErrorBody>(value).ok()?;
    if payload.error.is_empty() {
        return None;
    }
    tracing::error!(
        "API returned an error (status {}): {}",
        payload.status,
        payload.error
    );
    Some(Error::Api {
        message: payload.error,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_error_payload() {
        let err = detect_api_error(br#"{"status":false,"error":"message"}"#).unwrap();
        assert!(matches!(err, Error::Api { message } if message == "message"));
    }

    #[test]
    fn error_payload_without_status_is_detected() {
        assert!(detect_api_error(br#"{"error":"Invalid API key"}"#).is_some());
    }

    #[test]
    fn record_arrays_are_not_errors() {
        assert!(detect_api_error(br#"[{"id":1,"name":"Africa"}]"#).is_none());
        assert!(detect_api_error(br#"[false,"looks like an error"]"#).is_none());
        assert!(detect_api_error(b"[]").is_none());
    }

    #[test]
    fn other_shapes_are_not_errors() {
        assert!(detect_api_error(br#"{"status":false}"#).is_none());
        assert!(detect_api_error(br#"{"status":false,"error":""}"#).is_none());
        assert!(detect_api_error(br#"{"error":42}"#).is_none());
        assert!(detect_api_error(b"Internal Server Error").is_none());
        assert!(detect_api_error(b"").is_none());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.len() <= 2000 + "...[truncated]".len());

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn endpoint_uses_resource_uri_and_filters() {
        let mut client = Client::new("key");
        client.add_filter("limit", "10").unwrap();
        let url = client.endpoint::<Country>().unwrap();
        assert_eq!(url.as_str(), "https://data.dol.gov/get/childlabor_cty/limit/10");
    }

    #[test]
    fn endpoint_rejects_bad_base_urls() {
        let client = Client::with_base_url("not a url", "key");
        assert!(matches!(
            client.endpoint::<Region>(),
            Err(Error::InvalidBaseUrl(_))
        ));

        let client = Client::with_base_url("mailto:ilab@dol.gov", "key");
        assert!(matches!(
            client.endpoint::<Region>(),
            Err(Error::CannotBeABase(_))
        ));
    }

    #[test]
    fn add_filter_failure_keeps_filters() {
        let mut client = Client::new("key");
        client.add_filter("order", "desc").unwrap();
        assert!(client.add_filter("page", "2").is_err());
        assert_eq!(client.filters().len(), 1);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let client = Client::new("super-secret");
        let printed = format!("{:?}", client);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn unsent_request_decodes_to_nothing() {
        let client = Client::new("key");
        let request = ResourceRequest::<Sector>::new(&client);
        assert!(request.decode().unwrap().is_empty());
    }
}
