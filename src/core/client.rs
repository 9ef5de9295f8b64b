use crate::config::ClientConfig;
use crate::domain::mapping::vehicle_from_value;
use crate::domain::model::{Dataset, Vehicle};
use crate::domain::plate::normalize_license_plate;
use crate::domain::ports::VehicleLookup;
use crate::utils::error::{RdwError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use std::sync::OnceLock;
use url::Url;

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// Async client for the RDW open data (Socrata) API.
///
/// The client either borrows a caller supplied [`reqwest::Client`] or creates
/// its own on first use. Only a connection it created itself is released by
/// [`RdwClient::close`] (or on drop), a supplied one is left alone.
///
/// ```no_run
/// # async fn run() -> rdw_vehicle::Result<()> {
/// use rdw_vehicle::{ClientConfig, RdwClient};
///
/// let client = RdwClient::new(ClientConfig::default());
/// let vehicle = client.fetch(Some("11-ZKZ-3")).await?;
/// println!("{} {}", vehicle.brand, vehicle.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RdwClient {
    config: ClientConfig,
    http: OnceLock<reqwest::Client>,
    owns_connection: bool,
}

impl RdwClient {
    /// The HTTP client is created lazily on the first request and owned by `self`.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: OnceLock::new(),
            owns_connection: true,
        }
    }

    /// Use a shared HTTP client; it is never closed by `RdwClient`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http: OnceLock::from(http),
            owns_connection: false,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn owns_connection(&self) -> bool {
        self.owns_connection
    }

    pub fn has_connection(&self) -> bool {
        self.http.get().is_some()
    }

    fn http_client(&self) -> Result<&reqwest::Client> {
        if let Some(http) = self.http.get() {
            return Ok(http);
        }

        // 兩個並行請求可能各建一個，只有先到的會被留下
        let http = reqwest::Client::builder().build()?;
        tracing::debug!("Created internal HTTP client");
        Ok(self.http.get_or_init(|| http))
    }

    fn dataset_url(&self, dataset: Dataset) -> Result<Url> {
        let mut base = self.config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Url::parse(&base)
            .and_then(|url| url.join(&format!("{}.json", dataset.id())))
            .map_err(|e| RdwError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.config.base_url.clone(),
                reason: format!("Invalid URL format: {}", e),
            })
    }

    fn classify(&self, err: reqwest::Error) -> RdwError {
        if err.is_timeout() {
            RdwError::TimeoutError {
                timeout: self.config.timeout(),
            }
        } else {
            RdwError::ConnectionError(err)
        }
    }

    /// Query a dataset and return the decoded JSON body.
    ///
    /// Timeouts, transport failures and non-2xx statuses are connectivity errors;
    /// a 2xx answer that is not JSON is an [`RdwError::UnexpectedResponseError`].
    pub async fn request(&self, dataset: Dataset, query: &[(&str, &str)]) -> Result<Value> {
        let url = self.dataset_url(dataset)?;
        let http = self.http_client()?;

        tracing::debug!("Making API request to: {} {:?}", url, query);

        let response = http
            .get(url)
            .query(query)
            .header(ACCEPT, ACCEPT_VALUE)
            .header(USER_AGENT, &self.config.user_agent)
            .timeout(self.config.timeout())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(RdwError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !content_type.contains("application/json") {
            return Err(RdwError::UnexpectedResponseError { content_type, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Look up a vehicle by license plate, falling back to the configured one.
    pub async fn fetch(&self, license_plate: Option<&str>) -> Result<Vehicle> {
        let license_plate = license_plate
            .filter(|p| !p.trim().is_empty())
            .or(self.config.license_plate.as_deref())
            .ok_or_else(|| RdwError::ConfigError {
                message: "No license plate provided".to_string(),
            })?;

        let normalized = normalize_license_plate(license_plate);
        let data = self
            .request(Dataset::PlatedVehicles, &[("kenteken", normalized.as_str())])
            .await?;

        let records = match data {
            Value::Array(records) => records,
            other => {
                return Err(RdwError::UnexpectedResponseError {
                    content_type: "application/json".to_string(),
                    body: other.to_string(),
                });
            }
        };

        let first = records
            .first()
            .ok_or_else(|| RdwError::UnknownLicensePlateError {
                license_plate: license_plate.to_string(),
            })?;

        vehicle_from_value(first)
    }

    /// Release the HTTP client if this instance created it. Safe to call more than once.
    pub fn close(&mut self) {
        if self.owns_connection && self.http.take().is_some() {
            tracing::debug!("Closed internal HTTP client");
        }
    }
}

impl Drop for RdwClient {
    fn drop(&mut self) {
        self.close();
    }
}

#[async_trait::async_trait]
impl VehicleLookup for RdwClient {
    async fn fetch(&self, license_plate: Option<&str>) -> Result<Vehicle> {
        RdwClient::fetch(self, license_plate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    #[test]
    fn test_dataset_url() {
        let client = RdwClient::new(ClientConfig::default());
        assert_eq!(
            client.dataset_url(Dataset::PlatedVehicles).unwrap().as_str(),
            "https://opendata.rdw.nl/resource/m9d7-ebf2.json"
        );

        let client =
            RdwClient::new(ClientConfig::new().with_base_url("http://127.0.0.1:8080/resource"));
        assert_eq!(
            client.dataset_url(Dataset::PlatedVehicles).unwrap().as_str(),
            "http://127.0.0.1:8080/resource/m9d7-ebf2.json"
        );

        let client = RdwClient::new(ClientConfig::new().with_base_url("not a url"));
        let err = client.dataset_url(Dataset::PlatedVehicles).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_connection_ownership() {
        let mut client = RdwClient::new(ClientConfig::default());
        assert!(client.owns_connection());
        assert!(!client.has_connection());

        client.http_client().unwrap();
        assert!(client.has_connection());

        client.close();
        assert!(!client.has_connection());
        client.close();

        let shared = reqwest::Client::new();
        let mut client = RdwClient::with_http_client(ClientConfig::default(), shared);
        assert!(!client.owns_connection());
        client.close();
        assert!(client.has_connection());
    }

    #[test]
    fn test_fetch_without_plate() {
        let client = RdwClient::new(ClientConfig::default());

        let err = tokio_test::block_on(client.fetch(None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.to_string(), "Configuration error: No license plate provided");

        let err = tokio_test::block_on(client.fetch(Some("  "))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        // 沒有發出請求，也就不會建立連線
        assert!(!client.has_connection());
    }
}
