use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::protocol::{ActionReply, AvailabilityMap, BoardState};

const USER_AGENT: &str = concat!("tablero/", env!("CARGO_PKG_VERSION"));

/// Everything the board needs from the backend.
/// Implementations: HttpBoardClient (production), scripted fakes (testing).
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Fetch the full kiosk-state snapshot.
    async fn fetch_state(&self) -> Result<BoardState>;

    /// Fetch current staff availability.
    async fn fetch_availability(&self) -> Result<AvailabilityMap>;

    /// Request that `staff` attend `kiosk`.
    async fn attend(&self, kiosk: &str, staff: &str) -> Result<ActionReply>;

    /// Finalize a kiosk's service.
    async fn finalize(&self, kiosk: &str) -> Result<ActionReply>;

    /// Cancel a kiosk's pending request.
    async fn cancel(&self, kiosk: &str) -> Result<ActionReply>;

    /// Mark a kiosk as requesting service.
    async fn request_service(&self, kiosk: &str) -> Result<ActionReply>;
}

/// HTTP client for the kiosk backend.
pub struct HttpBoardClient {
    client: Client,
    base_url: String,
}

impl HttpBoardClient {
    /// Create a new client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The mutating endpoints answer business conflicts with HTTP 400 and a
    /// JSON `{msg}` body, so the body is decoded regardless of status.
    async fn action(&self, path: &str) -> Result<ActionReply> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request failed: GET {path}"))?;
        resp.json::<ActionReply>()
            .await
            .with_context(|| format!("malformed reply from GET {path}"))
    }
}

#[async_trait]
impl BoardApi for HttpBoardClient {
    async fn fetch_state(&self) -> Result<BoardState> {
        let url = format!("{}/estado", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("request failed: GET /estado")?
            .error_for_status()
            .context("GET /estado")?;
        resp.json().await.context("malformed reply from GET /estado")
    }

    async fn fetch_availability(&self) -> Result<AvailabilityMap> {
        let url = format!("{}/meseros/disponibilidad", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("request failed: GET /meseros/disponibilidad")?
            .error_for_status()
            .context("GET /meseros/disponibilidad")?;
        resp.json()
            .await
            .context("malformed reply from GET /meseros/disponibilidad")
    }

    async fn attend(&self, kiosk: &str, staff: &str) -> Result<ActionReply> {
        self.action(&format!("/atender/{kiosk}/{staff}")).await
    }

    async fn finalize(&self, kiosk: &str) -> Result<ActionReply> {
        self.action(&format!("/finalizar/{kiosk}")).await
    }

    async fn cancel(&self, kiosk: &str) -> Result<ActionReply> {
        self.action(&format!("/cancelar/{kiosk}")).await
    }

    async fn request_service(&self, kiosk: &str) -> Result<ActionReply> {
        self.action(&format!("/solicitar/{kiosk}")).await
    }
}
