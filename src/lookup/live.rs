//! Registry lookup over HTTP.
//!
//! Performs one blocking GET per plate with the access token and plate as
//! query parameters. No retries and no timeout override: the client keeps
//! the transport defaults.

use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::{LookupMode, LookupSettings, VehicleLookup};
use crate::record::{RegistryResponse, VehicleRecord};
use crate::{Error, Result};

pub struct LiveLookup {
    client: Client,
    base_url: String,
    token: String,
}

impl LiveLookup {
    pub fn new(settings: &LookupSettings) -> Result<Self> {
        let token = settings
            .token
            .clone()
            .ok_or_else(|| Error::ConfigError("live lookup without access token".into()))?;
        let client = Client::builder().build().map_err(|e| {
            Error::ConfigError(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            token,
        })
    }
}

impl VehicleLookup for LiveLookup {
    fn lookup(&self, plate: &str) -> Result<Option<VehicleRecord>> {
        info!("Registry lookup for plate {:?}", plate);
        let res = self
            .client
            .get(&self.base_url)
            .query(&[("token", self.token.as_str()), ("plaque", plate)])
            .send()
            .map_err(|e| Error::NetworkError(format!("HTTP GET failed: {}", e.without_url())))?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!("Registry answered {} for plate {:?}", status, plate);
            return Ok(None);
        }

        let body = res
            .text()
            .map_err(|e| Error::NetworkError(format!("Failed to read response body: {}", e.without_url())))?;
        let parsed: RegistryResponse =
            serde_json::from_str(&body).map_err(|e| Error::DecodeError(e.to_string()))?;
        let record = parsed.data.unwrap_or_default();
        debug!("Registry record empty={}", record.is_empty());
        Ok(Some(record))
    }

    fn mode(&self) -> LookupMode {
        LookupMode::Live
    }
}
