//! Vehicle lookup backends
//!
//! One capability, [`VehicleLookup`], with two implementations chosen once
//! at construction:
//!
//! - [`FixtureLookup`]: a canned record, no network access
//! - [`LiveLookup`]: a blocking GET against the Auto-Ways registry
//!   (requires the `live` feature, enabled by default)

pub mod fixture;
#[cfg(feature = "live")]
pub mod live;

pub use fixture::FixtureLookup;
#[cfg(feature = "live")]
pub use live::LiveLookup;

use crate::record::VehicleRecord;
use crate::{Error, Result};

/// Default registry endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.auto-ways.net/api/v1/fr";

/// Which backend serves lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    Live,
    Fixture,
}

impl std::fmt::Display for LookupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupMode::Live => f.write_str("live"),
            LookupMode::Fixture => f.write_str("fixture"),
        }
    }
}

/// Validated lookup configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub mode: LookupMode,
    /// Registry access token; always `Some` in live mode
    pub token: Option<String>,
    pub base_url: String,
}

impl std::fmt::Debug for LookupSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupSettings")
            .field("mode", &self.mode)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl LookupSettings {
    /// Check settings before anything runs: live mode needs a non-blank token.
    pub fn resolve(mode: LookupMode, token: Option<String>, base_url: Option<String>) -> Result<Self> {
        let token = token.filter(|t| !t.trim().is_empty());
        if mode == LookupMode::Live && token.is_none() {
            return Err(Error::ConfigError(
                "TOKEN manquant : configure AUTOWAYS_TOKEN dans .streamlit/secrets.toml ou en variable d'environnement."
                    .into(),
            ));
        }
        let base_url = base_url
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self { mode, token, base_url })
    }

    pub fn fixture() -> Self {
        Self {
            mode: LookupMode::Fixture,
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Core trait for registry lookups
pub trait VehicleLookup {
    /// Look up `plate` as typed by the user.
    ///
    /// `Ok(None)` means the registry had no answer for this plate (any
    /// non-200 status). An `Ok(Some(record))` may still be empty.
    /// Transport failures are returned as errors.
    fn lookup(&self, plate: &str) -> Result<Option<VehicleRecord>>;

    fn mode(&self) -> LookupMode;
}

/// Create the lookup backend described by `settings`.
pub fn new_lookup(settings: &LookupSettings) -> Result<Box<dyn VehicleLookup>> {
    match settings.mode {
        LookupMode::Fixture => Ok(Box::new(FixtureLookup::new())),
        #[cfg(feature = "live")]
        LookupMode::Live => Ok(Box::new(LiveLookup::new(settings)?)),
        #[cfg(not(feature = "live"))]
        LookupMode::Live => Err(Error::ConfigError(
            "live lookups require the `live` feature".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_mode_requires_token() {
        let err = LookupSettings::resolve(LookupMode::Live, None, None).unwrap_err();
        assert!(err.is_fatal());
        assert!(LookupSettings::resolve(LookupMode::Live, Some("   ".into()), None).is_err());
    }

    #[test]
    fn fixture_mode_needs_no_token() {
        let s = LookupSettings::resolve(LookupMode::Fixture, None, None).unwrap();
        assert_eq!(s, LookupSettings::fixture());
    }

    #[test]
    fn base_url_defaults() {
        let s = LookupSettings::resolve(LookupMode::Live, Some("t".into()), Some("".into())).unwrap();
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        let s = LookupSettings::resolve(LookupMode::Live, Some("t".into()), Some("http://x/api".into())).unwrap();
        assert_eq!(s.base_url, "http://x/api");
    }

    #[test]
    fn debug_hides_token() {
        let s = LookupSettings::resolve(LookupMode::Live, Some("s3cret".into()), None).unwrap();
        assert!(!format!("{:?}", s).contains("s3cret"));
    }

    #[test]
    fn new_lookup_selects_backend() {
        let l = new_lookup(&LookupSettings::fixture()).unwrap();
        assert_eq!(l.mode(), LookupMode::Fixture);
    }
}
