use std::path::Path;
use std::time::Duration;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::vnet_yaml::VirtualNetworkProperties;

pub const DEFAULT_SETTINGS_PATH: &str = "/etc/rnp-solo/settings.json";

/// Local settings for talking to the overlay controller. Credentials here are only used when the
/// template does not carry its own, there are no built-in credentials.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Validate)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SoloSettings {
    #[serde(default)]
    pub rest_user: Option<String>,
    #[serde(default)]
    pub rest_password: Option<String>,
    /// seconds between two completion checks while waiting on the controller
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// number of completion checks before giving up
    #[serde(default = "default_max_polls")]
    #[validate(range(min = 1))]
    pub max_polls: u32,
}

fn default_poll_interval_secs() -> u64 {
    2
}

fn default_max_polls() -> u32 {
    60
}

impl Default for SoloSettings {
    fn default() -> Self {
        Self {
            rest_user: None,
            rest_password: None,
            poll_interval_secs: default_poll_interval_secs(),
            max_polls: default_max_polls(),
        }
    }
}

impl SoloSettings {
    /// Read the settings json, a missing file gives the defaults.
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        tracing::trace!("expected settings json location: {:?}", path);
        if !path.is_file() {
            tracing::debug!("no settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings: SoloSettings = serde_json::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        settings.validate()
            .with_context(|| format!("validating settings file {}", path.display()))?;
        Ok(settings)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Fill in credentials the template left out. The user and password are taken as a pair so a
    /// template user is never combined with a settings password.
    pub fn fill_credentials(&self, properties: &mut VirtualNetworkProperties) {
        if properties.rest_user.is_none() && self.rest_user.is_some() {
            tracing::debug!("using REST credentials from settings");
            properties.rest_user = self.rest_user.clone();
            properties.rest_password = self.rest_password.clone();
        }
    }
}
