//! Network configuration for deployments.
//!
//! Development networks get a freshly deployed mock price feed and are never
//! submitted for source verification. Every other network must name the
//! price feed contract `fund-me` is constructed with.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

fn default_development_chains() -> Vec<String> {
    vec!["standalone".to_string(), "local".to_string()]
}

/// Settings for a single named network.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NetworkEntry {
    /// Address of the USD price feed on this network
    pub price_feed: Option<String>,
    /// Explorer endpoint used for source verification
    pub verify_api_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NetworkConfig {
    #[serde(default = "default_development_chains")]
    pub development_chains: Vec<String>,
    #[serde(default)]
    pub networks: HashMap<String, NetworkEntry>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            development_chains: default_development_chains(),
            networks: HashMap::new(),
        }
    }
}

impl NetworkConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Failed to parse network configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read network configuration {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// Live networks must name their price feed.
    pub fn validate(&self) -> Result<()> {
        for (name, entry) in &self.networks {
            if self.is_development(name) {
                continue;
            }
            match entry.price_feed.as_deref() {
                Some(feed) if !feed.trim().is_empty() => {}
                _ => bail!("Network {name} has no price_feed configured"),
            }
        }
        Ok(())
    }

    pub fn is_development(&self, network: &str) -> bool {
        self.development_chains.iter().any(|chain| chain == network)
    }

    pub fn network(&self, network: &str) -> Option<&NetworkEntry> {
        self.networks.get(network)
    }

    pub fn price_feed(&self, network: &str) -> Option<&str> {
        self.network(network)?.price_feed.as_deref()
    }

    /// Verification only makes sense on live networks and needs an API key.
    pub fn should_verify(&self, network: &str, api_key: Option<&str>) -> bool {
        !self.is_development(network) && api_key.is_some_and(|key| !key.trim().is_empty())
    }
}
