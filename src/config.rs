//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a Roster instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for slot files
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {slot}.json      (whole roster, overwritten on every save)
    pub data_dir: PathBuf,

    /// Name of the storage slot holding the roster
    pub slot: String,

    /// What to do when the slot holds malformed data
    pub load_policy: LoadPolicy,

    // -------------------------------------------------------------------------
    // Validation Configuration
    // -------------------------------------------------------------------------
    /// Upper bound for member age (None = unbounded)
    pub max_age: Option<u32>,

    // -------------------------------------------------------------------------
    // Identity Configuration
    // -------------------------------------------------------------------------
    /// How new member ids are generated
    pub id_strategy: IdStrategy,

    // -------------------------------------------------------------------------
    // Directory Configuration
    // -------------------------------------------------------------------------
    /// Member-listing endpoint for the read-only directory panel
    pub directory_url: String,

    /// Request timeout for the directory fetch (milliseconds)
    pub directory_timeout_ms: u64,

    /// User-Agent header sent to the directory endpoint
    pub user_agent: String,

    /// Honour HTTP(S)_PROXY from the environment for the directory fetch
    pub use_system_proxy: bool,
}

/// Policy for a slot whose content cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Log a warning and start from an empty roster
    FallbackEmpty,

    /// Surface the parse error to the caller
    Strict,
}

/// Member id generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// max existing integer id + 1
    Sequential,

    /// random UUID v4 token
    Uuid,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./roster_data"),
            slot: "users".to_string(),
            load_policy: LoadPolicy::FallbackEmpty,
            max_age: Some(120),
            id_strategy: IdStrategy::Sequential,
            directory_url: "https://api.github.com/users".to_string(),
            directory_timeout_ms: 10_000,
            user_agent: format!("roster/{}", env!("CARGO_PKG_VERSION")),
            use_system_proxy: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<()> {
        let slot = self.slot.trim();
        if slot.is_empty() {
            return Err(RosterError::Config("slot name must not be empty".to_string()));
        }
        if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(RosterError::Config(format!(
                "slot name {:?} must not contain path separators",
                self.slot
            )));
        }
        if self.max_age == Some(0) {
            return Err(RosterError::Config("max age must be at least 1".to_string()));
        }
        if self.directory_url.trim().is_empty() {
            return Err(RosterError::Config("directory url must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all slots)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage slot name
    pub fn slot(mut self, name: impl Into<String>) -> Self {
        self.config.slot = name.into();
        self
    }

    /// Set the policy for malformed slot content
    pub fn load_policy(mut self, policy: LoadPolicy) -> Self {
        self.config.load_policy = policy;
        self
    }

    /// Set the age cap (None disables it)
    pub fn max_age(mut self, max: Option<u32>) -> Self {
        self.config.max_age = max;
        self
    }

    /// Set the id generation strategy
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.id_strategy = strategy;
        self
    }

    /// Set the directory endpoint
    pub fn directory_url(mut self, url: impl Into<String>) -> Self {
        self.config.directory_url = url.into();
        self
    }

    /// Set the directory request timeout (in milliseconds)
    pub fn directory_timeout_ms(mut self, ms: u64) -> Self {
        self.config.directory_timeout_ms = ms;
        self
    }

    /// Set the User-Agent sent to the directory endpoint
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable or disable proxy discovery for the directory fetch
    pub fn use_system_proxy(mut self, enabled: bool) -> Self {
        self.config.use_system_proxy = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
