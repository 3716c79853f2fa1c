//! Runtime settings loaded via OrthoConfig.
//!
//! Every value is optional in the source layers; accessors apply defaults and
//! validate, so a bad environment fails startup with a [`SettingsError`].

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{IdAllocationPolicy, SeedCatalog, UnknownPolicyError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SNAPSHOT_PATH: &str = "./data/seating.json";

/// Errors raised while interpreting configured values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address `{value}`: {source}")]
    InvalidBindAddr {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// `id_prefix` is blank.
    #[error("attendee id prefix must not be blank")]
    BlankIdPrefix,
    /// `pool_size` is zero.
    #[error("placeholder pool size must be at least 1")]
    EmptyPool,
    /// `id_policy` names no known policy.
    #[error(transparent)]
    UnknownPolicy(#[from] UnknownPolicyError),
}

/// Configuration for the seating server and admin CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEATING")]
pub struct SeatingSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Location of the JSON snapshot file.
    pub snapshot_path: Option<PathBuf>,
    /// Prefix for generated registration numbers.
    pub id_prefix: Option<String>,
    /// Number of placeholder records in the seed.
    pub pool_size: Option<u64>,
    /// Id allocation policy, `reuse-gaps` or `monotonic`.
    pub id_policy: Option<String>,
    /// Keep the registry in memory only.
    #[ortho_config(default = false)]
    pub ephemeral: bool,
}

impl SeatingSettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim()
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                source,
            })
    }

    /// Return the snapshot path, falling back to `./data/seating.json`.
    pub fn snapshot_path(&self) -> PathBuf {
        self.snapshot_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH))
    }

    /// Build the seed catalogue from the prefix and pool overrides.
    pub fn seed(&self) -> Result<SeedCatalog, SettingsError> {
        let mut seed = SeedCatalog::reference();
        if let Some(prefix) = self.id_prefix.as_deref() {
            let trimmed = prefix.trim();
            if trimmed.is_empty() {
                return Err(SettingsError::BlankIdPrefix);
            }
            seed = seed.with_id_prefix(trimmed.to_uppercase());
        }
        if let Some(pool_size) = self.pool_size {
            if pool_size == 0 {
                return Err(SettingsError::EmptyPool);
            }
            seed = seed.with_pool_size(pool_size);
        }
        Ok(seed)
    }

    /// Return the id allocation policy, falling back to `reuse-gaps`.
    pub fn id_policy(&self) -> Result<IdAllocationPolicy, SettingsError> {
        match self.id_policy.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(IdAllocationPolicy::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and defaults.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "SEATING_BIND_ADDR",
        "SEATING_SNAPSHOT_PATH",
        "SEATING_ID_PREFIX",
        "SEATING_POOL_SIZE",
        "SEATING_ID_POLICY",
        "SEATING_EPHEMERAL",
    ];

    fn load_from_empty_args() -> SeatingSettings {
        SeatingSettings::load_from_iter([OsString::from("seating")]).expect("config should load")
    }

    fn cleared() -> Vec<(&'static str, Option<String>)> {
        VARS.iter().map(|name| (*name, None)).collect()
    }

    fn with_overrides(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(cleared());

        let settings = load_from_empty_args();
        assert!(!settings.ephemeral);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("socket address")
        );
        assert_eq!(settings.snapshot_path(), PathBuf::from("./data/seating.json"));
        assert_eq!(
            settings.id_policy().expect("default policy"),
            IdAllocationPolicy::ReuseGaps
        );
        let seed = settings.seed().expect("default seed");
        assert_eq!(seed.id_prefix(), "CHI-IHE");
        assert_eq!(seed.pool_size(), 350);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(with_overrides(&[
            ("SEATING_BIND_ADDR", "127.0.0.1:9000"),
            ("SEATING_SNAPSHOT_PATH", "/tmp/seating.json"),
            ("SEATING_ID_PREFIX", "gala-"),
            ("SEATING_POOL_SIZE", "20"),
            ("SEATING_ID_POLICY", "monotonic"),
            ("SEATING_EPHEMERAL", "true"),
        ]));

        let settings = load_from_empty_args();
        assert!(settings.ephemeral);
        assert_eq!(
            settings.bind_addr().expect("address"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("socket address")
        );
        assert_eq!(settings.snapshot_path(), PathBuf::from("/tmp/seating.json"));
        assert_eq!(
            settings.id_policy().expect("policy"),
            IdAllocationPolicy::Monotonic
        );
        let seed = settings.seed().expect("seed");
        assert_eq!(seed.id_prefix(), "GALA-");
        assert_eq!(seed.pool_size(), 20);
    }

    #[rstest]
    #[case("SEATING_BIND_ADDR", "not-an-address")]
    #[case("SEATING_ID_PREFIX", "   ")]
    #[case("SEATING_POOL_SIZE", "0")]
    #[case("SEATING_ID_POLICY", "random")]
    fn invalid_values_are_reported(#[case] name: &'static str, #[case] value: &str) {
        let _guard = lock_env(with_overrides(&[(name, value)]));

        let settings = load_from_empty_args();
        let outcome = settings
            .bind_addr()
            .map(|_| ())
            .and_then(|()| settings.seed().map(|_| ()))
            .and_then(|()| settings.id_policy().map(|_| ()));
        assert!(outcome.is_err(), "{name}={value} should be rejected");
    }
}
