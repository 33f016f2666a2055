use serde::{Deserialize, Serialize};

/// Feature flags controlling optional server behaviour.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Keep created and cancelled pickups in the in-memory store.
    /// When off, mutations are validated and echoed back but discarded.
    #[serde(default = "default_true")]
    pub persist_mutations: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            telemetry: false,
            persist_mutations: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Simulated latencies applied to the mutating flows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
    #[serde(default = "default_mutation_delay")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_mutation_delay")]
    pub cancel_delay_ms: u64,
}

fn default_login_delay() -> u64 {
    500
}

fn default_mutation_delay() -> u64 {
    1000
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay(),
            submit_delay_ms: default_mutation_delay(),
            cancel_delay_ms: default_mutation_delay(),
        }
    }
}

impl DemoConfig {
    /// No simulated latency at all. Used by tests.
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            submit_delay_ms: 0,
            cancel_delay_ms: 0,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(flags.persist_mutations);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.demo.login_delay_ms, 500);
        assert_eq!(config.demo.submit_delay_ms, 1000);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            telemetry = true

            [demo]
            login_delay_ms = 0
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert!(config.features.persist_mutations);
        assert_eq!(config.demo.login_delay_ms, 0);
        assert_eq!(config.demo.cancel_delay_ms, 1000);
    }

    #[test]
    fn persist_mutations_can_be_disabled() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            persist_mutations = false
            "#,
        )
        .unwrap();
        assert!(!config.features.persist_mutations);
    }

    #[test]
    fn flags_serialize_for_client() {
        let json = serde_json::to_value(FeatureFlags::default()).unwrap();
        assert_eq!(json["telemetry"], false);
        assert_eq!(json["persist_mutations"], true);
    }
}
