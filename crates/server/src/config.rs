use shared_types::{AppConfig, DemoConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents. Invalid TOML falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}; using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect. A missing file yields the defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        read_config_file()
    })
}

fn read_config_file() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            eprintln!("[config] Feature flags: {:?}", config.features);
            eprintln!("[config] Demo latency: {:?}", config.demo);
            config
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}); using defaults");
            AppConfig::default()
        }
    }
}

/// Loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

pub fn demo_config() -> &'static DemoConfig {
    &app_config().demo
}
