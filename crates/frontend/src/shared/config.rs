use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub production_base: String,
    pub development_base: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
production_base = "https://api.business-registry.app"
development_base = "http://localhost:3000"
"#;

/// Effective configuration, resolved once on first access
static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Failed to parse embedded config, using same-origin API: {}", e);
        Config {
            api: ApiConfig {
                production_base: String::new(),
                development_base: String::new(),
            },
        }
    }
});

/// Load configuration.
///
/// The embedded TOML is the base; `API_BASE_PRODUCTION` and
/// `API_BASE_DEVELOPMENT` set at build time override the corresponding URL.
pub fn load_config() -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;

    if let Some(base) = option_env!("API_BASE_PRODUCTION") {
        config.api.production_base = base.to_string();
    }
    if let Some(base) = option_env!("API_BASE_DEVELOPMENT") {
        config.api.development_base = base.to_string();
    }

    Ok(config)
}

/// Release builds talk to the production API
pub fn is_production() -> bool {
    !cfg!(debug_assertions)
}

pub fn config() -> &'static Config {
    &CONFIG
}

impl Config {
    /// Base URL for the given build mode, without a trailing slash
    pub fn api_base(&self, production: bool) -> &str {
        let base = if production {
            &self.api.production_base
        } else {
            &self.api.development_base
        };
        base.trim_end_matches('/')
    }
}
