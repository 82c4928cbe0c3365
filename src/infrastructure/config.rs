use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub boundaries: BoundarySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    #[default]
    Static,
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoundarySettings {
    #[serde(default)]
    pub mode: BoundaryMode,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_name_property")]
    pub name_property: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BoundarySettings {
    fn default() -> Self {
        Self {
            mode: BoundaryMode::default(),
            url: String::new(),
            name_property: default_name_property(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_name_property() -> String {
    "NAME".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Loads `config/dashboard.*`, then applies `DASHBOARD__SECTION__KEY` overrides.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    validate(&app_config)?;

    Ok(app_config)
}

fn validate(config: &AppConfig) -> anyhow::Result<()> {
    if config.boundaries.mode == BoundaryMode::Remote && config.boundaries.url.trim().is_empty() {
        anyhow::bail!("boundaries.url must be set when boundaries.mode is \"remote\"");
    }
    if config.boundaries.timeout_secs == 0 {
        anyhow::bail!("boundaries.timeout_secs must be greater than zero");
    }
    Ok(())
}
