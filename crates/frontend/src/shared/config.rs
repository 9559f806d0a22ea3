use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub organizations: OrganizationsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Пустая строка означает тот же origin, что и у страницы
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrganizationsConfig {
    #[serde(default = "default_corp_filter")]
    pub corp_filter_default: bool,
}

impl Default for OrganizationsConfig {
    fn default() -> Self {
        Self {
            corp_filter_default: default_corp_filter(),
        }
    }
}

fn default_ttl_ms() -> u32 {
    5000
}

fn default_corp_filter() -> bool {
    true
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[notifications]
ttl_ms = 5000

[organizations]
corp_filter_default = true
"#;

/// Id of the inline `<script type="application/toml">` element on the host page
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load dashboard configuration
///
/// Search order:
/// 1. Inline `<script id="dashboard-config" type="application/toml">` on the page
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<DashboardConfig> {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match inline {
        Some(contents) if !contents.trim().is_empty() => {
            log::info!("Loading dashboard config from #{}", CONFIG_ELEMENT_ID);
            parse_config(&contents)
        }
        _ => {
            log::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)
        }
    }
}
