use std::sync::OnceLock;

use dioxus_logger::tracing::{info, warn};
use folio_types::{ConfigError, FolioConfig, LayoutConfig, SiteConfig};

/// Element id of the optional inline JSON config.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

/// Read the inline config element, if the page has one.
fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|raw| !raw.trim().is_empty())
}

/// Parse raw config text, falling back to defaults when there is none.
pub fn parse_config(raw: Option<&str>) -> Result<FolioConfig, ConfigError> {
    match raw {
        Some(raw) => FolioConfig::from_json(raw),
        None => Ok(FolioConfig::default()),
    }
}

fn load_config() -> FolioConfig {
    let raw = read_config_element();
    match parse_config(raw.as_deref()) {
        Ok(config) => {
            if raw.is_some() {
                info!("Loaded folio config from #{}", CONFIG_ELEMENT_ID);
            }
            config
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            FolioConfig::default()
        }
    }
}

/// Computed at first use
static CONFIG_CACHE: OnceLock<FolioConfig> = OnceLock::new();

pub fn folio_config() -> &'static FolioConfig {
    CONFIG_CACHE.get_or_init(load_config)
}

pub fn layout_config() -> &'static LayoutConfig {
    &folio_config().layout
}

pub fn site_config() -> &'static SiteConfig {
    &folio_config().site
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_yields_defaults() {
        let config = parse_config(None).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn inline_config_overrides_fields() {
        let config = parse_config(Some(r#"{"layout": {"mobile_breakpoint": 900}}"#)).unwrap();
        assert_eq!(config.layout.mobile_breakpoint, 900.0);
        assert_eq!(config.layout.menu_bar_height, 24.0);
    }

    #[test]
    fn malformed_config_is_reported() {
        assert!(parse_config(Some("[1, 2")).is_err());
    }
}
