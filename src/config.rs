use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::console;

/// Window parameters read from an optional `deltoy.toml` next to the
/// executable. Everything the demos render stays compiled in; only the
/// window itself is configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub vsync: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Deltoy".to_string(),
            screen_width: 800,
            screen_height: 600,
            vsync: true,
        }
    }
}

pub fn parse_config(content: &str) -> Result<DemoConfig> {
    let r = toml::from_str::<DemoConfig>(content);
    if let Ok(r) = r {
        return Ok(r);
    }
    // Partial files are common; fall back to per-field defaults.
    let manifest = content.parse::<toml::Table>()?;
    let defaults = DemoConfig::default();

    let get_str_or_default = |key: &str, default: &str| {
        manifest
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    };
    let get_u32_or_default = |key: &str, default: u32| {
        manifest
            .get(key)
            .and_then(|v| v.as_integer())
            .map(|v| v as u32)
            .unwrap_or(default)
    };
    let get_bool_or_default = |key: &str, default: bool| {
        manifest
            .get(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    };

    Ok(DemoConfig {
        title: get_str_or_default("title", &defaults.title),
        screen_width: get_u32_or_default("screen_width", defaults.screen_width),
        screen_height: get_u32_or_default("screen_height", defaults.screen_height),
        vsync: get_bool_or_default("vsync", defaults.vsync),
    })
}

/// Reads the config file if there is one. A missing file means defaults; an
/// unreadable file is reported and also means defaults.
pub fn load_or_default(path: &Path) -> DemoConfig {
    let Ok(content) = std::fs::read_to_string(path) else {
        return DemoConfig::default();
    };
    match parse_config(&content) {
        Ok(config) => config,
        Err(cause) => {
            console::print_warn(format!(
                "Ignoring invalid config file {}: {cause}",
                path.display()
            ));
            DemoConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses_strictly() {
        let config = parse_config(
            r#"
            title = "My Demo"
            screen_width = 1024
            screen_height = 768
            vsync = false
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "My Demo");
        assert_eq!(config.screen_width, 1024);
        assert_eq!(config.screen_height, 768);
        assert!(!config.vsync);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config = parse_config("screen_width = 1280").unwrap();
        assert_eq!(config.screen_width, 1280);
        assert_eq!(config.screen_height, 600);
        assert_eq!(config.title, "Deltoy");
        assert!(config.vsync);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_config("not toml at all [[[").is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = load_or_default(Path::new("does/not/exist.toml"));
        assert_eq!(config.screen_width, 800);
    }
}
