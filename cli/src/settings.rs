use std::fs;
use std::path::Path;

use anyhow::Context;
use memory_core::{Coord, GameConfig};

/// Reads the game configuration, falling back to the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    let config = parse_config(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    log::debug!("Loaded {} catalog entries from {}", config.catalog.len(), path.display());

    Ok(config)
}

pub fn parse_config(text: &str) -> Result<GameConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Command line values that take precedence over the config file.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub size: Option<Coord>,
    pub conceal_delay_ms: Option<u32>,
}

impl Overrides {
    pub fn apply(self, mut config: GameConfig) -> GameConfig {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(delay) = self.conceal_delay_ms {
            config.conceal_delay_ms = delay;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_core::Catalog;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), GameConfig::default());
    }

    #[test]
    fn file_sets_size_delay_and_catalog() {
        let config = parse_config(
            r#"
            size = 2
            conceal_delay_ms = 250

            [catalog]
            first = "owl"
            second = "fox"
            "#,
        )
        .unwrap();

        assert_eq!(config.size, 2);
        assert_eq!(config.conceal_delay_ms, 250);
        let mut expected = Catalog::new(Default::default());
        expected.insert("first", "owl");
        expected.insert("second", "fox");
        assert_eq!(config.catalog, expected);
        assert_eq!(config.catalog.words(), ["owl", "fox"]);
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Overrides {
            size: Some(4),
            conceal_delay_ms: None,
        }
        .apply(parse_config("size = 6\nconceal_delay_ms = 100").unwrap());

        assert_eq!(config.size, 4);
        assert_eq!(config.conceal_delay_ms, 100);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/memory.toml")));
        assert!(result.is_err());
    }
}
