use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use wikia_harvest::config::load_config;
///
/// let config = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Search limit: {}", config.harvest.search_limit);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[harvest]
search-limit = 10
max-articles = 200
output-dir = "./articles"

[user-agent]
name = "TestHarvester"
version = "1.0.0"
contact-url = "https://example.com/about"
"#;
        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.harvest.search_limit, 10);
        assert_eq!(config.harvest.max_articles, Some(200));
        assert_eq!(config.harvest.output_dir, "./articles");
        assert_eq!(
            config.user_agent.header_value(),
            "TestHarvester/1.0.0 (+https://example.com/about)"
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.harvest.search_limit, 1);
        assert_eq!(config.harvest.max_articles, None);
        assert_eq!(config.harvest.output_dir, "./output");
        assert_eq!(config.user_agent.name, "WikiaHarvest");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let file = create_temp_config("[harvest\nsearch-limit = ");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            load_config(Path::new("/nonexistent/harvest.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_zero_search_limit_fails_validation() {
        let file = create_temp_config("[harvest]\nsearch-limit = 0\n");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }
}
