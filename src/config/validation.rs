use crate::config::types::{Config, HarvestConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_harvest_config(&config.harvest)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates harvest behavior configuration
fn validate_harvest_config(config: &HarvestConfig) -> Result<(), ConfigError> {
    if config.search_limit < 1 {
        return Err(ConfigError::Validation(
            "search-limit must be >= 1".to_string(),
        ));
    }

    if let Some(0) = config.max_articles {
        return Err(ConfigError::Validation(
            "max-articles must be >= 1 when set".to_string(),
        ));
    }

    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate name: non-empty, alphanumeric + hyphens only
    if config.name.is_empty() {
        return Err(ConfigError::Validation("name cannot be empty".to_string()));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "version cannot be empty".to_string(),
        ));
    }

    // Validate contact URL parses as an absolute URL
    if Url::parse(&config.contact_url).is_err() {
        return Err(ConfigError::Validation(format!(
            "contact-url must be a valid URL, got '{}'",
            config.contact_url
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_search_limit_rejected() {
        let mut config = Config::default();
        config.harvest.search_limit = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_max_articles_rejected() {
        let mut config = Config::default();
        config.harvest.max_articles = Some(0);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_contact_url_rejected() {
        let mut config = Config::default();
        config.user_agent.contact_url = "not a url".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_agent_name_with_spaces_rejected() {
        let mut config = Config::default();
        config.user_agent.name = "Wikia Harvest".to_string();
        assert!(validate(&config).is_err());
    }
}
