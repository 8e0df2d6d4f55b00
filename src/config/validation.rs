use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks performed:
/// - The base URL and every index page parse as absolute URLs
/// - At least one index page is configured
/// - The page extension starts with a dot
/// - The checkpoint interval is non-zero
/// - No exclusion pattern is empty (an empty pattern matches everything)
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - The configuration is valid
/// * `Err(ConfigError::Validation)` - A check failed
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if Url::parse(&config.site.base_url).is_err() {
        return Err(ConfigError::Validation(format!(
            "base-url is not a valid URL: {}",
            config.site.base_url
        )));
    }

    if config.site.index_pages.is_empty() {
        return Err(ConfigError::Validation(
            "at least one index page is required".to_string(),
        ));
    }

    for page in &config.site.index_pages {
        if Url::parse(page).is_err() {
            return Err(ConfigError::Validation(format!(
                "index page is not a valid URL: {}",
                page
            )));
        }
    }

    if !config.site.page_extension.starts_with('.') {
        return Err(ConfigError::Validation(format!(
            "page-extension must start with a dot: {}",
            config.site.page_extension
        )));
    }

    if config.limits.checkpoint_interval == 0 {
        return Err(ConfigError::Validation(
            "checkpoint-interval must be greater than zero".to_string(),
        ));
    }

    if config.site.exclude_patterns.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Validation(
            "exclude-patterns must not contain empty entries".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.site.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_index_pages() {
        let mut config = Config::default();
        config.site.index_pages.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_index_page() {
        let mut config = Config::default();
        config.site.index_pages.push("relative/path.htm".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_extension_without_dot() {
        let mut config = Config::default();
        config.site.page_extension = "htm".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_checkpoint_interval() {
        let mut config = Config::default();
        config.limits.checkpoint_interval = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_exclude_pattern() {
        let mut config = Config::default();
        config.site.exclude_patterns.push(String::new());
        assert!(validate(&config).is_err());
    }
}
