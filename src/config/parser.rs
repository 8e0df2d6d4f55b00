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
/// use antologia::config::load_config;
///
/// let config = load_config(Path::new("antologia.toml")).unwrap();
/// println!("Output: {}", config.output.records_path);
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

    #[test]
    fn test_load_config_full() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[site]
base-url = "https://example.com/"
index-pages = ["https://example.com/"]
page-extension = ".html"
exclude-patterns = ["mailto:"]

[limits]
fetch-timeout-secs = 10
index-delay-ms = 0
page-delay-ms = 0
checkpoint-interval = 5

[output]
records-path = "out.json"
checkpoint-path = "out.tmp.json"
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.site.base_url, "https://example.com/");
        assert_eq!(config.site.page_extension, ".html");
        assert_eq!(config.limits.checkpoint_interval, 5);
        assert_eq!(config.output.records_path, "out.json");
    }

    #[test]
    fn test_load_config_defaults_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[output]\nrecords-path = \"custom.json\"\n").unwrap();

        let config = load_config(file.path()).unwrap();
        // Untouched sections fall back to the built-in defaults
        assert_eq!(config.site.base_url, "https://amediavoz.com/");
        assert_eq!(config.site.index_pages.len(), 3);
        assert_eq!(config.limits.fetch_timeout_secs, 30);
        assert_eq!(config.output.records_path, "custom.json");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/antologia.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not [valid toml").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        validate(&Config::default()).unwrap();
    }
}
