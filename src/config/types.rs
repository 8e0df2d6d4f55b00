use serde::Deserialize;

/// Main configuration structure for Antologia
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub limits: LimitsConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL that every kept link must contain
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Index pages used to seed the frontier
    #[serde(rename = "index-pages")]
    pub index_pages: Vec<String>,

    /// Suffix a candidate href must end with
    #[serde(rename = "page-extension")]
    pub page_extension: String,

    /// Case-insensitive substrings that disqualify a URL
    #[serde(rename = "exclude-patterns")]
    pub exclude_patterns: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://amediavoz.com/".to_string(),
            index_pages: vec![
                "https://amediavoz.com/".to_string(),
                "https://amediavoz.com/indice-A-K.htm".to_string(),
                "https://amediavoz.com/indice-L-Z.htm".to_string(),
            ],
            page_extension: ".htm".to_string(),
            exclude_patterns: vec![
                "indice".to_string(),
                "poetas.htm".to_string(),
                "mediavoz.htm".to_string(),
                "sensual.htm".to_string(),
                "traducciones.htm".to_string(),
                "poesiadeoro.htm".to_string(),
                "ventanas.htm".to_string(),
                "tucuerpo.htm".to_string(),
                "georgia.zip".to_string(),
                "mailto:".to_string(),
                "javascript:".to_string(),
            ],
        }
    }
}

/// Fetch timing and checkpoint configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Per-request timeout in seconds
    #[serde(rename = "fetch-timeout-secs")]
    pub fetch_timeout_secs: u64,

    /// Delay after each index page fetch (milliseconds)
    #[serde(rename = "index-delay-ms")]
    pub index_delay_ms: u64,

    /// Delay after each poem page or subpage fetch (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,

    /// Checkpoint whenever the accumulator hits a multiple of this size
    #[serde(rename = "checkpoint-interval")]
    pub checkpoint_interval: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 30,
            index_delay_ms: 1000,
            page_delay_ms: 500,
            checkpoint_interval: 100,
        }
    }
}

/// Output path configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the final deduplicated JSON collection
    #[serde(rename = "records-path")]
    pub records_path: String,

    /// Path of the crash-recovery checkpoint, overwritten on each save
    #[serde(rename = "checkpoint-path")]
    pub checkpoint_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            records_path: "poems.json".to_string(),
            checkpoint_path: "poems.checkpoint.json".to_string(),
        }
    }
}
