use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

/// The spreadsheet automation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Web-app URL of the sheet script (serves GET for reads, POST for
    /// mutations).
    pub url: String,
    /// Connection timeout in seconds (default: 5). There is deliberately no
    /// per-request timeout: a hung request holds the busy flag.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// UX guards that vary between deployed variants of the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Ask the caller-supplied confirmation policy before every mutating
    /// request.
    #[serde(default)]
    pub confirm_on_mutate: bool,
    /// Whether the delete action exists at all in this variant.
    #[serde(default)]
    pub allow_delete: bool,
    /// Reject a blank required cost field locally instead of coercing it to
    /// zero. Blank-to-zero still applies to stock and alert.
    #[serde(default)]
    pub strict_blank_validation: bool,
    /// Assign origin ranks on fetch and let the grade sort mode mean
    /// "source order". Only the newest variant does this.
    #[serde(default)]
    pub track_origin_order: bool,
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            confirm_on_mutate: false,
            allow_delete: false,
            strict_blank_validation: false,
            track_origin_order: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}
