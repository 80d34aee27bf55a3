use super::tab::normalize_identifier;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
max_tabs = 7
name_suffix_len = 6
default_tabs = ["k8s-resources", "log-analyzer"]
tooltip_show_delay_ms = 600
tooltip_hide_delay_ms = 0
close_navigation_delay_ms = 1
notice_duration_ms = 3000
more_button_width = 48.0
fallback_fixed_width = 110.0
"#;

/// Settings of the app-details tab strip.
///
/// Every field has a default, so partial overrides (`{"max_tabs": 5}`) are valid.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TabsConfig {
    /// Upper bound on the number of open tabs, fixed ones included.
    pub max_tabs: usize,
    /// How many trailing characters of a resource name stay in the tab label.
    pub name_suffix_len: usize,
    /// Path segments of the fixed tabs created by `init`, first one selected.
    pub default_tabs: Vec<String>,
    pub tooltip_show_delay_ms: u32,
    pub tooltip_hide_delay_ms: u32,
    pub close_navigation_delay_ms: u32,
    pub notice_duration_ms: u32,
    /// Width kept free for the "more tabs" dropdown trigger, px.
    pub more_button_width: f64,
    /// Assumed fixed-tabs width before the first measurement, px.
    pub fallback_fixed_width: f64,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            max_tabs: 7,
            name_suffix_len: 6,
            default_tabs: vec!["k8s-resources".to_string(), "log-analyzer".to_string()],
            tooltip_show_delay_ms: 600,
            tooltip_hide_delay_ms: 0,
            close_navigation_delay_ms: 1,
            notice_duration_ms: 3000,
            more_button_width: 48.0,
            fallback_fixed_width: 110.0,
        }
    }
}

impl TabsConfig {
    /// Parse the embedded default configuration
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: TabsConfig =
            toml::from_str(contents).context("failed to parse tabs config (toml)")?;
        config.validated()
    }

    /// Override format used by the browser (localStorage keeps JSON).
    pub fn from_json_str(contents: &str) -> anyhow::Result<Self> {
        let config: TabsConfig =
            serde_json::from_str(contents).context("failed to parse tabs config (json)")?;
        config.validated()
    }

    fn validated(self) -> anyhow::Result<Self> {
        if self.max_tabs < self.default_tabs.len() {
            anyhow::bail!(
                "max_tabs ({}) is smaller than the number of default tabs ({})",
                self.max_tabs,
                self.default_tabs.len()
            );
        }
        let mut seen = HashSet::new();
        for segment in &self.default_tabs {
            if segment.is_empty() {
                anyhow::bail!("default_tabs contains an empty segment");
            }
            if !seen.insert(normalize_identifier(segment)) {
                anyhow::bail!(
                    "default_tabs contains '{}' more than once (case-insensitive)",
                    segment
                );
            }
        }
        if self.name_suffix_len == 0 {
            anyhow::bail!("name_suffix_len must be positive");
        }
        Ok(self)
    }

    /// User-facing message for a rejected `add_tab`. Uses the same limit as
    /// the capacity check.
    pub fn capacity_notice(&self) -> String {
        format!("Max {} tabs allowed", self.max_tabs)
    }
}
