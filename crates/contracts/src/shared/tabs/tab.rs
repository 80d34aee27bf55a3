//! Tab data model and identifier rules.
//!
//! Identifiers are compared case-insensitively. Instead of comparing with
//! `eq_ignore_ascii_case` at every call site, every identifier is stored and
//! looked up in its normalized (lower-case) form.

use serde::{Deserialize, Serialize};

/// Separator between kind and name in titles (`Pod/my-pod`).
pub const TITLE_SEPARATOR: char = '/';

/// Elision marker placed before the kept suffix of a long resource name.
pub const ELLIPSIS: &str = "...";

/// One open tab of an app-details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Normalized key, see [`normalize_identifier`].
    pub identifier: String,
    pub display_name: String,
    /// Untruncated `Kind/name`, shown in the hover tooltip.
    pub full_title: String,
    pub target_url: String,
    pub is_selected: bool,
    /// Fixed tabs are never closable and never collapse into the dropdown.
    pub is_fixed: bool,
}

impl Tab {
    /// Default (fixed) tab such as `k8s-resources`.
    pub fn fixed(name: &str, target_url: String, is_selected: bool) -> Self {
        Self {
            identifier: normalize_identifier(name),
            display_name: name.to_string(),
            full_title: name.to_string(),
            target_url,
            is_selected,
            is_fixed: true,
        }
    }

    /// Closable tab opened for a single Kubernetes resource.
    pub fn resource(kind: &str, name: &str, target_url: &str, suffix_len: usize) -> Self {
        let display_name = resource_display_name(kind, name, suffix_len);
        Self {
            identifier: normalize_identifier(&display_name),
            display_name,
            full_title: format!("{}{}{}", kind, TITLE_SEPARATOR, name),
            target_url: target_url.to_string(),
            is_selected: true,
            is_fixed: false,
        }
    }

    /// Case-insensitive identifier match.
    pub fn matches(&self, identifier: &str) -> bool {
        self.identifier == normalize_identifier(identifier)
    }
}

/// Приводит идентификатор к каноническому виду (нижний регистр).
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// Builds `Kind/...suffix` where `suffix` is the last `suffix_len` characters
/// of `name` (or the whole name when it is shorter).
pub fn resource_display_name(kind: &str, name: &str, suffix_len: usize) -> String {
    let char_count = name.chars().count();
    let suffix: String = name
        .chars()
        .skip(char_count.saturating_sub(suffix_len))
        .collect();
    format!("{}{}{}{}", kind, TITLE_SEPARATOR, ELLIPSIS, suffix)
}

/// Identifier a resource tab for `kind`/`name` would get.
pub fn resource_identifier(kind: &str, name: &str, suffix_len: usize) -> String {
    normalize_identifier(&resource_display_name(kind, name, suffix_len))
}

/// Two-line tooltip / dropdown label built from a full title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLines {
    pub primary: String,
    pub secondary: Option<String>,
}

impl TooltipLines {
    /// Splits `Kind/name` on `/`: the kind goes to the primary line, the name
    /// (if any) to the secondary line. Further segments are dropped.
    pub fn from_title(title: &str) -> Self {
        let mut parts = title.split(TITLE_SEPARATOR);
        let primary = parts.next().unwrap_or_default().to_string();
        let secondary = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { primary, secondary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_display_name_keeps_suffix() {
        assert_eq!(resource_display_name("Pod", "my-pod-abcdef", 6), "Pod/...abcdef");
    }

    #[test]
    fn test_resource_display_name_short_name() {
        assert_eq!(resource_display_name("Service", "web", 6), "Service/...web");
    }

    #[test]
    fn test_resource_display_name_multibyte() {
        assert_eq!(resource_display_name("Pod", "под-ёжик", 4), "Pod/...ёжик");
    }

    #[test]
    fn test_resource_tab_fields() {
        let tab = Tab::resource("Pod", "my-pod-abcdef", "/app/1/pod/my-pod-abcdef", 6);
        assert_eq!(tab.identifier, "pod/...abcdef");
        assert_eq!(tab.display_name, "Pod/...abcdef");
        assert_eq!(tab.full_title, "Pod/my-pod-abcdef");
        assert!(tab.is_selected);
        assert!(!tab.is_fixed);
        assert!(tab.matches("POD/...ABCDEF"));
    }

    #[test]
    fn test_tooltip_lines() {
        let lines = TooltipLines::from_title("Deployment/api-server");
        assert_eq!(lines.primary, "Deployment");
        assert_eq!(lines.secondary.as_deref(), Some("api-server"));

        let lines = TooltipLines::from_title("log-analyzer");
        assert_eq!(lines.primary, "log-analyzer");
        assert_eq!(lines.secondary, None);
    }
}
