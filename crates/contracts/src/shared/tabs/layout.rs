//! Layout math for the tab strip: fixed/dynamic partition and overflow check.
//!
//! Kept free of DOM types; the frontend feeds measured widths in.

use super::tab::Tab;

/// Tabs split the way the strip renders them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabsData {
    pub fixed_tabs: Vec<Tab>,
    pub dynamic_tabs: Vec<Tab>,
}

impl TabsData {
    pub fn partition(tabs: &[Tab]) -> Self {
        let (fixed_tabs, dynamic_tabs): (Vec<Tab>, Vec<Tab>) =
            tabs.iter().cloned().partition(|t| t.is_fixed);
        Self {
            fixed_tabs,
            dynamic_tabs,
        }
    }

    /// Current value of the "more tabs" dropdown.
    pub fn selected_dynamic(&self) -> Option<&Tab> {
        self.dynamic_tabs.iter().find(|t| t.is_selected)
    }

    pub fn is_empty(&self) -> bool {
        self.fixed_tabs.is_empty() && self.dynamic_tabs.is_empty()
    }
}

/// Widths measured from the rendered strip, px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StripMetrics {
    /// `None` until the section element has been laid out.
    pub section_width: Option<f64>,
    pub fixed_width: f64,
    /// Natural (unclipped) width of the dynamic tabs.
    pub dynamic_width: f64,
    /// Space kept for the dropdown trigger.
    pub reserved_width: f64,
}

impl StripMetrics {
    /// Space left for dynamic tabs. `None` while the section is unmeasured.
    pub fn available_width(&self) -> Option<f64> {
        let section = self.section_width.filter(|w| *w > 0.0)?;
        Some((section - self.fixed_width - self.reserved_width).max(0.0))
    }

    /// Unmeasured strips never overflow.
    pub fn is_overflowing(&self) -> bool {
        self.available_width()
            .map(|available| self.dynamic_width > available)
            .unwrap_or(false)
    }
}

/// CSS `max-width` of the dynamic tabs container.
pub fn dynamic_container_max_width(fixed_width: Option<f64>, fallback: f64) -> String {
    format!("calc(100% - {}px)", fixed_width.unwrap_or(fallback).round())
}

/// Inline style of the strip section: one row, fixed tabs first.
pub const SECTION_STYLE: &str = "display: flex; align-items: center; width: 100%;";

/// Fixed tabs keep their natural width, so `offset_width` measures the tabs
/// and not the section.
pub const FIXED_CONTAINER_STYLE: &str = "display: inline-flex; flex: none;";

/// Both tab lists are laid out at `max-content`: their width is the sum of
/// the tabs regardless of how much of them the container shows.
pub const TABS_LIST_STYLE: &str =
    "display: flex; width: max-content; margin: 0; padding: 0; list-style: none;";

/// Inline style of the dynamic tabs container.
///
/// Collapsed, the container takes no space and hides its tabs, but the list
/// inside stays laid out so its natural width can still be measured.
pub fn dynamic_container_style(
    fixed_width: Option<f64>,
    fallback: f64,
    collapsed: bool,
) -> String {
    let mut style = format!(
        "flex: 0 1 auto; min-width: 0; overflow: hidden; max-width: {};",
        dynamic_container_max_width(fixed_width, fallback)
    );
    if collapsed {
        style.push_str(" visibility: hidden; width: 0; height: 0;");
    }
    style
}
