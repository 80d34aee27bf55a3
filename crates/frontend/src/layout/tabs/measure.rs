//! DOM measurement for the tab strip.

use contracts::shared::tabs::StripMetrics;
use leptos::html;
use leptos::prelude::*;

/// Node refs of the three measured containers.
#[derive(Clone, Copy)]
pub struct StripRefs {
    pub section: NodeRef<html::Div>,
    pub fixed: NodeRef<html::Div>,
    pub dynamic: NodeRef<html::Ul>,
}

impl StripRefs {
    pub fn new() -> Self {
        Self {
            section: NodeRef::new(),
            fixed: NodeRef::new(),
            dynamic: NodeRef::new(),
        }
    }

    /// Reads the current widths. `None` until all three nodes are mounted.
    ///
    /// Both lists are `max-content` wide and the fixed container does not
    /// stretch, so `offset_width` / `scroll_width` give the tabs' own widths.
    /// The dynamic list stays laid out while collapsed, so its width is known
    /// even while its tabs live in the dropdown.
    pub fn measure(&self, reserved_width: f64) -> Option<StripMetrics> {
        let section = self.section.get_untracked()?;
        let fixed = self.fixed.get_untracked()?;
        let dynamic = self.dynamic.get_untracked()?;

        let section_width = section.get_bounding_client_rect().width();
        Some(StripMetrics {
            section_width: (section_width > 0.0).then_some(section_width),
            fixed_width: f64::from(fixed.offset_width()),
            dynamic_width: f64::from(dynamic.scroll_width()),
            reserved_width,
        })
    }
}

impl Default for StripRefs {
    fn default() -> Self {
        Self::new()
    }
}
