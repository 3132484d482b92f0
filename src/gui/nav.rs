//! Page Navigation Module
//! Two-page state machine with explicit transitions.

use crate::data::FilterState;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavError {
    #[error("Please select an area")]
    NoAreaSelected,
}

/// Which page is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Selection,
    Map,
}

/// Navigation state: current page, the committed filter, and the
/// orthogonal menu toggle. The filter is only ever written by a
/// successful [`Nav::enter_map`], so its area is non-empty whenever the
/// Map page is reachable.
#[derive(Debug, Default)]
pub struct Nav {
    page: Page,
    filter: Option<FilterState>,
    menu_open: bool,
}

impl Nav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn filter(&self) -> Option<&FilterState> {
        self.filter.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Selection → Map. Rejected with no area selected; the page and any
    /// previously committed filter are left untouched in that case.
    pub fn enter_map(&mut self, area: &str, year: i32) -> Result<(), NavError> {
        if area.is_empty() {
            return Err(NavError::NoAreaSelected);
        }
        self.filter = Some(FilterState::new(area, year));
        self.page = Page::Map;
        Ok(())
    }

    /// Map → Selection. Unconditional; keeps the committed filter.
    pub fn back(&mut self) {
        self.page = Page::Selection;
    }

    /// Move the committed year selection. Does nothing before the first
    /// successful `enter_map`.
    pub fn set_year(&mut self, year: i32) {
        if let Some(filter) = &mut self.filter {
            filter.year = year;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_selection_with_no_filter() {
        let nav = Nav::new();
        assert_eq!(nav.page(), Page::Selection);
        assert!(nav.filter().is_none());
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_enter_map_without_area_is_rejected() {
        let mut nav = Nav::new();
        assert_eq!(nav.enter_map("", 2000), Err(NavError::NoAreaSelected));
        assert_eq!(nav.page(), Page::Selection);
        assert!(nav.filter().is_none());
    }

    #[test]
    fn test_enter_map_commits_the_filter() {
        let mut nav = Nav::new();
        nav.enter_map("X", 2000).unwrap();
        assert_eq!(nav.page(), Page::Map);
        assert_eq!(nav.filter(), Some(&FilterState::new("X", 2000)));
    }

    #[test]
    fn test_back_keeps_the_filter() {
        let mut nav = Nav::new();
        nav.enter_map("X", 2000).unwrap();
        nav.back();
        assert_eq!(nav.page(), Page::Selection);
        assert_eq!(nav.filter(), Some(&FilterState::new("X", 2000)));
    }

    #[test]
    fn test_rejected_transition_keeps_previous_filter() {
        let mut nav = Nav::new();
        nav.enter_map("X", 2000).unwrap();
        nav.back();
        assert_eq!(nav.enter_map("", 1950), Err(NavError::NoAreaSelected));
        assert_eq!(nav.filter(), Some(&FilterState::new("X", 2000)));
    }

    #[test]
    fn test_set_year_updates_committed_filter_only() {
        let mut nav = Nav::new();
        nav.set_year(1950);
        assert!(nav.filter().is_none());
        nav.enter_map("X", 2000).unwrap();
        nav.set_year(1950);
        assert_eq!(nav.filter(), Some(&FilterState::new("X", 1950)));
    }

    #[test]
    fn test_menu_toggle_is_orthogonal() {
        let mut nav = Nav::new();
        nav.enter_map("X", 2000).unwrap();
        nav.toggle_menu();
        assert!(nav.menu_open());
        assert_eq!(nav.page(), Page::Map);
        assert_eq!(nav.filter(), Some(&FilterState::new("X", 2000)));
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }
}
