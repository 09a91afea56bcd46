//! View state for the five-screen interface.

use crate::catalog::{self, ChapterRecord};
use serde::{Deserialize, Serialize};

/// The five mutually exclusive screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Catalog,
    ChapterDetail,
    Conversation,
    Resources,
    PrivacyPolicy,
}

/// The current screen plus the optionally selected chapter.
///
/// `selected_chapter` is only meaningful while the current view is
/// `ChapterDetail`. Navigating back to the catalog leaves it in place; it is
/// simply unused until reselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    current: View,
    selected_chapter: Option<u8>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Starts on the catalog with no chapter selected.
    pub fn new() -> Self {
        Self {
            current: View::Catalog,
            selected_chapter: None,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn selected_chapter(&self) -> Option<u8> {
        self.selected_chapter
    }

    pub fn show_catalog(&mut self) {
        self.current = View::Catalog;
    }

    /// Navigates to the detail view for the given chapter id.
    ///
    /// The id is not validated here; an id outside the catalog renders as an
    /// empty detail view rather than failing.
    pub fn show_chapter(&mut self, id: u8) {
        self.selected_chapter = Some(id);
        self.current = View::ChapterDetail;
    }

    pub fn show_conversation(&mut self) {
        self.current = View::Conversation;
    }

    pub fn show_resources(&mut self) {
        self.current = View::Resources;
    }

    pub fn show_privacy(&mut self) {
        self.current = View::PrivacyPolicy;
    }

    /// Resolves the selected chapter against the catalog.
    ///
    /// Returns `None` when nothing is selected or the selected id does not
    /// exist.
    pub fn selected_record(&self) -> Option<&'static ChapterRecord> {
        self.selected_chapter.and_then(catalog::find_by_id)
    }
}
