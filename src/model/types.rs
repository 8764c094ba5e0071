//! Core type definitions for the application

use ratatui::layout::Rect;

use super::store::Product;

/// Which part of the gallery screen receives typed keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Grid,
}

/// Answer to a drag hovering over a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEffect {
    /// Dropping here moves the dragged card
    Move,
    /// No drag in progress or target outside the page
    None,
}

/// UI state for the gallery and the overlays
#[derive(Clone, Debug)]
pub struct UiState {
    pub focus: Focus,
    pub search_query: String,
    /// 1-based; not corrected when a search shrinks the page count
    pub current_page: usize,
    /// Card index on the visible page
    pub selected: usize,
    pub drag_source: Option<usize>,
    pub drop_target: Option<usize>,
    /// Blocking message; swallows input until dismissed
    pub alert: Option<String>,
    pub show_help_popup: bool,
    /// Terminal area of the last drawn frame, used for mouse hit-testing
    pub viewport: Rect,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: Focus::Search,
            search_query: String::new(),
            current_page: 1,
            selected: 0,
            drag_source: None,
            drop_target: None,
            alert: None,
            show_help_popup: false,
            viewport: Rect::default(),
        }
    }
}

/// The visible slice of the filtered catalog
#[derive(Clone, Debug, Default)]
pub struct GalleryPage {
    pub items: Vec<Product>,
    pub current_page: usize,
    pub total_pages: usize,
    pub match_count: usize,
}

/// What the main area shows, derived from gate and store state
#[derive(Clone, Debug)]
pub enum Screen {
    Captcha { code: String, input: String },
    Loading,
    Error(String),
    Gallery(GalleryPage),
}
