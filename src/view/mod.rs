//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//!
//! - `utils`: Shared helpers (price formatting, truncation, centering)
//! - `layout`: Gallery structure and the geometry shared with mouse handling
//! - `captcha`: CAPTCHA prompt, loading and error screens
//! - `gallery`: Product card grid and pagination
//! - `overlays`: Modal overlays (alert, help)

mod utils;
pub mod layout;
mod captcha;
mod gallery;
mod overlays;

use ratatui::Frame;

use crate::model::{Screen, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, screen: &Screen, ui_state: &UiState, page_size: usize) {
        let area = frame.area();

        match screen {
            Screen::Captcha { code, input } => captcha::render_captcha(frame, area, code, input),
            Screen::Loading => captcha::render_loading(frame, area),
            Screen::Error(message) => captcha::render_load_error(frame, area, message),
            Screen::Gallery(page) => {
                let areas = layout::gallery_areas(area);
                layout::render_header(frame, areas.header, page);
                layout::render_search_bar(frame, areas.search, ui_state);
                gallery::render_grid(frame, areas.grid, page, ui_state, page_size);
                gallery::render_pagination(frame, areas.pagination, page);
            }
        }

        if ui_state.alert.is_some() {
            overlays::render_alert(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
