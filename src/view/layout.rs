//! Layout structure (header, search bar) and the grid/pagination geometry
//! shared by rendering and mouse hit-testing

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Focus, GalleryPage, UiState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryAreas {
    pub header: Rect,
    pub search: Rect,
    pub grid: Rect,
    pub pagination: Rect,
}

pub fn gallery_areas(area: Rect) -> GalleryAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Card grid
            Constraint::Length(3), // Page buttons
        ])
        .split(area);

    GalleryAreas {
        header: chunks[0],
        search: chunks[1],
        grid: chunks[2],
        pagination: chunks[3],
    }
}

/// Columns in the card grid for a given width (4 / 2 / 1)
pub fn grid_columns(width: u16) -> usize {
    if width >= 100 {
        4
    } else if width >= 50 {
        2
    } else {
        1
    }
}

/// Cell rectangles for the first `count` cards of a page holding `slots` cards
pub fn card_cells(grid: Rect, slots: usize, count: usize) -> Vec<Rect> {
    let columns = grid_columns(grid.width);
    let rows = slots.max(1).div_ceil(columns) as u16;
    let card_width = grid.width / columns as u16;
    let card_height = grid.height / rows;
    if card_width == 0 || card_height == 0 {
        return Vec::new();
    }

    (0..count.min(slots))
        .map(|i| {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            Rect {
                x: grid.x + col * card_width,
                y: grid.y + row * card_height,
                width: card_width,
                height: card_height,
            }
        })
        .collect()
}

/// Centered numbered page buttons; buttons that do not fit are left out
pub fn page_buttons(area: Rect, total_pages: usize) -> Vec<(usize, Rect)> {
    let widths: Vec<u16> = (1..=total_pages)
        .map(|n| n.to_string().len() as u16 + 4)
        .collect();
    let needed: u16 = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;
    let mut x = area.x + area.width.saturating_sub(needed) / 2;
    let right = area.x + area.width;

    let mut buttons = Vec::new();
    for (i, width) in widths.into_iter().enumerate() {
        if x + width > right {
            break;
        }
        buttons.push((
            i + 1,
            Rect {
                x,
                y: area.y,
                width,
                height: area.height,
            },
        ));
        x += width + 1;
    }
    buttons
}

/// Index of the rectangle containing the cell at (`column`, `row`)
pub fn hit_test(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects.iter().position(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

pub fn render_header(frame: &mut Frame, area: Rect, page: &GalleryPage) {
    let title = Line::from(vec![
        Span::styled(
            " Product Gallery ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} products ", page.match_count),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let focused = ui_state.focus == Focus::Search;
    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let (search_text, text_style) = if ui_state.search_query.is_empty() {
        ("Search by product title...", Style::default().fg(Color::DarkGray))
    } else {
        (ui_state.search_query.as_str(), search_style)
    };

    let search = Paragraph::new(search_text)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, area);
}
