//! Product card grid and pagination buttons

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{Focus, GalleryPage, Product, UiState};
use super::layout::{card_cells, page_buttons};
use super::utils::{format_price, truncate_string};

const ACCENT: Color = Color::Rgb(0, 123, 255);

pub fn render_grid(frame: &mut Frame, area: Rect, page: &GalleryPage, ui_state: &UiState, slots: usize) {
    if page.items.is_empty() {
        let empty = Paragraph::new("No products on this page")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let grid_focused = ui_state.focus == Focus::Grid;
    for (i, (cell, product)) in card_cells(area, slots, page.items.len())
        .into_iter()
        .zip(&page.items)
        .enumerate()
    {
        let border_style = if ui_state.drag_source == Some(i) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if ui_state.drop_target == Some(i) {
            Style::default().fg(Color::Magenta)
        } else if grid_focused && ui_state.selected == i {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        render_card(frame, cell, product, border_style);
    }
}

fn render_card(frame: &mut Frame, area: Rect, product: &Product, border_style: Style) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_price(product.price),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            truncate_string(&product.image, inner_width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(card, area);
}

pub fn render_pagination(frame: &mut Frame, area: Rect, page: &GalleryPage) {
    for (number, rect) in page_buttons(area, page.total_pages) {
        let style = if number == page.current_page {
            Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let button = Paragraph::new(number.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, rect);
    }
}
