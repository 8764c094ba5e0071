//! Overlay rendering (blocking alert, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::UiState;
use super::utils::centered_rect;

pub fn render_alert(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref message) = ui_state.alert {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        let line_count = message.chars().count().div_ceil(inner_width) as u16;

        // Borders plus the wrapped message
        let popup_height = (2 + line_count.max(1)).min(area.height.saturating_sub(4));
        let popup_area = centered_rect(area, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let alert = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Alert (Enter to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(alert, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Search ──"),
        ("type", "Filter by title"),
        ("Esc", "Clear search"),
        ("Tab / ↓", "Go to products"),
        ("", ""),
        ("", "── Products ──"),
        ("← ↑ → ↓", "Move selection"),
        ("Space", "Pick up card"),
        ("Enter", "Drop card here"),
        ("Esc", "Cancel drag"),
        ("Mouse drag", "Move card"),
        ("", ""),
        ("", "── Pages ──"),
        ("[ / ]", "Previous / next page"),
        ("PgUp / PgDn", "Previous / next page"),
        ("1-9 / click", "Go to page"),
        ("", ""),
        ("", "── General ──"),
        ("/ or Tab", "Focus search"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_height = keybindings.len() as u16 + 2;
    let popup_area = centered_rect(area, 50, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^46}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>16}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
