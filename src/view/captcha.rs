//! CAPTCHA prompt, loading and error screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::utils::centered_rect;

pub fn render_captcha(frame: &mut Frame, area: Rect, code: &str, input: &str) {
    let panel = centered_rect(area, 40, 12);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Challenge code
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Hint
        ])
        .split(panel);

    let title = Paragraph::new("Verify CAPTCHA")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let challenge = Paragraph::new(code.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(challenge, chunks[1]);

    let (text, style) = if input.is_empty() {
        ("Enter the CAPTCHA", Style::default().fg(Color::DarkGray))
    } else {
        (input, Style::default().fg(Color::Green))
    };
    let input_box = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input_box, chunks[2]);

    let hint = Paragraph::new("Enter to submit · Esc to clear · Ctrl+C to quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(hint, chunks[3]);
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Product Gallery "));
    frame.render_widget(loading, area);
}

pub fn render_load_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(format!("Error: {}", message))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Product Gallery (q to quit) ")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(error, area);
}
