use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::get_theme_colors;
use crate::app::App;

/// Helper function to create a centered rect using a percentage of the
/// available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the username filter prompt as a centered modal
pub fn render_filter_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let theme = get_theme_colors();

    let modal_area = centered_rect(50, 25, area);

    // Clear the background
    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  @", Style::default().fg(theme.text_dim)),
            Span::styled(
                app.filter_prompt.input.clone(),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                "█",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Apply | Esc: Cancel",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(Span::styled(
            "Leave empty to show every tweet",
            Style::default().fg(theme.text_dim),
        )),
    ];

    let prompt = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Filter by username ")
                .style(Style::default().bg(theme.background)),
        );

    frame.render_widget(prompt, modal_area);
}

/// Render the help modal with keyboard shortcuts
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = get_theme_colors();

    let modal_area = centered_rect(60, 70, area);

    // Clear the background
    frame.render_widget(Clear, modal_area);

    let mut lines = vec![Line::from("")];

    let sections: [(&str, &[(&str, &str)]); 3] = [
        (
            "Navigation",
            &[
                ("↑ / k", "Move up"),
                ("↓ / j", "Move down (reveals more at the bottom)"),
            ],
        ),
        (
            "Feed",
            &[
                ("r", "Refresh the feed"),
                ("/", "Filter tweets by username"),
                ("o", "Open image or avatar in browser"),
            ],
        ),
        (
            "General",
            &[("?", "Toggle this help"), ("q / Esc", "Quit")],
        ),
    ];

    for (section, entries) in sections {
        lines.push(Line::from(Span::styled(
            format!("  {}", section),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:<12}", key),
                    Style::default().fg(theme.primary),
                ),
                Span::styled(*description, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Press Esc, '?' or 'q' to close",
        Style::default().fg(theme.text_dim),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Help - Keyboard Shortcuts ")
            .style(Style::default().bg(theme.background)),
    );

    frame.render_widget(help, modal_area);
}
