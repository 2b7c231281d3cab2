use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::formatting::*;
use super::modals::{render_filter_prompt, render_help_modal};
use super::theme::{get_theme_colors, ThemeColors};
use crate::app::App;
use crate::log_rendering;

/// Render the main screen: header, feed, status line, footer
pub fn render_main_screen(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // The header grows when a profile is on display
    let has_profile = app.profile_state.user.is_some()
        || app.profile_state.loading
        || app.profile_state.error.is_some();
    let header_height = if has_profile { 7u16 } else { 3u16 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Header / profile
            Constraint::Min(0),                // Feed (flexible)
            Constraint::Length(1),             // Feed status line
            Constraint::Length(3),             // Global footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_feed(frame, app, chunks[1]);
    render_status_line(frame, app, chunks[2]);
    render_global_footer(frame, app, chunks[3]);

    // Render modals (in priority order - LAST rendered = TOP of stack)
    if app.filter_prompt.open {
        render_filter_prompt(frame, app, area);
    }

    // Render help modal (highest priority - render last)
    if app.show_help {
        render_help_modal(frame, area);
    }
}

/// Render the header pane: the app banner, or the profile of the
/// filtered user when one is loaded
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = get_theme_colors();

    if app.profile_state.loading {
        let loading = Paragraph::new(create_loading_display("Loading profile...", &theme))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Profile"));
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = &app.profile_state.error {
        let error_msg = Paragraph::new(error.clone())
            .style(Style::default().fg(theme.error))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Profile"));
        frame.render_widget(error_msg, area);
        return;
    }

    if let Some(user) = &app.profile_state.user {
        let mut lines = vec![];

        lines.push(Line::from(vec![
            Span::styled(
                user.nick.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("@{}", user.username),
                Style::default().fg(theme.text_dim),
            ),
        ]));

        lines.push(Line::from(Span::styled(
            user.bio.clone().unwrap_or_else(|| "No bio".to_string()),
            Style::default().fg(theme.text),
        )));

        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Tweets: ", Style::default().fg(theme.secondary)),
            Span::styled(
                user.tweets.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Following: ", Style::default().fg(theme.secondary)),
            Span::styled(
                user.following.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Followers: ", Style::default().fg(theme.secondary)),
            Span::styled(
                user.followers.to_string(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]));

        let profile = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Profile"));
        frame.render_widget(profile, area);
        return;
    }

    let banner = Paragraph::new("chirp - Terminal Tweet Reader")
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

/// Render the feed pane. Exactly one of {loading, error text, tweet
/// list} is shown at any time.
pub fn render_feed(frame: &mut Frame, app: &mut App, area: Rect) {
    log_rendering!(app.log_config, "render_feed: START");

    let theme = get_theme_colors();

    let title = if app.username_filter.is_empty() {
        "Feed".to_string()
    } else {
        format!("Feed - @{}", app.username_filter)
    };

    // A request is either in flight or queued for right after this frame
    let refreshing = app.feed.is_loading() || app.pending_load;

    // Only show full-page loading on initial load (when nothing is
    // displayed yet)
    if refreshing && app.feed.displayed().is_empty() {
        let loading = Paragraph::new(create_loading_display("Loading tweets...", &theme))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = app.feed.error() {
        let error_widget = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'r' to retry or '/' to change the filter",
                Style::default().fg(theme.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(error_widget, area);
        return;
    }

    if app.feed.displayed().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No tweets to show",
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'r' to refresh",
                Style::default().fg(theme.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();

    let available_width = area.width.saturating_sub(BORDER_PADDING) as usize;

    // Add loading spinner at top if refreshing (when tweets already exist)
    if refreshing {
        let style = Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD);
        let loading_item = create_centered_indicator("⟳ Loading...", style, available_width);
        items.push(ListItem::new(loading_item));
    }

    // Calculate available width for tweet content
    let tweet_width = (area.width as usize).saturating_sub(4);

    let selected_index = app.list_state.selected();
    let displayed_count = app.feed.displayed().len();

    let tweet_items: Vec<ListItem> = app
        .feed
        .displayed()
        .iter()
        .enumerate()
        .map(|(i, tweet)| {
            let is_selected = selected_index == Some(i);

            let mut tweet_lines: Vec<Line> = Vec::new();

            // Tweet header with username and nick
            let header_style = if is_selected {
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.primary)
            };

            let prefix = if is_selected { "▶ " } else { "  " };

            tweet_lines.push(Line::from(vec![
                Span::styled(prefix, header_style),
                Span::styled(format!("@{}", tweet.sender.username), header_style),
                Span::raw(" • "),
                Span::styled(
                    tweet.sender.nick.clone(),
                    Style::default().fg(theme.text_dim),
                ),
            ]));

            // Tweet content with mention/hashtag highlighting and wrapping
            if let Some(content) = &tweet.content {
                let content_lines =
                    format_tweet_content_with_width(content, is_selected, &theme, tweet_width);
                tweet_lines.extend(content_lines);
            }

            // Attachment counts
            let mut meta_spans = vec![Span::raw("  ")];
            if tweet.image_count() > 0 {
                meta_spans.push(Span::styled(
                    format!("🖼 {}  ", tweet.image_count()),
                    Style::default().fg(theme.text_dim),
                ));
            }
            meta_spans.push(Span::styled(
                format!("💬 {}", tweet.comment_count()),
                Style::default().fg(theme.text_dim),
            ));
            tweet_lines.push(Line::from(meta_spans));

            // Separator
            if i < displayed_count - 1 {
                tweet_lines.push(Line::from(""));
            }

            ListItem::new(tweet_lines)
        })
        .collect();

    items.extend(tweet_items);

    // Window end marker: invite another page, or mark the end
    if app.feed.has_more() {
        let hidden = app.feed.data().len() - displayed_count;
        items.push(ListItem::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("─── ↓ for {} more ───", hidden),
                Style::default().fg(theme.text_dim),
            )),
        ]));
    } else if app.at_end_of_feed {
        let end_of_feed = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "─── End of feed ───",
                Style::default()
                    .fg(theme.text_dim)
                    .add_modifier(Modifier::DIM),
            )),
        ];
        items.push(ListItem::new(end_of_feed));
    }

    let feed_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(theme.highlight_bg));

    if refreshing {
        // The spinner row shifts list indices by one for this frame
        let mut shifted = app.list_state.clone();
        if let Some(i) = shifted.selected() {
            shifted.select(Some(i + 1));
        }
        frame.render_stateful_widget(feed_widget, area, &mut shifted);
    } else {
        frame.render_stateful_widget(feed_widget, area, &mut app.list_state);
    }
}

/// Render the one-line status bar between feed and footer
fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let theme = get_theme_colors();

    // Clear the area first to prevent text bleeding from previous renders
    frame.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    frame.render_widget(background, area);

    let total = app.feed.data().len();
    let text = if total > 0 {
        format!(
            "Page {} | {}/{} tweets",
            app.feed.page(),
            app.feed.displayed().len(),
            total
        )
    } else {
        String::new()
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Render global footer with shortcuts
fn render_global_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = get_theme_colors();

    // Clear the area first to prevent text bleeding
    frame.render_widget(Clear, area);

    let footer_text = if app.filter_prompt.open {
        "Type a username | Enter: Apply | Esc: Cancel"
    } else {
        "↑/↓/j/k: Navigate | r: Refresh | /: Filter | o: Open image | ?: Help | q/Esc: Quit"
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(theme.text_dim).bg(theme.background))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(footer, area);
}

/// Create a formatted loading state display
fn create_loading_display(message: &str, theme: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("⟳ {}", message),
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please wait",
            Style::default().fg(theme.text_dim),
        )),
    ]
}

/// Create a centered indicator item for the feed
fn create_centered_indicator(
    text: &str,
    style: Style,
    available_width: usize,
) -> Vec<Line<'static>> {
    let padding = (available_width.saturating_sub(text.chars().count())) / 2;
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}{}", " ".repeat(padding), text),
            style,
        )),
        Line::from(""),
    ]
}
