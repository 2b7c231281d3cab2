use super::*;
use chirp_types::{RequestStatus, Sender, Tweet};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tempfile::TempDir;

/// Helper to create a KeyEvent
fn key_event(code: KeyCode) -> KeyEvent {
    let mut event = KeyEvent::new(code, KeyModifiers::empty());
    event.kind = KeyEventKind::Press;
    event
}

/// App wired to a throwaway config dir so tests never touch ~/.chirp
fn test_app() -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let config_manager =
        crate::config::ConfigManager::with_config_dir(dir.path().join("config")).unwrap();
    let mut app = App::with_server_url("http://localhost:9".to_string(), config_manager);
    app.pending_load = false;
    (app, dir)
}

fn tweet(key: i64, username: &str) -> Tweet {
    Tweet {
        key: Some(key),
        sender: Sender {
            username: username.to_string(),
            nick: format!("{} nick", username),
            avatar: format!("https://example.com/{}.png", username),
        },
        content: Some(format!("tweet number {}", key)),
        images: None,
        comments: None,
    }
}

/// Commit `n` tweets to the feed the way a finished fetch would
fn seed_feed(app: &mut App, n: usize) {
    let token = app.feed.fetch_started();
    let tweets = (0..n).map(|i| tweet(i as i64, "someone")).collect();
    assert!(app.feed.fetch_succeeded(token, tweets));
    app.list_state.select(Some(0));
    app.at_end_of_feed = false;
}

#[test]
fn test_a_fresh_app_queues_the_startup_fetch() {
    // Built directly: the test_app helper clears the flag under test
    let dir = TempDir::new().unwrap();
    let config_manager =
        crate::config::ConfigManager::with_config_dir(dir.path().join("config")).unwrap();
    let app = App::with_server_url("http://localhost:9".to_string(), config_manager);

    assert!(
        app.pending_load,
        "The main loop should fetch right after the first frame"
    );
    assert_eq!(app.username_filter, "", "The startup fetch is unfiltered");
    assert_eq!(app.feed.status(), RequestStatus::Idle);
    assert!(app.feed.data().is_empty());
}

#[test]
fn test_escape_closes_help_modal_first() {
    let (mut app, _dir) = test_app();
    app.show_help = true;
    app.running = true;

    // Escape should close help, not exit app
    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(!app.show_help, "Help modal should be closed");
    assert!(app.running, "App should still be running");
}

#[test]
fn test_question_mark_toggles_help() {
    let (mut app, _dir) = test_app();
    app.show_help = false;

    // '?' should open help modal
    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(app.show_help, "Help modal should be open");

    // '?' should close help modal when it's already open
    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(!app.show_help, "Help modal should be closed");
}

#[test]
fn test_help_modal_swallows_navigation_keys() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 12);
    app.show_help = true;

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();

    assert!(app.show_help, "Unbound keys should leave help open");
    assert_eq!(
        app.list_state.selected(),
        Some(0),
        "Selection should not move while help is open"
    );
    assert!(!app.pending_load, "Refresh should not fire while help is open");
}

#[test]
fn test_q_key_exits_app() {
    let (mut app, _dir) = test_app();
    app.running = true;

    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();

    assert!(!app.running, "App should stop running");
}

#[test]
fn test_escape_exits_app_when_no_modals() {
    let (mut app, _dir) = test_app();
    app.running = true;

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(!app.running, "App should stop running");
}

#[test]
fn test_down_advances_selection() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 12);

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();

    assert_eq!(app.list_state.selected(), Some(1));
    assert!(!app.at_end_of_feed);
}

#[test]
fn test_reaching_last_visible_row_reveals_next_page() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 12);
    assert_eq!(app.feed.displayed().len(), 5);

    // Walk the cursor onto the last visible row
    for _ in 0..4 {
        app.handle_key_event(key_event(KeyCode::Down)).unwrap();
    }

    assert_eq!(app.list_state.selected(), Some(4));
    assert_eq!(
        app.feed.displayed().len(),
        10,
        "Landing on the last row should reveal the next page"
    );
    assert_eq!(app.feed.page(), 2);
    assert!(!app.at_end_of_feed);
}

#[test]
fn test_down_at_true_end_shows_end_of_feed() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 3);

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    assert_eq!(app.list_state.selected(), Some(2));
    assert!(!app.at_end_of_feed, "Marker appears only after pressing down at the bottom");

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();

    assert_eq!(app.list_state.selected(), Some(2), "Cursor should stay on the last row");
    assert!(app.at_end_of_feed, "End of feed marker should be shown");
    assert_eq!(app.feed.page(), 1, "Nothing left to reveal");
}

#[test]
fn test_up_clears_end_of_feed_marker() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 3);
    app.list_state.select(Some(2));
    app.at_end_of_feed = true;

    app.handle_key_event(key_event(KeyCode::Char('k'))).unwrap();

    assert_eq!(app.list_state.selected(), Some(1));
    assert!(!app.at_end_of_feed);
}

#[test]
fn test_up_at_top_stays_on_first_row() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 5);

    app.handle_key_event(key_event(KeyCode::Up)).unwrap();

    assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn test_navigation_on_empty_feed_is_a_no_op() {
    let (mut app, _dir) = test_app();

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('k'))).unwrap();

    assert_eq!(app.list_state.selected(), None);
    assert!(app.selected_tweet().is_none());
}

#[test]
fn test_selected_tweet_follows_the_cursor() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 5);

    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();

    let selected = app.selected_tweet().unwrap();
    assert_eq!(selected.key, Some(1));
}

#[test]
fn test_refresh_queues_a_load_without_touching_the_window() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 12);

    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();

    assert!(app.pending_load, "Refresh should be deferred to the main loop");
    assert_eq!(
        app.feed.displayed().len(),
        5,
        "The visible window stays until the fetch completes"
    );
    assert_eq!(app.feed.status(), RequestStatus::Successful);

    // Capital R works too
    app.pending_load = false;
    app.handle_key_event(key_event(KeyCode::Char('R'))).unwrap();
    assert!(app.pending_load);
}

#[test]
fn test_slash_opens_the_filter_prompt_prefilled() {
    let (mut app, _dir) = test_app();
    app.username_filter = "rustacean".to_string();

    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();

    assert!(app.filter_prompt.open);
    assert_eq!(app.filter_prompt.input, "rustacean");
    assert_eq!(app.input_mode, InputMode::Typing);
}

#[test]
fn test_filter_prompt_typing_edits_input() {
    let (mut app, _dir) = test_app();
    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();

    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('b'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Backspace)).unwrap();

    assert_eq!(app.filter_prompt.input, "a");
}

#[test]
fn test_filter_prompt_captures_quit_keys() {
    let (mut app, _dir) = test_app();
    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();

    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();

    assert!(app.running, "q should be typed, not quit");
    assert_eq!(app.filter_prompt.input, "q");
}

#[test]
fn test_filter_submit_applies_filter_and_queues_load() {
    let (mut app, _dir) = test_app();
    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();
    for c in "jane".chars() {
        app.handle_key_event(key_event(KeyCode::Char(c))).unwrap();
    }

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    assert!(!app.filter_prompt.open, "Prompt should close on submit");
    assert_eq!(app.username_filter, "jane");
    assert_eq!(app.input_mode, InputMode::Navigation);
    assert!(app.pending_load, "Submit should queue a reload");
}

#[test]
fn test_filter_submit_trims_whitespace() {
    let (mut app, _dir) = test_app();
    app.open_filter_prompt();
    app.filter_prompt.input = "  jane  ".to_string();

    app.submit_filter_prompt();

    assert_eq!(app.username_filter, "jane");
}

#[test]
fn test_filter_escape_keeps_previous_filter() {
    let (mut app, _dir) = test_app();
    app.username_filter = "rustacean".to_string();
    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('x'))).unwrap();

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(!app.filter_prompt.open);
    assert_eq!(app.username_filter, "rustacean", "Cancel should not apply the input");
    assert!(!app.pending_load, "Cancel should not reload");
    assert!(app.running, "Escape in the prompt should not quit");
}

#[test]
fn test_empty_submission_clears_the_filter() {
    let (mut app, _dir) = test_app();
    app.username_filter = "rustacean".to_string();
    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();
    for _ in 0..app.filter_prompt.input.len() {
        app.handle_key_event(key_event(KeyCode::Backspace)).unwrap();
    }

    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    assert_eq!(app.username_filter, "", "Empty input should clear the filter");
    assert!(app.pending_load);
}

#[test]
fn test_submitted_filter_round_trips_through_preferences() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config");

    let config_manager =
        crate::config::ConfigManager::with_config_dir(config_dir.clone()).unwrap();
    let mut app = App::with_server_url("http://localhost:9".to_string(), config_manager);
    app.open_filter_prompt();
    app.filter_prompt.input = "jane".to_string();
    app.submit_filter_prompt();

    // A fresh app over the same config dir picks the preference up
    let config_manager = crate::config::ConfigManager::with_config_dir(config_dir).unwrap();
    let mut restarted = App::with_server_url("http://localhost:9".to_string(), config_manager);
    restarted.load_filter_preference();

    assert_eq!(restarted.username_filter, "jane");
}

#[test]
fn test_unbound_keys_are_ignored() {
    let (mut app, _dir) = test_app();
    seed_feed(&mut app, 5);

    app.handle_key_event(key_event(KeyCode::Char('z'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();

    assert!(app.running);
    assert!(!app.pending_load);
    assert_eq!(app.list_state.selected(), Some(0));
}
