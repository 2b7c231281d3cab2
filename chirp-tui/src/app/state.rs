use chirp_types::User;

use ratatui::widgets::ListState;

use crate::api::ApiClient;
use crate::feed::FeedState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation, // Browsing the feed, shortcuts active
    Typing,     // In the filter prompt, shortcuts disabled
}

/// Profile header state
pub struct ProfileState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Filter prompt state (`/`)
pub struct FilterPromptState {
    pub open: bool,
    pub input: String,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub api_client: ApiClient,
    /// The feed state machine. Mutated only through its transition
    /// methods; everything else reads it through accessors.
    pub feed: FeedState,
    /// Cursor over `feed.displayed()`.
    pub list_state: ListState,
    pub at_end_of_feed: bool,
    pub profile_state: ProfileState,
    pub filter_prompt: FilterPromptState,
    /// Active sender filter; empty string means unfiltered.
    pub username_filter: String,
    /// Set to trigger a fetch from the main loop after the next draw,
    /// so the loading frame renders before the request blocks.
    pub pending_load: bool,
    pub input_mode: InputMode,
    pub show_help: bool,
    pub config_manager: crate::config::ConfigManager,
    pub log_config: crate::logging::LogConfig,
}
