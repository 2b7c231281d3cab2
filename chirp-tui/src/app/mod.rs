use anyhow::Result;
use chirp_types::Tweet;
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use std::time::Duration;

use crate::api::ApiClient;
use crate::log_api_call;
use crate::log_feed;

pub mod state;
pub use state::*;
pub mod handlers;

impl App {
    /// Create the app against a resolved server URL. `pending_load`
    /// starts set so the main loop fetches right after the first frame.
    pub fn with_server_url(
        server_url: String,
        config_manager: crate::config::ConfigManager,
    ) -> Self {
        Self {
            running: true,
            api_client: ApiClient::new(server_url),
            feed: crate::feed::FeedState::new(),
            list_state: ListState::default(),
            at_end_of_feed: false,
            profile_state: ProfileState {
                user: None,
                loading: false,
                error: None,
            },
            filter_prompt: FilterPromptState {
                open: false,
                input: String::new(),
            },
            username_filter: String::new(),
            pending_load: true,
            input_mode: InputMode::Navigation,
            show_help: false,
            config_manager,
            log_config: crate::logging::LogConfig::default(),
        }
    }

    /// Fetch the feed and commit the outcome to the state machine.
    ///
    /// The machine only accepts the completion if no newer fetch has
    /// started in the meantime; stale results are dropped here.
    pub async fn load_feed(&mut self) -> Result<()> {
        let token = self.feed.fetch_started();

        // Yield to allow UI to render the loading state
        tokio::task::yield_now().await;

        // Brief delay so the loading frame is perceptible on fast servers
        tokio::time::sleep(Duration::from_millis(200)).await;

        let username = self.username_filter.clone();
        log_api_call!(
            self.log_config,
            "GET {}/tweets.json filter={:?}",
            self.api_client.base_url(),
            username
        );

        match self.api_client.fetch_tweets(&username).await {
            Ok(tweets) => {
                if self.feed.fetch_succeeded(token, tweets) {
                    log_feed!(
                        self.log_config,
                        "commit {}: {} tweets loaded, {} visible",
                        self.feed.status().as_str(),
                        self.feed.data().len(),
                        self.feed.displayed().len()
                    );
                    if self.feed.displayed().is_empty() {
                        self.list_state.select(None);
                    } else {
                        self.list_state.select(Some(0));
                    }
                    self.at_end_of_feed = false;
                } else {
                    log::debug!("Dropping stale feed result (filter={:?})", username);
                }
            }
            Err(e) => {
                if self.feed.fetch_failed(token) {
                    // The state machine keeps its fixed message; the
                    // detailed failure only goes to the log.
                    log::warn!(
                        "Feed fetch failed: {} (status: {:?})",
                        e.message(),
                        e.status()
                    );
                } else {
                    log::debug!("Dropping stale feed failure: {}", e.message());
                }
            }
        }

        Ok(())
    }

    /// Load the profile for the active filter, shown in the header.
    /// The unfiltered feed has no single author, so nothing is fetched.
    pub async fn load_profile(&mut self) -> Result<()> {
        if self.username_filter.is_empty() {
            self.profile_state.user = None;
            self.profile_state.error = None;
            self.profile_state.loading = false;
            return Ok(());
        }

        self.profile_state.loading = true;
        self.profile_state.error = None;

        let username = self.username_filter.clone();
        log_api_call!(
            self.log_config,
            "GET {}/{}.json",
            self.api_client.base_url(),
            username
        );

        match self.api_client.fetch_user(&username).await {
            Ok(user) => {
                self.profile_state.user = Some(user);
                self.profile_state.loading = false;
            }
            Err(e) => {
                log::warn!("Profile fetch failed for {}: {}", username, e.message());
                self.profile_state.error = Some(e.message());
                self.profile_state.user = None;
                self.profile_state.loading = false;
            }
        }

        Ok(())
    }

    /// Request a refresh of feed and profile.
    pub fn request_load(&mut self) {
        // Set flag to trigger load in main loop instead of blocking here
        self.pending_load = true;
    }

    pub fn next_tweet(&mut self) {
        if self.feed.displayed().is_empty() {
            return;
        }

        let next = match self.list_state.selected() {
            Some(i) => {
                if i >= self.feed.displayed().len() - 1 {
                    // At the last visible row - show "End of Feed"
                    // unless another page can still be revealed
                    self.at_end_of_feed = !self.feed.has_more();
                    i
                } else {
                    self.at_end_of_feed = false;
                    i + 1
                }
            }
            None => {
                self.at_end_of_feed = false;
                0
            }
        };

        // Reaching the last visible row is the near-end signal: advance
        // the window. Synchronous, no network, no-op once everything is
        // revealed.
        if next >= self.feed.displayed().len() - 1 {
            self.feed.load_more();
        }

        self.list_state.select(Some(next));
    }

    pub fn previous_tweet(&mut self) {
        if self.feed.displayed().is_empty() {
            return;
        }

        // Clear end-of-feed indicator when scrolling up
        self.at_end_of_feed = false;

        match self.list_state.selected() {
            Some(i) if i > 0 => {
                self.list_state.select(Some(i - 1));
            }
            _ => {
                // Already at top or no selection
                self.list_state.select(Some(0));
            }
        }
    }

    pub fn selected_tweet(&self) -> Option<&Tweet> {
        self.list_state
            .selected()
            .and_then(|i| self.feed.displayed().get(i))
    }

    /// Open the selected tweet's first image in the browser, falling
    /// back to the author's avatar.
    pub fn open_selected_link(&mut self) {
        let url = match self.selected_tweet() {
            Some(tweet) => tweet
                .first_image()
                .map(|image| image.url.clone())
                .unwrap_or_else(|| tweet.sender.avatar.clone()),
            None => return,
        };

        if let Err(e) = webbrowser::open(&url) {
            log::warn!("Failed to open browser for {}: {}", url, e);
        }
    }

    pub fn open_filter_prompt(&mut self) {
        self.filter_prompt.open = true;
        self.filter_prompt.input = self.username_filter.clone();
        self.input_mode = InputMode::Typing;
    }

    pub fn cancel_filter_prompt(&mut self) {
        self.filter_prompt.open = false;
        self.filter_prompt.input.clear();
        self.input_mode = InputMode::Navigation;
    }

    /// Apply the typed filter and reload. An empty submission clears
    /// the filter and fetches the unfiltered feed.
    pub fn submit_filter_prompt(&mut self) {
        let username = self.filter_prompt.input.trim().to_string();
        self.filter_prompt.open = false;
        self.filter_prompt.input.clear();
        self.input_mode = InputMode::Navigation;

        self.username_filter = username;
        self.save_filter_preference();
        self.request_load();
    }

    /// Save current filter preference to disk
    fn save_filter_preference(&self) {
        let _ = self.config_manager.save_filter(&self.username_filter);
    }

    /// Load filter preference from disk
    pub fn load_filter_preference(&mut self) {
        if let Ok(Some(filter)) = self.config_manager.load_filter() {
            self.username_filter = filter;
        }
    }

    /// Toggle help modal
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key_event(self, key)
    }
}

#[cfg(test)]
mod tests;
