use chirp_types::{RequestStatus, Tweet};

/// Number of tweets revealed per page advance.
pub const PAGE_SIZE: usize = 5;

/// Error stored on any failed fetch, regardless of what actually went
/// wrong. The detailed failure stays with the caller (which logs it).
pub const FETCH_ERROR: &str = "Failed to fetch tweets";

/// Identifies one started fetch. Completions must present their token
/// back; only the token from the most recent [`FeedState::fetch_started`]
/// is allowed to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Feed-loading and pagination state.
///
/// Owns the full fetched collection (`data`) and the prefix window the
/// view renders (`displayed`). The window grows in [`PAGE_SIZE`] steps
/// via [`FeedState::load_more`] and resets on every completed fetch.
/// All mutation goes through the transition methods; reads go through
/// the accessors.
pub struct FeedState {
    data: Vec<Tweet>,
    displayed: Vec<Tweet>,
    page: usize,
    status: RequestStatus,
    error: Option<String>,
    generation: u64,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            displayed: Vec::new(),
            page: 1,
            status: RequestStatus::Idle,
            error: None,
            generation: 0,
        }
    }

    /// Record that a fetch went out.
    ///
    /// Clears any previous error but keeps `data`/`displayed` as they
    /// are, so a refresh does not blank the list while the new request
    /// is in flight.
    pub fn fetch_started(&mut self) -> FetchToken {
        self.generation += 1;
        self.status = RequestStatus::Pending;
        self.error = None;
        FetchToken(self.generation)
    }

    /// Commit a successful fetch: replace the collection wholesale and
    /// reset the window to the first page.
    ///
    /// Returns false, leaving state untouched, when a newer fetch has
    /// started since `token` was issued.
    pub fn fetch_succeeded(&mut self, token: FetchToken, tweets: Vec<Tweet>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.displayed = tweets.iter().take(PAGE_SIZE).cloned().collect();
        self.data = tweets;
        self.page = 1;
        self.status = RequestStatus::Successful;
        true
    }

    /// Commit a failed fetch. Stores the fixed [`FETCH_ERROR`] string;
    /// stale tokens are dropped the same way as in
    /// [`FeedState::fetch_succeeded`].
    pub fn fetch_failed(&mut self, token: FetchToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.status = RequestStatus::Failed;
        self.error = Some(FETCH_ERROR.to_string());
        true
    }

    /// Reveal the next page of the already-fetched collection.
    ///
    /// Pure and synchronous, no network involved. Once everything is
    /// displayed this is a no-op, so end-of-list events can fire it
    /// repeatedly without harm.
    pub fn load_more(&mut self) {
        let next_page = self.page + 1;
        let end_index = next_page * PAGE_SIZE;

        if self.displayed.len() < self.data.len() {
            let end = end_index.min(self.data.len());
            self.displayed = self.data[..end].to_vec();
            self.page = next_page;
        }
    }

    pub fn data(&self) -> &[Tweet] {
        &self.data
    }

    /// The prefix window the view renders.
    pub fn displayed(&self) -> &[Tweet] {
        &self.displayed
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// True when the collection holds tweets the window has not
    /// revealed yet.
    pub fn has_more(&self) -> bool {
        self.displayed.len() < self.data.len()
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
