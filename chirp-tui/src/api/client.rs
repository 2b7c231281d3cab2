use reqwest::Client;

use super::{ApiError, ApiResult};
use chirp_types::{Tweet, User};

/// HTTP client for the static JSON feed host.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full tweet collection, optionally narrowed to a single
    /// author. An empty `username` skips the filter entirely.
    ///
    /// The host serves one fixed resource; filtering happens here on
    /// the client. The empty-result check runs before the status check,
    /// so a non-200 response whose body filters down to nothing is
    /// reported as "no tweets found" rather than as a request error.
    pub async fn fetch_tweets(&self, username: &str) -> ApiResult<Vec<Tweet>> {
        let url = format!("{}/tweets.json", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        let mut tweets: Vec<Tweet> = response.json().await?;
        apply_username_filter(&mut tweets, username);

        if tweets.is_empty() {
            return Err(ApiError::NoTweets {
                username: username.to_string(),
                status,
            });
        }

        if status != 200 {
            return Err(ApiError::Status { status });
        }

        Ok(tweets)
    }

    /// Fetch the profile entity for `username`.
    pub async fn fetch_user(&self, username: &str) -> ApiResult<User> {
        let url = format!("{}/{}.json", self.base_url, urlencoding::encode(username));
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();

        if status != 200 {
            return Err(ApiError::Status { status });
        }

        Ok(response.json().await?)
    }
}

/// Keep only tweets sent by `username`. The empty string means no
/// filter and leaves the collection untouched.
fn apply_username_filter(tweets: &mut Vec<Tweet>, username: &str) {
    if !username.is_empty() {
        tweets.retain(|tweet| tweet.sender.username == username);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_types::Sender;
    use proptest::prelude::*;

    fn tweet(key: i64, username: &str) -> Tweet {
        Tweet {
            key: Some(key),
            sender: Sender {
                username: username.to_string(),
                nick: username.to_uppercase(),
                avatar: format!("https://example.com/{}.png", username),
            },
            content: None,
            images: None,
            comments: None,
        }
    }

    proptest! {
        // Filtering keeps exactly the named sender's tweets, in their
        // original order; the empty filter keeps everything.
        #[test]
        fn prop_filter_keeps_exactly_the_senders_tweets(
            senders in prop::collection::vec(
                prop::sample::select(vec!["alice", "bob", "carol"]),
                0..30,
            ),
            filter in prop::sample::select(vec!["", "alice", "bob", "nobody"]),
        ) {
            let mut tweets: Vec<Tweet> = senders
                .iter()
                .enumerate()
                .map(|(i, username)| tweet(i as i64, username))
                .collect();
            let expected: Vec<Tweet> = if filter.is_empty() {
                tweets.clone()
            } else {
                tweets
                    .iter()
                    .filter(|t| t.sender.username == filter)
                    .cloned()
                    .collect()
            };

            apply_username_filter(&mut tweets, filter);

            prop_assert_eq!(tweets, expected);
        }
    }
}
