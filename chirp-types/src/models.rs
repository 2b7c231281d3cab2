use serde::{Deserialize, Serialize};

/// Author identity attached to tweets and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub username: String,
    pub nick: String,
    pub avatar: String,
}

/// A single image attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    pub sender: Sender,
}

/// A feed item as served by the tweets resource.
///
/// Only `sender` is guaranteed; `key` is not guaranteed unique or
/// present, and text/media/comments are all optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(default)]
    pub key: Option<i64>,
    pub sender: Sender,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<TweetImage>>,
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

impl Tweet {
    /// First image attachment, if any.
    pub fn first_image(&self) -> Option<&TweetImage> {
        self.images.as_ref().and_then(|imgs| imgs.first())
    }

    pub fn comment_count(&self) -> usize {
        self.comments.as_ref().map(|c| c.len()).unwrap_or(0)
    }

    pub fn image_count(&self) -> usize {
        self.images.as_ref().map(|i| i.len()).unwrap_or(0)
    }
}

/// Profile entity served per-username.
///
/// The host uses its own field names for the avatar and the counters;
/// the serde renames map them onto the names the client uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub nick: String,
    #[serde(rename = "profile_image")]
    pub avatar: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, rename = "tweet_count")]
    pub tweets: u32,
    #[serde(default, rename = "following_count")]
    pub following: u32,
    #[serde(default, rename = "followers_count")]
    pub followers: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tweet_with_all_fields_deserializes() {
        let json = r#"{
            "key": 1,
            "content": "First tweet",
            "images": [{"url": "https://example.com/image1.jpg"}],
            "sender": {
                "username": "user1",
                "nick": "User One",
                "avatar": "https://example.com/avatar1.jpg"
            },
            "comments": [
                {
                    "content": "Nice",
                    "sender": {
                        "username": "commenter1",
                        "nick": "Commenter One",
                        "avatar": "https://example.com/commenter1.jpg"
                    }
                }
            ]
        }"#;

        let tweet: Tweet = serde_json::from_str(json).unwrap();
        assert_eq!(tweet.key, Some(1));
        assert_eq!(tweet.sender.username, "user1");
        assert_eq!(tweet.content.as_deref(), Some("First tweet"));
        assert_eq!(tweet.image_count(), 1);
        assert_eq!(tweet.comment_count(), 1);
    }

    #[test]
    fn tweet_with_only_sender_deserializes() {
        let json = r#"{
            "sender": {
                "username": "user4",
                "nick": "User Four",
                "avatar": "https://example.com/avatar4.jpg"
            }
        }"#;

        let tweet: Tweet = serde_json::from_str(json).unwrap();
        assert_eq!(tweet.key, None);
        assert_eq!(tweet.content, None);
        assert!(tweet.images.is_none());
        assert!(tweet.comments.is_none());
        assert_eq!(tweet.comment_count(), 0);
        assert!(tweet.first_image().is_none());
    }

    #[test]
    fn tweet_with_empty_comments_differs_from_missing() {
        let json = r#"{
            "key": 3,
            "content": "Third tweet",
            "comments": [],
            "sender": {
                "username": "user3",
                "nick": "User Three",
                "avatar": "https://example.com/avatar3.jpg"
            }
        }"#;

        let tweet: Tweet = serde_json::from_str(json).unwrap();
        assert_eq!(tweet.comments, Some(vec![]));
        assert_eq!(tweet.comment_count(), 0);
    }

    #[test]
    fn user_maps_host_field_names() {
        let json = r#"{
            "username": "janedoe",
            "nick": "Jane Doe",
            "profile_image": "https://example.com/jane.png",
            "bio": "hello",
            "tweet_count": 42,
            "following_count": 120,
            "followers_count": 98
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.avatar, "https://example.com/jane.png");
        assert_eq!(user.tweets, 42);
        assert_eq!(user.following, 120);
        assert_eq!(user.followers, 98);
    }

    #[test]
    fn user_counters_default_to_zero() {
        let json = r#"{
            "username": "janedoe",
            "nick": "Jane Doe",
            "profile_image": "https://example.com/jane.png"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.bio, None);
        assert_eq!(user.tweets, 0);
        assert_eq!(user.following, 0);
        assert_eq!(user.followers, 0);
    }
}
