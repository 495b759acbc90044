use crate::structs::User;

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub author: Arc<User>,
    // the channel is looked up through the cache rather than held, a channel
    // holds its last message so holding it here would be a cycle
    pub channel: String,
    pub content: String,

    // time that the message was created
    pub created_at: DateTime<Utc>,
}

impl Message {
    #[inline]
    pub fn new(
        id: impl Into<String>,
        author: Arc<User>,
        channel: impl Into<String>,
        content: impl Into<String>,
    ) -> Message {
        Message::new_at(id, author, channel, content, Utc::now())
    }

    pub fn new_at(
        id: impl Into<String>,
        author: Arc<User>,
        channel: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Message {
        Message {
            id: id.into(),
            author,
            channel: channel.into(),
            content: content.into(),
            created_at,
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl Ord for Message {
    fn cmp(&self, other: &Self) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Message {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}
