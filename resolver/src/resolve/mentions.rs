use super::Resolver;
use crate::client::ClientState;
use crate::http::HttpGet;
use crate::structs::Content;

use cache::structs::User;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::sync::Arc;

lazy_static! {
    static ref MENTION: Regex = Regex::new(r"<@[0-9]+>").unwrap();
}

impl<C: ClientState, H: HttpGet> Resolver<C, H> {
    /// Replaces every `<@id>` mention of a cached user with `@username`.
    ///
    /// Returns the mentioned users in the order they appear, a user mentioned
    /// twice is returned twice. Mentions of users that aren't cached are left
    /// as they are.
    pub fn resolve_mentions(&self, text: &str) -> (Vec<Arc<User>>, String) {
        let mut mentions = Vec::new();
        let mut changed = text.to_string();
        for token in MENTION.find_iter(text).map(|m| m.as_str()) {
            let user_id = &token[2..token.len() - 1];
            match self.state.user(user_id) {
                Some(user) => {
                    changed = changed.replace(token, &format!("@{}", user.username));
                    mentions.push(user);
                }
                None => debug!("mention of unknown user {user_id} left as is"),
            }
        }
        (mentions, changed)
    }

    pub fn resolve_string(&self, content: impl Into<Content>) -> String {
        match content.into() {
            Content::Text(text) => text,
            Content::Lines(lines) => lines.join("\n"),
        }
    }
}
