mod channel;
mod files;
mod mentions;

use crate::client::ClientState;
use crate::http::{HttpClient, HttpGet};
use crate::structs::Resource;

use cache::structs::{Channel, Message, Role, Server, User};
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Turns whatever an api method was handed into the entity or value it
/// actually needs.
///
/// The synchronous `resolve_*` methods never fail, an input they can't derive
/// anything from resolves to `None`. Only [`Resolver::resolve_channel`] and
/// [`Resolver::resolve_file`] can return an error, as they are the only ones
/// that go out to the network.
///
/// Nothing is cached here, every call reads the client state as it is right now.
pub struct Resolver<C, H = HttpClient> {
    state: Arc<C>,
    http: H,
    // one lock per user we are currently opening a private channel with
    pending_pms: DashMap<String, Arc<Mutex<()>>>,
}

impl<C: ClientState, H: HttpGet> Resolver<C, H> {
    pub fn new(state: Arc<C>, http: H) -> Resolver<C, H> {
        Resolver {
            state,
            http,
            pending_pms: DashMap::new(),
        }
    }

    #[inline]
    pub const fn state(&self) -> &Arc<C> {
        &self.state
    }

    /// The server a channel belongs to, looked up in the current state
    fn channel_server(&self, channel: &Channel) -> Option<Arc<Server>> {
        let server_id = channel.server.as_deref()?;
        let server = self.state.server(server_id);
        if server.is_none() {
            debug!("channel {} belongs to server {server_id} which is not cached", channel.id);
        }
        server
    }

    /// Accepts a server, a server channel, a server id or a message sent in a
    /// server text channel
    pub fn resolve_server(&self, resource: &Resource) -> Option<Arc<Server>> {
        match resource {
            Resource::Server(server) => Some(server.clone()),
            Resource::Channel(channel) if channel.is_server_channel() => {
                self.channel_server(channel)
            }
            Resource::Id(id) => self.state.server(id),
            Resource::Message(message) => {
                let channel = self.state.channel(&message.channel)?;
                if channel.is_text() {
                    self.channel_server(&channel)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Accepts a role or a role id. Role ids are searched in every server in
    /// the order the client state iterates them, the first match wins.
    pub fn resolve_role(&self, resource: &Resource) -> Option<Arc<Role>> {
        match resource {
            Resource::Role(role) => Some(role.clone()),
            Resource::Id(id) => self
                .state
                .servers()
                .iter()
                .find_map(|server| server.role(id)),
            _ => None,
        }
    }

    /// Accepts a user, a message (its author), a text channel (the author of
    /// its last message), a server (its owner), a private channel (its
    /// recipient) or a user id
    pub fn resolve_user(&self, resource: &Resource) -> Option<Arc<User>> {
        match resource {
            Resource::User(user) => Some(user.clone()),
            Resource::Message(message) => Some(message.author.clone()),
            Resource::Channel(channel) if channel.is_text() => channel
                .last_message
                .as_ref()
                .map(|message| message.author.clone()),
            Resource::Server(server) => Some(server.owner.clone()),
            Resource::Channel(channel) if channel.is_private() => channel.recipient.clone(),
            Resource::Id(id) => self.state.user(id),
            _ => None,
        }
    }

    /// Accepts a message, or a text or private channel whose last message is used
    pub fn resolve_message(&self, resource: &Resource) -> Option<Arc<Message>> {
        match resource {
            Resource::Channel(channel) if channel.is_text() || channel.is_private() => {
                channel.last_message.clone()
            }
            Resource::Message(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Only accepts voice channels, ids are not looked up
    pub fn resolve_voice_channel(&self, resource: &Resource) -> Option<Arc<Channel>> {
        match resource {
            Resource::Channel(channel) if channel.is_voice() => Some(channel.clone()),
            _ => None,
        }
    }

    /// Accepts an invite, an invite url or a bare invite code
    pub fn resolve_invite_id(&self, resource: &Resource) -> Option<String> {
        match resource {
            Resource::Invite(invite) => Some(invite.id.clone()),
            Resource::Id(text) => Some(invite_code(text).to_string()),
            _ => None,
        }
    }
}

/// The code is the last path segment of an invite url, anything not starting
/// with http is taken to be a code already
fn invite_code(text: &str) -> &str {
    if text.starts_with("http") {
        text.rsplit('/').next().unwrap_or(text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{populated_client, resolver};
    use cache::structs::Invite;
    use cache::{ReadOnlyCache, WriteableCache};

    #[test]
    fn test_canonical_inputs_resolve_to_themselves() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();

        let server = state.server("1").unwrap();
        let user = state.user("100").unwrap();
        let role = server.role("7").unwrap();
        let voice = state.channel("11").unwrap();
        let text = state.channel("10").unwrap();
        let message = text.last_message.clone().unwrap();

        assert!(Arc::ptr_eq(&resolver.resolve_server(&server.clone().into()).unwrap(), &server));
        assert!(Arc::ptr_eq(&resolver.resolve_user(&user.clone().into()).unwrap(), &user));
        assert!(Arc::ptr_eq(&resolver.resolve_role(&role.clone().into()).unwrap(), &role));
        assert!(Arc::ptr_eq(
            &resolver.resolve_voice_channel(&voice.clone().into()).unwrap(),
            &voice
        ));
        assert!(Arc::ptr_eq(
            &resolver.resolve_message(&message.clone().into()).unwrap(),
            &message
        ));
    }

    #[test]
    fn test_resolve_server() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();

        let from_channel = resolver.resolve_server(&state.channel("20").unwrap().into());
        assert_eq!(from_channel.map(|s| s.id.clone()), Some("2".to_string()));

        let from_id = resolver.resolve_server(&"1".into());
        assert_eq!(from_id.map(|s| s.name.clone()), Some("first".to_string()));
        assert!(resolver.resolve_server(&"404".into()).is_none());

        let message = state.channel("10").unwrap().last_message.clone().unwrap();
        let from_message = resolver.resolve_server(&message.into());
        assert_eq!(from_message.map(|s| s.id.clone()), Some("1".to_string()));
    }

    #[test]
    fn test_resolve_server_unsupported() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();

        assert!(resolver.resolve_server(&state.user("100").unwrap().into()).is_none());
        assert!(resolver.resolve_server(&state.channel("50").unwrap().into()).is_none());
        assert!(resolver.resolve_server(&Invite::new("abc").into()).is_none());

        // a message in a private channel has no server
        let friend = state.user("300").unwrap();
        let message = Message::new("2000", friend, "50", "hi");
        assert!(resolver.resolve_server(&message.into()).is_none());
    }

    #[test]
    fn test_resolve_server_after_removal() {
        let resolver = resolver(populated_client());
        let channel = resolver.state().channel("20").unwrap();
        resolver.state().cache.remove_server("2");

        assert!(resolver.resolve_server(&channel.into()).is_none());
    }

    #[test]
    fn test_resolve_role_by_id() {
        let resolver = resolver(populated_client());

        let role = resolver.resolve_role(&"7".into()).unwrap();
        assert_eq!(role.name, "mods");
        assert!(resolver.resolve_role(&"42".into()).is_none());
    }

    #[test]
    fn test_resolve_role_first_server_wins() {
        let resolver = resolver(populated_client());

        let role = resolver.resolve_role(&"8".into()).unwrap();
        assert_eq!(role.server, "1");
    }

    #[test]
    fn test_resolve_role_unsupported() {
        let resolver = resolver(populated_client());
        let server = resolver.state().server("1").unwrap();

        assert!(resolver.resolve_role(&server.into()).is_none());
    }

    #[test]
    fn test_resolve_user() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();
        let id_of = |user: Option<Arc<User>>| user.map(|u| u.id.clone());

        let text = state.channel("10").unwrap();
        let message = text.last_message.clone().unwrap();
        assert_eq!(id_of(resolver.resolve_user(&message.into())), Some("200".to_string()));
        assert_eq!(id_of(resolver.resolve_user(&text.into())), Some("200".to_string()));
        assert_eq!(
            id_of(resolver.resolve_user(&state.server("1").unwrap().into())),
            Some("100".to_string())
        );
        assert_eq!(
            id_of(resolver.resolve_user(&state.channel("50").unwrap().into())),
            Some("300".to_string())
        );
        assert_eq!(id_of(resolver.resolve_user(&"300".into())), Some("300".to_string()));
    }

    #[test]
    fn test_resolve_user_unresolved() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();

        // text channel without a last message
        assert!(resolver.resolve_user(&state.channel("20").unwrap().into()).is_none());
        assert!(resolver.resolve_user(&state.channel("11").unwrap().into()).is_none());
        assert!(resolver.resolve_user(&"404".into()).is_none());
        assert!(resolver
            .resolve_user(&Role::new("7", "mods", "1").into())
            .is_none());
    }

    #[test]
    fn test_resolve_message() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();

        let text = state.channel("10").unwrap();
        assert_eq!(
            resolver.resolve_message(&text.into()).map(|m| m.id.clone()),
            Some("1000".to_string())
        );
        // channels without a last message and channels that can't have one
        assert!(resolver.resolve_message(&state.channel("50").unwrap().into()).is_none());
        assert!(resolver.resolve_message(&state.channel("11").unwrap().into()).is_none());
        assert!(resolver.resolve_message(&"1000".into()).is_none());
    }

    #[test]
    fn test_resolve_message_private_channel() {
        let resolver = resolver(populated_client());
        let friend = resolver.state().user("300").unwrap();
        let last = Arc::new(Message::new("77", friend.clone(), "50", "see you"));
        let channel = resolver
            .state()
            .cache
            .insert_channel(Channel::private("50", friend).with_last_message(last));

        assert_eq!(
            resolver.resolve_message(&channel.into()).map(|m| m.id.clone()),
            Some("77".to_string())
        );
    }

    #[test]
    fn test_resolve_voice_channel() {
        let resolver = resolver(populated_client());
        let state = resolver.state().clone();

        assert!(resolver.resolve_voice_channel(&state.channel("10").unwrap().into()).is_none());
        // ids are deliberately not looked up
        assert!(resolver.resolve_voice_channel(&"11".into()).is_none());
    }

    #[test]
    fn test_resolve_invite_id() {
        let resolver = resolver(populated_client());

        assert_eq!(
            resolver.resolve_invite_id(&"https://example.com/abc/XYZ123".into()),
            Some("XYZ123".to_string())
        );
        assert_eq!(
            resolver.resolve_invite_id(&"XYZ123".into()),
            Some("XYZ123".to_string())
        );
        assert_eq!(
            resolver.resolve_invite_id(&Invite::new("0cDvIgU2voWn4BaD").into()),
            Some("0cDvIgU2voWn4BaD".to_string())
        );
        assert!(resolver
            .resolve_invite_id(&resolver.state().user("100").unwrap().into())
            .is_none());
    }

    #[test]
    fn test_invite_code_trailing_slash() {
        assert_eq!(invite_code("http://discord.gg/"), "");
        assert_eq!(invite_code("discord.gg/abc"), "discord.gg/abc");
    }
}
