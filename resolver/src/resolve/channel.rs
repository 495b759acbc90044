use super::Resolver;
use crate::client::ClientState;
use crate::errors::{Error, Result};
use crate::http::HttpGet;
use crate::structs::Resource;

use cache::structs::{Channel, User};
use dashmap::DashMap;
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A caller's share of the per-user lock. Dropping it, including when the
/// resolving future is cancelled, removes the lock once nobody else holds it.
struct PendingPm<'a> {
    pending: &'a DashMap<String, Arc<Mutex<()>>>,
    user_id: &'a str,
    lock: Arc<Mutex<()>>,
}

impl<'a> PendingPm<'a> {
    fn new(pending: &'a DashMap<String, Arc<Mutex<()>>>, user_id: &'a str) -> PendingPm<'a> {
        let lock = pending.entry(user_id.to_string()).or_default().clone();
        PendingPm {
            pending,
            user_id,
            lock,
        }
    }
}

impl Drop for PendingPm<'_> {
    fn drop(&mut self) {
        // the map's reference plus ours
        self.pending
            .remove_if(self.user_id, |_, lock| Arc::strong_count(lock) <= 2);
    }
}

impl<C: ClientState, H: HttpGet> Resolver<C, H> {
    /// Accepts a message (the channel it was sent in), any channel, a server
    /// (its default channel), a channel id or a user (the private channel with
    /// them, opened if there isn't one yet).
    ///
    /// `Ok(None)` means the channel is not cached. Resources that can never
    /// be resolved to a channel are an error.
    pub async fn resolve_channel(&self, resource: &Resource) -> Result<Option<Arc<Channel>>> {
        match resource {
            Resource::Message(message) => Ok(self.state.channel(&message.channel)),
            Resource::Channel(channel) => Ok(Some(channel.clone())),
            // the default channel of a server shares the server's id
            Resource::Server(server) => Ok(server.channel(&server.id)),
            Resource::Id(id) => Ok(self.state.channel(id)),
            Resource::User(user) => self.private_channel(user).await.map(Some),
            _ => Err(Error::Unresolvable(resource.clone())),
        }
    }

    fn find_private_channel(&self, user: &User) -> Option<Arc<Channel>> {
        self.state
            .private_channels()
            .into_iter()
            .find(|channel| channel.recipient.as_deref() == Some(user))
    }

    async fn private_channel(&self, user: &Arc<User>) -> Result<Arc<Channel>> {
        if let Some(channel) = self.find_private_channel(user) {
            return Ok(channel);
        }

        let pending = PendingPm::new(&self.pending_pms, &user.id);
        let _guard = pending.lock.lock().await;
        // whoever held the lock before us may have just opened it
        match self.find_private_channel(user) {
            Some(channel) => Ok(channel),
            None => {
                info!("no private channel with user {}, opening one", user.id);
                self.state
                    .start_pm(user)
                    .await
                    .map_err(|why| Error::PrivateChannel(user.clone(), Box::new(why)))
            }
        }
    }
}
