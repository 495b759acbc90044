use crate::structs::{Channel, Server, User};
use crate::{ReadOnlyCache, WriteableCache};

use log::debug;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Collections {
    // kept in insertion order, lookups across servers depend on it
    servers: Vec<Arc<Server>>,
    channels: BTreeMap<String, Arc<Channel>>,
    users: BTreeMap<String, Arc<User>>,
    private_channels: Vec<Arc<Channel>>,
}

/// An in-memory object graph. Servers are iterated in the order they were
/// first inserted, replacing a server keeps its position.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: RwLock<Collections>,
}

impl MemoryCache {
    pub fn new() -> MemoryCache {
        MemoryCache::default()
    }

    // A writer panicking mid update leaves at worst a partially updated graph,
    // which readers have to tolerate anyways
    #[inline(always)]
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline(always)]
    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn replace_or_push<T>(items: &mut Vec<Arc<T>>, item: Arc<T>, same: impl Fn(&T) -> bool) {
    match items.iter().position(|existing| same(&**existing)) {
        Some(pos) => items[pos] = item,
        None => items.push(item),
    }
}

impl ReadOnlyCache for MemoryCache {
    fn servers(&self) -> Vec<Arc<Server>> {
        self.read().servers.clone()
    }

    fn channel(&self, channel_id: &str) -> Option<Arc<Channel>> {
        let collections = self.read();
        collections.channels.get(channel_id).cloned().or_else(|| {
            collections
                .private_channels
                .iter()
                .find(|c| c.id == channel_id)
                .cloned()
        })
    }

    fn user(&self, user_id: &str) -> Option<Arc<User>> {
        self.read().users.get(user_id).cloned()
    }

    fn private_channels(&self) -> Vec<Arc<Channel>> {
        self.read().private_channels.clone()
    }

    fn server(&self, server_id: &str) -> Option<Arc<Server>> {
        self.read()
            .servers
            .iter()
            .find(|s| s.id == server_id)
            .cloned()
    }
}

impl WriteableCache for MemoryCache {
    fn insert_server(&self, server: Server) -> Arc<Server> {
        let server = Arc::new(server);
        let mut collections = self.write();

        // drop channels the new version of the server no longer has
        if let Some(old) = collections.servers.iter().find(|s| s.id == server.id).cloned() {
            for channel in &old.channels {
                collections.channels.remove(&channel.id);
            }
        }
        for channel in &server.channels {
            collections
                .channels
                .insert(channel.id.clone(), channel.clone());
        }
        collections
            .users
            .entry(server.owner.id.clone())
            .or_insert_with(|| server.owner.clone());
        replace_or_push(&mut collections.servers, server.clone(), |s| s.id == server.id);

        debug!(
            "cached server {} with {} channels and {} roles",
            server.id,
            server.channels.len(),
            server.roles.len()
        );
        server
    }

    fn insert_channel(&self, channel: Channel) -> Arc<Channel> {
        let channel = Arc::new(channel);
        let mut collections = self.write();

        if channel.is_private() {
            if let Some(recipient) = &channel.recipient {
                collections
                    .users
                    .entry(recipient.id.clone())
                    .or_insert_with(|| recipient.clone());
            }
            replace_or_push(&mut collections.private_channels, channel.clone(), |c| {
                c.id == channel.id
            });
            debug!("cached private channel {}", channel.id);
            return channel;
        }

        collections
            .channels
            .insert(channel.id.clone(), channel.clone());
        if let Some(server_id) = &channel.server {
            if let Some(pos) = collections.servers.iter().position(|s| &s.id == server_id) {
                let mut server = Server::clone(&collections.servers[pos]);
                replace_or_push(&mut server.channels, channel.clone(), |c| c.id == channel.id);
                collections.servers[pos] = Arc::new(server);
            }
        }
        debug!("cached channel {}", channel.id);
        channel
    }

    fn insert_user(&self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.write().users.insert(user.id.clone(), user.clone());
        user
    }

    fn remove_server(&self, server_id: &str) -> bool {
        let mut collections = self.write();
        let Some(pos) = collections.servers.iter().position(|s| s.id == server_id) else {
            return false;
        };
        let server = collections.servers.remove(pos);
        for channel in &server.channels {
            collections.channels.remove(&channel.id);
        }
        debug!("removed server {server_id}");
        true
    }

    fn remove_channel(&self, channel_id: &str) -> bool {
        let mut collections = self.write();
        if let Some(pos) = collections
            .private_channels
            .iter()
            .position(|c| c.id == channel_id)
        {
            collections.private_channels.remove(pos);
            return true;
        }

        let Some(channel) = collections.channels.remove(channel_id) else {
            return false;
        };
        if let Some(server_id) = &channel.server {
            if let Some(pos) = collections.servers.iter().position(|s| &s.id == server_id) {
                let mut server = Server::clone(&collections.servers[pos]);
                server.channels.retain(|c| c.id != channel_id);
                collections.servers[pos] = Arc::new(server);
            }
        }
        true
    }

    fn remove_user(&self, user_id: &str) -> bool {
        self.write().users.remove(user_id).is_some()
    }
}
