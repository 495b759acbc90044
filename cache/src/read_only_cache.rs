use crate::structs::{Channel, Server, User};

use std::sync::Arc;

/// Lookups into the cached object graph.
///
/// Implementations are shared with whatever processes gateway events, so
/// nothing returned here is a snapshot: an entity found by one call may be gone
/// by the next, and two calls may observe different versions of the graph.
/// Callers should hold onto the returned `Arc`s rather than looking an id up
/// twice.
pub trait ReadOnlyCache {
    /// Every known server. The order must be stable between calls as it is
    /// what decides which server wins when ids are looked up across servers.
    fn servers(&self) -> Vec<Arc<Server>>;

    /// Any channel by id, including private channels
    fn channel(&self, channel_id: &str) -> Option<Arc<Channel>>;

    fn user(&self, user_id: &str) -> Option<Arc<User>>;

    fn private_channels(&self) -> Vec<Arc<Channel>>;

    #[inline]
    fn server(&self, server_id: &str) -> Option<Arc<Server>> {
        self.servers().into_iter().find(|s| s.id == server_id)
    }
}
